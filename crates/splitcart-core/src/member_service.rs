//! Mutation helpers for the member roster.

use uuid::Uuid;

use splitcart_domain::{Member, ShoppingList};

use crate::CoreError;

/// Provides mutation helpers for [`Member`] entries in a list.
///
/// Only `add` exists. Member removal is intentionally absent: items keep
/// purchase attribution by member id, and no removal semantics are defined
/// for balances owed by a departed member.
pub struct MemberService;

impl MemberService {
    /// Adds a member to the roster and returns its identifier.
    pub fn add(list: &mut ShoppingList, member: Member) -> Result<Uuid, CoreError> {
        if member.name.trim().is_empty() {
            return Err(CoreError::Validation("member name must not be empty".into()));
        }
        Ok(list.add_member(member))
    }

    /// Resolves a member by exact name, preferring earlier entries on ties.
    pub fn find_by_name<'a>(list: &'a ShoppingList, name: &str) -> Option<&'a Member> {
        list.members
            .iter()
            .find(|member| member.name.eq_ignore_ascii_case(name))
    }
}
