pub mod config;
pub mod item;
pub mod list;
pub mod member;
pub mod split;
pub mod system;

use uuid::Uuid;

use splitcart_core::MemberService;
use splitcart_domain::ShoppingList;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "list", "member", "item", "split", "stats", "config", "help", "version", "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(list::definitions());
    commands.extend(member::definitions());
    commands.extend(item::definitions());
    commands.extend(split::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Resolves a member token as a 1-based roster index or a name.
pub(crate) fn resolve_member_id(list: &ShoppingList, token: &str) -> Result<Uuid, CommandError> {
    if let Ok(index) = token.parse::<usize>() {
        if index >= 1 {
            if let Some(member) = list.members.get(index - 1) {
                return Ok(member.id);
            }
        }
        return Err(CommandError::Message(format!(
            "no member at position {}",
            token
        )));
    }
    MemberService::find_by_name(list, token)
        .map(|member| member.id)
        .ok_or_else(|| CommandError::Message(format!("no member named `{}`", token)))
}

/// Resolves an item token as a 1-based position in the list.
pub(crate) fn resolve_item_id(list: &ShoppingList, token: &str) -> Result<Uuid, CommandError> {
    let index: usize = token
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not an item number", token)))?;
    if index >= 1 {
        if let Some(item) = list.items.get(index - 1) {
            return Ok(item.id);
        }
    }
    Err(CommandError::Message(format!(
        "no item at position {}",
        token
    )))
}

/// Parses a positive amount argument.
pub(crate) fn parse_amount(token: &str) -> Result<f64, CommandError> {
    let value: f64 = token
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not an amount", token)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(CommandError::InvalidArguments(
            "amount must be a non-negative number".into(),
        ));
    }
    Ok(value)
}
