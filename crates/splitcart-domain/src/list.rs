//! The shopping list aggregate: members, items, and bookkeeping metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{item::ShoppingItem, member::Member};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Canonical state snapshot: the member roster plus the item list.
///
/// Insertion order of `items` and `members` is preserved for display; it has
/// no effect on cost computations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "ShoppingList::schema_version_default")]
    pub schema_version: u8,
}

impl ShoppingList {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members: Vec::new(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_member(&mut self, member: Member) -> Uuid {
        let id = member.id;
        self.members.push(member);
        self.touch();
        id
    }

    pub fn add_item(&mut self, item: ShoppingItem) -> Uuid {
        let id = item.id;
        self.items.push(item);
        self.touch();
        id
    }

    /// Removes the item irreversibly. Returns the removed item, if any.
    pub fn remove_item(&mut self, id: Uuid) -> Option<ShoppingItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn member(&self, id: Uuid) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn item(&self, id: Uuid) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut ShoppingItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::DEFAULT_CATEGORY;

    #[test]
    fn new_list_is_empty() {
        let list = ShoppingList::new("Weekly");
        assert_eq!(list.name, "Weekly");
        assert!(list.members.is_empty());
        assert!(list.items.is_empty());
        assert_eq!(list.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn remove_item_is_irreversible_and_returns_the_item() {
        let mut list = ShoppingList::new("Weekly");
        let member_id = list.add_member(Member::new("Asha", "#3b82f6"));
        let item_id = list.add_item(ShoppingItem::new(
            "Milk",
            1,
            120.0,
            DEFAULT_CATEGORY,
            member_id,
        ));

        let removed = list.remove_item(item_id).expect("item removed");
        assert_eq!(removed.name, "Milk");
        assert!(list.item(item_id).is_none());
        assert!(list.remove_item(item_id).is_none());
    }

    #[test]
    fn list_round_trips_through_json() {
        let mut list = ShoppingList::new("Weekly");
        let member_id = list.add_member(Member::new("Asha", "#3b82f6"));
        list.add_item(ShoppingItem::new("Milk", 1, 120.0, DEFAULT_CATEGORY, member_id));

        let json = serde_json::to_string(&list).expect("serialize");
        let back: ShoppingList = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.name, list.name);
        assert_eq!(back.members.len(), 1);
        assert_eq!(back.items.len(), 1);
    }
}
