use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use splitcart_domain::ShoppingList;

use crate::CoreError;

/// Describes a persisted backup artifact for a list.
#[derive(Debug, Clone)]
pub struct ListBackupInfo {
    pub list: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing lists and
/// backups. The split engine never depends on this; only the surrounding
/// state store does.
pub trait ListStorage: Send + Sync {
    fn save_list(&self, name: &str, list: &ShoppingList) -> Result<(), CoreError>;
    fn load_list(&self, name: &str) -> Result<ShoppingList, CoreError>;
    fn list_lists(&self) -> Result<Vec<String>, CoreError>;
    fn delete_list(&self, name: &str) -> Result<(), CoreError>;
    fn save_list_to_path(&self, list: &ShoppingList, path: &Path) -> Result<(), CoreError>;
    fn load_list_from_path(&self, path: &Path) -> Result<ShoppingList, CoreError>;
    fn backup_list(
        &self,
        name: &str,
        list: &ShoppingList,
        note: Option<&str>,
    ) -> Result<ListBackupInfo, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<ListBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &ListBackupInfo) -> Result<ShoppingList, CoreError>;
}

/// Detects dangling references and purchase-invariant anomalies within a
/// list snapshot. Diagnostic only; a loaded list is never rejected.
pub fn list_warnings(list: &ShoppingList) -> Vec<String> {
    let member_ids: HashSet<_> = list.members.iter().map(|m| m.id).collect();
    let mut warnings = Vec::new();

    for item in &list.items {
        if !member_ids.contains(&item.added_by) {
            warnings.push(format!(
                "item {} references unknown added_by member {}",
                item.id, item.added_by
            ));
        }
        if let Some(buyer) = item.purchased_by {
            if !member_ids.contains(&buyer) {
                warnings.push(format!(
                    "item {} references unknown purchaser {}",
                    item.id, buyer
                ));
            }
        }
        if item.purchased && (item.purchased_by.is_none() || item.actual_price.is_none()) {
            warnings.push(format!(
                "item {} is marked purchased without purchaser and actual price",
                item.id
            ));
        }
        if !item.purchased && (item.purchased_by.is_some() || item.actual_price.is_some()) {
            warnings.push(format!(
                "item {} is unpurchased but carries purchase fields",
                item.id
            ));
        }
    }
    warnings
}
