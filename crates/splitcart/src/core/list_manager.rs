//! Facade that coordinates list state, persistence, and backups.

use std::path::{Path, PathBuf};

use splitcart_core::{list_warnings, CoreError, ListStorage};
use splitcart_domain::ShoppingList;

use crate::errors::AppError;

/// Metadata describing the outcome of a load operation.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub warnings: Vec<String>,
    pub name: Option<String>,
    pub path: Option<PathBuf>,
}

/// Owns the current shopping list and routes persistence through the
/// injected storage capability. The split engine never sees this type; it
/// only receives read-only snapshots.
pub struct ListManager {
    current: Option<ShoppingList>,
    current_name: Option<String>,
    current_path: Option<PathBuf>,
    storage: Box<dyn ListStorage>,
}

impl ListManager {
    pub fn new(storage: Box<dyn ListStorage>) -> Self {
        Self {
            current: None,
            current_name: None,
            current_path: None,
            storage,
        }
    }

    pub fn storage(&self) -> &dyn ListStorage {
        self.storage.as_ref()
    }

    pub fn current(&self) -> Option<&ShoppingList> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ShoppingList> {
        self.current.as_mut()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Runs `op` against the loaded list, or fails when none is loaded.
    pub fn with_current<T>(&self, op: impl FnOnce(&ShoppingList) -> T) -> Result<T, AppError> {
        self.current
            .as_ref()
            .map(op)
            .ok_or(AppError::ListNotLoaded)
    }

    /// Runs a mutation against the loaded list, or fails when none is loaded.
    pub fn with_current_mut<T>(
        &mut self,
        op: impl FnOnce(&mut ShoppingList) -> Result<T, CoreError>,
    ) -> Result<T, AppError> {
        let list = self.current.as_mut().ok_or(AppError::ListNotLoaded)?;
        op(list).map_err(AppError::from)
    }

    /// Replaces the current list with a brand new one. Unsaved changes to a
    /// previous list are discarded by the caller's explicit choice.
    pub fn create(&mut self, name: impl Into<String>) -> &ShoppingList {
        let list = ShoppingList::new(name);
        self.current_name = None;
        self.current_path = None;
        self.current = Some(list);
        self.current.as_ref().expect("list just created")
    }

    pub fn load(&mut self, name: &str) -> Result<LoadReport, AppError> {
        let list = self.storage.load_list(name)?;
        let warnings = list_warnings(&list);
        self.current = Some(list);
        self.current_name = Some(name.to_string());
        self.current_path = None;
        Ok(LoadReport {
            warnings,
            name: Some(name.to_string()),
            path: None,
        })
    }

    pub fn load_from_path(&mut self, path: &Path) -> Result<LoadReport, AppError> {
        let list = self.storage.load_list_from_path(path)?;
        let warnings = list_warnings(&list);
        self.current = Some(list);
        self.current_name = None;
        self.current_path = Some(path.to_path_buf());
        Ok(LoadReport {
            warnings,
            name: None,
            path: Some(path.to_path_buf()),
        })
    }

    /// Saves under the current name or path; fails when the list has never
    /// been given a name.
    pub fn save(&mut self) -> Result<(), AppError> {
        let list = self.current.as_ref().ok_or(AppError::ListNotLoaded)?;
        if let Some(name) = self.current_name.clone() {
            self.storage.save_list(&name, list)?;
            Ok(())
        } else if let Some(path) = self.current_path.clone() {
            self.storage.save_list_to_path(list, &path)?;
            Ok(())
        } else {
            Err(AppError::InvalidInput(
                "list has no name yet; use `list save <name>`".into(),
            ))
        }
    }

    pub fn save_as(&mut self, name: &str) -> Result<(), AppError> {
        let list = self.current.as_ref().ok_or(AppError::ListNotLoaded)?;
        self.storage.save_list(name, list)?;
        self.current_name = Some(name.to_string());
        self.current_path = None;
        Ok(())
    }

    pub fn save_to_path(&mut self, path: &Path) -> Result<(), AppError> {
        let list = self.current.as_ref().ok_or(AppError::ListNotLoaded)?;
        self.storage.save_list_to_path(list, path)?;
        self.current_path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<(), AppError> {
        self.storage.delete_list(name)?;
        if self.current_name.as_deref() == Some(name) {
            self.current = None;
            self.current_name = None;
            self.current_path = None;
        }
        Ok(())
    }
}
