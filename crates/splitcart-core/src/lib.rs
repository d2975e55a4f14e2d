//! splitcart-core
//!
//! Business logic and services for SplitCart.
//! Depends on splitcart-domain. No CLI, no terminal I/O, no direct storage
//! interactions.

pub mod error;
pub mod item_service;
pub mod member_service;
pub mod split;
pub mod stats;
pub mod storage;

pub use error::CoreError;
pub use item_service::*;
pub use member_service::*;
pub use split::*;
pub use stats::*;
pub use storage::{list_warnings, ListBackupInfo, ListStorage};
