//! splitcart-domain
//!
//! Pure domain models (ShoppingList, ShoppingItem, Member, Settlement inputs).
//! No I/O, no CLI, no storage. Only data types.

pub mod item;
pub mod list;
pub mod member;

pub use item::*;
pub use list::*;
pub use member::*;
