//! SplitCart — a household shopping list with automatic cost splitting.
//!
//! Tracks shopping items and household members, records who purchased what,
//! and derives an equal-split settlement across members.

pub mod cli;
pub mod core;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SplitCart tracing initialized.");
    });
}
