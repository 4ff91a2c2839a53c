#![doc(test(attr(deny(warnings))))]

//! Budget Insight is the analytic core behind a budget-tracking assistant:
//! it classifies spending against allocations, compares trends across
//! observation periods, and turns free-text questions into deterministic
//! templated replies.

pub mod analysis;
pub mod assistant;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Insight tracing initialized.");
    });
}
