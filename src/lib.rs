#![doc(test(attr(deny(warnings))))]

//! Finance Core provides the transaction ledger, derived analytics, and
//! settings primitives behind a personal finance tracker.

pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod interchange;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
