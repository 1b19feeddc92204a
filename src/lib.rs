#![doc(test(attr(deny(warnings))))]

//! Bank Core offers the client, account, and transaction primitives of a
//! minimal banking ledger, enforcing per-account business rules and keeping
//! an append-only history of every applied transaction.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
