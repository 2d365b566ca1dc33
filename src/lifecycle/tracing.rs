//! # Logging
//!
//! Structured logging with `tracing`. The store actors log their lifecycle
//! and every write with an `entity_type` field (`Product`, `Customer`);
//! clients, the orchestrator and the record managers open a span per call.
//! The actors run on their own tasks, so their lines carry no caller span;
//! the `entity_type` and `id` fields tie them back to the request:
//!
//! ```text
//! INFO submit_order: Submitting order lines=2 total=13.97
//! INFO Updated entity_type="Product" id=product_1
//! INFO Updated entity_type="Product" id=product_2
//! INFO submit_order: Order submitted lines=2
//! ```
//!
//! Rejections are logged at `warn`. Payloads appear at `debug`.
//!
//! ```bash
//! POS_LOG=debug cargo run
//! POS_JSON_LOGS=1 cargo run
//! ```

use super::ShopConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber described by `config`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn setup_tracing(config: &ShopConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // entity_type says which store

    let _ = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
