//! # Midtown POS
//!
//! The core of a point-of-sale and inventory manager for a small comic shop:
//! staff browse the catalog, build an order, submit it to take the copies off
//! the shelf, and maintain product and customer records.
//!
//! ## Layers
//!
//! ### 1. Stores ([`product_actor`], [`customer_actor`])
//! Each record type lives in a [`resource_actor::ResourceActor`] on its own
//! Tokio task. Validation (no blank titles, no negative prices, never fewer
//! than zero copies) happens inside the actor, so every write is checked and
//! single-record writes are atomic.
//!
//! ### 2. Clients ([`clients`])
//! [`ProductClient`](clients::ProductClient) and
//! [`CustomerClient`](clients::CustomerClient) wrap the generic client and
//! implement the [`InventoryStore`](clients::InventoryStore) and
//! [`CustomerStore`](clients::CustomerStore) contracts the rest of the crate
//! is written against.
//!
//! ### 3. The order ([`order`])
//! [`CartState`](order::CartState) is pure data;
//! [`OrderOrchestrator`](order::OrderOrchestrator) owns it, talks to the
//! inventory and tells the screens what changed. Submission is not
//! transactional: it stops at the first failing line and reports exactly
//! what was applied.
//!
//! ### 4. Records ([`records`])
//! Catalog and customer maintenance with no derived state.
//!
//! ### 5. Screens ([`presentation`])
//! Capability traits the core notifies. The crate ships a recording
//! implementation used by the demo and the tests.
//!
//! ### 6. Wiring ([`lifecycle`])
//! [`ShopSystem`](lifecycle::ShopSystem) starts and stops the actors;
//! [`ShopConfig`](lifecycle::ShopConfig) and
//! [`setup_tracing`](lifecycle::setup_tracing) cover settings and logs.
//!
//! ## Running
//!
//! ```bash
//! POS_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order;
pub mod presentation;
pub mod product_actor;
pub mod records;
