//! Startup, configuration and shutdown of the shop.

pub mod config;
pub mod shop_system;
pub mod tracing;

pub use config::*;
pub use shop_system::*;
pub use self::tracing::setup_tracing;
