//! The active order: cart data, the orchestrator that owns it, and what a
//! submission reports back.

pub mod cart;
pub mod error;
pub mod orchestrator;
pub mod submission;

pub use cart::*;
pub use error::*;
pub use orchestrator::*;
pub use submission::*;
