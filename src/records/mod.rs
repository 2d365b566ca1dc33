//! Plain record maintenance for the catalog and the customer list.
//!
//! No derived state lives here: each operation writes through the store,
//! then clears the editor, refreshes the list and returns to it. A failed
//! write changes nothing on screen.

pub mod catalog;
pub mod customers;

pub use catalog::*;
pub use customers::*;
