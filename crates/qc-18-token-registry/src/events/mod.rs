//! # Registry Events
//!
//! Structured notifications emitted on state transitions.
//!
//! - `create_token`: token persisted and supply minted
//! - `update_token`: token fields replaced
//! - `delete_token`: token removed
//! - `update_params`: module params replaced
//!
//! Events are buffered in the transaction's `EventManager` and only reach
//! the host's log when the transaction commits.

pub mod manager;
pub mod payloads;

pub use manager::*;
pub use payloads::*;
