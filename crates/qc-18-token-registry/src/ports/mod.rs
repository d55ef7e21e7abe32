//! # Ports Layer
//!
//! Hexagonal boundaries of the Token Registry.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
