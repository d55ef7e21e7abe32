//! # Domain Layer
//!
//! Pure domain types for the Token Registry subsystem. No storage access
//! happens here; collections live in `schema`, operations in `service`.

pub mod entities;
pub mod errors;
pub mod genesis;
pub mod messages;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use genesis::*;
pub use messages::*;
pub use value_objects::*;
