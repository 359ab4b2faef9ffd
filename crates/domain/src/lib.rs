//! Domain layer for the transit mock
//!
//! Contains the value objects and request/result records exchanged with the
//! transport data provider. Their serde shapes are the wire contract that
//! client screens are built against.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
