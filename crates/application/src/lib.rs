//! Application layer - Use cases and orchestration
//!
//! Contains the transport data port and the service the presentation layer
//! calls into.

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
