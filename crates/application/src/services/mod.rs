//! Application services - Use case implementations

mod transport_service;

pub use transport_service::TransportService;
