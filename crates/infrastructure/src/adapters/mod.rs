//! Adapters implementing application ports

mod mock_transit_adapter;

pub use mock_transit_adapter::MockTransitAdapter;
