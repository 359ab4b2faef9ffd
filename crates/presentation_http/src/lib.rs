//! Transit mock HTTP presentation layer
//!
//! Serves the transport data operations over the `/api` paths the map client
//! calls.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
