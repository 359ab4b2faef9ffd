//! HTTP request handlers

pub mod geo;
pub mod health;
pub mod itinerary;
pub mod nearby;
pub mod route;
