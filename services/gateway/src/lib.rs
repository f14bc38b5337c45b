//! Stablecoin API simulator
//!
//! An axum service that answers the protocol's public stablecoin routes
//! (quotes, mint/burn transactions, APY, exchange rates) from validated
//! input and a fixed data catalog, so integrations can be built before the
//! real backend exists.

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod telemetry;
