//! # Userbase Server Library
//!
//! Wiring for the Userbase server: builds the store, service and router
//! from configuration and serves them until a shutdown signal arrives.

pub mod app;
pub mod startup;

pub use app::*;
