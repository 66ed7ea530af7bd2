//! # Userbase Service
//!
//! The user record service: validates requests, drives the repository and
//! shapes results into the response bodies the REST layer returns.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
