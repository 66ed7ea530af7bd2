//! # Userbase Core
//!
//! Core types and error definitions shared by every Userbase layer:
//! the `User` entity, its typed id, the unified error type and the
//! JSON bodies the HTTP boundary speaks.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod timeout;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use timeout::*;
pub use validation::*;
