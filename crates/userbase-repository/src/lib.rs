//! # Userbase Repository
//!
//! Data access for the `user` table:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! SqliteUserRepository          (parameterized SQL via SQLx)
//!   ↓  Arc<DatabasePool>
//! SQLite
//! ```
//!
//! Update and delete are probe-then-mutate: an existence read followed by
//! the write, both inside one store transaction.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
