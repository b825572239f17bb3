//! console-core: Shared infrastructure for the admin console crates.
pub mod config;
pub mod error;
pub mod observability;

pub use serde;
pub use tracing;
