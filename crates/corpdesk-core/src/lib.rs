//! # Corpdesk Core
//!
//! Shared foundation for the Corpdesk workspace: the error type, the
//! TOML configuration layer, and the data types every other crate
//! speaks (`Chunk`, `Section`, `Answer`).

pub mod config;
pub mod error;
pub mod types;

pub use config::CorpdeskConfig;
pub use error::{CorpdeskError, Result};
pub use types::{Answer, Chunk, Section};
