//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! key/value persistence, the remote quote service, configuration files,
//! CSV export and the system clipboard.

pub mod persistence;
pub mod gateway;
pub mod config;
pub mod export;
pub mod clipboard;

pub use persistence::*;
pub use gateway::*;
pub use config::*;
pub use export::*;
pub use clipboard::*;
