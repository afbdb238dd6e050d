//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing the session, routing, background requests and per-screen state.

pub mod state;
pub mod session;
pub mod router;
pub mod profile;
pub mod tasks;

pub use state::*;
pub use session::*;
pub use router::*;
pub use profile::*;
pub use tasks::*;
