//! FitTrack - terminal fitness tracker library
//!
//! Workout scheduling and history, a guarded sign-in flow, analytics charts,
//! profile editing and a small exercise catalog, persisted to a local JSON store.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
