pub mod models;
pub mod services;
pub mod errors;
pub mod catalog;
pub mod validation;

pub use models::*;
pub use services::*;
pub use errors::*;
pub use catalog::*;
pub use validation::*;
