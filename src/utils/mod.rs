//! Utility modules

pub mod audit;
pub mod validation;

pub use audit::*;
pub use validation::*;
