//! Splitting pipeline: normalization, aggregation and settlement

pub mod aggregate;
pub mod normalize;
pub mod settle;
pub mod splitter;

pub use aggregate::*;
pub use normalize::*;
pub use settle::*;
pub use splitter::*;
