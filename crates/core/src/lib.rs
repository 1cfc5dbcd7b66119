//! Core types for the correlation analysis engine.
//!
//! This crate provides:
//! - The `Point` observation type and validated `Sample` container
//! - The `DataSource` trait implemented by dataset providers
//! - Typed errors for sample construction

pub mod error;
pub mod point;
pub mod sample;
pub mod traits;

pub use error::SampleError;
pub use point::Point;
pub use sample::Sample;
pub use traits::DataSource;
