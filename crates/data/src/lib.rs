//! Dataset providers for correlation analysis.
//!
//! This crate provides:
//! - `JsonDataSource` - loads observations and the confidence probability
//!   from a JSON file
//! - `FixtureDataSource` - the built-in reference dataset used by the demo
//!   command and for smoke-testing the pipeline

pub mod fixture;
pub mod json_source;

pub use fixture::FixtureDataSource;
pub use json_source::JsonDataSource;
