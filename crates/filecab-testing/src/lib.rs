//! Testing infrastructure for filecab integration tests.
//!
//! Provides record builders and a small sample data set shared by the
//! store and CLI test suites.

pub mod fixtures;

pub use fixtures::{record, sample_records};
