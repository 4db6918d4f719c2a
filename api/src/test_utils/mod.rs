//! Test utilities
//!
//! Manual in-memory mock implementations and test fixtures for unit
//! testing. Services are exercised against these rather than a live
//! database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
