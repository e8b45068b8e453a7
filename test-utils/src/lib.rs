//! Test utilities for the vault-draft workspace
//!
//! This crate provides common fixtures, builders, mocks and assertion
//! macros used across the vault-draft tests.

pub mod builders;
pub mod fixtures;
pub mod helpers;
pub mod macros;

pub use builders::*;
pub use fixtures::*;
pub use helpers::*;
