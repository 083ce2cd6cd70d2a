//! Common test utilities for contract, property and scenario tests.
//!
//! This module provides:
//! - `LatticeEnv`: In-memory stores wired together, with a builder
//! - Fixtures: Entity builders and package sets reused across suites

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
