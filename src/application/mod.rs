//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateCombinationsUseCase` - Builds and registers the lattice of a base package
//! - `ReduceCombinationUseCase` - Reduces a combination and persists or prunes it
//! - `ReducePackageUseCase` - Trims a package to its surviving combinations

pub mod generate;
pub mod reduce;

pub use generate::{GenerateCombinationsUseCase, GenerateResult};
pub use reduce::{ReduceCombinationUseCase, ReduceOutcome, ReducePackageUseCase};
