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
//! - `ResolveUseCase` - Runs the package manager, rebuilds the graph and
//!   resolves the production package list of a root module

pub mod resolve;

pub use resolve::{ResolveOptions, ResolveResult, ResolveUseCase};
