//! Domain Layer
//!
//! The resolution engine - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Reported tree nodes, the dependency graph, resolved packages
//! - `policies/` - Exclusion and forbidden-package rules
//! - `services/` - Closure and path resolution
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Pure Functions** - Services are stateless; every call builds its own state
//! 3. **Ports & Adapters** - Command execution and event output go through traits

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
