//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod closure;
mod paths;

pub use closure::{resolve_closure, Closure, ClosureError, Exclusion};
pub use paths::resolve_paths;
