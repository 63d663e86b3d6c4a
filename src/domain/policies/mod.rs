//! Domain Policies
//!
//! Business rules that govern which modules may enter a production bundle.

mod resolution_policy;

pub use resolution_policy::ResolutionPolicy;
