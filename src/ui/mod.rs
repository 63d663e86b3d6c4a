//! Terminal and NDJSON presentation for the CLI

pub mod error;
pub mod json;
