//! Configuration loader and schema types.
//!
//! Settings are read-only: loaded once at startup from an optional TOML
//! file and environment variables, never written back.

mod load;
mod schema;

pub use schema::*;
