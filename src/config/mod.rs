//! Configuration: one server origin, loaded from a TOML file with
//! sensible defaults when the file is absent.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ServerConfig};
