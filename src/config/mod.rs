//! Configuration: TOML file under the user config dir, defaults when absent.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, OmdbConfig, OMDB_API_KEY_ENV};
