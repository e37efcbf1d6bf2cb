//! Logger configuration.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (optional TOML file)
//!     → validation.rs (semantic checks)
//!     → env.rs (LOG_LEVEL overlay)
//!     → LoggerConfig (immutable once the logger is built)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file or no file at all is valid
//! - The environment path never fails; a bad level just becomes `error`
//! - Validation separates syntactic (serde) from semantic checks

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::LEVEL_ENV_VAR;
pub use loader::{load_config, ConfigError};
pub use schema::LoggerConfig;
pub use validation::ValidationError;
