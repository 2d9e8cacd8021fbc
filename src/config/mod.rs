//! Logging configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig
//!     → Logger::from_config (static context)
//!     → binary (subscriber level)
//! ```
//!
//! # Design Decisions
//! - Every field has a default so an empty file is valid
//! - Levels use the same mnemonic table as records, aliases included
//! - Validation reports all problems at once

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::LoggingConfig;
pub use validation::{validate_config, ValidationError};
