//! Configuration validation.

use thiserror::Error;

use crate::config::schema::LoggingConfig;
use crate::record::ERROR_KEY;

/// A semantic problem in an otherwise well-formed config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("context key must not be empty")]
    EmptyKey,

    #[error("context key {0:?} is reserved")]
    ReservedKey(String),
}

/// Check a parsed config, collecting every error.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for key in config.context.keys() {
        if key.trim().is_empty() {
            errors.push(ValidationError::EmptyKey);
        } else if key == ERROR_KEY {
            errors.push(ValidationError::ReservedKey(key.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
