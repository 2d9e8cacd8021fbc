//! Configuration schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::record::{Ctx, Fields};

/// Root logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Most verbose level the binary lets through.
    pub level: Level,

    /// Static context attached to every record of the configured logger.
    pub context: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            context: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// The static context as call-site fields.
    pub fn fields(&self) -> Fields {
        self.context
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Ctx>()
            .into()
    }

    /// The more verbose of the configured level and `emitted`, so a
    /// subscriber built from it never filters out a record at `emitted`.
    pub fn level_for(&self, emitted: Level) -> Level {
        self.level.max(emitted)
    }
}
