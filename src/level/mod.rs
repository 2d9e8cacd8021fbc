//! Severity levels.
//!
//! # Encoding
//! ```text
//! Crit  → "crit"
//! Error → "eror"   (also parsed from "error")
//! Warn  → "warn"
//! Info  → "info"
//! Debug → "dbug"   (also parsed from "debug")
//! ```
//!
//! # Design Decisions
//! - Lower discriminant = more severe; derived `Ord` follows that
//! - The four-letter mnemonics are the wire format; renaming breaks
//!   persisted logs
//! - Parse failures hand back `Debug` as the fallback so callers that
//!   ignore the error log everything instead of nothing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Log severity.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Crit = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

/// Returned when a string is not a known level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level: {input}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Level to use when the error is ignored.
    pub fn fallback(&self) -> Level {
        Level::Debug
    }
}

/// Returned when an integer does not name a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid level discriminant: {0}")]
pub struct LevelReprError(pub u8);

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Level; 5] = [
        Level::Crit,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
    ];

    /// Canonical four-letter mnemonic.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Crit => "crit",
            Level::Error => "eror",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "dbug",
        }
    }

    /// Parse a level name. Case-sensitive; accepts the mnemonics plus the
    /// `debug` and `error` aliases.
    pub fn decode(s: &str) -> Result<Level, ParseLevelError> {
        match s {
            "debug" | "dbug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" | "eror" => Ok(Level::Error),
            "crit" => Ok(Level::Crit),
            _ => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }

    /// Parse a level name, returning the fallback level alongside any error.
    pub fn decode_or_default(s: &str) -> (Level, Option<ParseLevelError>) {
        match Level::decode(s) {
            Ok(level) => (level, None),
            Err(e) => (e.fallback(), Some(e)),
        }
    }

    /// Look up a level by its discriminant.
    pub fn from_repr(value: u8) -> Option<Level> {
        Level::ALL.get(value as usize).copied()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::decode(s)
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelReprError;

    fn try_from(value: u8) -> Result<Self, LevelReprError> {
        Level::from_repr(value).ok_or(LevelReprError(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Level::decode(&s).map_err(serde::de::Error::custom)
    }
}
