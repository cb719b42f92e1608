//! Per-check configuration
//!
//! Every check declares a schema of named options with defaults. Values are
//! either integers or text, stored in an ordered map so reports and presets
//! serialize deterministically.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Option values keyed by option name
pub type CheckOptions = BTreeMap<String, OptionValue>;

/// A single option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Whole number (counts, limits)
    Integer(i64),
    /// Free text (prefixes, names)
    Text(String),
}

/// The type an option expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// [`OptionValue::Integer`]
    Integer,
    /// [`OptionValue::Text`]
    Text,
}

impl OptionValue {
    /// The kind of this value
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        match self {
            Self::Integer(_) => OptionKind::Integer,
            Self::Text(_) => OptionKind::Text,
        }
    }

    /// The integer, if this is an integer value
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text, if this is a text value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(_) => None,
        }
    }

    /// Parse raw user input as a value of the given kind
    pub fn parse_as(kind: OptionKind, raw: &str) -> Result<Self, String> {
        match kind {
            OptionKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| format!("expected an integer, got '{raw}'")),
            OptionKind::Text => Ok(Self::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Schema entry for one option of a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Option name, unique within its check
    pub name: &'static str,
    /// What the option controls
    pub description: &'static str,
    /// Value used when a preset does not set the option
    pub default: OptionValue,
}

impl OptionSpec {
    /// The kind of value this option accepts
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        self.default.kind()
    }
}
