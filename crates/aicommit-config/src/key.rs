//! Configuration keys and validated values

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// A registered configuration key.
///
/// The set is closed: every key the tool understands is a variant here, and
/// [`crate::registry::descriptor`] matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    OpenaiKey,
    AnthropicKey,
    Model,
    AnthropicModel,
    SilentMode,
    OpenaiApiEndpoint,
    Language,
}

impl ConfigKey {
    /// All keys, in registry order.
    pub const ALL: [ConfigKey; 7] = [
        Self::OpenaiKey,
        Self::AnthropicKey,
        Self::Model,
        Self::AnthropicModel,
        Self::SilentMode,
        Self::OpenaiApiEndpoint,
        Self::Language,
    ];

    /// Canonical name, as written in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenaiKey => "OPENAI_KEY",
            Self::AnthropicKey => "ANTHROPIC_KEY",
            Self::Model => "MODEL",
            Self::AnthropicModel => "ANTHROPIC_MODEL",
            Self::SilentMode => "SILENT_MODE",
            Self::OpenaiApiEndpoint => "OPENAI_API_ENDPOINT",
            Self::Language => "LANGUAGE",
        }
    }

    /// Credentials are masked whenever they are displayed.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::OpenaiKey | Self::AnthropicKey)
    }
}

impl FromStr for ConfigKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::InvalidKey { key: s.to_string() })
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Flag(bool),
}

impl ConfigValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// The string form written back to the persisted store.
    pub fn to_raw(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{}", b),
        }
    }
}
