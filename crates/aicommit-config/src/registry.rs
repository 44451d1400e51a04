//! Key registry
//!
//! Maps every [`ConfigKey`] to the function that turns a raw optional string
//! into a validated [`ConfigValue`]. Every validator is total except the
//! credential ones: a credential has no safe default, so an absent or empty
//! value is an error that names the command to fix it.
//!
//! Adding a key means adding a [`ConfigKey`] variant and one arm in
//! [`descriptor`].

use std::fmt;

use crate::{ConfigKey, ConfigValue, Error, Result};

/// Name of the command-line tool, used in corrective messages.
pub const TOOL_NAME: &str = "aicommit";

/// File name of the persisted store inside the home directory.
pub const STORE_FILE_NAME: &str = ".aicommit";

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-opus-20240229";
pub const DEFAULT_OPENAI_API_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Normalization function for one key.
pub type Validator = fn(Option<&str>) -> Result<ConfigValue>;

/// Registry entry pairing a key with its validator.
#[derive(Clone, Copy)]
pub struct KeyDescriptor {
    pub key: ConfigKey,
    pub description: &'static str,
    validator: Validator,
}

impl KeyDescriptor {
    /// Validate and normalize a raw value for this key.
    pub fn validate(&self, raw: Option<&str>) -> Result<ConfigValue> {
        (self.validator)(raw)
    }
}

impl fmt::Debug for KeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDescriptor")
            .field("key", &self.key)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Look up the descriptor for a key.
pub fn descriptor(key: ConfigKey) -> KeyDescriptor {
    let (description, validator): (&'static str, Validator) = match key {
        ConfigKey::OpenaiKey => ("OpenAI API key", validate_openai_key),
        ConfigKey::AnthropicKey => ("Anthropic API key", validate_anthropic_key),
        ConfigKey::Model => ("OpenAI model", validate_model),
        ConfigKey::AnthropicModel => ("Anthropic model", validate_anthropic_model),
        ConfigKey::SilentMode => ("Skip confirmation prompts", validate_silent_mode),
        ConfigKey::OpenaiApiEndpoint => ("OpenAI-compatible API endpoint", validate_endpoint),
        ConfigKey::Language => ("Commit message language", validate_language),
    };

    KeyDescriptor {
        key,
        description,
        validator,
    }
}

/// All descriptors, in registry order.
pub fn descriptors() -> impl Iterator<Item = KeyDescriptor> {
    ConfigKey::ALL.into_iter().map(descriptor)
}

/// Find a registered key by its exact name.
pub fn lookup(name: &str) -> Option<ConfigKey> {
    name.parse().ok()
}

/// The command a user runs to set `key`.
pub fn set_command(key: ConfigKey) -> String {
    format!("{} config set {}=<your key>", TOOL_NAME, key)
}

fn validate_openai_key(raw: Option<&str>) -> Result<ConfigValue> {
    required(ConfigKey::OpenaiKey, raw)
}

fn validate_anthropic_key(raw: Option<&str>) -> Result<ConfigValue> {
    required(ConfigKey::AnthropicKey, raw)
}

fn validate_model(raw: Option<&str>) -> Result<ConfigValue> {
    Ok(text_or(raw, DEFAULT_MODEL))
}

fn validate_anthropic_model(raw: Option<&str>) -> Result<ConfigValue> {
    Ok(text_or(raw, DEFAULT_ANTHROPIC_MODEL))
}

fn validate_silent_mode(raw: Option<&str>) -> Result<ConfigValue> {
    Ok(ConfigValue::Flag(raw.is_some_and(|v| v.eq_ignore_ascii_case("true"))))
}

fn validate_endpoint(raw: Option<&str>) -> Result<ConfigValue> {
    Ok(text_or(raw, DEFAULT_OPENAI_API_ENDPOINT))
}

fn validate_language(raw: Option<&str>) -> Result<ConfigValue> {
    Ok(text_or(raw, DEFAULT_LANGUAGE))
}

fn required(key: ConfigKey, raw: Option<&str>) -> Result<ConfigValue> {
    match non_empty(raw) {
        Some(value) => Ok(ConfigValue::Text(value.to_string())),
        None => Err(Error::MissingValue {
            key,
            command: set_command(key),
        }),
    }
}

fn text_or(raw: Option<&str>, default: &str) -> ConfigValue {
    ConfigValue::Text(non_empty(raw).unwrap_or(default).to_string())
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty())
}
