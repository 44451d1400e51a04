//! `aicommit config` subcommands

use std::io::Write;

use aicommit_config::{ConfigKey, ConfigResolver, ConfigValue, RawConfig, lookup};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Literal prefix shown in front of the visible tail of a secret.
const MASK_PREFIX: &str = "...";

/// Number of trailing characters of a secret left visible.
const MASK_VISIBLE: usize = 4;

/// Mask a secret, keeping only its last few characters.
pub fn mask(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= MASK_VISIBLE {
        return "*".repeat(MASK_VISIBLE);
    }
    let tail: String = secret.chars().skip(count - MASK_VISIBLE).collect();
    format!("{}{}", MASK_PREFIX, tail)
}

/// Render a value for humans: secrets masked, missing values marked.
pub fn display_value(key: ConfigKey, value: Option<&ConfigValue>) -> String {
    match value {
        None => "(not set)".to_string(),
        Some(v) if key.is_secret() => mask(&v.to_raw()),
        Some(v) => v.to_raw(),
    }
}

/// Print `KEY=value` for each requested key.
pub fn run_config_get(
    resolver: &ConfigResolver,
    keys: &[String],
    overrides: &RawConfig,
    out: &mut impl Write,
) -> Result<()> {
    for (name, value) in resolver.get(keys, overrides)? {
        writeln!(out, "{}={}", name, value.unwrap_or_default())?;
    }
    Ok(())
}

/// Validate and persist entries.
pub fn run_config_set(resolver: &ConfigResolver, entries: &[(String, String)]) -> Result<()> {
    resolver.update(entries)?;

    let names: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
    println!(
        "{} Config successfully set: {}",
        "✔".green(),
        names.join(", ").cyan()
    );
    Ok(())
}

/// Remove keys from the config file.
pub fn run_config_unset(resolver: &ConfigResolver, keys: &[String]) -> Result<()> {
    if resolver.unset(keys)? {
        println!("{} Removed: {}", "✔".green(), keys.join(", ").cyan());
    } else {
        println!("{}", "Nothing to remove".dimmed());
    }
    Ok(())
}

/// Display every registered property.
pub fn run_config_show(
    resolver: &ConfigResolver,
    overrides: &RawConfig,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let current = resolver.inspect(overrides)?;

    if json {
        let mut map = serde_json::Map::new();
        for (key, value) in &current {
            let rendered = match value {
                None => serde_json::Value::Null,
                Some(v) if key.is_secret() => serde_json::Value::String(mask(&v.to_raw())),
                Some(v) => serde_json::to_value(v)?,
            };
            map.insert(key.to_string(), rendered);
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
        return Ok(());
    }

    writeln!(out, "{}", "Configuration".bold())?;
    writeln!(out, "  {:<22} {}", "File:".dimmed(), resolver.location())?;
    writeln!(out)?;
    for (key, value) in &current {
        let rendered = display_value(*key, value.as_ref());
        let rendered = if value.is_some() {
            rendered.cyan()
        } else {
            rendered.dimmed()
        };
        writeln!(out, "  {:<22} {}", format!("{}:", key).dimmed(), rendered)?;
    }
    Ok(())
}

/// Print the config file location.
/// Collect `-c KEY=VALUE` pairs into overrides, rejecting unregistered keys.
///
/// A later pair for the same key wins.
pub fn collect_overrides(pairs: Vec<(String, String)>) -> Result<RawConfig> {
    if let Some((key, _)) = pairs.iter().find(|(key, _)| lookup(key).is_none()) {
        return Err(CliError::user(format!(
            "Unknown config property in -c override: {key}"
        )));
    }
    Ok(pairs.into_iter().collect())
}

pub fn run_config_path(resolver: &ConfigResolver, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", resolver.location())?;
    Ok(())
}
