//! Interactive config editor
//!
//! Uses dialoguer for terminal-based selection. The menu is shown again after
//! every successful edit until the user picks "Done" or cancels.

use aicommit_config::{ConfigKey, ConfigResolver, ConfigValue, RawConfig, descriptor};
use colored::Colorize;
use dialoguer::{Input, Password, Select};

use crate::commands::config::display_value;
use crate::error::Result;

/// Terminal menu entry
const DONE: &str = "Done";

/// Choices offered for boolean properties
const FLAG_CHOICES: &[&str] = &["true", "false"];

/// Run the editor loop.
pub fn run_interactive(resolver: &ConfigResolver) -> Result<()> {
    println!();
    println!("{} {}", "Config file:".dimmed(), resolver.location());

    loop {
        let current = resolver.inspect(&RawConfig::new())?;
        let items = menu_items(&current);

        let choice = Select::new()
            .with_prompt("Select a property to edit (esc to quit)")
            .items(&items)
            .default(0)
            .interact_opt()?;

        let Some(key) = choice.and_then(|idx| selected_key(&current, idx)) else {
            break;
        };
        let value = current
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_ref());

        let Some(new_value) = prompt_value(key, value)? else {
            continue;
        };

        resolver.update(&[(key.as_str(), new_value.as_str())])?;
        println!("{} {} updated", "✔".green(), key.as_str().cyan());
    }

    Ok(())
}

/// One line per property with its current value, then the terminal entry.
fn menu_items(current: &[(ConfigKey, Option<ConfigValue>)]) -> Vec<String> {
    current
        .iter()
        .map(|(key, value)| format!("{:<20} {}", key.as_str(), display_value(*key, value.as_ref())))
        .chain(std::iter::once(DONE.to_string()))
        .collect()
}

/// The key behind a menu index, `None` for "Done".
fn selected_key(current: &[(ConfigKey, Option<ConfigValue>)], index: usize) -> Option<ConfigKey> {
    current.get(index).map(|(key, _)| *key)
}

/// Ask for a new value. `None` means the user backed out of this prompt.
fn prompt_value(key: ConfigKey, current: Option<&ConfigValue>) -> Result<Option<String>> {
    let prompt = descriptor(key).description;

    if key.is_secret() {
        let secret = Password::new().with_prompt(prompt).interact()?;
        return Ok(Some(secret));
    }

    if let Some(ConfigValue::Flag(on)) = current {
        let idx = Select::new()
            .with_prompt(prompt)
            .items(FLAG_CHOICES)
            .default(if *on { 0 } else { 1 })
            .interact_opt()?;
        return Ok(idx.map(|i| FLAG_CHOICES[i].to_string()));
    }

    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(value) = current {
        input = input.default(value.to_raw());
    }
    Ok(Some(input.interact_text()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(ConfigKey, Option<ConfigValue>)> {
        vec![
            (ConfigKey::OpenaiKey, Some(ConfigValue::Text("sk-abcdef1234".into()))),
            (ConfigKey::AnthropicKey, None),
            (ConfigKey::SilentMode, Some(ConfigValue::Flag(false))),
        ]
    }

    #[test]
    fn test_menu_ends_with_done() {
        let items = menu_items(&sample());
        assert_eq!(items.len(), 4);
        assert_eq!(items.last().map(String::as_str), Some(DONE));
    }

    #[test]
    fn test_menu_masks_secrets() {
        let items = menu_items(&sample());
        assert!(items[0].starts_with("OPENAI_KEY"));
        assert!(items[0].ends_with("...1234"));
        assert!(!items[0].contains("abcdef"));
        assert!(items[1].ends_with("(not set)"));
    }

    #[test]
    fn test_selected_key() {
        let current = sample();
        assert_eq!(selected_key(&current, 2), Some(ConfigKey::SilentMode));
        assert_eq!(selected_key(&current, 3), None);
    }

    #[test]
    fn test_flag_choices_are_parseable() {
        for choice in FLAG_CHOICES {
            let parsed = descriptor(ConfigKey::SilentMode).validate(Some(*choice)).unwrap();
            assert_eq!(parsed.to_raw(), *choice);
        }
    }
}
