//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// aicommit - Write commit messages with an LLM
#[derive(Parser, Debug)]
#[command(name = "aicommit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override a config value for this invocation
    #[arg(
        short = 'c',
        long = "config",
        value_name = "KEY=VALUE",
        global = true,
        value_parser = parse_key_value
    )]
    pub overrides: Vec<(String, String)>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// View or edit configuration
    ///
    /// Without a subcommand, opens an interactive editor.
    ///
    /// Examples:
    ///   aicommit config                          # Interactive editor
    ///   aicommit config set OPENAI_KEY=sk-...    # Store a key
    ///   aicommit config get MODEL LANGUAGE       # Print values
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print resolved values as KEY=value lines
    Get {
        /// Keys to print
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Validate and store values (all or nothing)
    Set {
        /// Entries to store
        #[arg(required = true, value_name = "KEY=VALUE", value_parser = parse_key_value)]
        entries: Vec<(String, String)>,
    },

    /// Remove keys from the config file
    Unset {
        /// Keys to remove
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Show every property, with credentials masked
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the config file location
    Path,
}

/// Parse a `KEY=VALUE` argument. The value may itself contain `=`.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("OPENAI_API_ENDPOINT=http://h/v1?a=b").unwrap(),
            ("OPENAI_API_ENDPOINT".to_string(), "http://h/v1?a=b".to_string())
        );
        assert_eq!(
            parse_key_value("LANGUAGE=").unwrap(),
            ("LANGUAGE".to_string(), String::new())
        );
        assert!(parse_key_value("LANGUAGE").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_config_set_parses_entries() {
        let cli = Cli::parse_from(["aicommit", "config", "set", "MODEL=gpt-4o", "LANGUAGE=de"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: Some(ConfigAction::Set {
                    entries: vec![
                        ("MODEL".to_string(), "gpt-4o".to_string()),
                        ("LANGUAGE".to_string(), "de".to_string()),
                    ]
                })
            })
        );
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::parse_from(["aicommit", "config", "get", "MODEL", "-c", "MODEL=x"]);
        assert_eq!(cli.overrides, vec![("MODEL".to_string(), "x".to_string())]);
    }

    #[test]
    fn test_bare_config_is_interactive() {
        let cli = Cli::parse_from(["aicommit", "config"]);
        assert_eq!(cli.command, Some(Commands::Config { action: None }));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
