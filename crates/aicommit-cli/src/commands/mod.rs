//! Command implementations for aicommit-cli

pub mod config;

pub use config::{
    collect_overrides, run_config_get, run_config_path, run_config_set, run_config_show,
    run_config_unset,
};
