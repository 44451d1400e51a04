//! Error types for aicommit-config

use crate::ConfigKey;

/// Result type for aicommit-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or updating configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A key with no safe default was absent or empty
    #[error("{key} is not set. Run `{command}` to set it")]
    MissingValue { key: ConfigKey, command: String },

    /// An update or lookup named a key the registry does not define
    #[error("Invalid config property: {key}")]
    InvalidKey { key: String },

    /// The persisted store exists but could not be decoded
    #[error("Malformed config file at {location}: {source}")]
    MalformedStore {
        location: String,
        #[source]
        source: aicommit_fs::Error,
    },

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// Error from aicommit-fs
    #[error(transparent)]
    Fs(#[from] aicommit_fs::Error),
}

impl Error {
    /// Whether this is one of the known, user-correctable failures.
    ///
    /// Expected errors are reported with their message alone; anything else
    /// is an unexpected failure.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingValue { .. } | Self::InvalidKey { .. } | Self::MalformedStore { .. }
        )
    }
}
