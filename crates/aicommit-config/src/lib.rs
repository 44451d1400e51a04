//! Configuration management for aicommit.
//!
//! The crate has two halves:
//!
//! - **Key registry** ([`ConfigKey`], [`registry`]): the closed set of
//!   configuration keys and, for each, how a raw optional string becomes a
//!   validated [`ConfigValue`].
//! - **Resolver** ([`ConfigResolver`]): reads the persisted store, merges
//!   caller overrides and the process environment, and validates every key
//!   into a [`ResolvedConfig`]. The write path validates partial updates and
//!   rewrites the store.
//!
//! # Example
//!
//! ```
//! use aicommit_config::{ConfigKey, ConfigResolver, RawConfig};
//! use aicommit_fs::MemoryStore;
//!
//! let resolver = ConfigResolver::with_store(MemoryStore::new());
//! resolver.update(&[("OPENAI_KEY", "sk-abc"), ("ANTHROPIC_KEY", "ak-abc")])?;
//!
//! let config = resolver.resolve(&RawConfig::new())?;
//! assert_eq!(config.text(ConfigKey::Model), "gpt-4o");
//! # Ok::<(), aicommit_config::Error>(())
//! ```

pub mod error;
pub mod key;
pub mod registry;
pub mod resolver;

pub use aicommit_fs::RawConfig;
pub use error::{Error, Result};
pub use key::{ConfigKey, ConfigValue};
pub use registry::{KeyDescriptor, descriptor, descriptors, lookup};
pub use resolver::{ConfigResolver, ResolvedConfig, store_path};
