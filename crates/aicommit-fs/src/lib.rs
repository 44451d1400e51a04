//! Filesystem layer for aicommit
//!
//! Provides whole-file text I/O, the `KEY=value` codec used by the
//! persisted config file, and the [`Store`] abstraction the config
//! engine reads and writes through.

pub mod error;
pub mod io;
pub mod kv;
pub mod store;

pub use error::{Error, Result};
pub use kv::RawConfig;
pub use store::{FileStore, MemoryStore, Store};
