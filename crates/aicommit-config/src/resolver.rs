//! Configuration resolution and persistence
//!
//! The [`ConfigResolver`] reads three sources, highest precedence first:
//! 1. Caller-supplied overrides (for example `-c KEY=VALUE` on the command line)
//! 2. The persisted store (`~/.aicommit`)
//! 3. The process environment, which only supplies names the registry does
//!    not define
//!
//! Every registered key is validated on each resolution, so a
//! [`ResolvedConfig`] is never partial. The write path validates a batch of
//! updates up front and only then rewrites the whole store.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use aicommit_fs::{FileStore, RawConfig, Store, kv};

use crate::registry::{self, STORE_FILE_NAME};
use crate::{ConfigKey, ConfigValue, Error, Result};

/// Location of the persisted store inside `home`.
pub fn store_path(home: &Path) -> PathBuf {
    home.join(STORE_FILE_NAME)
}

/// A fully validated configuration snapshot.
///
/// Holds a value for every registered key plus the environment entries
/// whose names the registry does not define. Only [`ConfigResolver::resolve`]
/// builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    values: BTreeMap<ConfigKey, ConfigValue>,
    env: BTreeMap<String, String>,
}

impl ResolvedConfig {
    /// Validated value of a registered key.
    pub fn value(&self, key: ConfigKey) -> &ConfigValue {
        // Populated for every key in `resolve`
        &self.values[&key]
    }

    /// Text value of a registered key, empty for flag keys.
    pub fn text(&self, key: ConfigKey) -> &str {
        self.value(key).as_text().unwrap_or_default()
    }

    /// Flag value of a registered key, false for text keys.
    pub fn flag(&self, key: ConfigKey) -> bool {
        self.value(key).as_flag().unwrap_or(false)
    }

    /// Look up any name: registered keys first, then the environment.
    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        match registry::lookup(name) {
            Some(key) => Some(match self.value(key) {
                ConfigValue::Text(s) => Cow::Borrowed(s.as_str()),
                flag => Cow::Owned(flag.to_raw()),
            }),
            None => self.env.get(name).map(|v| Cow::Borrowed(v.as_str())),
        }
    }

    /// Registered keys and their values, in registry order.
    pub fn registered(&self) -> impl Iterator<Item = (ConfigKey, &ConfigValue)> {
        ConfigKey::ALL.into_iter().map(|key| (key, self.value(key)))
    }

    /// Environment passthrough entries.
    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn openai_key(&self) -> &str {
        self.text(ConfigKey::OpenaiKey)
    }

    pub fn anthropic_key(&self) -> &str {
        self.text(ConfigKey::AnthropicKey)
    }

    pub fn model(&self) -> &str {
        self.text(ConfigKey::Model)
    }

    pub fn anthropic_model(&self) -> &str {
        self.text(ConfigKey::AnthropicModel)
    }

    pub fn silent_mode(&self) -> bool {
        self.flag(ConfigKey::SilentMode)
    }

    pub fn openai_api_endpoint(&self) -> &str {
        self.text(ConfigKey::OpenaiApiEndpoint)
    }

    pub fn language(&self) -> &str {
        self.text(ConfigKey::Language)
    }
}

/// Reads, validates and persists configuration through a [`Store`].
#[derive(Debug)]
pub struct ConfigResolver {
    store: Box<dyn Store>,
    env: BTreeMap<String, String>,
}

impl ConfigResolver {
    /// Resolver over `~/.aicommit` and the live process environment.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
        Ok(Self::with_home_dir(home))
    }

    /// Resolver over `<home>/.aicommit`.
    ///
    /// Mostly useful for tests that need a throwaway home directory.
    pub fn with_home_dir(home: impl AsRef<Path>) -> Self {
        Self::with_store(FileStore::new(store_path(home.as_ref())))
    }

    /// Resolver over an arbitrary store and the live process environment.
    pub fn with_store(store: impl Store + 'static) -> Self {
        Self {
            store: Box::new(store),
            env: process_env(),
        }
    }

    /// Replace the environment snapshot.
    pub fn with_env<K, V>(mut self, env: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = env.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Where the persisted store lives.
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Load the persisted raw mapping. A missing store is empty, not an error.
    pub fn load_raw(&self) -> Result<RawConfig> {
        if !self.store.exists() {
            tracing::debug!(location = %self.store.location(), "No config file found, using empty config");
            return Ok(RawConfig::new());
        }

        tracing::debug!(location = %self.store.location(), "Loading config file");
        let content = self.store.read()?;
        kv::decode(&content).map_err(|source| Error::MalformedStore {
            location: self.store.location(),
            source,
        })
    }

    /// Resolve the full configuration.
    ///
    /// For each registered key the override wins over the persisted value.
    /// The first validation failure aborts the whole resolution.
    pub fn resolve(&self, overrides: &RawConfig) -> Result<ResolvedConfig> {
        let persisted = self.load_raw()?;

        let mut values = BTreeMap::new();
        for desc in registry::descriptors() {
            let name = desc.key.as_str();
            let raw = overrides.get(name).or_else(|| persisted.get(name));
            values.insert(desc.key, desc.validate(raw.map(String::as_str))?);
        }

        let env = self
            .env
            .iter()
            .filter(|(name, _)| registry::lookup(name).is_none())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(ResolvedConfig { values, env })
    }

    /// Per-key view for display, without failing on missing credentials.
    ///
    /// Keys whose validator rejects the current value come back as `None`.
    /// This is not a [`ResolvedConfig`]; use [`Self::resolve`] for anything
    /// that consumes the values.
    pub fn inspect(&self, overrides: &RawConfig) -> Result<Vec<(ConfigKey, Option<ConfigValue>)>> {
        let persisted = self.load_raw()?;

        registry::descriptors()
            .map(|desc| {
                let name = desc.key.as_str();
                let raw = overrides.get(name).or_else(|| persisted.get(name));
                match desc.validate(raw.map(String::as_str)) {
                    Ok(value) => Ok((desc.key, Some(value))),
                    Err(Error::MissingValue { .. }) => Ok((desc.key, None)),
                    Err(e) => Err(e),
                }
            })
            .collect()
    }

    /// Rendered values for the requested names.
    ///
    /// Unregistered names fall through to the environment and come back as
    /// `None` when absent there too.
    pub fn get<S: AsRef<str>>(
        &self,
        names: &[S],
        overrides: &RawConfig,
    ) -> Result<Vec<(String, Option<String>)>> {
        let config = self.resolve(overrides)?;
        Ok(names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), config.get(name).map(Cow::into_owned))
            })
            .collect())
    }

    /// Validate `entries` and persist them.
    ///
    /// All entries are checked before anything is written: an unknown key or
    /// a rejected value anywhere in the batch leaves the store untouched.
    /// Later entries for the same key win.
    pub fn update<K: AsRef<str>, V: AsRef<str>>(&self, entries: &[(K, V)]) -> Result<()> {
        let mut merged = self.load_raw()?;

        let mut validated = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let key: ConfigKey = name.as_ref().parse()?;
            let value = registry::descriptor(key).validate(Some(value.as_ref()))?;
            validated.push((key, value));
        }

        for (key, value) in validated {
            tracing::debug!(key = %key, "Updating config value");
            merged.insert(key.as_str().to_string(), value.to_raw());
        }

        self.store.write(&kv::encode(&merged))?;
        Ok(())
    }

    /// Remove registered keys from the store.
    ///
    /// Returns whether anything was removed. The store is only rewritten when
    /// something changed.
    pub fn unset<S: AsRef<str>>(&self, names: &[S]) -> Result<bool> {
        let keys = names
            .iter()
            .map(|name| name.as_ref().parse::<ConfigKey>())
            .collect::<Result<Vec<_>>>()?;

        let mut merged = self.load_raw()?;
        let mut changed = false;
        for key in keys {
            if merged.remove(key.as_str()).is_some() {
                tracing::debug!(key = %key, "Removed config value");
                changed = true;
            }
        }

        if changed {
            self.store.write(&kv::encode(&merged))?;
        }
        Ok(changed)
    }
}

/// Snapshot of the process environment, skipping non-UTF-8 entries.
fn process_env() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
