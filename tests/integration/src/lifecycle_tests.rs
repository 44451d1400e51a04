//! Full config lifecycle across the workspace crates
//!
//! First run -> credentials stored -> values edited one at a time -> a
//! corrupted file is reported instead of silently replaced.

use aicommit_config::{ConfigKey, ConfigResolver, ConfigValue, Error, RawConfig};
use aicommit_fs::kv;
use aicommit_test_utils::TestHome;
use pretty_assertions::assert_eq;

fn resolver(home: &TestHome) -> ConfigResolver {
    ConfigResolver::with_home_dir(home.path()).with_env([("TERM", "xterm-256color")])
}

#[test]
fn test_first_run_to_configured() {
    let home = TestHome::new();
    let resolver = resolver(&home);

    // Nothing stored yet: the editor view still works, resolution does not
    let view = resolver.inspect(&RawConfig::new()).unwrap();
    assert_eq!(view[0], (ConfigKey::OpenaiKey, None));
    assert!(matches!(
        resolver.resolve(&RawConfig::new()),
        Err(Error::MissingValue { key: ConfigKey::OpenaiKey, .. })
    ));
    home.assert_no_store();

    // Editor-style single-key updates
    resolver.update(&[("OPENAI_KEY", "sk-abc")]).unwrap();
    resolver.update(&[("ANTHROPIC_KEY", "ak-abc")]).unwrap();
    resolver.update(&[("SILENT_MODE", "TRUE")]).unwrap();

    let config = resolver.resolve(&RawConfig::new()).unwrap();
    assert_eq!(config.openai_key(), "sk-abc");
    assert_eq!(config.anthropic_key(), "ak-abc");
    assert!(config.silent_mode());
    assert_eq!(config.get("TERM").as_deref(), Some("xterm-256color"));

    // The file on disk is plain KEY=value and decodes to what was stored
    let stored = kv::decode(&home.read_store().unwrap()).unwrap();
    assert_eq!(
        stored,
        RawConfig::from([
            ("ANTHROPIC_KEY".to_string(), "ak-abc".to_string()),
            ("OPENAI_KEY".to_string(), "sk-abc".to_string()),
            ("SILENT_MODE".to_string(), "true".to_string()),
        ])
    );
}

#[test]
fn test_overrides_do_not_persist() {
    let home = TestHome::with_store("OPENAI_KEY=sk-a\nANTHROPIC_KEY=ak-a\n");
    let resolver = resolver(&home);
    let before = home.store_bytes();

    let overrides = RawConfig::from([("LANGUAGE".to_string(), "ja".to_string())]);
    let config = resolver.resolve(&overrides).unwrap();

    assert_eq!(config.value(ConfigKey::Language), &ConfigValue::Text("ja".into()));
    assert_eq!(home.store_bytes(), before);
}

#[test]
fn test_corrupted_file_is_not_overwritten() {
    let home = TestHome::with_store("OPENAI_KEY=sk-a\n<<<<<<< HEAD\n");
    let resolver = resolver(&home);

    assert!(matches!(
        resolver.update(&[("LANGUAGE", "de")]),
        Err(Error::MalformedStore { .. })
    ));
    assert_eq!(
        home.read_store().as_deref(),
        Some("OPENAI_KEY=sk-a\n<<<<<<< HEAD\n")
    );
}
