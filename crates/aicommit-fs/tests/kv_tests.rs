//! Codec behaviour against the on-disk format

use aicommit_fs::{RawConfig, kv};
use proptest::prelude::*;
use rstest::rstest;

fn single(key: &str, value: &str) -> RawConfig {
    RawConfig::from([(key.to_string(), value.to_string())])
}

#[test]
fn test_encoded_file_layout() {
    let raw = RawConfig::from([
        ("OPENAI_KEY".to_string(), "sk-abc".to_string()),
        ("MODEL".to_string(), "gpt-4o".to_string()),
        ("SILENT_MODE".to_string(), "true".to_string()),
        ("NOTE".to_string(), "# not a comment".to_string()),
    ]);

    insta::assert_snapshot!(kv::encode(&raw).trim_end(), @r###"
    MODEL=gpt-4o
    NOTE="# not a comment"
    OPENAI_KEY=sk-abc
    SILENT_MODE=true
    "###);
}

#[rstest]
#[case::leading_space(" x")]
#[case::trailing_tab("x\t")]
#[case::leading_quote("\"quoted")]
#[case::comment_chars("a;b#c")]
#[case::newline("line1\nline2")]
#[case::carriage_return("a\rb")]
#[case::equals("a=b=c")]
#[case::unicode("grüße ✓")]
fn test_awkward_values_survive(#[case] value: &str) {
    let encoded = kv::encode(&single("KEY", value));
    let decoded = kv::decode(&encoded).unwrap();
    assert_eq!(decoded["KEY"], value);
}

#[test]
fn test_decode_hand_written_file() {
    let text = "\u{feff}; written by hand\nMODEL = gpt-4o-mini\n\n# endpoint\nOPENAI_API_ENDPOINT=http://localhost:8080/v1\n";
    let decoded = kv::decode(text).unwrap();

    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded["MODEL"], "gpt-4o-mini");
    assert_eq!(decoded["OPENAI_API_ENDPOINT"], "http://localhost:8080/v1");
}

proptest! {
    #[test]
    fn test_any_value_round_trips(value in any::<String>()) {
        let decoded = kv::decode(&kv::encode(&single("KEY", &value))).unwrap();
        prop_assert_eq!(&decoded["KEY"], &value);
    }
}
