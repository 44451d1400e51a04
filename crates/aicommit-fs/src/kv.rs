//! Line-oriented `KEY=value` codec for the persisted config file
//!
//! The format is INI without sections:
//!
//! ```text
//! ; comments start with ';' or '#'
//! OPENAI_KEY=sk-...
//! LANGUAGE=en
//! GREETING=" padded value "
//! ```
//!
//! Values that would not survive a bare round trip (surrounding whitespace,
//! a leading quote, comment characters, line breaks) are written as JSON
//! string literals and unquoted again on decode.

use std::collections::BTreeMap;

use crate::{Error, Result};

/// Untyped key/value mapping as stored on disk.
pub type RawConfig = BTreeMap<String, String>;

/// Decode `KEY=value` text into a raw mapping.
///
/// Blank lines and comment lines are skipped. When a key repeats, the last
/// occurrence wins. Anything else that is not a `KEY=value` pair is an error
/// rather than being dropped.
pub fn decode(text: &str) -> Result<RawConfig> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut raw = RawConfig::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            return Err(Error::malformed(line_no, "section headers are not supported"));
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| Error::malformed(line_no, "expected KEY=value"))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(Error::malformed(line_no, "empty key"));
        }

        let value = unquote(value.trim())
            .map_err(|e| Error::malformed(line_no, format!("invalid quoted value: {}", e)))?;

        if raw.insert(key.to_string(), value).is_some() {
            tracing::warn!(key, line = line_no, "Duplicate key, keeping last value");
        }
    }

    Ok(raw)
}

/// Encode a raw mapping as `KEY=value` lines, sorted by key.
///
/// Keys are written verbatim and must not contain `=` or line breaks.
pub fn encode(raw: &RawConfig) -> String {
    let mut out = String::new();
    for (key, value) in raw {
        debug_assert!(!key.contains(['=', '\n', '\r']), "unencodable key: {key:?}");
        out.push_str(key);
        out.push('=');
        if needs_quoting(value) {
            // Serializing a str into JSON cannot fail
            out.push_str(&serde_json::Value::from(value.as_str()).to_string());
        } else {
            out.push_str(value);
        }
        out.push('\n');
    }
    out
}

// Empty stays bare: `KEY=` decodes back to ""
fn needs_quoting(value: &str) -> bool {
    value != value.trim()
        || value.starts_with('"')
        || value.contains([';', '#', '\n', '\r'])
}

fn unquote(value: &str) -> std::result::Result<String, serde_json::Error> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        serde_json::from_str(value)
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(pairs: &[(&str, &str)]) -> RawConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_decode_simple_pairs() {
        let decoded = decode("MODEL=gpt-4o\nLANGUAGE=en\n").unwrap();
        assert_eq!(decoded, raw(&[("LANGUAGE", "en"), ("MODEL", "gpt-4o")]));
    }

    #[test]
    fn test_decode_skips_comments_and_blank_lines() {
        let text = "; header\n\n# other style\nMODEL = gpt-4o \n";
        assert_eq!(decode(text).unwrap(), raw(&[("MODEL", "gpt-4o")]));
    }

    #[test]
    fn test_decode_splits_on_first_equals() {
        let decoded = decode("OPENAI_API_ENDPOINT=https://host/v1?a=b\n").unwrap();
        assert_eq!(decoded["OPENAI_API_ENDPOINT"], "https://host/v1?a=b");
    }

    #[test]
    fn test_decode_last_duplicate_wins() {
        let decoded = decode("MODEL=a\nMODEL=b\n").unwrap();
        assert_eq!(decoded["MODEL"], "b");
    }

    #[test]
    fn test_decode_empty_value() {
        let decoded = decode("MODEL=\n").unwrap();
        assert_eq!(decoded["MODEL"], "");
    }

    #[test]
    fn test_decode_crlf() {
        let decoded = decode("MODEL=gpt-4o\r\nLANGUAGE=de\r\n").unwrap();
        assert_eq!(decoded, raw(&[("LANGUAGE", "de"), ("MODEL", "gpt-4o")]));
    }

    #[test]
    fn test_decode_rejects_line_without_equals() {
        let err = decode("MODEL=gpt-4o\ngarbage\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_decode_rejects_section_header() {
        let err = decode("[core]\nMODEL=gpt-4o\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_decode_rejects_empty_key() {
        let err = decode("=value\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_decode_rejects_broken_quoting() {
        let err = decode("MODEL=\"abc\\q\"\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_encode_quotes_only_when_needed() {
        let encoded = encode(&raw(&[
            ("A", "plain value"),
            ("B", " padded "),
            ("C", "semi;colon"),
            ("D", ""),
        ]));
        assert_eq!(encoded, "A=plain value\nB=\" padded \"\nC=\"semi;colon\"\nD=\n");
    }

    #[test]
    fn test_encode_empty_map() {
        assert_eq!(encode(&RawConfig::new()), "");
    }
}
