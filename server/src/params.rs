//! Request parameters and response DTOs.
//!
//! Parameters arrive as query string fields (GET) or url-encoded form
//! fields (POST) and are normalized here; the generator never sees a
//! malformed value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use diceware_core::{
    PasswordRequest, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SEPARATOR, DEFAULT_WORD_COUNT,
};

/// Raw request fields, keyed by their single-letter names.
pub type Fields = HashMap<String, String>;

/// Word count field.
const WORD_COUNT: &str = "n";
/// Separator field.
const SEPARATOR: &str = "s";
/// Maximum length field.
const MAX_LEN: &str = "u";
/// Minimum length field.
const MIN_LEN: &str = "l";
/// Extended dictionary field.
const EXTENDED: &str = "e";

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// JSON body of `/gen`.
///
/// `Debug` is manually implemented to mask the generated value and prevent
/// accidental logging of secret material.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeneratePasswordResult {
    /// The generated passphrase, empty when generation failed.
    pub p: String,
}

impl std::fmt::Debug for GeneratePasswordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratePasswordResult")
            .field("p", &"***")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Non-empty value of `key`.
fn field<'a>(fields: &'a Fields, key: &str) -> Option<&'a str> {
    fields.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Parse a length-like field, falling back to `default` when absent or
/// unparseable.
fn number(fields: &Fields, key: &str, default: usize) -> usize {
    field(fields, key).map_or(default, |v| v.trim().parse().unwrap_or(default))
}

/// Normalize the separator: the literal `space` (any case) becomes `" "`.
fn parse_separator(s: &str) -> String {
    if s.eq_ignore_ascii_case("space") {
        " ".to_string()
    } else {
        s.to_string()
    }
}

/// Interpret the extended flag. A checked HTML checkbox submits `on`; any
/// other value is read as a boolean literal.
fn parse_flag(s: &str) -> bool {
    matches!(s, "on" | "1" | "t" | "T" | "true" | "TRUE" | "True")
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build a generation request from raw fields.
///
/// When none of `n`, `s`, `u` and `l` are present (the bare index page),
/// the separator defaults to a single space. A present but empty `s` means
/// no separator. `e` is ignored when `extended_enabled` is false.
#[must_use]
pub fn password_request(fields: &Fields, extended_enabled: bool) -> PasswordRequest {
    let bare = [WORD_COUNT, SEPARATOR, MAX_LEN, MIN_LEN]
        .iter()
        .all(|k| field(fields, k).is_none());

    let separator = if bare {
        DEFAULT_SEPARATOR.to_string()
    } else {
        fields
            .get(SEPARATOR)
            .map(|s| parse_separator(s))
            .unwrap_or_default()
    };

    let use_extended = extended_enabled && field(fields, EXTENDED).is_some_and(parse_flag);

    PasswordRequest {
        word_count: number(fields, WORD_COUNT, DEFAULT_WORD_COUNT),
        separator,
        max_len: number(fields, MAX_LEN, DEFAULT_MAX_LENGTH),
        min_len: number(fields, MIN_LEN, DEFAULT_MIN_LENGTH),
        use_extended,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
