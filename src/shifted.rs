use crate::error::{KeyLegendError, KlResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

// US layout, unshifted -> shifted.
const DEFAULT_SHIFTS: &[(&str, &str)] = &[
    ("1", "!"),
    ("2", "@"),
    ("3", "#"),
    ("4", "$"),
    ("5", "%"),
    ("6", "^"),
    ("7", "&"),
    ("8", "*"),
    ("9", "("),
    ("0", ")"),
    ("-", "_"),
    ("=", "+"),
    ("[", "{"),
    ("]", "}"),
    ("\\", "|"),
    (";", ":"),
    ("'", "\""),
    (",", "<"),
    (".", ">"),
    ("/", "?"),
    ("`", "~"),
];

// Canonical key code first; later aliases only map code -> char.
const KEYCODE_CHARS: &[(&str, &str)] = &[
    ("N1", "1"),
    ("N2", "2"),
    ("N3", "3"),
    ("N4", "4"),
    ("N5", "5"),
    ("N6", "6"),
    ("N7", "7"),
    ("N8", "8"),
    ("N9", "9"),
    ("N0", "0"),
    ("NUMBER_1", "1"),
    ("NUMBER_2", "2"),
    ("NUMBER_3", "3"),
    ("NUMBER_4", "4"),
    ("NUMBER_5", "5"),
    ("NUMBER_6", "6"),
    ("NUMBER_7", "7"),
    ("NUMBER_8", "8"),
    ("NUMBER_9", "9"),
    ("NUMBER_0", "0"),
    ("EXCL", "!"),
    ("EXCLAMATION", "!"),
    ("AT", "@"),
    ("AT_SIGN", "@"),
    ("HASH", "#"),
    ("POUND", "#"),
    ("DLLR", "$"),
    ("DOLLAR", "$"),
    ("PRCNT", "%"),
    ("PERCENT", "%"),
    ("CARET", "^"),
    ("AMPS", "&"),
    ("AMPERSAND", "&"),
    ("STAR", "*"),
    ("ASTERISK", "*"),
    ("ASTRK", "*"),
    ("LPAR", "("),
    ("LEFT_PARENTHESIS", "("),
    ("RPAR", ")"),
    ("RIGHT_PARENTHESIS", ")"),
    ("MINUS", "-"),
    ("UNDER", "_"),
    ("UNDERSCORE", "_"),
    ("EQUAL", "="),
    ("PLUS", "+"),
    ("LBKT", "["),
    ("LEFT_BRACKET", "["),
    ("RBKT", "]"),
    ("RIGHT_BRACKET", "]"),
    ("LBRC", "{"),
    ("LEFT_BRACE", "{"),
    ("RBRC", "}"),
    ("RIGHT_BRACE", "}"),
    ("BSLH", "\\"),
    ("BACKSLASH", "\\"),
    ("PIPE", "|"),
    ("SEMI", ";"),
    ("SEMICOLON", ";"),
    ("COLON", ":"),
    ("SQT", "'"),
    ("APOS", "'"),
    ("SINGLE_QUOTE", "'"),
    ("DQT", "\""),
    ("DOUBLE_QUOTES", "\""),
    ("COMMA", ","),
    ("LT", "<"),
    ("LESS_THAN", "<"),
    ("DOT", "."),
    ("PERIOD", "."),
    ("GT", ">"),
    ("GREATER_THAN", ">"),
    ("FSLH", "/"),
    ("SLASH", "/"),
    ("QMARK", "?"),
    ("QUESTION", "?"),
    ("GRAVE", "`"),
    ("TILDE", "~"),
];

static SHIFT_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DEFAULT_SHIFTS.iter().copied().collect());

static CODE_TO_CHAR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| KEYCODE_CHARS.iter().copied().collect());

static CHAR_TO_CODE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for &(code, ch) in KEYCODE_CHARS {
        map.entry(ch).or_insert(code);
    }
    map
});

pub fn default_shifted(ch: &str) -> Option<&'static str> {
    SHIFT_MAP.get(ch).copied()
}

/// `"("` -> `"LPAR"`. Letters map to themselves upper-cased.
pub fn keycode_for_char(ch: &str) -> Option<String> {
    if let Some(code) = CHAR_TO_CODE.get(ch) {
        return Some(code.to_string());
    }
    let mut chars = ch.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase().to_string()),
        _ => None,
    }
}

/// `"LPAR"` -> `"("`. Single-letter codes come back as themselves.
pub fn char_for_keycode(code: &str) -> Option<String> {
    let code = normalize_keycode(code);
    if let Some(ch) = CODE_TO_CHAR.get(code.as_str()) {
        return Some(ch.to_string());
    }
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_string()),
        _ => None,
    }
}

/// Exact code lookup, aliases included: `"LPAR"` -> `"("`. Lower case does not match.
pub fn keycode_char(code: &str) -> Option<&'static str> {
    CODE_TO_CHAR.get(code).copied()
}

/// Strips a `&kp ` prefix and upper-cases.
fn normalize_keycode(code: &str) -> String {
    let code = code.trim();
    code.strip_prefix("&kp")
        .map(str::trim)
        .unwrap_or(code)
        .to_uppercase()
}

/// Folds aliases onto the canonical code for the same character: `NUMBER_1` -> `N1`.
fn canonical_keycode(code: &str) -> String {
    char_for_keycode(code)
        .and_then(|ch| keycode_for_char(&ch))
        .unwrap_or_else(|| normalize_keycode(code))
}

/// One mod-morph: the key sends `primary`, and `shifted` while shift is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRule {
    pub primary: String,
    pub shifted: String,
}

impl ShiftRule {
    pub fn new(primary: &str, shifted: &str) -> Self {
        Self {
            primary: canonical_keycode(primary),
            shifted: canonical_keycode(shifted),
        }
    }
}

/// Custom shift substitutions, keyed by rule name in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOverrides {
    rules: Vec<(String, ShiftRule)>,
}

impl ShiftOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an existing rule of the same name.
    pub fn insert(&mut self, name: impl Into<String>, rule: ShiftRule) {
        let name = name.into();
        match self.rules.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = rule,
            None => self.rules.push((name, rule)),
        }
    }

    pub fn with_rule(mut self, name: &str, primary: &str, shifted: &str) -> Self {
        self.insert(name, ShiftRule::new(primary, shifted));
        self
    }

    /// Reads `{ "name": { "primary": "LPAR", "shifted": "LT" }, ... }`.
    pub fn from_value(value: &Value) -> KlResult<Self> {
        let mapping = value.as_object().ok_or_else(|| {
            KeyLegendError::Validation("Shift overrides must be a mapping".to_string())
        })?;

        let mut overrides = Self::new();
        for (name, rule) in mapping {
            let code = |key: &str| {
                rule.get(key).and_then(Value::as_str).ok_or_else(|| {
                    KeyLegendError::Validation(format!(
                        "Shift override '{}' is missing '{}'",
                        name, key
                    ))
                })
            };
            overrides.insert(name.clone(), ShiftRule::new(code("primary")?, code("shifted")?));
        }
        Ok(overrides)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule(&self, name: &str) -> Option<&ShiftRule> {
        self.rules.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    /// Shifted key code for a primary key code.
    pub fn shifted_code(&self, primary: &str) -> Option<&str> {
        let primary = canonical_keycode(primary);
        self.rules
            .iter()
            .find(|(_, rule)| rule.primary == primary)
            .map(|(_, rule)| rule.shifted.as_str())
    }
}

/// Custom-rule shift variant of a display character; the default table is not consulted.
pub fn custom_shifted(ch: &str, overrides: &ShiftOverrides) -> Option<String> {
    keycode_for_char(ch)
        .and_then(|code| overrides.shifted_code(&code).map(display_for_code))
}

/// Custom-rule shift variant of a raw key code such as `LPAR`.
pub fn custom_keycode_shifted(code: &str, overrides: &ShiftOverrides) -> Option<String> {
    overrides.shifted_code(code).map(display_for_code)
}

/// Shift variant of an already-formatted character.
///
/// A matching custom rule wins over the default table even when both have an answer.
pub fn resolve_shifted(ch: &str, overrides: Option<&ShiftOverrides>) -> Option<String> {
    overrides
        .and_then(|o| custom_shifted(ch, o))
        .or_else(|| default_shifted(ch).map(String::from))
}

/// Shift variant starting from a raw key code such as `LPAR` or `&kp N1`.
pub fn resolve_keycode_shifted(code: &str, overrides: Option<&ShiftOverrides>) -> Option<String> {
    overrides
        .and_then(|o| custom_keycode_shifted(code, o))
        .or_else(|| char_for_keycode(code).and_then(|ch| default_shifted(&ch).map(String::from)))
}

fn display_for_code(code: &str) -> String {
    char_for_keycode(code).unwrap_or_else(|| code.to_string())
}
