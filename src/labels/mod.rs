//! Raw firmware token -> short display label.
//!
//! [`format_key_label`] is total: every input yields a label, unknown tokens degrade to a
//! readable fallback. Resolution walks [`STRATEGIES`] in order and the first hit wins.

pub mod behavior;
pub mod modifiers;
pub mod tables;

pub use behavior::{format_token, tokenize, BehaviorToken};
pub use modifiers::{format_modifier_combo, Modifier};
pub use tables::{table_group, TableGroup};

use keylegend_protocol::config::OsStyle;

/// One resolution step. Returns `None` to hand the token to the next step.
pub type Strategy = fn(&str, OsStyle) -> Option<String>;

pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("behavior", behavior::format_behavior),
    ("paren_modifier", modifiers::format_paren_combo),
    ("plus_modifier", modifiers::format_plus_combo),
    ("meh_hyper", modifiers::format_bare_compound),
    ("os_modifier", modifiers::format_single_modifier),
    ("exact_table", tables::lookup_exact),
    ("folded_table", tables::lookup_folded),
    ("keycode_char", tables::lookup_keycode_char),
];

pub fn format_key_label(token: &str, os: OsStyle) -> String {
    let token = token.trim();
    if token.is_empty() {
        return String::new();
    }
    STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(token, os))
        .unwrap_or_else(|| fallback(token))
}

/// Name of the strategy that claims `token`, or `"fallback"`.
pub fn resolving_strategy(token: &str, os: OsStyle) -> &'static str {
    STRATEGIES
        .iter()
        .find(|(_, strategy)| strategy(token.trim(), os).is_some())
        .map(|(name, _)| *name)
        .unwrap_or("fallback")
}

fn fallback(token: &str) -> String {
    if is_shouting(token) {
        title_case(token)
    } else {
        token.to_string()
    }
}

/// More than one char, at least one letter, and no lower-case letters.
fn is_shouting(token: &str) -> bool {
    token.chars().count() > 1
        && token.chars().any(char::is_alphabetic)
        && !token.chars().any(char::is_lowercase)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut in_word = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_runs() {
        assert_eq!(title_case("BT_SEL"), "Bt_Sel");
        assert_eq!(title_case("F12"), "F12");
        assert_eq!(title_case("MB4X"), "Mb4X");
    }

    #[test]
    fn test_shouting_detection() {
        assert!(is_shouting("KP_PLUS"));
        assert!(!is_shouting("A"));
        assert!(!is_shouting("Vol"));
        assert!(!is_shouting("12"));
    }
}
