use crate::labels::{resolving_strategy, table_group, tokenize, BehaviorToken, TableGroup};
use crate::model::KeyBinding;
use crate::shifted::char_for_keycode;
use keylegend_protocol::config::OsStyle;
use keylegend_protocol::content::KeyCategory;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static FUNCTION_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[Ff]([1-9]|1[0-9]|2[0-4])$").unwrap());

/// Colour family for a live (not transparent, not blocked) binding.
///
/// Alpha keys and anything unrecognised get no category.
pub fn classify(binding: &KeyBinding, layer_names: &BTreeSet<String>) -> Option<KeyCategory> {
    if binding
        .hold_text()
        .is_some_and(|hold| names_layer(hold, layer_names))
    {
        return Some(KeyCategory::Layer);
    }
    classify_token(binding.tap.trim(), layer_names)
}

fn names_layer(token: &str, layer_names: &BTreeSet<String>) -> bool {
    layer_names.contains(token) || table_group(token) == Some(TableGroup::LayerIcon)
}

fn classify_token(token: &str, layer_names: &BTreeSet<String>) -> Option<KeyCategory> {
    if names_layer(token, layer_names) {
        return Some(KeyCategory::Layer);
    }
    if let Some(behavior) = tokenize(token) {
        return classify_behavior(&behavior, layer_names);
    }

    match resolving_strategy(token, OsStyle::Mac) {
        "paren_modifier" | "plus_modifier" | "meh_hyper" | "os_modifier" => {
            return Some(KeyCategory::Modifier)
        }
        _ => {}
    }

    match table_group(token) {
        Some(TableGroup::Arrow | TableGroup::Navigation) => return Some(KeyCategory::Navigation),
        Some(TableGroup::Media) => return Some(KeyCategory::Media),
        Some(TableGroup::LayerIcon) => return Some(KeyCategory::Layer),
        Some(TableGroup::Editing) | None => {}
    }

    if FUNCTION_KEY.is_match(token) {
        return Some(KeyCategory::Number);
    }

    let ch = char_for_keycode(token).unwrap_or_else(|| token.to_string());
    let mut chars = ch.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(KeyCategory::Number),
        (Some(c), None) if c.is_ascii_punctuation() => Some(KeyCategory::Symbol),
        _ => None,
    }
}

fn classify_behavior(
    behavior: &BehaviorToken<'_>,
    layer_names: &BTreeSet<String>,
) -> Option<KeyCategory> {
    match behavior {
        BehaviorToken::MouseScroll(_) | BehaviorToken::MouseMove(_) | BehaviorToken::MouseClick(_) => {
            Some(KeyCategory::Mouse)
        }
        BehaviorToken::Bluetooth(_) | BehaviorToken::Output(_) => Some(KeyCategory::System),
        BehaviorToken::FingerHold(_) => Some(KeyCategory::Modifier),
        BehaviorToken::FingerTap(args) => classify_token(&args.join(" "), layer_names),
        BehaviorToken::Generic { name, args } => match *name {
            "mo" | "lt" | "to" | "tog" | "sl" => Some(KeyCategory::Layer),
            "sk" => Some(KeyCategory::Modifier),
            n if n.starts_with("sticky_key") => Some(KeyCategory::Modifier),
            "bootloader" | "sys_reset" | "reset" | "studio_unlock" | "ext_power" => {
                Some(KeyCategory::System)
            }
            n if n.starts_with("rgb_") => Some(KeyCategory::System),
            n if n.starts_with("mouse_") => Some(KeyCategory::Mouse),
            "kp" | "kt" | "mt" => args
                .last()
                .and_then(|inner| classify_token(inner, layer_names)),
            _ => None,
        },
        _ => None,
    }
}
