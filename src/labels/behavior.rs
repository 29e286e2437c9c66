//! Behavior references (`&name arg ...`).
//!
//! A token is classified once by [`tokenize`] into a [`BehaviorToken`], then formatted by the
//! matching arm of [`format_token`].

use super::format_key_label;
use super::modifiers::Modifier;
use super::tables::{self, EMOJI_PLACEHOLDER, WORLD_PLACEHOLDER};
use crate::consts::{ELLIPSIS, MAX_BEHAVIOR_LABEL};
use keylegend_protocol::config::OsStyle;
use regex::Regex;
use std::sync::LazyLock;

static EMOJI_MACRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^emoji_(.+)_macro$").unwrap());
static EMOJI_PRESET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^emoji_(.+)_preset$").unwrap());
static WORLD_MACRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^world_(.+)_macro$").unwrap());
static FINGER_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:left|right)_(?:pinky|ringy|middy|index)_(tap|hold)$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BehaviorToken<'a> {
    Emoji(&'a str),
    EmojiPreset(&'a str),
    /// `emoji_*` names that are neither macros nor presets.
    EmojiOther,
    /// Name inside `world_<name>_macro`, empty when the token is malformed.
    World(&'a str),
    MouseScroll(Option<&'a str>),
    MouseMove(Option<&'a str>),
    MouseClick(Option<&'a str>),
    Bluetooth(Vec<&'a str>),
    Output(Option<&'a str>),
    Select(&'a str),
    Extend(&'a str),
    /// Wrapped tap arguments; never empty.
    FingerTap(Vec<&'a str>),
    FingerHold(&'a str),
    Generic { name: &'a str, args: Vec<&'a str> },
}

/// Splits `&name arg ...`; returns `None` for anything that is not a behavior reference.
pub fn tokenize(token: &str) -> Option<BehaviorToken<'_>> {
    let body = token.strip_prefix('&')?;
    let mut words = body.split_whitespace();
    let name = words.next()?;
    let args: Vec<&str> = words.collect();
    let first = args.first().copied();

    if let Some(caps) = EMOJI_MACRO.captures(name) {
        return Some(BehaviorToken::Emoji(caps.get(1)?.as_str()));
    }
    if let Some(caps) = EMOJI_PRESET.captures(name) {
        return Some(BehaviorToken::EmojiPreset(caps.get(1)?.as_str()));
    }
    if name.starts_with("emoji_") {
        return Some(BehaviorToken::EmojiOther);
    }
    if let Some(caps) = WORLD_MACRO.captures(name) {
        return Some(BehaviorToken::World(caps.get(1)?.as_str()));
    }
    if name.starts_with("world_") {
        return Some(BehaviorToken::World(""));
    }

    let kind = match name {
        "msc" => BehaviorToken::MouseScroll(first),
        "mmv" => BehaviorToken::MouseMove(first),
        "mkp" => BehaviorToken::MouseClick(first),
        "bt" => BehaviorToken::Bluetooth(args),
        "out" => BehaviorToken::Output(first),
        _ => {
            if let Some(op) = name.strip_prefix("select_") {
                BehaviorToken::Select(op)
            } else if let Some(op) = name.strip_prefix("extend_") {
                BehaviorToken::Extend(op)
            } else if let (Some(caps), Some(arg)) = (FINGER_WRAPPER.captures(name), first) {
                match caps.get(1).map(|m| m.as_str()) {
                    Some("hold") => BehaviorToken::FingerHold(arg),
                    _ => BehaviorToken::FingerTap(args),
                }
            } else {
                BehaviorToken::Generic { name, args }
            }
        }
    };
    Some(kind)
}

pub(crate) fn format_behavior(token: &str, os: OsStyle) -> Option<String> {
    tokenize(token).map(|t| format_token(&t, os))
}

pub fn format_token(token: &BehaviorToken<'_>, os: OsStyle) -> String {
    match token {
        BehaviorToken::Emoji(name) => tables::emoji(name).unwrap_or(EMOJI_PLACEHOLDER).into(),
        BehaviorToken::EmojiPreset(name) => {
            tables::emoji_preset(name).unwrap_or(EMOJI_PLACEHOLDER).into()
        }
        BehaviorToken::EmojiOther => EMOJI_PLACEHOLDER.into(),
        BehaviorToken::World(name) => tables::world(name).unwrap_or(WORLD_PLACEHOLDER).into(),
        BehaviorToken::MouseScroll(dir) => mouse_scroll(*dir).into(),
        BehaviorToken::MouseMove(dir) => mouse_move(*dir).into(),
        BehaviorToken::MouseClick(button) => mouse_click(*button).into(),
        BehaviorToken::Bluetooth(args) => bluetooth(args),
        BehaviorToken::Output(arg) => output(*arg).into(),
        BehaviorToken::Select(op) => text_op("Sel", op),
        BehaviorToken::Extend(op) => text_op("Ext", op),
        BehaviorToken::FingerTap(args) => format_key_label(&args.join(" "), os),
        BehaviorToken::FingerHold(code) => match Modifier::from_keycode(code) {
            Some(m) => m.symbol(os).to_string(),
            None => format_key_label(code, os),
        },
        BehaviorToken::Generic { name, args } => generic(name, args, os),
    }
}

fn mouse_scroll(dir: Option<&str>) -> &'static str {
    match dir.map(str::to_uppercase).as_deref() {
        Some("SCRL_UP") => "Scr↑",
        Some("SCRL_DOWN") => "Scr↓",
        Some("SCRL_LEFT") => "Scr←",
        Some("SCRL_RIGHT") => "Scr→",
        _ => "⊘",
    }
}

fn mouse_move(dir: Option<&str>) -> &'static str {
    match dir.map(str::to_uppercase).as_deref() {
        Some("MOVE_UP") => "🖱↑",
        Some("MOVE_DOWN") => "🖱↓",
        Some("MOVE_LEFT") => "🖱←",
        Some("MOVE_RIGHT") => "🖱→",
        _ => "🖱",
    }
}

fn mouse_click(button: Option<&str>) -> &'static str {
    match button.map(str::to_uppercase).as_deref() {
        Some("LCLK" | "MB1") => "🖱L",
        Some("RCLK" | "MB2") => "🖱R",
        Some("MCLK" | "MB3") => "🖱M",
        Some("MB4") => "🖱◀",
        Some("MB5") => "🖱▶",
        _ => "🖱",
    }
}

fn bluetooth(args: &[&str]) -> String {
    match args {
        ["BT_SEL", n, ..] => format!("BT{}", n),
        ["BT_DISC", n, ..] => format!("BT{}✕", n),
        ["BT_CLR_ALL", ..] => "BTClrA".into(),
        ["BT_CLR", ..] => "BTClr".into(),
        ["BT_NXT", ..] => "BT→".into(),
        ["BT_PRV", ..] => "BT←".into(),
        _ => "BT".into(),
    }
}

fn output(arg: Option<&str>) -> &'static str {
    match arg {
        Some("OUT_USB") => "USB",
        Some("OUT_BLE") => "BLE",
        _ => "Out",
    }
}

/// `select_*` / `extend_*` text-object operations.
fn text_op(verb: &str, op: &str) -> String {
    let suffix = match op {
        "word_right" => "W→",
        "word_left" => "W←",
        "line_right" => "L→",
        "line_left" => "L←",
        "word" => "W",
        "line" => "L",
        "all" => "All",
        "none" if verb == "Sel" => return "Desel".into(),
        _ => "",
    };
    format!("{}{}", verb, suffix)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgUse {
    /// Append the formatted last argument.
    Append,
    Drop,
}

// An empty abbreviation means "show only the argument".
const EXACT_ABBREVIATIONS: &[(&str, &str, ArgUse)] = &[
    ("kp", "", ArgUse::Append),
    ("kt", "", ArgUse::Append),
    ("lt", "", ArgUse::Append),
    ("mt", "", ArgUse::Append),
    ("mo", "", ArgUse::Append),
    ("to", "", ArgUse::Append),
    ("tog", "", ArgUse::Append),
    ("sl", "", ArgUse::Append),
    ("sk", "●", ArgUse::Append),
    ("sticky_key", "●", ArgUse::Append),
    ("caps_word", "⇪W", ArgUse::Drop),
    ("num_word", "#W", ArgUse::Drop),
    ("key_repeat", "Rep", ArgUse::Drop),
    ("rgb_ug", "RGB", ArgUse::Drop),
    ("bootloader", "Boot", ArgUse::Drop),
    ("sys_reset", "Reset", ArgUse::Drop),
    ("reset", "Reset", ArgUse::Drop),
    ("studio_unlock", "Unlk", ArgUse::Drop),
    ("ext_power", "Pwr", ArgUse::Drop),
    ("magic", "✨", ArgUse::Drop),
];

const PREFIX_ABBREVIATIONS: &[(&str, &str, ArgUse)] = &[
    ("sticky_key", "●", ArgUse::Append),
    ("sk_", "●", ArgUse::Append),
    ("rgb_", "RGB", ArgUse::Drop),
    ("mouse_", "🖱", ArgUse::Drop),
    ("caps_", "⇪", ArgUse::Drop),
    ("magic", "✨", ArgUse::Drop),
];

fn generic(name: &str, args: &[&str], os: OsStyle) -> String {
    let entry = EXACT_ABBREVIATIONS
        .iter()
        .find(|(n, _, _)| *n == name)
        .or_else(|| {
            PREFIX_ABBREVIATIONS
                .iter()
                .find(|(prefix, _, _)| name.starts_with(prefix))
        });

    match entry {
        Some((_, abbrev, ArgUse::Append)) => match args.last() {
            Some(arg) => format!("{}{}", abbrev, format_key_label(arg, os)),
            None if abbrev.is_empty() => name.to_string(),
            None => abbrev.to_string(),
        },
        Some((_, abbrev, ArgUse::Drop)) => abbrev.to_string(),
        None => truncate(name),
    }
}

fn truncate(name: &str) -> String {
    if name.chars().count() <= MAX_BEHAVIOR_LABEL {
        return name.to_string();
    }
    let mut cut: String = name.chars().take(MAX_BEHAVIOR_LABEL).collect();
    cut.push(ELLIPSIS);
    cut
}
