use super::format_key_label;
use keylegend_protocol::config::OsStyle;
use regex::Regex;
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Gui,
}

pub const MEH: &[Modifier] = &[Modifier::Ctrl, Modifier::Alt, Modifier::Shift];
pub const HYPER: &[Modifier] = &[Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Gui];

impl Modifier {
    pub fn symbol(self, os: OsStyle) -> &'static str {
        match (self, os) {
            (Modifier::Shift, OsStyle::Mac) => "⇧",
            (Modifier::Ctrl, OsStyle::Mac) => "⌃",
            (Modifier::Alt, OsStyle::Mac) => "⌥",
            (Modifier::Gui, OsStyle::Mac) => "⌘",
            (Modifier::Shift, _) => "Shift",
            (Modifier::Ctrl, _) => "Ctrl",
            (Modifier::Alt, _) => "Alt",
            (Modifier::Gui, OsStyle::Windows) => "Win",
            (Modifier::Gui, OsStyle::Linux) => "Super",
        }
    }

    /// Firmware key code (`LSHFT`, `RCTRL`, `LGUI`, ...) to modifier.
    pub fn from_keycode(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "LSHIFT" | "RSHIFT" | "LSHFT" | "RSHFT" | "LSFT" | "RSFT" | "SHIFT" => {
                Some(Modifier::Shift)
            }
            "LCTRL" | "RCTRL" | "LCTL" | "RCTL" | "CTRL" => Some(Modifier::Ctrl),
            "LALT" | "RALT" | "ALT" => Some(Modifier::Alt),
            "LGUI" | "RGUI" | "LCMD" | "RCMD" | "LWIN" | "RWIN" | "LMETA" | "RMETA" | "GUI" => {
                Some(Modifier::Gui)
            }
            _ => None,
        }
    }

    /// Two-letter wrapper code as used in `LS(...)`.
    fn from_wrapper(code: &str) -> Option<Self> {
        match code {
            "LS" | "RS" => Some(Modifier::Shift),
            "LC" | "RC" => Some(Modifier::Ctrl),
            "LA" | "RA" => Some(Modifier::Alt),
            "LG" | "RG" => Some(Modifier::Gui),
            _ => None,
        }
    }
}

/// Modifier names as people write them in `Mod+Key` labels.
fn combo_modifiers(name: &str) -> Option<&'static [Modifier]> {
    match name.to_lowercase().as_str() {
        "meh" => Some(MEH),
        "hyper" | "hypr" => Some(HYPER),
        "shift" | "sft" | "shft" | "lshift" | "rshift" | "lsft" | "rsft" => {
            Some(&[Modifier::Shift])
        }
        "ctrl" | "ctl" | "control" | "lctrl" | "rctrl" | "lctl" | "rctl" => {
            Some(&[Modifier::Ctrl])
        }
        "alt" | "opt" | "option" | "lalt" | "ralt" => Some(&[Modifier::Alt]),
        "gui" | "cmd" | "command" | "win" | "super" | "meta" | "lgui" | "rgui" => {
            Some(&[Modifier::Gui])
        }
        _ => None,
    }
}

fn prefix(mods: &[Modifier], os: OsStyle) -> String {
    mods.iter().map(|m| m.symbol(os)).collect()
}

static PAREN_COMBO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(MEH|HYPER|[LR][SCAG])\((.+)\)$").unwrap());

/// `LS(LEFT)`, `MEH(K)`, `LC(LS(T))`.
pub(crate) fn format_paren_combo(token: &str, os: OsStyle) -> Option<String> {
    let caps = PAREN_COMBO.captures(token)?;
    let (code, inner) = (caps.get(1)?.as_str(), caps.get(2)?.as_str());
    let wrapped;
    let mods: &[Modifier] = match code {
        "MEH" => MEH,
        "HYPER" => HYPER,
        other => {
            wrapped = Modifier::from_wrapper(other)?;
            std::slice::from_ref(&wrapped)
        }
    };
    Some(format!("{}{}", prefix(mods, os), format_key_label(inner, os)))
}

/// `Gui+Sft+Z`. Unknown modifier names shrink to their first three chars.
pub(crate) fn format_plus_combo(token: &str, os: OsStyle) -> Option<String> {
    let parts: Vec<&str> = token.split('+').map(str::trim).collect();
    if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    let (key, mods) = parts.split_last()?;

    let mut label = String::new();
    for name in mods {
        match combo_modifiers(name) {
            Some(ms) => label.push_str(&prefix(ms, os)),
            None => label.extend(name.chars().take(3)),
        }
    }
    label.push_str(&format_key_label(key, os));
    Some(label)
}

/// Bare `MEH` / `HYPER`.
pub(crate) fn format_bare_compound(token: &str, os: OsStyle) -> Option<String> {
    let (mods, word) = match token.to_lowercase().as_str() {
        "meh" => (MEH, "Meh"),
        "hyper" => (HYPER, "Hypr"),
        _ => return None,
    };
    Some(match os {
        OsStyle::Mac => prefix(mods, os),
        _ => word.to_string(),
    })
}

pub(crate) fn format_single_modifier(token: &str, os: OsStyle) -> Option<String> {
    Modifier::from_keycode(token).map(|m| m.symbol(os).to_string())
}

/// Formats a `Mod+Key` label; tokens without a join character come back unchanged.
pub fn format_modifier_combo(token: &str, os: OsStyle) -> String {
    if !token.contains('+') {
        return token.to_string();
    }
    format_plus_combo(token, os).unwrap_or_else(|| token.to_string())
}
