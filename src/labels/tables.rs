//! Static glyph tables, loaded once into read-only maps.

use crate::shifted::keycode_char;
use keylegend_protocol::config::OsStyle;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Which family a direct-table entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableGroup {
    Arrow,
    Navigation,
    Editing,
    Media,
    LayerIcon,
}

// Layer names collide with ordinary words once case is folded, so they only match verbatim.
const LAYER_ICONS: &[(&str, &str)] = &[
    ("Emoji", "😀"),
    ("World", "🌐"),
    ("Mouse", "🖱"),
    ("Symbol", "※"),
    ("Number", "#"),
    ("Function", "Fn"),
    ("Cursor", "↔"),
    ("System", "⚙"),
    ("Gaming", "🎮"),
    ("Magic", "✨"),
    ("Typing", "⌨"),
    ("MouseSlow", "🐢"),
    ("MouseFast", "🐇"),
    ("MouseWarp", "🖱⇶"),
];

// Keys are upper-case; lookups fold the token before probing.
const FOLDED: &[(&str, &str, TableGroup)] = &[
    // Arrows
    ("LEFT", "←", TableGroup::Arrow),
    ("RIGHT", "→", TableGroup::Arrow),
    ("UP", "↑", TableGroup::Arrow),
    ("DOWN", "↓", TableGroup::Arrow),
    ("LEFT_ARROW", "←", TableGroup::Arrow),
    ("RIGHT_ARROW", "→", TableGroup::Arrow),
    ("UP_ARROW", "↑", TableGroup::Arrow),
    ("DOWN_ARROW", "↓", TableGroup::Arrow),
    ("WORD_LEFT", "⇐", TableGroup::Arrow),
    ("WORD_RIGHT", "⇒", TableGroup::Arrow),
    // Navigation
    ("HOME", "⇱", TableGroup::Navigation),
    ("END", "⇲", TableGroup::Navigation),
    ("PG_UP", "⇞", TableGroup::Navigation),
    ("PAGE_UP", "⇞", TableGroup::Navigation),
    ("PGUP", "⇞", TableGroup::Navigation),
    ("PG_DN", "⇟", TableGroup::Navigation),
    ("PAGE_DOWN", "⇟", TableGroup::Navigation),
    ("PGDN", "⇟", TableGroup::Navigation),
    // Editing
    ("SPACE", "␣", TableGroup::Editing),
    ("SPC", "␣", TableGroup::Editing),
    ("ENTER", "↵", TableGroup::Editing),
    ("RET", "↵", TableGroup::Editing),
    ("RETURN", "↵", TableGroup::Editing),
    ("TAB", "⇥", TableGroup::Editing),
    ("BACKSPACE", "⌫", TableGroup::Editing),
    ("BSPC", "⌫", TableGroup::Editing),
    ("DELETE", "⌦", TableGroup::Editing),
    ("DEL", "⌦", TableGroup::Editing),
    ("INSERT", "Ins", TableGroup::Editing),
    ("INS", "Ins", TableGroup::Editing),
    ("ESC", "Esc", TableGroup::Editing),
    ("ESCAPE", "Esc", TableGroup::Editing),
    ("CAPSLOCK", "⇪", TableGroup::Editing),
    ("CAPS", "⇪", TableGroup::Editing),
    ("CLCK", "⇪", TableGroup::Editing),
    ("NUMLOCK", "NumLk", TableGroup::Editing),
    ("KP_NUM", "NumLk", TableGroup::Editing),
    ("SCROLLLOCK", "ScrLk", TableGroup::Editing),
    ("SLCK", "ScrLk", TableGroup::Editing),
    ("PRINTSCREEN", "PrtSc", TableGroup::Editing),
    ("PSCRN", "PrtSc", TableGroup::Editing),
    ("PAUSE_BREAK", "Pause", TableGroup::Editing),
    ("K_APP", "☰", TableGroup::Editing),
    ("K_CMENU", "☰", TableGroup::Editing),
    // Media: firmware codes and the text labels upstream tools substitute for them.
    ("C_PP", "⏯", TableGroup::Media),
    ("C_PLAY_PAUSE", "⏯", TableGroup::Media),
    ("PP", "⏯", TableGroup::Media),
    ("PLAY_PAUSE", "⏯", TableGroup::Media),
    ("C_PLAY", "▶", TableGroup::Media),
    ("PLAY", "▶", TableGroup::Media),
    ("C_PAUSE", "⏸", TableGroup::Media),
    ("PAUSE", "⏸", TableGroup::Media),
    ("C_STOP", "⏹", TableGroup::Media),
    ("STOP", "⏹", TableGroup::Media),
    ("C_NEXT", "⏭", TableGroup::Media),
    ("NEXT", "⏭", TableGroup::Media),
    ("C_PREV", "⏮", TableGroup::Media),
    ("PREV", "⏮", TableGroup::Media),
    ("PREVIOUS", "⏮", TableGroup::Media),
    ("C_VOL_UP", "🔊", TableGroup::Media),
    ("C_VOLUME_UP", "🔊", TableGroup::Media),
    ("VOL UP", "🔊", TableGroup::Media),
    ("VOLUME UP", "🔊", TableGroup::Media),
    ("C_VOL_DN", "🔉", TableGroup::Media),
    ("C_VOLUME_DOWN", "🔉", TableGroup::Media),
    ("VOL DN", "🔉", TableGroup::Media),
    ("VOL DOWN", "🔉", TableGroup::Media),
    ("VOLUME DOWN", "🔉", TableGroup::Media),
    ("C_MUTE", "🔇", TableGroup::Media),
    ("MUTE", "🔇", TableGroup::Media),
    ("C_BRI_UP", "🔆", TableGroup::Media),
    ("C_BRIGHTNESS_UP", "🔆", TableGroup::Media),
    ("C_BRIGHTNESS_INC", "🔆", TableGroup::Media),
    ("BRI UP", "🔆", TableGroup::Media),
    ("BRIGHTNESS UP", "🔆", TableGroup::Media),
    ("C_BRI_DN", "🔅", TableGroup::Media),
    ("C_BRIGHTNESS_DOWN", "🔅", TableGroup::Media),
    ("C_BRIGHTNESS_DEC", "🔅", TableGroup::Media),
    ("BRI DN", "🔅", TableGroup::Media),
    ("BRI DOWN", "🔅", TableGroup::Media),
    ("BRIGHTNESS DOWN", "🔅", TableGroup::Media),
    ("C_BRI_MAX", "☀", TableGroup::Media),
    ("BRI MAX", "☀", TableGroup::Media),
    ("C_BRI_MIN", "🌑", TableGroup::Media),
    ("BRI MIN", "🌑", TableGroup::Media),
    ("C_BRI_AUTO", "🔆A", TableGroup::Media),
    ("BRI AUTO", "🔆A", TableGroup::Media),
    ("C_FF", "⏩", TableGroup::Media),
    ("FF", "⏩", TableGroup::Media),
    ("FAST FORWARD", "⏩", TableGroup::Media),
    ("C_RW", "⏪", TableGroup::Media),
    ("RW", "⏪", TableGroup::Media),
    ("REWIND", "⏪", TableGroup::Media),
    ("C_EJECT", "⏏", TableGroup::Media),
    ("EJECT", "⏏", TableGroup::Media),
    ("C_REC", "⏺", TableGroup::Media),
    ("REC", "⏺", TableGroup::Media),
    ("RECORD", "⏺", TableGroup::Media),
];

const EMOJI: &[(&str, &str)] = &[
    ("heart", "❤"),
    ("fire", "🔥"),
    ("thumbs_up", "👍"),
    ("thumbs_down", "👎"),
    ("tada", "🎉"),
    ("sunny", "☀"),
    ("cloudy", "☁"),
    ("rainbow", "🌈"),
    ("muscle", "💪"),
    ("rocket", "🚀"),
    ("full_moon", "🌕"),
    ("new_moon", "🌑"),
    ("snap_fingers", "🫰"),
    ("disappointed", "😞"),
    ("shocked_face", "😲"),
    ("face_joke_wink", "😜"),
    ("face_fear_scared", "😨"),
    ("face_smile", "😄"),
    ("face_joy", "😂"),
    ("face_thinking", "🤔"),
    ("face_sob", "😭"),
    ("eyes", "👀"),
    ("clap", "👏"),
    ("pray", "🙏"),
    ("ok_hand", "👌"),
    ("wave", "👋"),
    ("check_mark", "✅"),
    ("cross_mark", "❌"),
    ("star", "⭐"),
    ("sparkles", "✨"),
    ("hundred", "💯"),
    ("skull", "💀"),
    ("male_sign", "♂"),
    ("female_sign", "♀"),
    ("zwj", "ZWJ"),
];

const EMOJI_PRESETS: &[(&str, &str)] = &[
    ("skin_tone", "🏻"),
    ("gender_sign", "⚥"),
    ("hair_style", "🦰"),
];

const WORLD: &[(&str, &str)] = &[
    ("degree_sign", "°"),
    ("a_acute_lower", "á"),
    ("a_acute_upper", "Á"),
    ("e_acute_lower", "é"),
    ("e_acute_upper", "É"),
    ("i_acute_lower", "í"),
    ("i_acute_upper", "Í"),
    ("o_acute_lower", "ó"),
    ("o_acute_upper", "Ó"),
    ("u_acute_lower", "ú"),
    ("u_acute_upper", "Ú"),
    ("a_grave_lower", "à"),
    ("e_grave_lower", "è"),
    ("a_diaeresis_lower", "ä"),
    ("o_diaeresis_lower", "ö"),
    ("u_diaeresis_lower", "ü"),
    ("consonants_cedilla_lower", "ç"),
    ("consonants_cedilla_upper", "Ç"),
    ("consonants_ntilde_lower", "ñ"),
    ("consonants_ntilde_upper", "Ñ"),
    ("consonants_eszett_lower", "ß"),
    ("sign_copyright_regular", "©"),
    ("sign_registered_regular", "®"),
    ("sign_trademark_regular", "™"),
    ("sign_section", "§"),
    ("sign_paragraph", "¶"),
    ("currency_euro", "€"),
    ("currency_pound", "£"),
    ("currency_yen", "¥"),
    ("punctuation_inverted_question", "¿"),
    ("punctuation_inverted_exclamation", "¡"),
];

pub const EMOJI_PLACEHOLDER: &str = "😀";
pub const WORLD_PLACEHOLDER: &str = "?";

fn to_map(entries: &'static [(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    entries.iter().copied().collect()
}

static LAYER_ICON_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| to_map(LAYER_ICONS));
static FOLDED_MAP: LazyLock<HashMap<&'static str, (&'static str, TableGroup)>> =
    LazyLock::new(|| FOLDED.iter().map(|&(k, v, g)| (k, (v, g))).collect());
static EMOJI_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| to_map(EMOJI));
static EMOJI_PRESET_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| to_map(EMOJI_PRESETS));
static WORLD_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| to_map(WORLD));

pub fn layer_icon(name: &str) -> Option<&'static str> {
    LAYER_ICON_MAP.get(name).copied()
}

pub fn folded_entry(token: &str) -> Option<(&'static str, TableGroup)> {
    FOLDED_MAP.get(token.to_uppercase().as_str()).copied()
}

pub fn emoji(name: &str) -> Option<&'static str> {
    EMOJI_MAP.get(name).copied()
}

pub fn emoji_preset(name: &str) -> Option<&'static str> {
    EMOJI_PRESET_MAP.get(name).copied()
}

pub fn world(name: &str) -> Option<&'static str> {
    WORLD_MAP.get(name).copied()
}

/// Classifies a raw token against the direct tables.
pub fn table_group(token: &str) -> Option<TableGroup> {
    if layer_icon(token).is_some() {
        return Some(TableGroup::LayerIcon);
    }
    folded_entry(token).map(|(_, group)| group)
}

// --- strategy adapters ---

pub(crate) fn lookup_exact(token: &str, _os: OsStyle) -> Option<String> {
    layer_icon(token).map(String::from)
}

pub(crate) fn lookup_folded(token: &str, _os: OsStyle) -> Option<String> {
    folded_entry(token).map(|(glyph, _)| glyph.to_string())
}

/// Punctuation and digit key codes (`LPAR`, `N1`) shown as the character they type.
pub(crate) fn lookup_keycode_char(token: &str, _os: OsStyle) -> Option<String> {
    keycode_char(token).map(String::from)
}
