use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Number of physical keys on the target device.
pub const KEY_COUNT: usize = 80;

/// Tap tokens meaning "inherit the key below".
pub const TRANS_MARKERS: [&str; 3] = ["&trans", "▽", "trans"];

/// Tap tokens meaning "this key does nothing".
pub const NONE_MARKERS: [&str; 2] = ["&none", "none"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyBinding {
    pub position: u32,
    #[serde(default)]
    pub tap: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifted: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
}

impl KeyBinding {
    pub fn new(position: u32, tap: impl Into<String>) -> Self {
        Self {
            position,
            tap: tap.into(),
            ..Default::default()
        }
    }

    pub fn with_hold(mut self, hold: impl Into<String>) -> Self {
        self.hold = Some(hold.into());
        self
    }

    pub fn with_shifted(mut self, shifted: impl Into<String>) -> Self {
        self.shifted = Some(shifted.into());
        self
    }

    pub fn with_type(mut self, key_type: impl Into<String>) -> Self {
        self.key_type = Some(key_type.into());
        self
    }

    pub fn is_transparent(&self) -> bool {
        if self.key_type.as_deref() == Some("trans") {
            return true;
        }
        TRANS_MARKERS
            .iter()
            .any(|m| self.tap.eq_ignore_ascii_case(m))
    }

    pub fn is_none(&self) -> bool {
        self.tap.is_empty() || NONE_MARKERS.iter().any(|m| self.tap.eq_ignore_ascii_case(m))
    }

    /// Hold token, with the stringified `"None"` some dumps emit treated as absent.
    pub fn hold_text(&self) -> Option<&str> {
        self.hold
            .as_deref()
            .filter(|h| !h.is_empty() && *h != "None")
    }

    /// Explicit shift override, same absent rules as [`KeyBinding::hold_text`].
    pub fn shifted_text(&self) -> Option<&str> {
        self.shifted
            .as_deref()
            .filter(|s| !s.is_empty() && *s != "None")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub index: usize,
    pub bindings: Vec<KeyBinding>,
}

impl Layer {
    pub fn new(name: impl Into<String>, index: usize, bindings: Vec<KeyBinding>) -> Self {
        Self {
            name: name.into(),
            index,
            bindings,
        }
    }

    /// A complete layer assigns every physical key.
    pub fn is_complete(&self) -> bool {
        self.bindings.len() == KEY_COUNT
    }

    pub fn position_map(&self) -> HashMap<u32, &KeyBinding> {
        self.bindings.iter().map(|b| (b.position, b)).collect()
    }

    pub fn binding_at(&self, position: u32) -> Option<&KeyBinding> {
        self.bindings.iter().find(|b| b.position == position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerActivator {
    pub source_layer_name: String,
    pub source_position: u32,
    pub target_layer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    pub name: String,
    pub positions: BTreeSet<u32>,
    pub action: String,
    /// `None` means active on every layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<BTreeSet<String>>,
}

impl Combo {
    pub fn new(
        name: impl Into<String>,
        positions: impl IntoIterator<Item = u32>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            positions: positions.into_iter().collect(),
            action: action.into(),
            layers: None,
        }
    }

    pub fn on_layers<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layers = Some(layers.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_active_on(&self, layer_name: &str) -> bool {
        match &self.layers {
            None => true,
            Some(layers) => layers.contains(layer_name),
        }
    }
}

/// Layers plus the combos that ride along with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub combos: Vec<Combo>,
}

impl Keymap {
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn layer_names(&self) -> BTreeSet<String> {
        self.layers.iter().map(|l| l.name.clone()).collect()
    }
}
