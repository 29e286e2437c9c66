use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How a renderer should lay text out inside a key cap.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Alignment {
    /// Single label, centered.
    #[default]
    Centered,
    /// Shifted char above the tap char, weighted to the top-left.
    ShiftedPair,
    /// Tap centered, hold along the bottom edge.
    TapHold,
    /// Full 12-position legend grid.
    Grid,
}

impl Alignment {
    /// Equivalent keyboard-layout-editor `a` flag.
    pub fn kle_flags(self) -> u8 {
        match self {
            Alignment::Centered => 7,
            Alignment::ShiftedPair => 5,
            Alignment::TapHold => 7,
            Alignment::Grid => 0,
        }
    }
}

/// Discrete text size steps, largest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SizeHint {
    #[default]
    Large,
    Medium,
    Small,
    Tiny,
}

impl SizeHint {
    pub fn font_size(self) -> u8 {
        match self {
            SizeHint::Large => 5,
            SizeHint::Medium => 4,
            SizeHint::Small => 3,
            SizeHint::Tiny => 2,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KeyCategory {
    Modifier,
    Layer,
    Navigation,
    Symbol,
    Number,
    Media,
    Mouse,
    System,
    Trans,
    Held,
}

impl KeyCategory {
    pub fn default_color(self) -> &'static str {
        match self {
            KeyCategory::Modifier => "#7fbbb3",
            KeyCategory::Layer => "#d699b6",
            KeyCategory::Navigation => "#83c092",
            KeyCategory::Symbol => "#e69875",
            KeyCategory::Number => "#dbbc7f",
            KeyCategory::Media => "#a7c080",
            KeyCategory::Mouse => "#9da9a0",
            KeyCategory::System => "#e67e80",
            KeyCategory::Trans => "#d3c6aa",
            KeyCategory::Held => "#fff3bf",
        }
    }
}

/// Neutral per-key legend handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyContent {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifted: Option<String>,
    pub alignment: Alignment,
    pub size: SizeHint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<KeyCategory>,
}

impl KeyContent {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_none() && self.shifted.is_none()
    }

    /// Legend in the newline-separated KLE label convention.
    pub fn kle_label(&self) -> String {
        match (&self.shifted, &self.secondary) {
            (Some(s), Some(h)) => format!("{}\n{}\n\n\n{}", s, self.primary, h),
            (Some(s), None) => format!("{}\n{}", s, self.primary),
            (None, Some(h)) => format!("{}\n\n\n\n{}", self.primary, h),
            (None, None) => self.primary.clone(),
        }
    }
}

/// `(row, item)` inside the fixed visual template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateCoord {
    pub row: u8,
    pub item: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotContent {
    pub position: u32,
    pub slot: usize,
    pub coord: TemplateCoord,
    pub content: KeyContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComboBlocks {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl ComboBlocks {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Everything a renderer needs for one layer page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLayer {
    pub name: String,
    pub index: usize,
    pub slots: Vec<SlotContent>,
    pub combos: ComboBlocks,
}

impl RenderedLayer {
    pub fn slot_for_position(&self, position: u32) -> Option<&SlotContent> {
        self.slots.iter().find(|s| s.position == position)
    }
}
