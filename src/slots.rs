//! Firmware position -> template slot -> legend record.

use crate::category::classify;
use crate::consts::{
    HELD_GLYPH, HELD_WORD, SIZE_LARGE_MAX, SIZE_MEDIUM_MAX, SIZE_SMALL_MAX, TEMPLATE_SLOTS,
    TRANS_LABEL,
};
use crate::labels::format_key_label;
use crate::model::{KeyBinding, Layer};
use crate::shifted::{custom_keycode_shifted, custom_shifted, default_shifted, ShiftOverrides};
use keylegend_protocol::config::OsStyle;
use keylegend_protocol::content::{
    Alignment, KeyCategory, KeyContent, SizeHint, SlotContent, TemplateCoord,
};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;
use typed_builder::TypedBuilder;

// `(row, item)` of every template slot, indexed by slot.
#[rustfmt::skip]
const GLOVE80_TEMPLATE: [(u8, u8); TEMPLATE_SLOTS] = [
    // Main body, slots 0-54
    (4, 1), (4, 2), (4, 3), (4, 4), (4, 6), (4, 7), (4, 8), (4, 9),
    (5, 5), (5, 7),
    (6, 1), (6, 2), (6, 3), (6, 4), (6, 6), (6, 7), (6, 8), (6, 9),
    (7, 5), (7, 7), (7, 9),
    (8, 1), (8, 3), (8, 5), (8, 7), (8, 9), (8, 11), (8, 13), (8, 15),
    (9, 3), (9, 5), (9, 7), (9, 9),
    (10, 1), (10, 3), (10, 4), (10, 5), (10, 7), (10, 8), (10, 9), (10, 10),
    (11, 3), (11, 5), (11, 7), (11, 9),
    (12, 1), (12, 2), (12, 4), (12, 6), (12, 8), (12, 9),
    (13, 3), (13, 5), (13, 7), (13, 9),
    // Left thumb, 55-60
    (16, 1), (17, 1), (20, 1), (21, 1), (24, 1), (25, 1),
    // Right thumb, 61-66
    (28, 1), (29, 1), (32, 1), (33, 1), (36, 1), (37, 1),
    // Outer column, 67-69
    (5, 9), (7, 3), (9, 3),
    // Function row, 70-79
    (2, 1), (2, 2), (2, 3), (3, 3), (3, 4), (3, 6), (3, 7), (2, 7), (2, 8), (2, 9),
    // R2C6 left
    (5, 3),
];

// Positions 0, 1, 8, 9 (outboard function keys) and 34 have no slot.
#[rustfmt::skip]
const GLOVE80_POSITIONS: &[(u32, usize)] = &[
    // Function row
    (2, 70), (3, 71), (4, 72), (5, 77), (6, 78), (7, 79),
    // Number row
    (10, 80), (11, 8), (12, 0), (13, 1), (14, 2), (15, 3),
    (16, 4), (17, 5), (18, 6), (19, 7), (20, 9), (21, 67),
    // Top row
    (22, 68), (23, 18), (24, 10), (25, 11), (26, 12), (27, 13),
    (28, 14), (29, 15), (30, 16), (31, 17), (32, 19), (33, 20),
    // Home row
    (35, 30), (36, 21), (37, 22), (38, 23), (39, 24),
    (40, 25), (41, 26), (42, 27), (43, 28), (44, 31), (45, 32),
    // Bottom row, left
    (46, 41), (47, 42), (48, 33), (49, 34), (50, 35), (51, 36),
    // Thumbs, upper
    (52, 55), (53, 57), (54, 59), (55, 61), (56, 63), (57, 65),
    // Bottom row, right
    (58, 37), (59, 38), (60, 39), (61, 40), (62, 43), (63, 44),
    // Lower row, left
    (64, 51), (65, 52), (66, 45), (67, 46), (68, 47),
    // Thumbs, lower
    (69, 56), (70, 58), (71, 60), (72, 62), (73, 64), (74, 66),
    // Lower row, right
    (75, 48), (76, 49), (77, 50), (78, 53), (79, 54),
];

/// Position table for one physical template. Passed into the mapper rather than kept global so
/// tests can substitute their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMap {
    template: Vec<TemplateCoord>,
    positions: HashMap<u32, usize>,
}

impl SlotMap {
    pub fn new(
        template: impl IntoIterator<Item = (u8, u8)>,
        positions: impl IntoIterator<Item = (u32, usize)>,
    ) -> Self {
        Self {
            template: template
                .into_iter()
                .map(|(row, item)| TemplateCoord { row, item })
                .collect(),
            positions: positions.into_iter().collect(),
        }
    }

    pub fn glove80() -> Self {
        Self::new(GLOVE80_TEMPLATE, GLOVE80_POSITIONS.iter().copied())
    }

    pub fn template_len(&self) -> usize {
        self.template.len()
    }

    /// Slot index, or `None` when the position is unmapped or points past the template.
    pub fn slot_for(&self, position: u32) -> Option<usize> {
        self.positions
            .get(&position)
            .copied()
            .filter(|&slot| slot < self.template.len())
    }

    pub fn coord_for(&self, position: u32) -> Option<TemplateCoord> {
        self.slot_for(position).map(|slot| self.template[slot])
    }

    pub fn mapped_positions(&self) -> BTreeSet<u32> {
        self.positions
            .keys()
            .copied()
            .filter(|&p| self.slot_for(p).is_some())
            .collect()
    }
}

impl Default for SlotMap {
    fn default() -> Self {
        Self::glove80()
    }
}

#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct SlotContext<'a> {
    #[builder(default)]
    pub os_style: OsStyle,
    pub held: &'a BTreeSet<u32>,
    /// Derive shift pairs from the default table when the binding has none.
    #[builder(default)]
    pub show_shifted: bool,
    #[builder(default)]
    pub show_colors: bool,
    #[builder(default)]
    pub overrides: Option<&'a ShiftOverrides>,
    pub layer_names: &'a BTreeSet<String>,
}

pub fn held_content() -> KeyContent {
    let mut content = KeyContent {
        primary: HELD_GLYPH.to_string(),
        secondary: Some(HELD_WORD.to_string()),
        shifted: None,
        alignment: Alignment::Grid,
        size: SizeHint::Large,
        category: Some(KeyCategory::Held),
    };
    content.size = size_for(&content);
    content
}

pub fn key_content(binding: &KeyBinding, ctx: &SlotContext<'_>) -> KeyContent {
    if ctx.held.contains(&binding.position) {
        return held_content();
    }
    if binding.is_transparent() {
        return KeyContent {
            primary: TRANS_LABEL.to_string(),
            alignment: Alignment::Centered,
            size: size_for_lines(&[TRANS_LABEL]),
            category: Some(KeyCategory::Trans),
            ..Default::default()
        };
    }
    if binding.is_none() {
        return KeyContent::default();
    }

    let primary = format_key_label(&binding.tap, ctx.os_style);
    let secondary = binding
        .hold_text()
        .map(|hold| format_key_label(hold, ctx.os_style))
        .filter(|s| !s.is_empty());
    let shifted = shifted_text(binding, &primary, ctx);

    let mut content = KeyContent {
        alignment: alignment_for(shifted.is_some(), secondary.is_some()),
        primary,
        secondary,
        shifted,
        size: SizeHint::Large,
        category: None,
    };
    content.size = size_for(&content);
    if ctx.show_colors {
        content.category = classify(binding, ctx.layer_names);
    }
    content
}

/// Explicit override, then a custom mod-morph, then (when enabled) the default US table.
fn shifted_text(binding: &KeyBinding, primary: &str, ctx: &SlotContext<'_>) -> Option<String> {
    if let Some(explicit) = binding.shifted_text() {
        return Some(explicit.to_string());
    }
    if let Some(overrides) = ctx.overrides {
        let custom = match binding.tap.trim().strip_prefix("&kp") {
            Some(code) => custom_keycode_shifted(code, overrides),
            None => custom_shifted(primary, overrides),
        };
        if custom.is_some() {
            return custom;
        }
    }
    if ctx.show_shifted {
        return default_shifted(primary).map(String::from);
    }
    None
}

fn alignment_for(has_shifted: bool, has_secondary: bool) -> Alignment {
    match (has_shifted, has_secondary) {
        (true, true) => Alignment::Grid,
        (true, false) => Alignment::ShiftedPair,
        (false, true) => Alignment::TapHold,
        (false, false) => Alignment::Centered,
    }
}

fn size_for(content: &KeyContent) -> SizeHint {
    let lines: Vec<&str> = [
        Some(content.primary.as_str()),
        content.secondary.as_deref(),
        content.shifted.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    size_for_lines(&lines)
}

/// Steps down as the longest line grows.
pub fn size_for_lines(lines: &[&str]) -> SizeHint {
    let longest = lines
        .iter()
        .flat_map(|l| l.lines())
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    match longest {
        n if n <= SIZE_LARGE_MAX => SizeHint::Large,
        n if n <= SIZE_MEDIUM_MAX => SizeHint::Medium,
        n if n <= SIZE_SMALL_MAX => SizeHint::Small,
        _ => SizeHint::Tiny,
    }
}

/// Records for every mapped binding of `layer`, ordered by slot.
///
/// Held positions are always marked, even when an incomplete layer has no binding there.
pub fn map_layer(layer: &Layer, slots: &SlotMap, ctx: &SlotContext<'_>) -> Vec<SlotContent> {
    let mut out: Vec<SlotContent> = layer
        .bindings
        .iter()
        .filter_map(|binding| {
            let Some(slot) = slots.slot_for(binding.position) else {
                debug!(
                    "Layer '{}': position {} has no template slot, skipping",
                    layer.name, binding.position
                );
                return None;
            };
            Some(SlotContent {
                position: binding.position,
                slot,
                coord: slots.template[slot],
                content: key_content(binding, ctx),
            })
        })
        .collect();

    let bound: BTreeSet<u32> = layer.bindings.iter().map(|b| b.position).collect();
    for &position in ctx.held.difference(&bound) {
        if let Some(slot) = slots.slot_for(position) {
            out.push(SlotContent {
                position,
                slot,
                coord: slots.template[slot],
                content: held_content(),
            });
        }
    }

    out.sort_by_key(|s| s.slot);
    out
}
