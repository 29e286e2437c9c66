use crate::consts::{is_left_thumb, is_right_thumb, is_thumb};
use crate::model::Combo;
use keylegend_protocol::content::ComboBlocks;
use strum_macros::Display;
use tracing::debug;

/// Which side of the legend a thumb combo is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ComboHand {
    Left,
    Right,
    Cross,
}

/// Hand of a thumb-only combo; `None` when any position lies outside the thumb clusters.
pub fn classify_combo(combo: &Combo) -> Option<ComboHand> {
    if combo.positions.is_empty() || !combo.positions.iter().all(|&p| is_thumb(p)) {
        return None;
    }
    let hand = if combo.positions.iter().all(|&p| is_left_thumb(p)) {
        ComboHand::Left
    } else if combo.positions.iter().all(|&p| is_right_thumb(p)) {
        ComboHand::Right
    } else {
        ComboHand::Cross
    };
    Some(hand)
}

pub fn place_combos(combos: &[Combo], layer_name: &str) -> ComboBlocks {
    let mut blocks = ComboBlocks::default();
    for combo in combos.iter().filter(|c| c.is_active_on(layer_name)) {
        match classify_combo(combo) {
            Some(ComboHand::Left | ComboHand::Cross) => blocks
                .left
                .push(format!("{} → {}", combo.name, combo.action)),
            Some(ComboHand::Right) => blocks
                .right
                .push(format!("{} ← {}", combo.action, combo.name)),
            None => debug!(
                "Combo '{}' touches non-thumb positions {:?}, not shown",
                combo.name, combo.positions
            ),
        }
    }
    blocks
}
