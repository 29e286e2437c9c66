// --- DEVICE ---
pub use keylegend_protocol::model::{KEY_COUNT, NONE_MARKERS, TRANS_MARKERS};

/// Number of slots in the visual template (80 keys plus one spare).
pub const TEMPLATE_SLOTS: usize = 81;

// --- THUMB CLUSTERS ---
pub const LEFT_THUMB: [u32; 6] = [52, 53, 54, 69, 70, 71];
pub const RIGHT_THUMB: [u32; 6] = [55, 56, 57, 72, 73, 74];

pub fn is_left_thumb(position: u32) -> bool {
    LEFT_THUMB.contains(&position)
}

pub fn is_right_thumb(position: u32) -> bool {
    RIGHT_THUMB.contains(&position)
}

pub fn is_thumb(position: u32) -> bool {
    is_left_thumb(position) || is_right_thumb(position)
}

// --- LEGENDS ---
pub const HELD_GLYPH: &str = "✋";
pub const HELD_WORD: &str = "Layer";
pub const TRANS_LABEL: &str = "trans";

/// Behavior names longer than this are cut and suffixed with `ELLIPSIS`.
pub const MAX_BEHAVIOR_LABEL: usize = 6;
pub const ELLIPSIS: char = '…';

// Longest-line thresholds for the size steps (chars, inclusive).
pub const SIZE_LARGE_MAX: usize = 2;
pub const SIZE_MEDIUM_MAX: usize = 5;
pub const SIZE_SMALL_MAX: usize = 9;
