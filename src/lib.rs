// Re-export types from the protocol crate so they are accessible via keylegend::*
pub use keylegend_protocol::config;
pub use keylegend_protocol::content;
pub use keylegend_protocol::model;

// Internal Modules
pub mod category;
pub mod combos;
pub mod consts;
pub mod error;
pub mod extractor;
pub mod held;
pub mod labels;
pub mod render;
pub mod shifted;
pub mod slots;
pub mod transparency;

pub use config::{LayerFilter, OsStyle, RenderConfig};
pub use error::{ExtractionError, KeyLegendError, KlResult};
pub use labels::format_key_label;
