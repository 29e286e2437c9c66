use thiserror::Error;

/// Structural problems in the layer mapping handed to the extractor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Expected a mapping of layer name to rows, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Layer '{layer}' must be a list of rows, found {found}")]
    LayerNotList { layer: String, found: &'static str },

    #[error("Keymap document has no 'layers' mapping")]
    MissingLayers,
}

#[derive(Error, Debug)]
pub enum KeyLegendError {
    #[error("Extraction Error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type KlResult<T> = Result<T, KeyLegendError>;
