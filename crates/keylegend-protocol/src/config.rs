use clap::{ArgAction, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter, EnumString};

/// Which modifier vocabulary labels are rendered in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OsStyle {
    #[default]
    Mac,
    Windows,
    Linux,
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    #[arg(long, value_enum, default_value_t = OsStyle::Mac)]
    pub os_style: OsStyle,

    // === LEGENDS ===
    /// Always show the shifted character on keys that have one.
    #[arg(long)]
    pub show_shifted: bool,
    #[arg(long)]
    pub show_colors: bool,
    #[arg(long = "no-held-indicator", action = ArgAction::SetFalse)]
    pub show_held_indicator: bool,

    // === TRANSPARENCY ===
    #[arg(long)]
    pub resolve_trans: bool,
    /// Layer transparent keys fall back to. Defaults to layer index 0.
    #[arg(long)]
    pub base_layer: Option<String>,

    // === FILTERS ===
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            os_style: OsStyle::Mac,
            show_shifted: false,
            show_colors: false,
            show_held_indicator: true,
            resolve_trans: false,
            base_layer: None,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Empty include/exclude lists mean "no filter".
    pub fn layer_filter(&self) -> LayerFilter {
        let mut filter = LayerFilter::default();
        if !self.include.is_empty() {
            filter = filter.with_include(self.include.iter().cloned());
        }
        if !self.exclude.is_empty() {
            filter = filter.with_exclude(self.exclude.iter().cloned());
        }
        filter
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFilter {
    pub include: Option<BTreeSet<String>>,
    pub exclude: Option<BTreeSet<String>>,
}

impl LayerFilter {
    pub fn with_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Exclusion always beats inclusion.
    pub fn allows(&self, name: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if exclude.contains(name) {
                return false;
            }
        }
        match &self.include {
            Some(include) => include.contains(name),
            None => true,
        }
    }
}
