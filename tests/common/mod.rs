#![allow(dead_code)] // Not every test file uses every helper

use keylegend::model::{Combo, KeyBinding, Layer, LayerActivator};
use std::collections::BTreeSet;

/// Builder for KeyBinding to keep test tables short
pub struct BindingBuilder {
    binding: KeyBinding,
}

impl BindingBuilder {
    pub fn new(position: u32, tap: &str) -> Self {
        Self {
            binding: KeyBinding::new(position, tap),
        }
    }

    pub fn hold(mut self, hold: &str) -> Self {
        self.binding.hold = Some(hold.to_string());
        self
    }

    pub fn shifted(mut self, shifted: &str) -> Self {
        self.binding.shifted = Some(shifted.to_string());
        self
    }

    pub fn key_type(mut self, key_type: &str) -> Self {
        self.binding.key_type = Some(key_type.to_string());
        self
    }

    pub fn build(self) -> KeyBinding {
        self.binding
    }
}

/// Builds a layer position by position; unset positions are absent, not padded.
pub struct LayerBuilder {
    name: String,
    index: usize,
    bindings: Vec<KeyBinding>,
}

impl LayerBuilder {
    pub fn new(name: &str, index: usize) -> Self {
        Self {
            name: name.to_string(),
            index,
            bindings: Vec::new(),
        }
    }

    /// 80 keys, all with the same tap.
    pub fn filled(name: &str, index: usize, tap: &str) -> Self {
        let mut builder = Self::new(name, index);
        builder.bindings = (0..80).map(|p| KeyBinding::new(p, tap)).collect();
        builder
    }

    pub fn key(self, position: u32, tap: &str) -> Self {
        self.binding(KeyBinding::new(position, tap))
    }

    pub fn binding(mut self, binding: KeyBinding) -> Self {
        self.bindings.retain(|b| b.position != binding.position);
        self.bindings.push(binding);
        self.bindings.sort_by_key(|b| b.position);
        self
    }

    pub fn build(self) -> Layer {
        Layer::new(self.name, self.index, self.bindings)
    }
}

pub fn activator(source: &str, position: u32, target: &str) -> LayerActivator {
    LayerActivator {
        source_layer_name: source.to_string(),
        source_position: position,
        target_layer_name: target.to_string(),
        tap_key: None,
    }
}

pub fn combo(name: &str, positions: &[u32], action: &str) -> Combo {
    Combo::new(name, positions.iter().copied(), action)
}

pub fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
