use crate::model::{KeyBinding, Layer};
use tracing::debug;

/// Fills transparent keys on `overlay` from `base`, one hop only.
///
/// A key stays transparent when `base` has no binding at that position or is itself transparent
/// there; no third layer is consulted. `overlay` is left untouched.
pub fn resolve_transparent(overlay: &Layer, base: &Layer) -> Layer {
    let below = base.position_map();
    let mut resolved = 0usize;

    let bindings = overlay
        .bindings
        .iter()
        .map(|binding| {
            if !binding.is_transparent() {
                return binding.clone();
            }
            match below.get(&binding.position) {
                Some(under) if !under.is_transparent() => {
                    resolved += 1;
                    KeyBinding {
                        position: binding.position,
                        tap: under.tap.clone(),
                        hold: under.hold.clone(),
                        shifted: None,
                        key_type: None,
                    }
                }
                _ => binding.clone(),
            }
        })
        .collect();

    debug!(
        "Resolved {} transparent keys on '{}' from '{}'",
        resolved, overlay.name, base.name
    );

    Layer {
        name: overlay.name.clone(),
        index: overlay.index,
        bindings,
    }
}

/// Named layer, or else the layer with index 0, or else the first layer.
pub fn select_base_layer<'a>(layers: &'a [Layer], name: Option<&str>) -> Option<&'a Layer> {
    match name {
        Some(name) => layers.iter().find(|l| l.name == name),
        None => layers
            .iter()
            .find(|l| l.index == 0)
            .or_else(|| layers.first()),
    }
}
