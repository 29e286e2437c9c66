use crate::labels::{tokenize, BehaviorToken};
use crate::model::{Layer, LayerActivator};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Positions that, while held, keep `layer_name` active.
pub fn held_positions(activators: &[LayerActivator], layer_name: &str) -> BTreeSet<u32> {
    activators
        .iter()
        .filter(|a| a.target_layer_name == layer_name)
        .map(|a| a.source_position)
        .collect()
}

/// Finds keys that switch to another layer while held.
///
/// Recognised forms: a hold naming a layer, `&mo N`, `&lt N KEY` (by index or name), and a bare
/// tap naming a layer.
pub fn detect_activators(layers: &[Layer]) -> Vec<LayerActivator> {
    let names: BTreeSet<&str> = layers.iter().map(|l| l.name.as_str()).collect();
    let by_index: HashMap<usize, &str> = layers.iter().map(|l| (l.index, l.name.as_str())).collect();

    let is_layer = |name: &str| names.contains(name);
    let resolve = |target: &str| -> Option<String> {
        if is_layer(target) {
            return Some(target.to_string());
        }
        target
            .parse::<usize>()
            .ok()
            .and_then(|i| by_index.get(&i))
            .map(|n| n.to_string())
    };

    let activators: Vec<LayerActivator> = layers
        .iter()
        .flat_map(|layer| {
            layer.bindings.iter().filter_map(move |binding| {
                let tap = binding.tap.trim();
                let (target, tap_key) = if let Some(hold) = binding.hold_text() {
                    (is_layer(hold).then(|| hold.to_string())?, Some(binding.tap.clone()))
                } else {
                    match tokenize(tap) {
                        Some(BehaviorToken::Generic { name: "mo", args }) => {
                            (resolve(*args.first()?)?, None)
                        }
                        Some(BehaviorToken::Generic { name: "lt", args }) => (
                            resolve(*args.first()?)?,
                            args.get(1).map(|k| k.to_string()),
                        ),
                        Some(_) => return None,
                        None if is_layer(tap) => (tap.to_string(), None),
                        None => return None,
                    }
                };
                if target == layer.name {
                    return None;
                }
                Some(LayerActivator {
                    source_layer_name: layer.name.clone(),
                    source_position: binding.position,
                    target_layer_name: target,
                    tap_key,
                })
            })
        })
        .unique()
        .collect();

    debug!("Detected {} layer activators", activators.len());
    activators
}
