use crate::config::LayerFilter;
use crate::error::{ExtractionError, KeyLegendError, KlResult};
use crate::model::{Combo, KeyBinding, Keymap, Layer};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Converts an ordered `layer name -> rows` mapping into layers.
///
/// `index` counts every entry in the input, including layers the filter drops, so the same
/// layer keeps the same index whichever subset is rendered.
pub fn extract_layers(input: &Value, filter: &LayerFilter) -> KlResult<Vec<Layer>> {
    let mapping = input.as_object().ok_or(ExtractionError::NotAMapping {
        found: kind_of(input),
    })?;

    let mut layers = Vec::with_capacity(mapping.len());
    for (index, (name, rows)) in mapping.iter().enumerate() {
        if !filter.allows(name) {
            debug!("Skipping filtered layer '{}' (index {})", name, index);
            continue;
        }
        let bindings = flatten_rows(name, rows)?;
        layers.push(Layer::new(name.clone(), index, bindings));
    }

    info!("Extracted {} of {} layers", layers.len(), mapping.len());
    Ok(layers)
}

pub fn extract_layers_from_json(json: &str, filter: &LayerFilter) -> KlResult<Vec<Layer>> {
    let value: Value = serde_json::from_str(json)?;
    extract_layers(&value, filter)
}

/// Reads a keymap-drawer style document: `{ "layers": {...}, "combos": [...] }`.
pub fn extract_keymap(document: &Value, filter: &LayerFilter) -> KlResult<Keymap> {
    let root = document.as_object().ok_or(ExtractionError::NotAMapping {
        found: kind_of(document),
    })?;
    let layer_map = root.get("layers").ok_or(ExtractionError::MissingLayers)?;
    let layers = extract_layers(layer_map, filter)?;

    let combos = match root.get("combos") {
        Some(Value::Array(items)) => parse_combos(items)?,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(KeyLegendError::Validation(format!(
                "'combos' must be a list, found {}",
                kind_of(other)
            )))
        }
    };

    Ok(Keymap { layers, combos })
}

pub fn extract_keymap_from_json(json: &str, filter: &LayerFilter) -> KlResult<Keymap> {
    let value: Value = serde_json::from_str(json)?;
    extract_keymap(&value, filter)
}

fn flatten_rows(layer: &str, rows: &Value) -> KlResult<Vec<KeyBinding>> {
    let rows = match rows {
        Value::Null => return Ok(Vec::new()),
        Value::Array(rows) => rows,
        other => {
            return Err(ExtractionError::LayerNotList {
                layer: layer.to_string(),
                found: kind_of(other),
            }
            .into())
        }
    };

    // Nested lists are rows; anything else is already a single key.
    let tokens = rows.iter().flat_map(|row| match row {
        Value::Array(items) => items.iter().collect::<Vec<_>>(),
        single => vec![single],
    });

    Ok(tokens
        .enumerate()
        .map(|(position, token)| parse_token(position as u32, token))
        .collect())
}

fn parse_token(position: u32, token: &Value) -> KeyBinding {
    match token {
        Value::Object(record) => {
            let tap = field(record, "t", "tap").map(stringify).unwrap_or_default();
            let hold = field(record, "h", "hold").map(stringify);
            let key_type = record.get("type").and_then(|v| match v {
                Value::Null => None,
                v => Some(stringify(v)),
            });
            KeyBinding {
                position,
                tap,
                hold,
                shifted: record.get("shifted").and_then(Value::as_str).map(String::from),
                key_type,
            }
        }
        other => KeyBinding::new(position, stringify(other)),
    }
}

/// First non-null value under the short key, then the long one.
fn field<'a>(record: &'a Map<String, Value>, short: &str, long: &str) -> Option<&'a Value> {
    record
        .get(short)
        .filter(|v| !v.is_null())
        .or_else(|| record.get(long).filter(|v| !v.is_null()))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_combos(items: &[Value]) -> KlResult<Vec<Combo>> {
    let mut combos = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let record = item.as_object().ok_or_else(|| {
            KeyLegendError::Validation(format!("Combo #{} is not a record", i))
        })?;

        let positions = match field(record, "p", "positions") {
            Some(Value::Array(ps)) => ps
                .iter()
                .map(|p| {
                    p.as_u64()
                        .and_then(|p| u32::try_from(p).ok())
                        .ok_or_else(|| {
                            KeyLegendError::Validation(format!(
                                "Combo #{} has an invalid position: {}",
                                i, p
                            ))
                        })
                })
                .collect::<KlResult<Vec<u32>>>()?,
            _ => Vec::new(),
        };

        let action = field(record, "k", "key").map(stringify).unwrap_or_default();
        let name = field(record, "n", "name")
            .map(stringify)
            .unwrap_or_else(|| action.clone());

        let mut combo = Combo::new(name, positions, action);
        if combo.positions.len() < 2 {
            warn!(
                "Skipping combo '{}': needs at least two positions, got {}",
                combo.name,
                combo.positions.len()
            );
            continue;
        }
        if let Some(Value::Array(layers)) = field(record, "l", "layers") {
            combo = combo.on_layers(layers.iter().map(stringify));
        }
        combos.push(combo);
    }
    Ok(combos)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
