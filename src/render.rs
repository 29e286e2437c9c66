use crate::combos::place_combos;
use crate::config::RenderConfig;
use crate::error::{KeyLegendError, KlResult};
use crate::held::{detect_activators, held_positions};
use crate::model::{Combo, Keymap, Layer, LayerActivator};
use crate::shifted::ShiftOverrides;
use crate::slots::{map_layer, SlotContext, SlotMap};
use crate::transparency::{resolve_transparent, select_base_layer};
use keylegend_protocol::content::RenderedLayer;
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::{info, warn};
use typed_builder::TypedBuilder;

/// Turns extracted layers into per-layer rendering requests.
#[derive(TypedBuilder)]
pub struct KeymapRenderer<'a> {
    config: &'a RenderConfig,
    slot_map: &'a SlotMap,
    #[builder(default)]
    overrides: Option<&'a ShiftOverrides>,
}

impl<'a> KeymapRenderer<'a> {
    /// Renders every layer; output order matches `layers`.
    ///
    /// A named base layer that does not exist leaves transparent keys as they are.
    pub fn render(
        &self,
        layers: &[Layer],
        activators: &[LayerActivator],
        combos: &[Combo],
    ) -> Vec<RenderedLayer> {
        let base = if self.config.resolve_trans {
            let base = select_base_layer(layers, self.config.base_layer.as_deref());
            if base.is_none() {
                warn!(
                    "Base layer {:?} not found, transparent keys stay unresolved",
                    self.config.base_layer
                );
            }
            base
        } else {
            None
        };

        let layer_names: BTreeSet<String> = layers.iter().map(|l| l.name.clone()).collect();

        let rendered: Vec<RenderedLayer> = layers
            .par_iter()
            .map(|layer| self.render_layer(layer, base, activators, combos, &layer_names))
            .collect();

        info!("Rendered {} layers", rendered.len());
        rendered
    }

    fn render_layer(
        &self,
        layer: &Layer,
        base: Option<&Layer>,
        activators: &[LayerActivator],
        combos: &[Combo],
        layer_names: &BTreeSet<String>,
    ) -> RenderedLayer {
        let resolved;
        let layer = match base {
            Some(base) if base.name != layer.name => {
                resolved = resolve_transparent(layer, base);
                &resolved
            }
            _ => layer,
        };

        let held = if self.config.show_held_indicator {
            held_positions(activators, &layer.name)
        } else {
            BTreeSet::new()
        };

        let ctx = SlotContext::builder()
            .os_style(self.config.os_style)
            .held(&held)
            .show_shifted(self.config.show_shifted)
            .show_colors(self.config.show_colors)
            .overrides(self.overrides)
            .layer_names(layer_names)
            .build();

        RenderedLayer {
            name: layer.name.clone(),
            index: layer.index,
            slots: map_layer(layer, self.slot_map, &ctx),
            combos: place_combos(combos, &layer.name),
        }
    }
}

/// Renders a whole keymap with the Glove80 template and detected activators.
///
/// Unlike [`KeymapRenderer::render`], a named base layer that is missing is an error here.
pub fn render_keymap(keymap: &Keymap, config: &RenderConfig) -> KlResult<Vec<RenderedLayer>> {
    if config.resolve_trans {
        if let Some(name) = &config.base_layer {
            if keymap.layer(name).is_none() {
                return Err(KeyLegendError::Config(format!(
                    "Base layer '{}' not found",
                    name
                )));
            }
        }
    }

    let slot_map = SlotMap::glove80();
    let activators = detect_activators(&keymap.layers);
    let renderer = KeymapRenderer::builder()
        .config(config)
        .slot_map(&slot_map)
        .build();
    Ok(renderer.render(&keymap.layers, &activators, &keymap.combos))
}
