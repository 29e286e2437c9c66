mod common;

use common::{activator, combo, LayerBuilder};
use keylegend::config::{OsStyle, RenderConfig};
use keylegend::content::{Alignment, KeyCategory};
use keylegend::error::KeyLegendError;
use keylegend::extractor::extract_keymap;
use keylegend::model::{Keymap, Layer};
use keylegend::render::{render_keymap, KeymapRenderer};
use keylegend::shifted::ShiftOverrides;
use keylegend::slots::SlotMap;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn layers() -> Vec<Layer> {
    vec![
        LayerBuilder::filled("Base", 0, "Q").key(69, "&mo 1").build(),
        LayerBuilder::filled("Lower", 1, "&trans").key(12, "1").build(),
        LayerBuilder::filled("Raise", 2, "&none").build(),
    ]
}

#[test]
fn test_output_order_matches_input() {
    init_tracing();
    let config = RenderConfig::default();
    let map = SlotMap::glove80();
    let renderer = KeymapRenderer::builder().config(&config).slot_map(&map).build();

    let rendered = renderer.render(&layers(), &[], &[]);
    let names: Vec<&str> = rendered.iter().map(|l| l.name.as_str()).collect();

    assert_eq!(names, vec!["Base", "Lower", "Raise"]);
    assert_eq!(rendered[2].index, 2);
    assert!(rendered.iter().all(|l| l.slots.len() == 75));
}

#[test]
fn test_transparent_keys_stay_without_resolution() {
    let config = RenderConfig::default();
    let map = SlotMap::glove80();
    let renderer = KeymapRenderer::builder().config(&config).slot_map(&map).build();

    let rendered = renderer.render(&layers(), &[], &[]);
    let lower = &rendered[1];

    assert_eq!(lower.slot_for_position(13).unwrap().content.primary, "trans");
    assert_eq!(lower.slot_for_position(12).unwrap().content.primary, "1");
}

#[test]
fn test_resolve_trans_uses_base_layer() {
    let config = RenderConfig {
        resolve_trans: true,
        ..Default::default()
    };
    let map = SlotMap::glove80();
    let renderer = KeymapRenderer::builder().config(&config).slot_map(&map).build();

    let rendered = renderer.render(&layers(), &[], &[]);
    let lower = &rendered[1];

    assert_eq!(lower.slot_for_position(13).unwrap().content.primary, "Q");
    assert_eq!(lower.slot_for_position(12).unwrap().content.primary, "1");
    assert_eq!(rendered[2].slot_for_position(13).unwrap().content.primary, "");
}

#[test]
fn test_missing_named_base_keeps_transparency() {
    let config = RenderConfig {
        resolve_trans: true,
        base_layer: Some("Nope".into()),
        ..Default::default()
    };
    let map = SlotMap::glove80();
    let renderer = KeymapRenderer::builder().config(&config).slot_map(&map).build();

    let rendered = renderer.render(&layers(), &[], &[]);
    assert_eq!(rendered[1].slot_for_position(13).unwrap().content.primary, "trans");
}

#[test]
fn test_held_indicator_toggle() {
    let activators = vec![activator("Base", 69, "Lower")];
    let map = SlotMap::glove80();

    let on = RenderConfig::default();
    let rendered = KeymapRenderer::builder()
        .config(&on)
        .slot_map(&map)
        .build()
        .render(&layers(), &activators, &[]);
    let held = &rendered[1].slot_for_position(69).unwrap().content;
    assert_eq!(held.category, Some(KeyCategory::Held));
    assert_eq!(held.alignment, Alignment::Grid);
    assert_ne!(
        rendered[0].slot_for_position(69).unwrap().content.category,
        Some(KeyCategory::Held)
    );

    let off = RenderConfig {
        show_held_indicator: false,
        ..Default::default()
    };
    let rendered = KeymapRenderer::builder()
        .config(&off)
        .slot_map(&map)
        .build()
        .render(&layers(), &activators, &[]);
    assert_eq!(
        rendered[1].slot_for_position(69).unwrap().content.primary,
        "trans"
    );
}

#[test]
fn test_overrides_and_os_style_reach_every_layer() {
    let config = RenderConfig {
        os_style: OsStyle::Windows,
        ..Default::default()
    };
    let overrides = ShiftOverrides::new().with_rule("one", "N1", "DLLR");
    let map = SlotMap::glove80();
    let layers = vec![
        LayerBuilder::new("Base", 0).key(12, "1").key(13, "LGUI").build(),
        LayerBuilder::new("Lower", 1).key(12, "1").build(),
    ];

    let rendered = KeymapRenderer::builder()
        .config(&config)
        .slot_map(&map)
        .overrides(Some(&overrides))
        .build()
        .render(&layers, &[], &[]);

    for layer in &rendered {
        assert_eq!(
            layer.slot_for_position(12).unwrap().content.shifted.as_deref(),
            Some("$")
        );
    }
    assert_eq!(rendered[0].slot_for_position(13).unwrap().content.primary, "Win");
}

#[test]
fn test_combos_are_placed_per_layer() {
    let config = RenderConfig::default();
    let map = SlotMap::glove80();
    let combos = vec![
        combo("Gaming", &[54, 71], "&tog 1"),
        combo("Caps", &[57, 74], "CAPS").on_layers(["Lower"]),
    ];

    let rendered = KeymapRenderer::builder()
        .config(&config)
        .slot_map(&map)
        .build()
        .render(&layers(), &[], &combos);

    assert_eq!(rendered[0].combos.left, vec!["Gaming → &tog 1"]);
    assert!(rendered[0].combos.right.is_empty());
    assert_eq!(rendered[1].combos.right, vec!["CAPS ← Caps"]);
}

#[test]
fn test_render_keymap_detects_activators() {
    let keymap = Keymap {
        layers: layers(),
        combos: vec![],
    };

    let rendered = render_keymap(&keymap, &RenderConfig::default()).unwrap();
    let held = &rendered[1].slot_for_position(69).unwrap().content;
    assert_eq!(held.category, Some(KeyCategory::Held));
}

#[test]
fn test_render_keymap_rejects_missing_base() {
    let keymap = Keymap {
        layers: layers(),
        combos: vec![],
    };
    let config = RenderConfig {
        resolve_trans: true,
        base_layer: Some("Nope".into()),
        ..Default::default()
    };

    let err = render_keymap(&keymap, &config).unwrap_err();
    assert!(matches!(err, KeyLegendError::Config(_)));
    assert!(err.to_string().contains("Nope"));
}

#[test]
fn test_document_to_legends() {
    let doc = json!({
        "layers": {
            "Base": [["Q", "W"], [{"t": "SPACE", "h": "Cursor"}]],
            "Cursor": [["LEFT", "&trans"], ["&trans"]]
        },
        "combos": [{"p": [52, 69], "k": "ESC", "n": "Escape"}]
    });
    let config = RenderConfig {
        resolve_trans: true,
        show_colors: true,
        ..Default::default()
    };

    let keymap = extract_keymap(&doc, &config.layer_filter()).unwrap();
    let rendered = render_keymap(&keymap, &config).unwrap();

    // Positions 0 and 1 are unmapped on the template; only position 2 remains.
    assert_eq!(rendered[0].slots.len(), 1);
    let base_space = &rendered[0].slot_for_position(2).unwrap().content;
    assert_eq!(base_space.primary, "␣");
    assert_eq!(base_space.secondary.as_deref(), Some("↔"));
    assert_eq!(base_space.category, Some(KeyCategory::Layer));

    let cursor_held = &rendered[1].slot_for_position(2).unwrap().content;
    assert_eq!(cursor_held.category, Some(KeyCategory::Held));
    assert_eq!(rendered[1].combos.left, vec!["Escape → ESC"]);
}
