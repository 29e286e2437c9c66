mod common;

use common::{BindingBuilder, LayerBuilder};
use keylegend::model::Layer;
use keylegend::transparency::{resolve_transparent, select_base_layer};

fn base() -> Layer {
    LayerBuilder::new("Base", 0)
        .key(0, "Q")
        .binding(BindingBuilder::new(1, "A").hold("LSHIFT").build())
        .key(2, "&trans")
        .key(3, "1")
        .build()
}

#[test]
fn test_transparent_keys_take_base_binding() {
    let overlay = LayerBuilder::new("Lower", 1)
        .key(0, "&trans")
        .key(1, "▽")
        .key(3, "F1")
        .build();

    let resolved = resolve_transparent(&overlay, &base());

    assert_eq!(resolved.name, "Lower");
    assert_eq!(resolved.index, 1);
    assert_eq!(resolved.bindings[0].tap, "Q");
    assert_eq!(resolved.bindings[1].tap, "A");
    assert_eq!(resolved.bindings[1].hold.as_deref(), Some("LSHIFT"));
    assert_eq!(resolved.bindings[2].tap, "F1");
}

#[test]
fn test_type_marker_counts_as_transparent() {
    let overlay = LayerBuilder::new("Lower", 1)
        .binding(BindingBuilder::new(0, "whatever").key_type("trans").build())
        .build();

    let resolved = resolve_transparent(&overlay, &base());
    assert_eq!(resolved.bindings[0].tap, "Q");
    assert!(!resolved.bindings[0].is_transparent());
}

#[test]
fn test_resolution_is_one_hop() {
    let overlay = LayerBuilder::new("Lower", 1).key(2, "&trans").build();
    let resolved = resolve_transparent(&overlay, &base());
    assert!(resolved.bindings[0].is_transparent());
}

#[test]
fn test_missing_base_position_stays_transparent() {
    let overlay = LayerBuilder::new("Lower", 1).key(42, "&trans").build();
    let resolved = resolve_transparent(&overlay, &base());
    assert_eq!(resolved.bindings[0].tap, "&trans");
}

#[test]
fn test_shift_override_is_not_inherited() {
    let base = LayerBuilder::new("Base", 0)
        .binding(BindingBuilder::new(0, "1").shifted("€").build())
        .build();
    let overlay = LayerBuilder::new("Lower", 1)
        .binding(BindingBuilder::new(0, "&trans").shifted("x").build())
        .build();

    let resolved = resolve_transparent(&overlay, &base);
    assert_eq!(resolved.bindings[0].tap, "1");
    assert_eq!(resolved.bindings[0].shifted, None);
}

#[test]
fn test_overlay_is_not_mutated() {
    let overlay = LayerBuilder::new("Lower", 1).key(0, "&trans").build();
    let before = overlay.clone();
    let _ = resolve_transparent(&overlay, &base());
    assert_eq!(overlay, before);
}

#[test]
fn test_select_base_layer() {
    let layers = vec![
        LayerBuilder::new("Lower", 1).build(),
        LayerBuilder::new("Base", 0).build(),
        LayerBuilder::new("Raise", 2).build(),
    ];

    assert_eq!(select_base_layer(&layers, Some("Raise")).map(|l| l.name.as_str()), Some("Raise"));
    assert_eq!(select_base_layer(&layers, None).map(|l| l.name.as_str()), Some("Base"));
    assert!(select_base_layer(&layers, Some("Missing")).is_none());

    // No index-0 layer left after filtering: first one wins.
    let filtered = &layers[2..];
    assert_eq!(select_base_layer(filtered, None).map(|l| l.name.as_str()), Some("Raise"));
    assert!(select_base_layer(&[], None).is_none());
}
