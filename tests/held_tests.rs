mod common;

use common::{activator, BindingBuilder, LayerBuilder};
use keylegend::held::{detect_activators, held_positions};
use keylegend::model::LayerActivator;
use std::collections::BTreeSet;

#[test]
fn test_held_positions_collects_by_target() {
    let activators = vec![
        activator("Base", 69, "Lower"),
        activator("Base", 72, "Raise"),
        activator("Raise", 69, "Lower"),
        activator("Base", 52, "Lower"),
    ];

    assert_eq!(held_positions(&activators, "Lower"), BTreeSet::from([52, 69]));
    assert_eq!(held_positions(&activators, "Raise"), BTreeSet::from([72]));
    assert!(held_positions(&activators, "Base").is_empty());
    assert!(held_positions(&[], "Lower").is_empty());
}

#[test]
fn test_detect_hold_naming_layer() {
    let layers = vec![
        LayerBuilder::new("Base", 0)
            .binding(BindingBuilder::new(69, "SPACE").hold("Cursor").build())
            .binding(BindingBuilder::new(70, "A").hold("LSHIFT").build())
            .build(),
        LayerBuilder::new("Cursor", 1).build(),
    ];

    let found = detect_activators(&layers);

    assert_eq!(
        found,
        vec![LayerActivator {
            source_layer_name: "Base".into(),
            source_position: 69,
            target_layer_name: "Cursor".into(),
            tap_key: Some("SPACE".into()),
        }]
    );
}

#[test]
fn test_detect_behavior_activators() {
    let layers = vec![
        LayerBuilder::new("Base", 0)
            .key(52, "&mo 1")
            .key(53, "&lt 2 SPACE")
            .key(54, "&lt Raise TAB")
            .key(55, "&tog 1")
            .key(56, "&mo 9")
            .build(),
        LayerBuilder::new("Lower", 1).build(),
        LayerBuilder::new("Raise", 2).build(),
    ];

    let found = detect_activators(&layers);
    let summary: Vec<(u32, &str, Option<&str>)> = found
        .iter()
        .map(|a| {
            (
                a.source_position,
                a.target_layer_name.as_str(),
                a.tap_key.as_deref(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (52, "Lower", None),
            (53, "Raise", Some("SPACE")),
            (54, "Raise", Some("TAB")),
        ]
    );
}

#[test]
fn test_bare_layer_name_tap_is_an_activator() {
    let layers = vec![
        LayerBuilder::new("Base", 0).key(71, "Lower").build(),
        LayerBuilder::new("Lower", 1).build(),
    ];

    let found = detect_activators(&layers);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].source_position, 71);
    assert_eq!(found[0].tap_key, None);
}

#[test]
fn test_self_targets_and_duplicates_are_dropped() {
    let layers = vec![
        LayerBuilder::new("Base", 0).key(10, "&mo 0").key(11, "Base").build(),
        LayerBuilder::new("Lower", 1)
            .binding(BindingBuilder::new(69, "Lower").hold("Lower").build())
            .build(),
    ];

    assert!(detect_activators(&layers).is_empty());
}

#[test]
fn test_numeric_hold_is_not_a_layer_reference() {
    let layers = vec![
        LayerBuilder::new("Base", 0)
            .binding(BindingBuilder::new(69, "A").hold("1").build())
            .build(),
        LayerBuilder::new("Lower", 1).build(),
    ];

    assert!(detect_activators(&layers).is_empty());
}
