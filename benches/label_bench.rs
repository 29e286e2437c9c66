use criterion::{criterion_group, criterion_main, Criterion};
use keylegend::config::{OsStyle, RenderConfig};
use keylegend::labels::format_key_label;
use keylegend::model::{KeyBinding, Keymap, Layer};
use keylegend::render::render_keymap;
use std::hint::black_box;

const TOKENS: &[&str] = &[
    "A",
    "&kp LS(LEFT)",
    "Gui+Sft+Z",
    "&left_pinky_tap ESC",
    "&right_index_hold LSFT",
    "&emoji_heart_macro",
    "&world_e_acute_lower_macro",
    "C_VOL_UP",
    "MEH(K)",
    "&msc SCRL_UP",
    "&very_long_behavior_name",
    "KP_PLUS",
];

fn setup_keymap() -> Keymap {
    let layers = (0..8)
        .map(|index| {
            let bindings = (0..80u32)
                .map(|pos| {
                    let tap = TOKENS[(pos as usize + index) % TOKENS.len()];
                    let binding = KeyBinding::new(pos, tap);
                    match pos % 7 {
                        0 if index > 0 => KeyBinding::new(pos, "&trans"),
                        3 => binding.with_hold("LCTRL"),
                        _ => binding,
                    }
                })
                .collect();
            Layer::new(format!("Layer{}", index), index, bindings)
        })
        .collect();
    Keymap {
        layers,
        combos: vec![],
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("format_key_label (12 tokens)", |b| {
        b.iter(|| {
            for token in TOKENS {
                black_box(format_key_label(black_box(token), OsStyle::Mac));
            }
        })
    });

    let keymap = setup_keymap();
    let config = RenderConfig {
        resolve_trans: true,
        show_shifted: true,
        show_colors: true,
        ..Default::default()
    };
    c.bench_function("render_keymap (8 layers)", |b| {
        b.iter(|| render_keymap(black_box(&keymap), black_box(&config)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
