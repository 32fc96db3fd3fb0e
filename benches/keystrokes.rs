//! Benchmarks for vkbd_mini keystroke performance.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use vkbd_mini::{InputEvent, Keyboard, shared};

fn generate_sample_text(words: usize) -> String {
    let mut text = String::new();
    for i in 0..words {
        if i % 2 == 0 {
            text.push_str("keyboard ");
        } else {
            text.push_str("клавиатура ");
        }
    }
    text
}

fn key(id: &str) -> InputEvent {
    InputEvent::key(id)
}

fn benchmark_typing_at_end(c: &mut Criterion) {
    let mut kb = Keyboard::new();
    kb.open("");

    c.bench_function("typing at end", |b| {
        b.iter(|| {
            for id in ["en_h", "en_e", "en_l", "en_l", "en_o", "space"] {
                let _ = kb.handle_event(black_box(key(id)));
            }
            for _ in 0..6 {
                let _ = kb.handle_event(black_box(InputEvent::Backspace));
            }
        });
    });
}

fn benchmark_mid_buffer_edits(c: &mut Criterion) {
    let text = generate_sample_text(500);
    let mut kb = Keyboard::new();
    kb.open(&text);

    c.bench_function("mid-buffer insert/backspace", |b| {
        b.iter(|| {
            kb.set_cursor(black_box(2000));
            let _ = kb.handle_event(black_box(InputEvent::text("ж")));
            let _ = kb.handle_event(black_box(InputEvent::Backspace));
        });
    });
}

fn benchmark_case_toggle(c: &mut Criterion) {
    let mut kb = Keyboard::new();
    kb.open("");

    c.bench_function("case toggle (relabel)", |b| {
        b.iter(|| {
            black_box(kb.toggle_case());
        });
    });
}

fn benchmark_language_switch(c: &mut Criterion) {
    let text = generate_sample_text(500);
    let mut kb = Keyboard::new();
    kb.open(&text);

    c.bench_function("language switch", |b| {
        b.iter(|| {
            black_box(kb.switch_language());
        });
    });
}

fn benchmark_with_listener(c: &mut Criterion) {
    let mut kb = Keyboard::builder()
        .listener(shared(|text: &str| {
            black_box(text.len());
        }))
        .build();
    kb.open(&generate_sample_text(50));

    c.bench_function("typing with host listener", |b| {
        b.iter(|| {
            for id in ["en_a", "en_b", "en_c"] {
                let _ = kb.handle_event(black_box(key(id)));
            }
            for _ in 0..3 {
                let _ = kb.handle_event(black_box(InputEvent::Backspace));
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_typing_at_end,
              benchmark_mid_buffer_edits,
              benchmark_case_toggle,
              benchmark_language_switch,
              benchmark_with_listener
}
criterion_main!(benches);
