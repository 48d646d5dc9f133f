//! Cover engine benchmarks
//!
//! Measures the per-card hot paths:
//! - Palette hashing of note names
//! - Excerpt extraction for preview covers of growing notes
//! - Rendering a whole grid from an in-memory vault
//!
//! Run benchmarks: `cargo bench --bench covers`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use deck::{CardRenderer, CoverFallback, InMemoryVault, NoteEntry, PropertyId, ViewConfig, excerpt, hash_name};
use std::hint::black_box;

fn note_text(paragraphs: usize) -> String {
    let mut text = String::from("---\ntags: [bench]\ncover: none\n---\n");
    for i in 0..paragraphs {
        text.push_str(&format!(
            "Paragraph {} talks about cards. It has a few sentences! Does it end? Yes it does.\n\n",
            i
        ));
    }
    text
}

fn benchmark_hash_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_name");
    for name in ["a", "Project Alpha", "日本語のノート", "a-rather-long-note-name-from-a-deep-folder"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| hash_name(black_box(name)))
        });
    }
    group.finish();
}

fn benchmark_excerpt(c: &mut Criterion) {
    let mut group = c.benchmark_group("excerpt");
    for paragraphs in [1, 10, 100, 1000] {
        let text = note_text(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &text, |b, text| {
            b.iter(|| excerpt(black_box(text), 500))
        });
    }
    group.finish();
}

fn benchmark_render_grid(c: &mut Criterion) {
    let vault = InMemoryVault::new();
    let mut entries = Vec::new();
    for i in 0..500 {
        let path = format!("notes/note-{}.md", i);
        let _ = vault.add_note(path.clone(), note_text(5));
        let entry = match i % 3 {
            0 => NoteEntry::new(path).with_property("cover", "[[missing.png]]"),
            1 => NoteEntry::new(path).with_property("cover", "#4ECDC4"),
            _ => NoteEntry::new(path),
        };
        entries.push(entry.with_property("status", if i % 2 == 0 { "open" } else { "done" }));
    }

    let mut group = c.benchmark_group("render_grid");
    group.throughput(Throughput::Elements(entries.len() as u64));
    for fallback in [CoverFallback::Gradient, CoverFallback::Preview] {
        let config = ViewConfig {
            cover_fallback: fallback,
            image_property: Some(PropertyId::from("note.cover")),
            group_by: Some(PropertyId::from("status")),
            ..ViewConfig::default()
        };
        let renderer = CardRenderer::new(config, &vault, &vault);
        group.bench_function(BenchmarkId::from_parameter(fallback), |b| {
            b.iter(|| renderer.render_grid(black_box(&entries)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_hash_name, benchmark_excerpt, benchmark_render_grid);
criterion_main!(benches);
