use buffer_index::{Document, LineIndex, TextEdit, TextRange};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use ropey::Rope;

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (buffer-index benchmark line)\n"
        ));
    }
    out
}

fn bench_cold_scan(c: &mut Criterion) {
    let rope = Rope::from_str(&large_text(50_000));
    let end = rope.len_chars();
    c.bench_function("cold_scan/line_number_at_end", |b| {
        b.iter_batched(
            LineIndex::new,
            |mut index| {
                black_box(index.line_number(&rope, black_box(end)));
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_warm_viewport(c: &mut Criterion) {
    let rope = Rope::from_str(&large_text(50_000));
    let mut index = LineIndex::new();

    // Pick a window well into the file so the first pass pays the scan.
    let anchor = index.line_range(&rope, rope.len_chars() / 2);
    let window = TextRange::with_len(anchor.start, 60 * 80);

    c.bench_function("warm_viewport/60_line_window", |b| {
        b.iter(|| {
            let mut offset = window.start;
            while offset < window.end {
                let line = index.line_range(&rope, black_box(offset));
                offset = line.end.max(offset + 1);
            }
            black_box(offset);
        })
    });
}

fn bench_typing_in_middle(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("typing_middle/100_edit_query_cycles", |b| {
        b.iter_batched(
            || Document::from_text(&text),
            |mut doc| {
                let mut offset = doc.len_chars() / 2;
                for _ in 0..100 {
                    doc.insert(offset, "x").unwrap();
                    offset += 1;
                    black_box(doc.line_range(offset));
                }
                black_box(doc.take_edited_ranges());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_edited_range_storm(c: &mut Criterion) {
    c.bench_function("edited_ranges/10k_disjoint_then_bridge", |b| {
        b.iter(|| {
            let mut edited = buffer_index::EditedRangeSet::new();
            for i in 0..10_000usize {
                edited.record(&TextEdit::new(TextRange::with_len(i * 4, 2), 0));
            }
            // One wide replacement collapses the whole set.
            edited.record(&TextEdit::replacement(0, 40_000, 40_000));
            black_box(edited.len());
        })
    });
}

criterion_group!(
    benches,
    bench_cold_scan,
    bench_warm_viewport,
    bench_typing_in_middle,
    bench_edited_range_storm
);
criterion_main!(benches);
