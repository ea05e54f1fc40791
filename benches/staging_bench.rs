use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use remapkit::keycode::{Key, KeyAction, KeyCode};
use remapkit::layout::KeyShape;
use remapkit::planner;
use remapkit::snapshot::{KeyLocation, Snapshot, SnapshotEntry};
use remapkit::staging::StagingBuffer;

/// 8 layers over a 24x20 matrix, ~3840 entries.
fn big_snapshot() -> Snapshot {
    let mut entries = Vec::new();
    for layer in 0..8u8 {
        for row in 0..24u8 {
            for col in 0..20u8 {
                entries.push(SnapshotEntry {
                    loc: KeyLocation { row, col, layer },
                    action: KeyAction::Normal(KeyCode::Key(Key::A)),
                    shape: KeyShape {
                        x: col as f32,
                        y: row as f32,
                        width: 1.0,
                        height: 1.0,
                        rotation: 0.0,
                    },
                });
            }
        }
    }
    Snapshot::new(entries, 8).unwrap()
}

fn bench_staging(c: &mut Criterion) {
    let snapshot = big_snapshot();

    c.bench_function("stage_full_snapshot", |b| {
        b.iter(|| black_box(StagingBuffer::stage(black_box(&snapshot))))
    });

    c.bench_function("set_action_single_cell", |b| {
        let mut buffer = StagingBuffer::stage(&snapshot);
        let loc = KeyLocation {
            row: 12,
            col: 10,
            layer: 4,
        };
        let action = KeyAction::Normal(KeyCode::Key(Key::B));
        b.iter(|| {
            buffer.set_action(black_box(loc), black_box(action)).unwrap();
        })
    });

    c.bench_function("pending_writes_sparse_changes", |b| {
        let mut buffer = StagingBuffer::stage(&snapshot);
        // Touch ~5% of the buffer.
        for (idx, entry) in snapshot.entries().iter().enumerate() {
            if idx % 20 == 0 {
                buffer
                    .set_action(entry.loc, KeyAction::Normal(KeyCode::Key(Key::Z)))
                    .unwrap();
            }
        }
        b.iter(|| black_box(planner::pending_writes(black_box(&buffer))))
    });
}

criterion_group!(benches, bench_staging);
criterion_main!(benches);
