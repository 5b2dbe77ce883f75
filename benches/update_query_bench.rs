//! Benchmark for per-frame `update` + `query` throughput
//!
//! Simulates a world of moving boxes: every frame each box drifts a little,
//! is re-indexed with `update`, and then every box asks for its neighbors.
//! Coordinate space is 4000x4000 centered on the origin, so half the cells
//! are negative.

use gridindex::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate a random box with extents UP TO `max_size`
fn random_box<R: Rng>(rng: &mut R, max_size: f64) -> Bounds {
    Bounds::new(
        rng.random_range(-2000.0..2000.0),
        rng.random_range(-2000.0..2000.0),
        rng.random_range(1.0..max_size),
        rng.random_range(1.0..max_size),
    )
}

/// Run `frames` simulation steps and report timings
fn bench_frames(num_items: usize, cell_size: f64, max_size: f64, frames: usize) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);
    let mut boxes: Vec<Bounds> = (0..num_items).map(|_| random_box(&mut rng, max_size)).collect();
    let velocities: Vec<(f64, f64)> = (0..num_items)
        .map(|_| (rng.random_range(-4.0..4.0), rng.random_range(-4.0..4.0)))
        .collect();

    let config = GridConfig::new(cell_size, 0).unwrap();
    let mut grid = GridIndex::with_capacity(config, num_items).unwrap();

    let start = Instant::now();
    for (key, b) in boxes.iter().enumerate() {
        grid.add(key, b);
    }
    let add_time = start.elapsed();

    let mut found = FxHashSet::default();
    let mut update_time = 0.0;
    let mut query_time = 0.0;
    let mut candidates = 0usize;
    for _ in 0..frames {
        let start = Instant::now();
        for (key, (b, &(vx, vy))) in boxes.iter_mut().zip(&velocities).enumerate() {
            *b = b.moved_to(b.x + vx, b.y + vy);
            grid.update(key, &*b);
        }
        update_time += start.elapsed().as_secs_f64();

        let start = Instant::now();
        for key in 0..num_items {
            grid.query_into(key, &mut found).unwrap();
            candidates += found.len();
        }
        query_time += start.elapsed().as_secs_f64();
    }

    println!(
        "{num_items} items, cell {cell_size}, size <= {max_size}: add {:.2}ms, \
         update/frame {:.2}ms, query/frame {:.2}ms, {:.1} candidates/query, {} buckets",
        add_time.as_secs_f64() * 1000.0,
        update_time * 1000.0 / frames as f64,
        query_time * 1000.0 / frames as f64,
        candidates as f64 / (frames * num_items) as f64,
        grid.bucket_count(),
    );
}

fn main() {
    println!("GridIndex Update/Query Benchmark");
    println!("================================\n");

    bench_frames(10_000, 32.0, 16.0, 60);
    bench_frames(10_000, 32.0, 64.0, 60);
    bench_frames(100_000, 32.0, 16.0, 10);
    bench_frames(100_000, 64.0, 16.0, 10);
    println!();
}
