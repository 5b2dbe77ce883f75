//! Track moving boxes, re-index them each step and report broad-phase pairs.
use gridindex::prelude::*;

#[derive(Debug)]
struct Body {
    bounds: Bounds,
    velocity: (f64, f64),
}

fn main() {
    let mut bodies = vec![
        // Body 0
        Body { bounds: Bounds::new(10.0, 20.0, 32.0, 32.0), velocity: (19.0, 18.5) },
        // Body 1 (parked)
        Body { bounds: Bounds::new(200.0, 200.0, 10.0, 10.0), velocity: (0.0, 0.0) },
        // Body 2 (drifts away)
        Body { bounds: Bounds::new(-150.0, -80.0, 16.0, 16.0), velocity: (-5.0, 0.0) },
    ];

    let mut grid = GridIndex::with_config(GridConfig::new(32.0, 0).unwrap()).unwrap();
    for (key, body) in bodies.iter().enumerate() {
        grid.add(key, &body.bounds);
    }

    for step in 0..10 {
        for (key, body) in bodies.iter_mut().enumerate() {
            let (vx, vy) = body.velocity;
            body.bounds = body.bounds.moved_to(body.bounds.x + vx, body.bounds.y + vy);
            grid.update(key, &body.bounds);
        }

        for key in 0..bodies.len() {
            let mut near: Vec<usize> = grid
                .query(key)
                .unwrap()
                .into_iter()
                .filter(|&other| other > key)
                .collect();
            near.sort_unstable();
            for other in near {
                let touching = bodies[key].bounds.overlaps(&bodies[other].bounds);
                println!("step {step}: {key} near {other} (overlapping: {touching})");
            }
        }
    }

    // Body 0 arrives next to body 1 on the last step
    assert!(grid.query(0).unwrap().contains(&1), "Body 0 should reach body 1");
    assert!(grid.query(2).unwrap().is_empty(), "Body 2 should be alone");
    println!("{} bodies in {} occupied cells", grid.len(), grid.bucket_count());
}
