//! Find tracked boxes around an arbitrary rectangle, then narrow-phase filter them.
use gridindex::prelude::*;

fn main() {
    let boxes = [
        Bounds::new(-40.0, -40.0, 10.0, 10.0), // Box 0
        Bounds::new(5.0, 5.0, 10.0, 10.0),     // Box 1
        Bounds::new(60.0, 60.0, 10.0, 10.0),   // Box 2 (outside query)
        Bounds::new(-5.0, 12.0, 4.0, 4.0),     // Box 3
    ];

    let mut grid = GridIndex::new();
    for (key, b) in boxes.iter().enumerate() {
        grid.add(key, b);
    }

    let region = Bounds::from_corners(-20.0, -20.0, 20.0, 20.0);
    let mut candidates: Vec<usize> = grid.query_region(&region).into_iter().collect();
    candidates.sort_unstable();
    println!("Candidates: {:?}", candidates);

    let hits: Vec<usize> = candidates
        .into_iter()
        .filter(|&key| region.overlaps(&boxes[key]))
        .collect();
    println!("Overlapping: {:?}", hits);

    // Region spans cells -1..=0 on both axes; box 0 shares cell (-2, -2) only
    assert_eq!(hits, vec![1, 3], "Expected boxes 1 and 3");
    assert!(!hits.contains(&2), "Box 2 should not intersect");
}
