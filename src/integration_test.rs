#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    /// Game-side object: the index only ever sees its key and bounding box
    #[derive(Debug)]
    struct Sprite {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    }

    impl Extent for Sprite {
        fn x(&self) -> f64 {
            self.x
        }
        fn y(&self) -> f64 {
            self.y
        }
        fn width(&self) -> f64 {
            self.w
        }
        fn height(&self) -> f64 {
            self.h
        }
    }

    #[test]
    fn test_two_objects_meet() {
        let mut grid = GridIndex::with_config(GridConfig::new(32.0, 0).unwrap()).unwrap();
        let mut sprites = vec![
            Sprite { x: 10.0, y: 20.0, w: 32.0, h: 32.0 },    // A
            Sprite { x: 200.0, y: 200.0, w: 10.0, h: 10.0 },  // B
        ];
        grid.add(0, &sprites[0]).add(1, &sprites[1]);

        // A spans columns -1..=0 and rows 0..=1, B sits in cell (6, 6)
        let mut a_cells = grid.membership(0).unwrap().to_vec();
        a_cells.sort();
        assert_eq!(
            a_cells,
            vec![CellId::new(-1, 0), CellId::new(-1, 1), CellId::new(0, 0), CellId::new(0, 1)]
        );
        assert_eq!(grid.membership(1), Some(&[CellId::new(6, 6)][..]));

        assert!(grid.query(0).unwrap().is_empty());
        assert!(grid.query(1).unwrap().is_empty());

        // A moves; until update the index still answers from the old footprint
        sprites[0].x = 200.0;
        sprites[0].y = 205.0;
        assert!(grid.query(0).unwrap().is_empty());

        grid.update(0, &sprites[0]);
        assert_eq!(grid.query(0).unwrap().into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(grid.query(1).unwrap().into_iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_delete_never_added() {
        let mut grid: GridIndex<u64> = GridIndex::new();
        grid.delete(12345);
        assert!(grid.is_empty());
        assert_eq!(grid.bucket_count(), 0);
    }

    #[test]
    fn test_negative_cell_size_rejected() {
        let mut grid: GridIndex<u64> = GridIndex::new();
        grid.set_cell_size(8.0).unwrap();
        let err = grid.set_cell_size(-5.0).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration { .. }));
        assert_eq!(grid.cell_size(), 8.0);
    }

    #[test]
    fn test_frame_loop_with_narrow_phase() {
        // A row of sprites drifting right, one per frame step
        let mut sprites: Vec<Sprite> = (0..20)
            .map(|i| Sprite {
                x: f64::from(i) * 24.0 - 240.0,
                y: 0.0,
                w: 20.0,
                h: 20.0,
            })
            .collect();
        let mut grid = GridIndex::with_capacity(GridConfig::default(), sprites.len()).unwrap();
        for (key, sprite) in sprites.iter().enumerate() {
            grid.add(key, sprite);
        }

        let mut candidates = FxHashSet::default();
        for _frame in 0..10 {
            for (key, sprite) in sprites.iter_mut().enumerate() {
                sprite.x += 3.0;
                grid.update(key, &*sprite);
            }
            for (key, sprite) in sprites.iter().enumerate() {
                grid.query_into(key, &mut candidates).unwrap();
                let me = Bounds::new(sprite.x, sprite.y, sprite.w, sprite.h);
                // Spacing 24 > width 20, nobody actually touches
                assert!(
                    candidates.iter().all(|&other| !me.overlaps(&sprites[other])),
                    "Sprite {key} should not overlap any candidate"
                );
            }
        }
        grid.assert_invariants();
        assert_eq!(grid.len(), 20);
    }
}
