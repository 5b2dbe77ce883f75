//! # gridindex - Uniform-Grid Spatial Hash
//!
//! A Rust library providing a dynamic uniform-grid spatial index for broad-phase
//! proximity and collision queries on moving axis-aligned bounding boxes.
//!
//! ## Features
//!
//! - **Unbounded World**: Buckets exist only for occupied cells, negative coordinates work as-is
//! - **Dynamic**: Cheap `add` / `update` / `delete` per object, no rebuild step
//! - **Broad-Phase Queries**: Find every object sharing a cell with a tracked object or a region
//! - **Caller-Owned Objects**: The index stores small copyable keys, never the objects themselves
//!
//! ## Quick Start
//!
//! ```rust
//! use gridindex::prelude::*;
//!
//! // 32-unit cells, no overflow margin
//! let mut grid = GridIndex::new();
//!
//! // Track some objects by key, bounding boxes are (center_x, center_y, width, height)
//! grid.add(0, &Bounds::new(10.0, 10.0, 8.0, 8.0));    // Object 0
//! grid.add(1, &Bounds::new(14.0, 12.0, 8.0, 8.0));    // Object 1: same cell as 0
//! grid.add(2, &Bounds::new(-300.0, 90.0, 8.0, 8.0));  // Object 2: far away
//!
//! // Broad-phase neighbors of object 0
//! let near = grid.query(0).unwrap();
//! assert!(near.contains(&1));
//! assert!(!near.contains(&2));
//!
//! // Objects move: tell the index
//! grid.update(2, &Bounds::new(12.0, 8.0, 8.0, 8.0));
//! assert_eq!(grid.query(0).unwrap().len(), 2);
//!
//! // And stop tracking them
//! grid.delete(1).delete(2);
//! assert!(grid.query(0).unwrap().is_empty());
//! ```
//!
//! ## How It Works
//!
//! World space is cut into square cells of `cell_size` units. An object's
//! bounding box covers a rectangle of cells, optionally grown by `overflow`
//! cells on every side; the object's key is stored in a bucket for each of
//! those cells and the list of cells is remembered per key. A query unions
//! the buckets of the remembered cells.
//!
//! Results are candidates, not confirmed overlaps: two boxes in the same cell
//! may still be apart. Run an exact test such as [`Bounds::overlaps`] on the
//! candidates when that matters.
//!
//! Pick a cell size close to the typical object size. Too small and each
//! object lands in many buckets; too large and each bucket fills with
//! unrelated objects.

pub mod bounds;
pub mod cell;
pub mod config;
pub mod error;
pub mod grid_index;
pub mod prelude;

pub use bounds::{Bounds, Extent};
pub use cell::{CellId, CellRange};
pub use config::{DEFAULT_CELL_SIZE, DEFAULT_OVERFLOW, GridConfig};
pub use error::{GridError, Result};
pub use grid_index::{Bucket, GridIndex};

mod integration_test;
