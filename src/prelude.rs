//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use gridindex::prelude::*;
//! ```

pub use crate::{Bounds, CellId, Extent, GridConfig, GridError, GridIndex};
pub use rustc_hash::FxHashSet;
