//! Dynamic uniform-grid spatial hash.
//!
//! Each tracked key occupies every cell its bounding box touches. Buckets
//! exist only for occupied cells, so memory follows the number of objects
//! rather than the extent of the world, and negative coordinates need no
//! special handling.
//!
//! The index keeps two tables that mirror each other:
//! - `buckets`: cell -> keys in that cell
//! - `membership`: key -> cells it was placed in by the last `add`/`update`
//!
//! Every mutation keeps them consistent: a key listed in a bucket has that
//! cell in its membership, every cell in a membership holds the key, and no
//! bucket is ever left empty.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use log::{debug, trace, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::bounds::Extent;
use crate::cell::{CellId, CellRange};
use crate::config::{GridConfig, check_cell_size};
use crate::error::{GridError, Result};

/// Keys sharing one cell
#[derive(Clone, Debug)]
pub struct Bucket<K> {
    members: FxHashSet<K>,
}

impl<K> Default for Bucket<K> {
    fn default() -> Self {
        Self {
            members: FxHashSet::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> Bucket<K> {
    /// Number of keys in the cell
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for buckets reachable through the index
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `key` is in the cell
    pub fn contains(&self, key: K) -> bool {
        self.members.contains(&key)
    }

    /// Keys in the cell, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.members.iter().copied()
    }

    fn insert(&mut self, key: K) -> bool {
        self.members.insert(key)
    }

    fn remove(&mut self, key: K) -> bool {
        self.members.remove(&key)
    }
}

/// Uniform-grid spatial hash over caller-owned objects
///
/// Objects are identified by a small copyable key (entity id, slot index,
/// handle). The index never sees the object itself, only the bounding box
/// handed to [`add`](Self::add) and [`update`](Self::update).
///
/// Call `update` whenever an object moves or resizes; `query` answers from
/// the footprint recorded by the last `add`/`update`.
///
/// # Example
/// ```
/// use gridindex::prelude::*;
///
/// let mut grid = GridIndex::new(); // 32-unit cells
/// grid.add(1, &Bounds::new(10.0, 20.0, 32.0, 32.0))
///     .add(2, &Bounds::new(200.0, 200.0, 10.0, 10.0));
///
/// assert!(grid.query(1).unwrap().is_empty());
///
/// // 1 moves next to 2
/// grid.update(1, &Bounds::new(200.0, 205.0, 32.0, 32.0));
/// assert!(grid.query(1).unwrap().contains(&2));
/// assert!(grid.query(2).unwrap().contains(&1));
/// ```
#[derive(Clone, Debug)]
pub struct GridIndex<K> {
    /// Non-empty buckets by cell
    pub(crate) buckets: FxHashMap<CellId, Bucket<K>>,
    /// Cells each tracked key was placed in
    pub(crate) membership: FxHashMap<K, Vec<CellId>>,
    cell_size: f64,
    /// Cached `1 / cell_size`
    inv_cell_size: f64,
    overflow: u32,
}

impl<K: Copy + Eq + Hash> GridIndex<K> {
    /// Creates an empty index with 32-unit cells and no overflow
    pub fn new() -> Self {
        Self::from_valid_config(GridConfig::default(), 0)
    }

    /// Creates an empty index with the given configuration
    ///
    /// # Errors
    /// [`GridError::InvalidConfiguration`] if the cell size is not a finite
    /// positive number.
    pub fn with_config(config: GridConfig) -> Result<Self> {
        Self::with_capacity(config, 0)
    }

    /// Creates an empty index with room for `capacity` keys
    ///
    /// # Errors
    /// Same as [`GridIndex::with_config`].
    pub fn with_capacity(config: GridConfig, capacity: usize) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config, capacity))
    }

    fn from_valid_config(config: GridConfig, capacity: usize) -> Self {
        Self {
            buckets: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            membership: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            cell_size: config.cell_size,
            inv_cell_size: 1.0 / config.cell_size,
            overflow: config.overflow,
        }
    }

    /// Current configuration
    pub const fn config(&self) -> GridConfig {
        GridConfig {
            cell_size: self.cell_size,
            overflow: self.overflow,
        }
    }

    /// Cell edge length in world units
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Changes the cell edge length
    ///
    /// Tracked keys keep their old footprint until they are updated; use
    /// [`reindex`](Self::reindex) to refresh all of them.
    ///
    /// # Errors
    /// [`GridError::InvalidConfiguration`] for NaN, infinite, zero or negative
    /// sizes, and for sizes so small their reciprocal overflows. The previous
    /// cell size stays in effect.
    pub fn set_cell_size(&mut self, cell_size: f64) -> Result<&mut Self> {
        let current = self.cell_size;
        let cell_size = check_cell_size(cell_size)
            .inspect_err(|err| warn!("{err}; keeping cell size {current}"))?;
        debug!("cell size {current} -> {cell_size}");
        self.cell_size = cell_size;
        self.inv_cell_size = 1.0 / cell_size;
        Ok(self)
    }

    /// Extra cells of margin around each footprint
    pub const fn overflow(&self) -> u32 {
        self.overflow
    }

    /// Changes the overflow margin
    ///
    /// Like [`set_cell_size`](Self::set_cell_size), this only affects keys
    /// added or updated afterwards.
    pub fn set_overflow(&mut self, overflow: u32) -> &mut Self {
        debug!("overflow {} -> {overflow}", self.overflow);
        self.overflow = overflow;
        self
    }

    /// Cells a bounding box would occupy under the current configuration
    pub fn covering_set<E: Extent + ?Sized>(&self, bounds: &E) -> CellRange {
        CellRange::covering(bounds, self.inv_cell_size, self.overflow)
    }

    /// Starts tracking `key` with the footprint of `bounds`
    ///
    /// Adding a key that is already tracked replaces its footprint, exactly
    /// like [`update`](Self::update).
    pub fn add<E: Extent + ?Sized>(&mut self, key: K, bounds: &E) -> &mut Self {
        let cells = self.detach(key).unwrap_or_default();
        self.attach(key, bounds, cells);
        self
    }

    /// Stops tracking `key`
    ///
    /// Buckets left empty are dropped. Untracked keys are ignored.
    pub fn delete(&mut self, key: K) -> &mut Self {
        if let Some(cells) = self.detach(key) {
            trace!("delete: left {} cells", cells.len());
        }
        self
    }

    /// Recomputes the footprint of `key` from its current `bounds`
    ///
    /// Must be called after the object moves or resizes. Updating an
    /// untracked key adds it.
    pub fn update<E: Extent + ?Sized>(&mut self, key: K, bounds: &E) -> &mut Self {
        self.add(key, bounds)
    }

    /// Keys sharing at least one cell with `key`, excluding `key` itself
    ///
    /// This is a broad-phase answer: every key whose footprint shares a cell,
    /// whether or not the boxes actually overlap.
    ///
    /// # Errors
    /// [`GridError::InvalidState`] if `key` is not tracked.
    pub fn query(&self, key: K) -> Result<FxHashSet<K>> {
        let mut found = FxHashSet::default();
        self.query_into(key, &mut found)?;
        Ok(found)
    }

    /// Same as [`query`](Self::query) but reuses `found`
    ///
    /// `found` is cleared first, so its allocation carries over between
    /// calls.
    ///
    /// # Errors
    /// [`GridError::InvalidState`] if `key` is not tracked. `found` is left
    /// empty.
    pub fn query_into(&self, key: K, found: &mut FxHashSet<K>) -> Result<()> {
        found.clear();
        let cells = self.membership.get(&key).ok_or(GridError::InvalidState {
            reason: "queried key is not tracked, add it first",
        })?;
        for cell in cells {
            if let Some(bucket) = self.buckets.get(cell) {
                found.extend(bucket.iter().filter(|&other| other != key));
            }
        }
        Ok(())
    }

    /// Keys whose footprint shares a cell with the covering set of `bounds`
    ///
    /// Nothing needs to be tracked for the region itself.
    ///
    /// # Example
    /// ```
    /// use gridindex::prelude::*;
    ///
    /// let mut grid = GridIndex::new();
    /// grid.add("rock", &Bounds::new(-40.0, -40.0, 8.0, 8.0));
    /// grid.add("tree", &Bounds::new(500.0, 0.0, 8.0, 8.0));
    ///
    /// let near_origin = grid.query_region(&Bounds::new(0.0, 0.0, 100.0, 100.0));
    /// assert!(near_origin.contains("rock"));
    /// assert!(!near_origin.contains("tree"));
    /// ```
    pub fn query_region<E: Extent + ?Sized>(&self, bounds: &E) -> FxHashSet<K> {
        let range = self.covering_set(bounds);
        let mut found = FxHashSet::default();
        if range.cell_count() > self.buckets.len() {
            // Region spans more cells than are occupied: scan buckets instead
            for (cell, bucket) in &self.buckets {
                if range.contains(*cell) {
                    found.extend(bucket.iter());
                }
            }
        } else {
            for cell in range {
                if let Some(bucket) = self.buckets.get(&cell) {
                    found.extend(bucket.iter());
                }
            }
        }
        found
    }

    /// Raw bucket for `cell`, `None` when nothing occupies it
    pub fn get(&self, cell: CellId) -> Option<&Bucket<K>> {
        self.buckets.get(&cell)
    }

    /// Drops the bucket for `cell` and returns it
    ///
    /// Keys that were in the bucket stay tracked but lose `cell` from their
    /// membership, so they stop seeing each other through it until their next
    /// update.
    pub fn clear(&mut self, cell: CellId) -> Option<Bucket<K>> {
        let bucket = self.buckets.remove(&cell)?;
        for key in bucket.iter() {
            if let Some(cells) = self.membership.get_mut(&key) {
                cells.retain(|&c| c != cell);
            }
        }
        debug!("cleared cell ({}, {}) holding {} keys", cell.x, cell.y, bucket.len());
        Some(bucket)
    }

    /// Drops every bucket and forgets every key
    ///
    /// Previously tracked keys must be added again before they can be queried.
    pub fn clear_all(&mut self) {
        debug!(
            "clearing {} buckets and {} keys",
            self.buckets.len(),
            self.membership.len()
        );
        self.buckets.clear();
        self.membership.clear();
    }

    /// Re-runs [`update`](Self::update) for every tracked key
    ///
    /// `bounds_of` supplies each key's current bounding box. Useful after
    /// changing the cell size or overflow.
    pub fn reindex<E, F>(&mut self, mut bounds_of: F)
    where
        E: Extent,
        F: FnMut(K) -> E,
    {
        let keys: Vec<K> = self.membership.keys().copied().collect();
        debug!("reindexing {} keys", keys.len());
        for key in keys {
            let bounds = bounds_of(key);
            self.update(key, &bounds);
        }
    }

    /// Cells `key` currently occupies, `None` if it is not tracked
    pub fn membership(&self, key: K) -> Option<&[CellId]> {
        self.membership.get(&key).map(Vec::as_slice)
    }

    /// Whether `key` is tracked
    pub fn contains(&self, key: K) -> bool {
        self.membership.contains_key(&key)
    }

    /// Number of tracked keys
    pub fn len(&self) -> usize {
        self.membership.len()
    }

    /// Whether no key is tracked
    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    /// Number of occupied cells
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Occupied cells with their buckets
    pub fn buckets(&self) -> impl Iterator<Item = (CellId, &Bucket<K>)> + '_ {
        self.buckets.iter().map(|(&cell, bucket)| (cell, bucket))
    }

    /// Tracked keys
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.membership.keys().copied()
    }

    // --- Private helpers ---

    /// Places `key` in every cell covered by `bounds`, reusing `cells` as storage
    fn attach<E: Extent + ?Sized>(&mut self, key: K, bounds: &E, mut cells: Vec<CellId>) {
        cells.clear();
        cells.extend(self.covering_set(bounds));
        for &cell in &cells {
            self.buckets.entry(cell).or_default().insert(key);
        }
        trace!("add: {} cells", cells.len());
        self.membership.insert(key, cells);
    }

    /// Removes `key` from its buckets and returns its old membership
    fn detach(&mut self, key: K) -> Option<Vec<CellId>> {
        let cells = self.membership.remove(&key)?;
        for &cell in &cells {
            if let Entry::Occupied(mut bucket) = self.buckets.entry(cell) {
                bucket.get_mut().remove(key);
                if bucket.get().is_empty() {
                    bucket.remove();
                }
            }
        }
        Some(cells)
    }
}

impl<K: Copy + Eq + Hash> Default for GridIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<K: Copy + Eq + Hash + std::fmt::Debug> GridIndex<K> {
    /// Panics unless buckets and memberships mirror each other and no bucket is empty
    pub(crate) fn assert_invariants(&self) {
        for (key, cells) in &self.membership {
            for cell in cells {
                let bucket = self
                    .buckets
                    .get(cell)
                    .unwrap_or_else(|| panic!("{key:?} lists {cell:?} but the bucket is missing"));
                assert!(bucket.contains(*key), "Bucket {cell:?} should hold {key:?}");
            }
        }
        for (cell, bucket) in &self.buckets {
            assert!(!bucket.is_empty(), "Bucket {cell:?} should have been dropped");
            for key in bucket.iter() {
                let cells = self
                    .membership
                    .get(&key)
                    .unwrap_or_else(|| panic!("{key:?} in bucket {cell:?} is not tracked"));
                assert!(cells.contains(cell), "{key:?} should list {cell:?}");
            }
        }
    }
}
