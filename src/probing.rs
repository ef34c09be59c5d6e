//! A fixed-capacity hash table using quadratic probing.
//!
//! The table stores raw integer keys; the probe sequence for a key is
//! `(key + i²) mod capacity` for attempt `i`. There is no resizing, no
//! deletion, and no tombstoning: a slot is either empty or holds a key for
//! the lifetime of a build. Every occupied slot hit while storing a key is
//! recorded in that key's collision trail.
//!
//! On a non-prime capacity the quadratic probe sequence can cycle through
//! fewer than `capacity` distinct slots, so an insert may fail even when the
//! table has free space. That key is silently not stored; it simply never
//! shows up in the occupied count. Callers that need to know can check
//! [`InputEntry::slot`].

use crate::error::Error;

/// Per-key record produced while building the table.
///
/// Created once per input key, written during that key's insertion attempt,
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEntry {
    /// The key that was inserted (or dropped).
    pub key: i64,
    /// Where the key landed, or `None` if probing exhausted the table.
    pub slot: Option<usize>,
    /// Slot indices found occupied before a free slot was located. When the
    /// insert fails this holds all `capacity` probed indices.
    pub collisions: Vec<usize>,
}

/// Outcome of a single insertion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    /// The slot the key was stored in, or `None` if no free slot was reached
    /// within `capacity` probe attempts.
    pub slot: Option<usize>,
    /// Occupied slot indices visited before the outcome was decided.
    pub collisions: Vec<usize>,
}

/// A fixed-capacity quadratic-probing hash table over integer keys.
///
/// # Examples
///
/// ```rust
/// use probe_bench::ProbingTable;
///
/// let mut table = ProbingTable::with_capacity(7).unwrap();
/// let entries = table.build(&[3, 10, 17]);
///
/// // 10 collides with 3 at slot 3, then lands in slot 4.
/// assert_eq!(entries[1].slot, Some(4));
/// assert_eq!(entries[1].collisions, vec![3]);
/// assert_eq!(table.lookup(10), Some(4));
/// assert_eq!(table.lookup(11), None);
/// ```
#[derive(Debug, Clone)]
pub struct ProbingTable {
    slots: Vec<Option<i64>>,
    occupied: usize,
}

impl ProbingTable {
    /// Creates a table with exactly `capacity` slots, all empty.
    ///
    /// Returns [`Error::InvalidCapacity`] for a zero capacity and
    /// [`Error::Allocation`] if the slot array cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(0));
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, None);
        Ok(Self { slots, occupied: 0 })
    }

    /// Returns the number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns the occupancy as a percentage of capacity.
    pub fn fill_percent(&self) -> f64 {
        (self.occupied as f64 * 100.0) / self.slots.len() as f64
    }

    /// Empties every slot and resets the occupied count.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.occupied = 0;
    }

    /// Clears the table, then inserts every key in order.
    ///
    /// Building is not additive: all state from a previous build is gone.
    /// Returns one [`InputEntry`] per key, in input order, recording where
    /// each key landed and which occupied slots it probed on the way.
    pub fn build(&mut self, keys: &[i64]) -> Vec<InputEntry> {
        self.clear();
        keys.iter()
            .map(|&key| {
                let outcome = self.insert(key);
                InputEntry {
                    key,
                    slot: outcome.slot,
                    collisions: outcome.collisions,
                }
            })
            .collect()
    }

    /// Attempts to store `key`, probing quadratically.
    ///
    /// Probes `(key + i²) mod capacity` for `i` in `0..capacity`. The first
    /// empty slot takes the key; every occupied slot visited before that is
    /// appended to the collision trail. If no attempt reaches an empty slot
    /// the key is not stored and the outcome's `slot` is `None`.
    pub fn insert(&mut self, key: i64) -> InsertOutcome {
        let mut collisions = Vec::new();
        for attempt in 0..self.slots.len() {
            let index = self.probe_index(key, attempt);
            match self.slots[index] {
                None => {
                    self.slots[index] = Some(key);
                    self.occupied += 1;
                    return InsertOutcome {
                        slot: Some(index),
                        collisions,
                    };
                }
                Some(_) => collisions.push(index),
            }
        }
        InsertOutcome {
            slot: None,
            collisions,
        }
    }

    /// Looks up `key`, returning the slot index holding it.
    ///
    /// Follows the same probe sequence as [`insert`](Self::insert). An empty
    /// slot anywhere along the sequence means the key is absent (there is no
    /// deletion, so probe chains are never broken). Exhausting `capacity`
    /// attempts also reports absence.
    pub fn lookup(&self, key: i64) -> Option<usize> {
        for attempt in 0..self.slots.len() {
            let index = self.probe_index(key, attempt);
            match self.slots[index] {
                None => return None,
                Some(stored) if stored == key => return Some(index),
                Some(_) => {}
            }
        }
        None
    }

    /// Returns the slot contents, in slot order.
    pub fn slots(&self) -> &[Option<i64>] {
        &self.slots
    }

    // Widened to i128 so `attempt²` cannot overflow and negative keys reduce
    // into `0..capacity`.
    #[inline]
    fn probe_index(&self, key: i64, attempt: usize) -> usize {
        let offset = (attempt as i128) * (attempt as i128);
        (i128::from(key) + offset).rem_euclid(self.slots.len() as i128) as usize
    }
}
