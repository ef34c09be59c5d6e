//! Repetition-driven timing of both storage engines.
//!
//! A single store or lookup is far below timer resolution, so each phase runs
//! a large fixed number of repetitions and reports the average. Engine state
//! is re-initialized identically before every repetition: the probing table
//! is rebuilt from scratch, and the sorted engine rewinds its working copy
//! before every sort (sorting an already-sorted array is cheaper and would
//! understate the true cost).
//!
//! The measurement granularity is deliberately uneven and kept that way: the
//! hashing store phase is timed as one span around the whole repetition loop,
//! the sorted store phase times each sort individually with the copy-back
//! excluded, and both search phases start and stop the timer around each
//! single lookup inside the repetition loop.

use std::time::Duration;
use std::time::Instant;

use crate::probing::InputEntry;
use crate::probing::ProbingTable;
use crate::sorted::SortStats;
use crate::sorted::SortedSearch;

/// Per-key retrieval record.
///
/// `found_at` is rewritten by every lookup of this key; only the last
/// repetition's value survives into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    /// The key that was looked up.
    pub key: i64,
    /// Where the key was found, or `None` if it is absent.
    pub found_at: Option<usize>,
}

/// Results of timing the hashing engine.
#[derive(Debug, Clone)]
pub struct HashingRun {
    /// Per-key build records from the final rebuild.
    pub entries: Vec<InputEntry>,
    /// Per-key retrieval records from the final search repetition.
    pub searches: Vec<SearchEntry>,
    /// How many search keys were found, per the final repetition.
    pub found: usize,
    /// Average wall-clock cost of one full table build.
    pub avg_store: Duration,
    /// Average wall-clock cost of one lookup.
    pub avg_search: Duration,
}

/// Results of timing the sorted engine.
#[derive(Debug, Clone)]
pub struct SortedRun {
    /// Counters from the final sort repetition.
    pub stats: SortStats,
    /// Per-key retrieval records from the final search repetition.
    pub searches: Vec<SearchEntry>,
    /// How many search keys were found, per the final repetition.
    pub found: usize,
    /// Average wall-clock cost of one full sort.
    pub avg_store: Duration,
    /// Average wall-clock cost of one binary search.
    pub avg_search: Duration,
}

/// Drives an engine's store and search phases a fixed number of times.
#[derive(Debug, Clone, Copy)]
pub struct Harness {
    store_reps: u32,
    search_reps: u32,
}

impl Harness {
    /// Historical repetition count for the hashing program.
    pub const DEFAULT_HASHING_REPETITIONS: u32 = 1_000_000;

    /// Historical repetition count for the sorted program.
    pub const DEFAULT_SORTED_REPETITIONS: u32 = 100_000;

    /// Creates a harness running `store_reps` store repetitions and
    /// `search_reps` search repetitions. Zero is clamped to one.
    pub fn new(store_reps: u32, search_reps: u32) -> Self {
        Self {
            store_reps: store_reps.max(1),
            search_reps: search_reps.max(1),
        }
    }

    /// Creates a harness running both phases `repetitions` times.
    pub fn with_repetitions(repetitions: u32) -> Self {
        Self::new(repetitions, repetitions)
    }

    /// Times the hashing engine over `keys` and `search_keys`.
    ///
    /// The table is rebuilt from scratch on every store repetition; the
    /// records and the table state left behind come from the final rebuild.
    pub fn run_hashing(
        &self,
        table: &mut ProbingTable,
        keys: &[i64],
        search_keys: &[i64],
    ) -> HashingRun {
        let mut entries = Vec::new();
        let started = Instant::now();
        for _ in 0..self.store_reps {
            entries = table.build(keys);
        }
        let avg_store = started.elapsed().div_f64(f64::from(self.store_reps));

        let mut searches: Vec<SearchEntry> = search_keys
            .iter()
            .map(|&key| SearchEntry {
                key,
                found_at: None,
            })
            .collect();

        let mut found = 0;
        let mut total = Duration::ZERO;
        for _ in 0..self.search_reps {
            found = 0;
            for entry in &mut searches {
                let started = Instant::now();
                let hit = table.lookup(entry.key);
                total += started.elapsed();

                entry.found_at = hit;
                if hit.is_some() {
                    found += 1;
                }
            }
        }
        let avg_search = self.per_lookup(total, searches.len());

        HashingRun {
            entries,
            searches,
            found,
            avg_store,
            avg_search,
        }
    }

    /// Times the sorted engine against `search_keys`.
    ///
    /// The working copy is restored to the unsorted input before every sort;
    /// the restore itself is outside the timed span. The engine is left
    /// sorted so the search phase (and the caller's report) can use it.
    pub fn run_sorted(&self, engine: &mut SortedSearch, search_keys: &[i64]) -> SortedRun {
        let mut stats = SortStats::default();
        let mut total = Duration::ZERO;
        for _ in 0..self.store_reps {
            engine.restore();
            let started = Instant::now();
            stats = engine.sort();
            total += started.elapsed();
        }
        let avg_store = total.div_f64(f64::from(self.store_reps));

        let mut searches: Vec<SearchEntry> = search_keys
            .iter()
            .map(|&key| SearchEntry {
                key,
                found_at: None,
            })
            .collect();

        let mut found = 0;
        total = Duration::ZERO;
        for _ in 0..self.search_reps {
            found = 0;
            for entry in &mut searches {
                let started = Instant::now();
                let hit = engine.search(entry.key);
                total += started.elapsed();

                entry.found_at = hit;
                if hit.is_some() {
                    found += 1;
                }
            }
        }
        let avg_search = self.per_lookup(total, searches.len());

        SortedRun {
            stats,
            searches,
            found,
            avg_store,
            avg_search,
        }
    }

    // Search time averages over repetitions × keys, not repetitions alone.
    fn per_lookup(&self, total: Duration, num_keys: usize) -> Duration {
        let ops = u64::from(self.search_reps) * num_keys as u64;
        total.div_f64(ops.max(1) as f64)
    }
}
