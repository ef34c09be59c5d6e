//! Selection sort plus binary search over an owned copy of the input.
//!
//! The engine owns two buffers: the original key sequence exactly as loaded,
//! and a working copy that sorting mutates in place. The caller's data is
//! never touched, and [`SortedSearch::restore`] rewinds the working copy so
//! repeated timing runs always sort the same unsorted sequence.

use crate::error::Error;

/// Counters produced by one run of the selection sort.
///
/// Comparisons are counted once per scanned element, whether or not the
/// minimum changes. Swaps are counted only when an actual exchange happens;
/// a minimum already sitting in its final position counts zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Element comparisons performed while scanning for minima.
    pub comparisons: u64,
    /// Element exchanges performed.
    pub swaps: u64,
}

/// The sorted-array storage engine: selection sort, then binary search.
///
/// # Examples
///
/// ```rust
/// use probe_bench::SortedSearch;
///
/// let mut engine = SortedSearch::new(&[5, 3, 8, 1]).unwrap();
/// let stats = engine.sort();
///
/// assert_eq!(engine.as_slice(), &[1, 3, 5, 8]);
/// assert_eq!(stats.comparisons, 6);
/// assert_eq!(engine.search(5), Some(2));
/// assert_eq!(engine.search(4), None);
/// ```
#[derive(Debug, Clone)]
pub struct SortedSearch {
    original: Vec<i64>,
    working: Vec<i64>,
}

impl SortedSearch {
    /// Creates an engine owning a copy of `keys`.
    ///
    /// Returns [`Error::Allocation`] if the copies cannot be allocated. An
    /// empty sequence is accepted: sorting it counts nothing and every search
    /// reports absence.
    pub fn new(keys: &[i64]) -> Result<Self, Error> {
        let mut original = Vec::new();
        original.try_reserve_exact(keys.len())?;
        original.extend_from_slice(keys);

        let mut working = Vec::new();
        working.try_reserve_exact(keys.len())?;
        working.extend_from_slice(keys);

        Ok(Self { original, working })
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Returns `true` if the engine holds no keys.
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Returns the working copy, sorted or not depending on what ran last.
    pub fn as_slice(&self) -> &[i64] {
        &self.working
    }

    /// Rewinds the working copy to the original unsorted sequence.
    pub fn restore(&mut self) {
        self.working.copy_from_slice(&self.original);
    }

    /// Sorts the working copy ascending, in place, by selection sort.
    ///
    /// For each position the unsorted suffix is scanned for its minimum; the
    /// scan charges one comparison per element looked at. The minimum is then
    /// swapped into place, charging one swap, unless it is already there.
    pub fn sort(&mut self) -> SortStats {
        let data = &mut self.working;
        let mut stats = SortStats::default();
        if data.len() < 2 {
            return stats;
        }

        for i in 0..data.len() - 1 {
            let mut smallest = i;
            for j in i + 1..data.len() {
                if data[j] < data[smallest] {
                    smallest = j;
                }
                stats.comparisons += 1;
            }
            if smallest != i {
                data.swap(i, smallest);
                stats.swaps += 1;
            }
        }

        stats
    }

    /// Binary-searches the working copy for `value`.
    ///
    /// Only meaningful after [`sort`](Self::sort). Maintains inclusive
    /// `[left, right]` bounds over the whole range, halving at the floor
    /// midpoint, and returns the matching index as soon as the midpoint
    /// equals `value`; `None` once the bounds cross.
    pub fn search(&self, value: i64) -> Option<usize> {
        let data = &self.working;
        let mut left: isize = 0;
        let mut right: isize = data.len() as isize - 1;

        while left <= right {
            let middle = (left + right) / 2;
            let probed = data[middle as usize];
            if probed < value {
                left = middle + 1;
            } else if probed > value {
                right = middle - 1;
            } else {
                return Some(middle as usize);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn test_golden_scenario_sort_counters() {
        let mut engine = SortedSearch::new(&[5, 3, 8, 1]).unwrap();
        let stats = engine.sort();

        assert_eq!(engine.as_slice(), &[1, 3, 5, 8]);
        assert_eq!(stats.comparisons, 6);
        // Position 0 swaps 5 and 1, position 1 finds 3 already in place,
        // position 2 swaps 8 and 5.
        assert_eq!(stats.swaps, 2);
    }

    #[test]
    fn test_sort_does_not_touch_the_callers_data() {
        let keys = vec![9, 2, 7];
        let mut engine = SortedSearch::new(&keys).unwrap();
        engine.sort();

        assert_eq!(keys, vec![9, 2, 7]);
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let keys: Vec<i64> = (0..200).map(|_| rng.random_range(-50..50)).collect();

        let mut engine = SortedSearch::new(&keys).unwrap();
        engine.sort();

        let mut expected = keys.clone();
        expected.sort_unstable();
        assert_eq!(engine.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_second_sort_swaps_nothing_but_still_compares() {
        let mut engine = SortedSearch::new(&[5, 3, 8, 1]).unwrap();
        let first = engine.sort();
        let second = engine.sort();

        assert_eq!(engine.as_slice(), &[1, 3, 5, 8]);
        assert_eq!(second.swaps, 0);
        assert_eq!(second.comparisons, first.comparisons);
    }

    #[test]
    fn test_empty_and_single_element_count_nothing() {
        let mut empty = SortedSearch::new(&[]).unwrap();
        assert_eq!(empty.sort(), SortStats::default());
        assert_eq!(empty.search(1), None);

        let mut single = SortedSearch::new(&[42]).unwrap();
        assert_eq!(single.sort(), SortStats::default());
        assert_eq!(single.search(42), Some(0));
    }

    #[test]
    fn test_restore_rewinds_the_working_copy() {
        let mut engine = SortedSearch::new(&[5, 3, 8, 1]).unwrap();
        engine.sort();
        engine.restore();

        assert_eq!(engine.as_slice(), &[5, 3, 8, 1]);
    }

    #[test]
    fn test_golden_scenario_binary_search() {
        let mut engine = SortedSearch::new(&[8, 5, 1, 3]).unwrap();
        engine.sort();

        assert_eq!(engine.as_slice(), &[1, 3, 5, 8]);
        assert_eq!(engine.search(5), Some(2));
        assert_eq!(engine.search(4), None);
    }

    #[test]
    fn test_search_boundaries() {
        let mut engine = SortedSearch::new(&[40, 10, 30, 20]).unwrap();
        engine.sort();

        assert_eq!(engine.search(10), Some(0));
        assert_eq!(engine.search(40), Some(3));
        assert_eq!(engine.search(5), None);
        assert_eq!(engine.search(45), None);
    }

    #[test]
    fn test_search_agrees_with_membership() {
        let mut rng = SmallRng::seed_from_u64(0xbeef);
        let keys: Vec<i64> = (0..128).map(|_| rng.random_range(-100..100)).collect();
        let mut engine = SortedSearch::new(&keys).unwrap();
        engine.sort();

        for value in -110..110 {
            match engine.search(value) {
                Some(index) => assert_eq!(engine.as_slice()[index], value),
                None => assert!(!keys.contains(&value)),
            }
        }
    }
}
