//! Human-readable run reports.
//!
//! Both programs print the same report skeleton: a banner, where the data
//! came from, stored/searched/found counts, storage details specific to the
//! engine, per-key retrieval results, and the averaged execution times. The
//! formatters implement [`Display`] so they can be rendered anywhere, tested
//! as strings, and printed with a single `print!`.

use std::fmt;
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

use crate::harness::HashingRun;
use crate::harness::SearchEntry;
use crate::harness::SortedRun;
use crate::probing::ProbingTable;

const BANNER: &str = "Data storage and retrieval:\n\
                      a comparison of hashing and directed search of sorted data\n\
                      ================================\n";

const RULE: &str = "================================\n";

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn write_header(
    f: &mut fmt::Formatter<'_>,
    input_path: &Path,
    search_path: &Path,
    method: &str,
) -> fmt::Result {
    f.write_str(BANNER)?;
    writeln!(f)?;
    writeln!(f, "Input data loaded from file {}", input_path.display())?;
    writeln!(f, "Retrieval data loaded from file {}", search_path.display())?;
    writeln!(f, "Storage Method: {}", method)
}

fn write_times(f: &mut fmt::Formatter<'_>, store: Duration, search: Duration) -> fmt::Result {
    writeln!(f, "Execution times:")?;
    writeln!(f)?;
    writeln!(f, "  Time to store data: {:.6} ms", millis(store))?;
    writeln!(f, "  Time to retrieve data: {:.6} ms", millis(search))?;
    writeln!(f)
}

fn write_retrievals(
    f: &mut fmt::Formatter<'_>,
    searches: &[SearchEntry],
    structure: &str,
) -> fmt::Result {
    writeln!(f, "Retrieval details:")?;
    writeln!(f)?;
    for entry in searches {
        match entry.found_at {
            Some(index) => writeln!(
                f,
                "  Value {} found in the {} at position {}",
                entry.key, structure, index
            )?,
            None => writeln!(f, "  Value {} not found in the {}", entry.key, structure)?,
        }
    }
    writeln!(f)
}

/// Report for the hashing program.
#[derive(Debug)]
pub struct HashingReport<'a> {
    /// Where the stored keys came from.
    pub input_path: &'a Path,
    /// Where the search keys came from.
    pub search_path: &'a Path,
    /// The table in its final built state.
    pub table: &'a ProbingTable,
    /// The timed run being reported.
    pub run: &'a HashingRun,
}

impl Display for HashingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.input_path, self.search_path, "Hashing")?;
        writeln!(
            f,
            "Number of items stored in the hash table: {}",
            self.table.occupied()
        )?;
        writeln!(f, "Number of items searched: {}", self.run.searches.len())?;
        writeln!(f, "Number of items found: {}", self.run.found)?;
        writeln!(f)?;

        writeln!(f, "Storage details:")?;
        writeln!(f)?;
        writeln!(f, "  Hash table size: {}", self.table.capacity())?;
        for entry in &self.run.entries {
            for &index in &entry.collisions {
                writeln!(
                    f,
                    "  Collision occurred saving item with value {} at hash table location {}",
                    entry.key, index
                )?;
            }
        }
        writeln!(f)?;

        write_retrievals(f, &self.run.searches, "hash table")?;
        write_times(f, self.run.avg_store, self.run.avg_search)?;

        writeln!(f, "Hash table is {:3.0}% full.", self.table.fill_percent())?;
        writeln!(f)?;
        f.write_str(RULE)
    }
}

/// Report for the sorted program.
#[derive(Debug)]
pub struct SortedReport<'a> {
    /// Where the stored keys came from.
    pub input_path: &'a Path,
    /// Where the search keys came from.
    pub search_path: &'a Path,
    /// Number of keys held in the sorted array.
    pub stored: usize,
    /// The timed run being reported.
    pub run: &'a SortedRun,
}

impl Display for SortedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(
            f,
            self.input_path,
            self.search_path,
            "Directed search of sorted data",
        )?;
        writeln!(f, "Number of items stored in the array: {}", self.stored)?;
        writeln!(f, "Number of items searched: {}", self.run.searches.len())?;
        writeln!(f, "Number of items found: {}", self.run.found)?;
        writeln!(f)?;

        writeln!(f, "Storage details:")?;
        writeln!(f)?;
        writeln!(f, "  <{}> comparisons performed", self.run.stats.comparisons)?;
        writeln!(f, "  <{}> swaps performed", self.run.stats.swaps)?;
        writeln!(f)?;

        write_retrievals(f, &self.run.searches, "sorted array")?;
        write_times(f, self.run.avg_store, self.run.avg_search)?;
        f.write_str(RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Harness;
    use crate::sorted::SortedSearch;

    #[test]
    fn test_hashing_report_carries_the_contract_fields() {
        let mut table = ProbingTable::with_capacity(7).unwrap();
        let harness = Harness::with_repetitions(1);
        let run = harness.run_hashing(&mut table, &[3, 10, 17], &[10, 99]);

        let rendered = HashingReport {
            input_path: Path::new("input.txt"),
            search_path: Path::new("search.txt"),
            table: &table,
            run: &run,
        }
        .to_string();

        assert!(rendered.contains("Input data loaded from file input.txt"));
        assert!(rendered.contains("Retrieval data loaded from file search.txt"));
        assert!(rendered.contains("Storage Method: Hashing"));
        assert!(rendered.contains("Number of items stored in the hash table: 3"));
        assert!(rendered.contains("Number of items searched: 2"));
        assert!(rendered.contains("Number of items found: 1"));
        assert!(rendered.contains("Hash table size: 7"));
        assert!(rendered.contains(
            "Collision occurred saving item with value 10 at hash table location 3"
        ));
        assert!(rendered.contains("Value 10 found in the hash table at position 4"));
        assert!(rendered.contains("Value 99 not found in the hash table"));
        assert!(rendered.contains("Time to store data:"));
        assert!(rendered.contains("Time to retrieve data:"));
        assert!(rendered.contains("% full."));
    }

    #[test]
    fn test_sorted_report_carries_the_contract_fields() {
        let mut engine = SortedSearch::new(&[5, 3, 8, 1]).unwrap();
        let harness = Harness::with_repetitions(1);
        let run = harness.run_sorted(&mut engine, &[5, 4]);

        let rendered = SortedReport {
            input_path: Path::new("input.txt"),
            search_path: Path::new("search.txt"),
            stored: engine.len(),
            run: &run,
        }
        .to_string();

        assert!(rendered.contains("Storage Method: Directed search of sorted data"));
        assert!(rendered.contains("Number of items stored in the array: 4"));
        assert!(rendered.contains("<6> comparisons performed"));
        assert!(rendered.contains("<2> swaps performed"));
        assert!(rendered.contains("Value 5 found in the sorted array at position 2"));
        assert!(rendered.contains("Value 4 not found in the sorted array"));
    }
}
