//! Bounded loading of integer datasets from disk.
//!
//! Both benchmark programs read two files: the keys to store and the keys to
//! look up. Each file holds whitespace-separated integers and is read up to a
//! fixed maximum count. An empty load is a hard stop for the caller, never a
//! partial run.

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Maximum number of keys loaded for storage.
pub const MAX_INPUT_KEYS: usize = 1000;

/// Maximum number of keys loaded for retrieval.
pub const MAX_SEARCH_KEYS: usize = 1000;

/// Reads at most `limit` integers from the file at `path`.
///
/// Values are whitespace separated; reading stops at the limit or at the
/// first token that does not parse as an integer. An unreadable file yields
/// [`Error::InputUnavailable`]; a readable file that produces no values
/// yields [`Error::EmptyDataset`].
pub fn load_keys(path: &Path, limit: usize) -> Result<Vec<i64>, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let keys = parse_keys(&text, limit)?;
    if keys.is_empty() {
        return Err(Error::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    Ok(keys)
}

fn parse_keys(text: &str, limit: usize) -> Result<Vec<i64>, Error> {
    let mut keys = Vec::new();
    keys.try_reserve(limit.min(text.len()))?;

    for token in text.split_whitespace() {
        if keys.len() == limit {
            break;
        }
        match token.parse::<i64>() {
            Ok(key) => keys.push(key),
            Err(_) => break,
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::process;

    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("probe-bench-{}-{}", process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_whitespace_separated_values() {
        let keys = parse_keys("1 2\n3\t4  -5\n", 100).unwrap();
        assert_eq!(keys, vec![1, 2, 3, 4, -5]);
    }

    #[test]
    fn test_parse_stops_at_limit() {
        let keys = parse_keys("1 2 3 4 5", 3).unwrap();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_stops_at_first_bad_token() {
        let keys = parse_keys("10 20 thirty 40", 100).unwrap();
        assert_eq!(keys, vec![10, 20]);
    }

    #[test]
    fn test_load_round_trip() {
        let path = scratch_file("roundtrip.txt", "7 14 21\n28\n");
        let keys = load_keys(&path, MAX_INPUT_KEYS).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(keys, vec![7, 14, 21, 28]);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let path = env::temp_dir().join("probe-bench-definitely-missing.txt");
        assert!(matches!(
            load_keys(&path, MAX_INPUT_KEYS),
            Err(Error::InputUnavailable { .. })
        ));
    }

    #[test]
    fn test_empty_file_is_an_empty_dataset() {
        let path = scratch_file("empty.txt", "  \n ");
        let result = load_keys(&path, MAX_SEARCH_KEYS);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::EmptyDataset { .. })));
    }
}
