//! Error types for dataset loading and engine construction.
//!
//! Every variant is fatal to a run: it is reported once and the process exits
//! non-zero before any timed work begins. Insertion overflow in the probing
//! table is deliberately *not* represented here; a key whose probe sequence
//! exhausts the table is silently absent from the stored set.

use std::collections::TryReserveError;
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal conditions that abort a run.
#[derive(Debug)]
pub enum Error {
    /// The file could not be opened or read.
    InputUnavailable {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file was readable but yielded no integer values.
    EmptyDataset {
        /// Path of the file that produced no values.
        path: PathBuf,
    },
    /// A non-positive hash table capacity was requested.
    InvalidCapacity(i64),
    /// Backing storage for a table or dataset could not be allocated.
    Allocation(TryReserveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputUnavailable { path, .. } => {
                write!(f, "cannot open file {}", path.display())
            }
            Error::EmptyDataset { path } => {
                write!(f, "no values loaded from file {}", path.display())
            }
            Error::InvalidCapacity(requested) => {
                write!(
                    f,
                    "hash table capacity must be greater than 0, got {}",
                    requested
                )
            }
            Error::Allocation(_) => write!(f, "couldn't allocate memory"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InputUnavailable { source, .. } => Some(source),
            Error::Allocation(source) => Some(source),
            _ => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(source: TryReserveError) -> Self {
        Error::Allocation(source)
    }
}
