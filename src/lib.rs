#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod dataset;
pub mod error;
pub mod harness;
pub mod probing;
pub mod report;
pub mod sorted;

pub use error::Error;
pub use harness::Harness;
pub use probing::ProbingTable;
pub use sorted::SortedSearch;
