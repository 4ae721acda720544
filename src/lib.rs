#![warn(missing_docs)]

//! Approximate pattern matching with Sellers' algorithm.
//!
//! Finds every text position where a pattern ends within a cost threshold and
//! enumerates all optimal alignments of the best occurrences.

pub mod align;
pub mod backtrace;
pub mod cigar;
pub mod config;
pub mod cost;
pub mod cutoff;
pub mod direction;
pub mod error;
pub mod full;
pub mod mode;
pub mod render;
pub mod search;
pub mod seq;

pub use align::Alignment;
pub use config::SearchConfig;
pub use cost::CostModel;
pub use error::SearchError;
pub use mode::Algorithm;
pub use search::{find_minimal_cost_alignments, AlignedOccurrence, OccurrenceReport};
