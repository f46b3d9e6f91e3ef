//! Algorithm enum for selecting the neighbour-counting strategy.
//!
//! Every variant must tag exactly the same cells; they only differ in how
//! the live-neighbour count is obtained from the generation snapshot.

use std::fmt;
use std::str::FromStr;

/// Available neighbour-counting strategies for the lifecycle pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Scan every live position with the adjacency predicate, O(cells × alive)
    NaiveScan,
    /// Look up the eight neighbour positions in the hashed snapshot, O(cells)
    #[default]
    Lookup,
    /// `Lookup` spread across the rayon pool
    LookupParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::NaiveScan,
            Algorithm::Lookup,
            Algorithm::LookupParallel,
        ]
    }

    /// Short name used on the command line and in logs
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::NaiveScan => "naive",
            Algorithm::Lookup => "lookup",
            Algorithm::LookupParallel => "parallel",
        }
    }

    /// One-line summary logged when a run starts
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::NaiveScan => "pairwise adjacency scan, serial",
            Algorithm::Lookup => "hashed neighbour lookup, serial",
            Algorithm::LookupParallel => "hashed neighbour lookup, parallel",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised algorithm name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{0}` (expected naive, lookup or parallel)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}
