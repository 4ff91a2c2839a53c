use std::fmt;

use serde::{Deserialize, Serialize};

/// Observation period a budget line belongs to.
///
/// The three periods are parallel datasets over the same category and
/// subcategory set: the user's present cycle, the previous cycle, and the
/// peer-cohort average.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Period {
    Current,
    Prior,
    Peer,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Current => "current",
            Period::Prior => "prior",
            Period::Peer => "peer",
        };
        f.write_str(label)
    }
}
