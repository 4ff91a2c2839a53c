use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tier for a spend ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    WellBelow,
    OnTrack,
    NearLimit,
    OverBudget,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::WellBelow => "Well Below",
            Severity::OnTrack => "On Track",
            Severity::NearLimit => "Near Limit",
            Severity::OverBudget => "Over Budget",
        };
        f.write_str(label)
    }
}

/// Maps a spend ratio to its severity tier. Total over ratio >= 0; each
/// band is inclusive below and exclusive above, so 0.75 is already
/// `NearLimit` and 1.0 is already `OverBudget`.
pub fn classify(ratio: f64) -> Severity {
    if ratio < 0.5 {
        Severity::WellBelow
    } else if ratio < 0.75 {
        Severity::OnTrack
    } else if ratio < 1.0 {
        Severity::NearLimit
    } else {
        Severity::OverBudget
    }
}
