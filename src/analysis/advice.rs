use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Advice flavor for a category, inferred from its name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Loan,
    Savings,
    Generic,
}

impl CategoryKind {
    /// Loan wins over savings when a name matches both.
    pub fn of(category: &str) -> Self {
        let lowered = category.to_lowercase();
        if lowered.contains("loan") || lowered.contains("debt") {
            CategoryKind::Loan
        } else if lowered.contains("saving") || lowered.contains("goal") {
            CategoryKind::Savings
        } else {
            CategoryKind::Generic
        }
    }
}

/// One ratio band: applies while the ratio is below `upper`. The last band
/// of every table is open-ended.
struct Band {
    upper: f64,
    template: &'static str,
}

// Loan and savings categories read utilization inverted from the generic
// framing: a loan near full utilization is good news, not an overrun.
static ADVICE_BANDS: Lazy<HashMap<CategoryKind, Vec<Band>>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    tables.insert(
        CategoryKind::Loan,
        vec![
            Band {
                upper: 0.75,
                template: "Keep up your {category} payments to stay on schedule.",
            },
            Band {
                upper: 1.0,
                template: "You're close to completing your {category} payments for this period. Great job staying on track!",
            },
            Band {
                upper: f64::INFINITY,
                template: "Your {category} payments are fully covered for this period. Well done!",
            },
        ],
    );
    tables.insert(
        CategoryKind::Savings,
        vec![
            Band {
                upper: 0.5,
                template: "Consider automating contributions to boost your {category} this period.",
            },
            Band {
                upper: f64::INFINITY,
                template: "Solid progress on your {category}. Keep contributing!",
            },
        ],
    );
    tables.insert(
        CategoryKind::Generic,
        vec![
            Band {
                upper: 0.5,
                template: "You're well under budget in {category}. Could this be a chance to grow your savings?",
            },
            Band {
                upper: 0.75,
                template: "You're on track in {category}. Keep it up.",
            },
            Band {
                upper: 1.0,
                template: "You're nearing your {category} limit. Consider easing off for the rest of the period.",
            },
            Band {
                upper: f64::INFINITY,
                template: "You've exceeded your {category} budget. Consider rebalancing from a category with headroom.",
            },
        ],
    );
    tables
});

/// Templated recommendation for a category at a given spend ratio. Total
/// over ratio >= 0 and never empty; category kind picks the band table.
pub fn advise(ratio: f64, category: &str) -> String {
    let kind = CategoryKind::of(category);
    let bands = &ADVICE_BANDS[&kind];
    let band = bands
        .iter()
        .find(|band| ratio < band.upper)
        .unwrap_or_else(|| bands.last().expect("band tables are non-empty"));
    band.template.replace("{category}", category)
}
