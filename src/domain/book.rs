use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::InsightError;

use super::{budget_line::BudgetLine, period::Period};

const PERIODS: [Period; 3] = [Period::Current, Period::Prior, Period::Peer];

/// Validated, immutable collection of budget lines for one session.
///
/// Construction enforces every data-shape invariant so that downstream
/// analysis never has to re-check: positive budgets, non-negative spend,
/// unique `(period, category, subcategory)` triples, and an identical
/// category/subcategory set across all three periods.
///
/// On the wire a book is a plain array of lines; deserialization runs the
/// same checks as [`BudgetBook::from_lines`], so no unvalidated dataset can
/// reach analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<BudgetLine>", into = "Vec<BudgetLine>")]
pub struct BudgetBook {
    lines: Vec<BudgetLine>,
}

impl TryFrom<Vec<BudgetLine>> for BudgetBook {
    type Error = InsightError;

    fn try_from(lines: Vec<BudgetLine>) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}

impl From<BudgetBook> for Vec<BudgetLine> {
    fn from(book: BudgetBook) -> Self {
        book.lines
    }
}

impl BudgetBook {
    pub fn from_lines(lines: Vec<BudgetLine>) -> Result<Self, InsightError> {
        let mut seen: HashSet<(Period, String, String)> = HashSet::new();
        for line in &lines {
            if line.category.trim().is_empty() || line.subcategory.trim().is_empty() {
                return Err(InsightError::InvalidBudget {
                    category: line.category.clone(),
                    subcategory: line.subcategory.clone(),
                    reason: "category and subcategory must be non-empty".into(),
                });
            }
            if line.budgeted <= 0.0 {
                return Err(InsightError::InvalidBudget {
                    category: line.category.clone(),
                    subcategory: line.subcategory.clone(),
                    reason: format!("budgeted must be positive, got {}", line.budgeted),
                });
            }
            if line.actual_spent < 0.0 {
                return Err(InsightError::InvalidBudget {
                    category: line.category.clone(),
                    subcategory: line.subcategory.clone(),
                    reason: format!("actual_spent must be non-negative, got {}", line.actual_spent),
                });
            }
            if !seen.insert((line.period, line.category.clone(), line.subcategory.clone())) {
                return Err(InsightError::DuplicateLine {
                    period: line.period,
                    category: line.category.clone(),
                    subcategory: line.subcategory.clone(),
                });
            }
        }

        Self::check_alignment(&lines)?;

        tracing::debug!(line_count = lines.len(), "budget book validated");
        Ok(Self { lines })
    }

    /// Parses a JSON array of budget lines and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, InsightError> {
        let lines: Vec<BudgetLine> = serde_json::from_str(json)?;
        Self::from_lines(lines)
    }

    pub fn lines(&self) -> &[BudgetLine] {
        &self.lines
    }

    pub fn lines_for(&self, period: Period) -> impl Iterator<Item = &BudgetLine> {
        self.lines.iter().filter(move |line| line.period == period)
    }

    /// Category names in first-seen declaration order, deduplicated.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for line in &self.lines {
            if !out.contains(&line.category.as_str()) {
                out.push(&line.category);
            }
        }
        out
    }

    // Every period must carry the same (category, subcategory) pairs so
    // trend comparisons are always well-defined.
    fn check_alignment(lines: &[BudgetLine]) -> Result<(), InsightError> {
        let pair_set = |period: Period| -> BTreeSet<(&str, &str)> {
            lines
                .iter()
                .filter(|line| line.period == period)
                .map(|line| (line.category.as_str(), line.subcategory.as_str()))
                .collect()
        };
        let reference = pair_set(Period::Current);
        for period in PERIODS.into_iter().skip(1) {
            let got = pair_set(period);
            if got != reference {
                return Err(InsightError::MisalignedPeriods(format!(
                    "{period} period covers {} pairs, current covers {}",
                    got.len(),
                    reference.len()
                )));
            }
        }
        Ok(())
    }
}
