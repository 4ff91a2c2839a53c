use serde::{Deserialize, Serialize};

use super::period::Period;

/// One budget observation: an allocation and the spend recorded against it.
///
/// Derived values (spend ratio, headroom) are computed on demand rather than
/// stored, so a line never carries state that can go stale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLine {
    pub period: Period,
    pub category: String,
    pub subcategory: String,
    pub budgeted: f64,
    pub actual_spent: f64,
}

impl BudgetLine {
    pub fn new(
        period: Period,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        budgeted: f64,
        actual_spent: f64,
    ) -> Self {
        Self {
            period,
            category: category.into(),
            subcategory: subcategory.into(),
            budgeted,
            actual_spent,
        }
    }

    /// Spend as a fraction of the allocation. Callers rely on the book
    /// having rejected zero or negative budgets at load time.
    pub fn spent_ratio(&self) -> f64 {
        self.actual_spent / self.budgeted
    }

    /// Unused allocation remaining; negative once the line is over budget.
    pub fn headroom(&self) -> f64 {
        self.budgeted - self.actual_spent
    }
}
