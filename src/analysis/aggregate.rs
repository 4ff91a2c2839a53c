use serde::{Deserialize, Serialize};

use crate::domain::{BudgetBook, Period};
use crate::errors::InsightError;

/// Grouping axis for an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Subcategory,
}

/// Summed allocation and spend for one group, with the ratio computed from
/// the sums. Summing first weights the ratio by budget size instead of
/// treating every subcategory equally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GroupTotals {
    pub budgeted: f64,
    pub actual: f64,
    pub ratio: f64,
}

impl GroupTotals {
    pub fn from_sums(budgeted: f64, actual: f64) -> Self {
        Self {
            budgeted,
            actual,
            ratio: actual / budgeted,
        }
    }
}

/// Groups the book's lines for one period and sums budgeted and actual
/// spend per group. Output keeps first-seen declaration order; callers
/// wanting a ranking sort explicitly via [`rank_categories`].
///
/// Subcategory groups are scoped by their category: a subcategory name
/// reused under two categories stays two groups, since uniqueness is only
/// guaranteed within `(period, category)`.
pub fn aggregate(
    book: &BudgetBook,
    period: Period,
    group_by: GroupBy,
) -> Result<Vec<(String, GroupTotals)>, InsightError> {
    let mut order: Vec<(Option<&str>, &str)> = Vec::new();
    let mut sums: Vec<(f64, f64)> = Vec::new();
    for line in book.lines_for(period) {
        let key: (Option<&str>, &str) = match group_by {
            GroupBy::Category => (None, &line.category),
            GroupBy::Subcategory => (Some(&line.category), &line.subcategory),
        };
        match order.iter().position(|existing| *existing == key) {
            Some(idx) => {
                sums[idx].0 += line.budgeted;
                sums[idx].1 += line.actual_spent;
            }
            None => {
                order.push(key);
                sums.push((line.budgeted, line.actual_spent));
            }
        }
    }
    if order.is_empty() {
        return Err(InsightError::EmptyGroup(format!("period {period}")));
    }
    Ok(order
        .into_iter()
        .zip(sums)
        .map(|((_, label), (budgeted, actual))| {
            (label.to_string(), GroupTotals::from_sums(budgeted, actual))
        })
        .collect())
}

/// Whole-period totals across every line, with the same emptiness rule as
/// [`aggregate`].
pub fn period_totals(book: &BudgetBook, period: Period) -> Result<GroupTotals, InsightError> {
    let mut budgeted = 0.0;
    let mut actual = 0.0;
    let mut seen = false;
    for line in book.lines_for(period) {
        budgeted += line.budgeted;
        actual += line.actual_spent;
        seen = true;
    }
    if !seen {
        return Err(InsightError::EmptyGroup(format!("period {period}")));
    }
    Ok(GroupTotals::from_sums(budgeted, actual))
}

/// Top `n` categories by actual spend. The sort is stable, so categories
/// with identical spend keep their declaration order.
pub fn rank_categories(
    book: &BudgetBook,
    period: Period,
    top_n: usize,
) -> Result<Vec<(String, GroupTotals)>, InsightError> {
    let mut groups = aggregate(book, period, GroupBy::Category)?;
    groups.sort_by(|a, b| b.1.actual.total_cmp(&a.1.actual));
    groups.truncate(top_n);
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BudgetLine;

    fn sample_book() -> BudgetBook {
        let mut lines = Vec::new();
        for (category, subcategory, budgeted, actual) in [
            ("Groceries", "Food", 10000.0, 9000.0),
            ("Groceries", "Household", 5000.0, 5500.0),
            ("Transport", "Fuel", 8000.0, 9200.0),
        ] {
            for period in [Period::Current, Period::Prior, Period::Peer] {
                lines.push(BudgetLine::new(period, category, subcategory, budgeted, actual));
            }
        }
        BudgetBook::from_lines(lines).expect("valid book")
    }

    #[test]
    fn sums_then_computes_ratio() {
        let groups = aggregate(&sample_book(), Period::Current, GroupBy::Category)
            .expect("non-empty period");
        let (name, totals) = &groups[0];
        assert_eq!(name, "Groceries");
        assert!((totals.budgeted - 15000.0).abs() < f64::EPSILON);
        assert!((totals.actual - 14500.0).abs() < f64::EPSILON);
        // 14500 / 15000, not the mean of 0.9 and 1.1
        assert!((totals.ratio - 14500.0 / 15000.0).abs() < 1e-12);
    }

    #[test]
    fn ratio_is_stable_under_uniform_scaling() {
        let base = aggregate(&sample_book(), Period::Current, GroupBy::Category).unwrap();
        let scaled_lines: Vec<BudgetLine> = sample_book()
            .lines()
            .iter()
            .map(|line| {
                BudgetLine::new(
                    line.period,
                    line.category.clone(),
                    line.subcategory.clone(),
                    line.budgeted * 7.0,
                    line.actual_spent * 7.0,
                )
            })
            .collect();
        let scaled_book = BudgetBook::from_lines(scaled_lines).unwrap();
        let scaled = aggregate(&scaled_book, Period::Current, GroupBy::Category).unwrap();
        for ((_, before), (_, after)) in base.iter().zip(&scaled) {
            assert!((before.ratio - after.ratio).abs() < 1e-12);
        }
    }

    #[test]
    fn preserves_declaration_order() {
        let groups = aggregate(&sample_book(), Period::Current, GroupBy::Subcategory).unwrap();
        let keys: Vec<&str> = groups.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["Food", "Household", "Fuel"]);
    }

    #[test]
    fn same_subcategory_name_under_two_categories_stays_separate() {
        let mut lines = Vec::new();
        for (category, budgeted, actual) in
            [("Home", 2000.0, 500.0), ("Office", 3000.0, 2900.0)]
        {
            for period in [Period::Current, Period::Prior, Period::Peer] {
                lines.push(BudgetLine::new(period, category, "Internet", budgeted, actual));
            }
        }
        let book = BudgetBook::from_lines(lines).expect("valid book");
        let groups = aggregate(&book, Period::Current, GroupBy::Subcategory).unwrap();
        assert_eq!(groups.len(), 2);
        assert!((groups[0].1.budgeted - 2000.0).abs() < f64::EPSILON);
        assert!((groups[1].1.budgeted - 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_period_is_an_error() {
        let book = BudgetBook::from_lines(Vec::new()).expect("empty book is aligned");
        let err = aggregate(&book, Period::Current, GroupBy::Category)
            .expect_err("no lines should error");
        assert!(matches!(err, InsightError::EmptyGroup(_)));
    }

    #[test]
    fn ranking_sorts_by_actual_spend() {
        let ranked = rank_categories(&sample_book(), Period::Current, 1).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, "Groceries");
    }
}
