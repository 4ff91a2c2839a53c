use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::{BudgetBook, Period};
use crate::errors::InsightError;

use super::aggregate::{aggregate, GroupBy};

/// Direction of a spend delta between two periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

/// Spend difference for one category between a base and a reference period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendDelta {
    pub category: String,
    pub delta: f64,
    pub direction: Direction,
}

impl TrendDelta {
    fn from_totals(category: String, base: f64, reference: f64) -> Self {
        let delta = base - reference;
        let direction = match base.partial_cmp(&reference).unwrap_or(Ordering::Equal) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            Ordering::Equal => Direction::Flat,
        };
        Self {
            category,
            delta,
            direction,
        }
    }
}

/// Spend delta for one category, `base_period` minus `ref_period`.
pub fn compare(
    book: &BudgetBook,
    category: &str,
    base_period: Period,
    ref_period: Period,
) -> Result<TrendDelta, InsightError> {
    let deltas = category_deltas(book, base_period, ref_period)?;
    deltas
        .into_iter()
        .find(|delta| delta.category == category)
        .ok_or_else(|| InsightError::EmptyGroup(format!("category {category}")))
}

/// One delta per category, in declaration order.
pub fn category_deltas(
    book: &BudgetBook,
    base_period: Period,
    ref_period: Period,
) -> Result<Vec<TrendDelta>, InsightError> {
    let base = aggregate(book, base_period, GroupBy::Category)?;
    let reference = aggregate(book, ref_period, GroupBy::Category)?;
    let mut out = Vec::with_capacity(base.len());
    for (category, totals) in base {
        let ref_actual = reference
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, totals)| totals.actual)
            .ok_or_else(|| {
                InsightError::EmptyGroup(format!("category {category} in period {ref_period}"))
            })?;
        out.push(TrendDelta::from_totals(category, totals.actual, ref_actual));
    }
    Ok(out)
}

/// Like [`category_deltas`], but drops deltas whose absolute value does not
/// exceed `threshold`. Entries at exactly the threshold are omitted rather
/// than reported as flat.
pub fn notable_deltas(
    book: &BudgetBook,
    base_period: Period,
    ref_period: Period,
    threshold: f64,
) -> Result<Vec<TrendDelta>, InsightError> {
    let deltas = category_deltas(book, base_period, ref_period)?;
    Ok(deltas
        .into_iter()
        .filter(|delta| delta.delta.abs() > threshold)
        .collect())
}

/// Category with the most unused budget. Ties resolve to the category
/// declared first in the book.
pub fn headroom_leader(book: &BudgetBook, period: Period) -> Result<(String, f64), InsightError> {
    let groups = aggregate(book, period, GroupBy::Category)?;
    let mut best: Option<(String, f64)> = None;
    for (category, totals) in groups {
        let headroom = totals.budgeted - totals.actual;
        match &best {
            Some((_, current)) if headroom <= *current => {}
            _ => best = Some((category, headroom)),
        }
    }
    best.ok_or_else(|| InsightError::EmptyGroup(format!("period {period}")))
}

/// The line with the highest actual spend in a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopSubcategory {
    pub category: String,
    pub subcategory: String,
    pub actual_spent: f64,
}

/// Subcategory with the highest actual spend, first-declared wins ties.
pub fn top_subcategory(book: &BudgetBook, period: Period) -> Result<TopSubcategory, InsightError> {
    let mut best: Option<TopSubcategory> = None;
    for line in book.lines_for(period) {
        let beats = best
            .as_ref()
            .map(|current| line.actual_spent > current.actual_spent)
            .unwrap_or(true);
        if beats {
            best = Some(TopSubcategory {
                category: line.category.clone(),
                subcategory: line.subcategory.clone(),
                actual_spent: line.actual_spent,
            });
        }
    }
    best.ok_or_else(|| InsightError::EmptyGroup(format!("period {period}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BudgetLine;

    fn book() -> BudgetBook {
        let rows = [
            // category, subcategory, budgeted, current, prior, peer
            ("Groceries", "Food", 15000.0, 14500.0, 14500.0, 13000.0),
            ("Transport", "Fuel", 8000.0, 9200.0, 8000.0, 6000.0),
            ("Entertainment", "Streaming", 5000.0, 3000.0, 4800.0, 3000.0),
        ];
        let mut lines = Vec::new();
        for (category, subcategory, budgeted, current, prior, peer) in rows {
            lines.push(BudgetLine::new(
                Period::Current,
                category,
                subcategory,
                budgeted,
                current,
            ));
            lines.push(BudgetLine::new(
                Period::Prior,
                category,
                subcategory,
                budgeted,
                prior,
            ));
            lines.push(BudgetLine::new(
                Period::Peer,
                category,
                subcategory,
                budgeted,
                peer,
            ));
        }
        BudgetBook::from_lines(lines).expect("valid book")
    }

    #[test]
    fn compare_reports_delta_and_direction() {
        let delta = compare(&book(), "Transport", Period::Current, Period::Prior).unwrap();
        assert!((delta.delta - 1200.0).abs() < f64::EPSILON);
        assert_eq!(delta.direction, Direction::Up);

        let flat = compare(&book(), "Groceries", Period::Current, Period::Prior).unwrap();
        assert_eq!(flat.direction, Direction::Flat);
    }

    #[test]
    fn materiality_threshold_is_exclusive() {
        // Entertainment current vs peer is exactly 0; Transport is +3200,
        // Groceries is +1500.
        let notable = notable_deltas(&book(), Period::Current, Period::Peer, 1500.0).unwrap();
        let names: Vec<&str> = notable.iter().map(|d| d.category.as_str()).collect();
        assert_eq!(names, vec!["Transport"]);

        // Threshold equal to the delta still omits it.
        let none = notable_deltas(&book(), Period::Current, Period::Peer, 3200.0).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn headroom_leader_prefers_first_declared_on_tie() {
        // Groceries headroom 500, Transport -1200, Entertainment 2000.
        let (category, headroom) = headroom_leader(&book(), Period::Current).unwrap();
        assert_eq!(category, "Entertainment");
        assert!((headroom - 2000.0).abs() < f64::EPSILON);

        // Peer period: Groceries 2000 and Transport 2000 tie; Entertainment
        // also 2000. First declared wins.
        let (tied, _) = headroom_leader(&book(), Period::Peer).unwrap();
        assert_eq!(tied, "Groceries");
    }

    #[test]
    fn top_subcategory_by_actual_spend() {
        let top = top_subcategory(&book(), Period::Current).unwrap();
        assert_eq!(top.category, "Groceries");
        assert_eq!(top.subcategory, "Food");
        assert!((top.actual_spent - 14500.0).abs() < f64::EPSILON);
    }
}
