//! Entry points for the presentation layer: the category overview that
//! feeds the dashboard and the question-answering endpoint that feeds the
//! chat transcript. Chat history stays with the caller; every answer is a
//! pure function of the dataset, the config, and the question.

pub mod intent;

use serde::{Deserialize, Serialize};

use crate::analysis::{advise, classify, rank_categories, GroupTotals, Severity};
use crate::config::AssistantConfig;
use crate::domain::{BudgetBook, Period};
use crate::errors::InsightError;

/// One dashboard row: a budget line with its derived ratio, severity, and
/// recommendation. Severity and advice are only meaningful against the
/// user's present obligations, so rows for other periods leave them blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverviewRow {
    pub category: String,
    pub subcategory: String,
    pub budgeted: f64,
    pub actual_spent: f64,
    pub ratio: f64,
    pub status: Option<Severity>,
    pub advice: Option<String>,
}

/// Analytic core for one session. Owns the validated dataset and the
/// tunable constants; holds no other state between calls.
#[derive(Debug, Clone)]
pub struct Assistant {
    book: BudgetBook,
    config: AssistantConfig,
}

impl Assistant {
    pub fn new(book: BudgetBook, config: AssistantConfig) -> Self {
        Self { book, config }
    }

    pub fn with_defaults(book: BudgetBook) -> Self {
        Self::new(book, AssistantConfig::default())
    }

    pub fn book(&self) -> &BudgetBook {
        &self.book
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Current-period overview rows in declaration order.
    pub fn category_overview(&self) -> Result<Vec<OverviewRow>, InsightError> {
        self.overview_for(Period::Current)
    }

    /// Overview rows for any period. Status and advice are populated only
    /// for the current period; they are undefined for prior and peer lines.
    pub fn overview_for(&self, period: Period) -> Result<Vec<OverviewRow>, InsightError> {
        let rows: Vec<OverviewRow> = self
            .book
            .lines_for(period)
            .map(|line| {
                let ratio = line.spent_ratio();
                let (status, advice) = if period == Period::Current {
                    (Some(classify(ratio)), Some(advise(ratio, &line.category)))
                } else {
                    (None, None)
                };
                OverviewRow {
                    category: line.category.clone(),
                    subcategory: line.subcategory.clone(),
                    budgeted: line.budgeted,
                    actual_spent: line.actual_spent,
                    ratio,
                    status,
                    advice,
                }
            })
            .collect();
        if rows.is_empty() {
            return Err(InsightError::EmptyGroup(format!("period {period}")));
        }
        Ok(rows)
    }

    /// Top `n` categories by current spend, for the dashboard summary strip.
    pub fn top_categories(&self, n: usize) -> Result<Vec<(String, GroupTotals)>, InsightError> {
        rank_categories(&self.book, Period::Current, n)
    }

    /// Answers a free-text or preset question. Never fails; unmatched
    /// questions get the fixed fallback reply.
    pub fn answer_question(&self, question: &str) -> String {
        let reply = intent::respond(self, question);
        tracing::info!(question, "answered budget question");
        reply
    }
}
