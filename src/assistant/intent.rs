use crate::analysis::{
    category_deltas, headroom_leader, notable_deltas, period_totals, top_subcategory, Direction,
    TrendDelta,
};
use crate::currency::{format_currency, format_percent};
use crate::domain::Period;
use crate::errors::InsightError;

use super::Assistant;

/// One dispatch rule: fires when the lowered question contains any of the
/// trigger keywords.
struct Rule {
    name: &'static str,
    keywords: &'static [&'static str],
    handler: fn(&Assistant) -> Result<String, InsightError>,
}

// Evaluated top to bottom, first match wins. The order is part of the
// contract: a question hitting several keywords answers via the earliest
// rule, never a "best" match.
const RULES: &[Rule] = &[
    Rule {
        name: "last_month",
        keywords: &["last month"],
        handler: answer_last_month,
    },
    Rule {
        name: "peer",
        keywords: &["peer", "compare"],
        handler: answer_peer,
    },
    Rule {
        name: "top_spend",
        keywords: &["most", "highest", "subcategory"],
        handler: answer_top_spend,
    },
    Rule {
        name: "surplus",
        keywords: &["surplus", "left"],
        handler: answer_surplus,
    },
    Rule {
        name: "loan",
        keywords: &["loan"],
        handler: answer_loan,
    },
    Rule {
        name: "headroom",
        keywords: &["headroom"],
        handler: answer_headroom,
    },
];

const FALLBACK: &str = "I can help with how your spending compares to last month or your peers, \
     your highest spend, your surplus, loan progress, and where you have the most headroom. \
     Try asking about one of those.";

/// Dispatches a free-text question to the first matching rule. Always
/// returns a reply; internal aggregation failures degrade to the fallback
/// so the conversational contract holds.
pub fn respond(assistant: &Assistant, question: &str) -> String {
    let lowered = question.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|keyword| lowered.contains(keyword)) {
            tracing::debug!(rule = rule.name, "question matched intent rule");
            return match (rule.handler)(assistant) {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::warn!(rule = rule.name, %err, "intent handler failed");
                    FALLBACK.to_string()
                }
            };
        }
    }
    tracing::debug!("question matched no intent rule");
    FALLBACK.to_string()
}

fn render_delta(delta: &TrendDelta, currency: &str) -> String {
    let amount = format_currency(delta.delta.abs(), currency);
    match delta.direction {
        Direction::Up => format!("{} \u{2191} (+{})", delta.category, amount),
        _ => format!("{} \u{2193} (-{})", delta.category, amount),
    }
}

fn answer_last_month(assistant: &Assistant) -> Result<String, InsightError> {
    let deltas = category_deltas(assistant.book(), Period::Current, Period::Prior)?;
    let moved: Vec<String> = deltas
        .iter()
        .filter(|delta| delta.direction != Direction::Flat)
        .map(|delta| render_delta(delta, &assistant.config().currency))
        .collect();
    if moved.is_empty() {
        return Ok("Your spending is unchanged from last month.".into());
    }
    Ok(format!("Compared to last month: {}.", moved.join(", ")))
}

fn answer_peer(assistant: &Assistant) -> Result<String, InsightError> {
    let notable = notable_deltas(
        assistant.book(),
        Period::Current,
        Period::Peer,
        assistant.config().materiality_threshold,
    )?;
    if notable.is_empty() {
        return Ok("Your spending is broadly similar to your peers this period.".into());
    }
    let rendered: Vec<String> = notable
        .iter()
        .map(|delta| render_delta(delta, &assistant.config().currency))
        .collect();
    Ok(format!("Compared to your peers: {}.", rendered.join(", ")))
}

fn answer_top_spend(assistant: &Assistant) -> Result<String, InsightError> {
    let top = top_subcategory(assistant.book(), Period::Current)?;
    Ok(format!(
        "Your highest spend is {} ({}) at {}.",
        top.subcategory,
        top.category,
        format_currency(top.actual_spent, &assistant.config().currency)
    ))
}

fn answer_surplus(assistant: &Assistant) -> Result<String, InsightError> {
    let totals = period_totals(assistant.book(), Period::Current)?;
    let surplus = totals.budgeted - totals.actual;
    let currency = &assistant.config().currency;
    if surplus > 0.0 {
        Ok(format!(
            "You have {} left across your budget. Consider moving it into savings or an extra loan payment.",
            format_currency(surplus, currency)
        ))
    } else {
        Ok(format!(
            "You're over your total budget by {}. Consider cutting back where you can.",
            format_currency(-surplus, currency)
        ))
    }
}

fn answer_loan(assistant: &Assistant) -> Result<String, InsightError> {
    let mut budgeted = 0.0;
    let mut actual = 0.0;
    let mut found = false;
    for line in assistant.book().lines_for(Period::Current) {
        if line.subcategory.to_lowercase().contains("loan") {
            budgeted += line.budgeted;
            actual += line.actual_spent;
            found = true;
        }
    }
    if !found {
        return Ok("I don't see any loan lines in your budget.".into());
    }
    let ratio = actual / budgeted;
    let config = assistant.config();
    let reply = if ratio > config.loan_complete_ratio {
        format!(
            "You've paid {} against a planned {}. Your loan payments are fully covered this period.",
            format_currency(actual, &config.currency),
            format_currency(budgeted, &config.currency)
        )
    } else if ratio > config.loan_progress_ratio {
        format!(
            "You're {} of the way through your planned loan payments. Nearly there!",
            format_percent(ratio)
        )
    } else {
        format!(
            "You've made {} of your planned loan payments so far.",
            format_percent(ratio)
        )
    };
    Ok(reply)
}

fn answer_headroom(assistant: &Assistant) -> Result<String, InsightError> {
    let (category, headroom) = headroom_leader(assistant.book(), Period::Current)?;
    Ok(format!(
        "{} has the most headroom, with {} remaining.",
        category,
        format_currency(headroom, &assistant.config().currency)
    ))
}
