//! Rule-based intent extraction.
//!
//! Turns a free-text message into a structured [`Query`]. Deliberately a
//! fixed-rule parser rather than a statistical one: the same input always
//! produces the same query.

use crate::services::lexicon::{self, CategoryKey, Region};

/// Structured query derived from one user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// None means "all categories" (no catalog-side filter).
    pub category: Option<CategoryKey>,
    /// Lookback window in days.
    pub days: u32,
    pub region: Region,
}

const DEFAULT_DAYS: u32 = 7;

/// Extract category, lookback days and region from a message.
///
/// Never fails: missing cues degrade to defaults (all categories, 7 days,
/// all regions).
pub fn extract(message: &str) -> Query {
    let lower = message.to_lowercase();

    Query {
        category: lexicon::detect_category(&lower),
        days: extract_days(&lower),
        region: lexicon::detect_region(&lower),
    }
}

/// Temporal phrases, checked in precedence order. Bare "week"/"month"/"year"
/// only count when neither "past" nor "last" occurs anywhere in the message.
fn extract_days(lower: &str) -> u32 {
    if lower.contains("past week") || lower.contains("last week") {
        7
    } else if lower.contains("past month") || lower.contains("last month") {
        30
    } else if lower.contains("past year") || lower.contains("last year") {
        365
    } else if lower.contains("today") {
        1
    } else if lower.contains("yesterday") {
        2
    } else if lower.contains("week") && !lower.contains("past") && !lower.contains("last") {
        7
    } else if lower.contains("month") && !lower.contains("past") && !lower.contains("last") {
        30
    } else if lower.contains("year") && !lower.contains("past") && !lower.contains("last") {
        365
    } else {
        DEFAULT_DAYS
    }
}
