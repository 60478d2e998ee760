//! Descending ranking of labelled values and language shares.

use std::cmp::Ordering;

use ira_core::LabelMap;
use ira_core::entities::LanguagesMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<V> {
    pub label: String,
    pub value: V,
}

/// Sort descending by value. Equal values keep their relative order, so
/// ranking an already ranked list changes nothing.
#[must_use]
pub fn rank<V: PartialOrd>(mut entries: Vec<Ranked<V>>) -> Vec<Ranked<V>> {
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    entries
}

#[must_use]
pub fn rank_by_value<V: PartialOrd + Clone>(map: &LabelMap<V>) -> Vec<Ranked<V>> {
    rank(
        map.iter()
            .map(|(label, value)| Ranked {
                label: label.to_string(),
                value: value.clone(),
            })
            .collect(),
    )
}

/// One language's line count and share of the codebase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,
    pub lines: u64,
    pub percentage: f64,
}

impl LanguageShare {
    /// Share with one decimal, e.g. `42.5%`.
    #[must_use]
    pub fn display_percentage(&self) -> String {
        format_share(self.percentage)
    }
}

/// `count / total * 100`, or `0` when `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

#[must_use]
pub fn format_share(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

#[must_use]
pub fn total_lines(languages: &LanguagesMap) -> u64 {
    languages.values().copied().fold(0_u64, u64::saturating_add)
}

/// Languages ranked by line count, each with its share of the total.
#[must_use]
pub fn language_shares(languages: &LanguagesMap) -> Vec<LanguageShare> {
    let total = total_lines(languages);
    rank_by_value(languages)
        .into_iter()
        .map(|Ranked { label, value }| LanguageShare {
            language: label,
            lines: value,
            percentage: percentage(value, total),
        })
        .collect()
}
