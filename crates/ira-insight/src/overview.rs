use ira_core::entities::{FrameworksMap, LanguagesMap};
use serde::Serialize;

use crate::icons::icon_url;
use crate::infrastructure::dedupe_infrastructure;
use crate::ranking::{LanguageShare, Ranked, language_shares, rank_by_value, total_lines};

/// A label with its devicon URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub label: String,
    pub icon_url: String,
}

impl Technology {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            icon_url: icon_url(label),
        }
    }
}

/// The technologies page: ranked languages with shares, ranked framework
/// scores and the de-duplicated infrastructure list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyOverview {
    pub total_lines: u64,
    pub languages: Vec<LanguageShare>,
    pub frameworks: Vec<Ranked<f64>>,
    pub infrastructure: Vec<Technology>,
}

impl TechnologyOverview {
    #[must_use]
    pub fn build(
        languages: &LanguagesMap,
        frameworks: &FrameworksMap,
        infrastructure: &[String],
    ) -> Self {
        Self {
            total_lines: total_lines(languages),
            languages: language_shares(languages),
            frameworks: rank_by_value(frameworks),
            infrastructure: dedupe_infrastructure(infrastructure)
                .iter()
                .map(|label| Technology::new(label))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.frameworks.is_empty() && self.infrastructure.is_empty()
    }
}
