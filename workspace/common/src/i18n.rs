//! Dashboard label translation: the supported languages, the fixed batch of
//! source strings, and the translated set assembled from a batch response.

use serde::{Deserialize, Serialize};

/// Languages the dashboard can be translated into. Serializes as the
/// lowercase language code the translation service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
    Bn,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Hi, Language::Ta, Language::Bn];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Bn => "bn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-in" => Some(Language::En),
            "hi" | "hi-in" => Some(Language::Hi),
            "ta" | "ta-in" => Some(Language::Ta),
            "bn" | "bn-in" => Some(Language::Bn),
            _ => None,
        }
    }

    /// Native-script name shown in the language selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Ta => "தமிழ்",
            Language::Bn => "বাংলা",
        }
    }
}

/// The source strings sent to the translation service, in the positional
/// order the batch response is mapped back from. These double as the English
/// fallbacks while no translation is loaded.
pub const DASHBOARD_LABELS: [&str; 8] = [
    "Loan Analytics",
    "Total Loans",
    "Active Loans",
    "Monthly EMI",
    "Loan Distribution",
    "EMI Timeline",
    "Loan Types",
    "Amount Distribution",
];

/// Request body for the batch translation endpoint. The response carries the
/// translated strings in the same order as `texts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateBatchRequest {
    pub texts: Vec<String>,
    pub target_language: Language,
}

/// The dashboard's translated labels for the currently active language.
///
/// Starts empty; every accessor falls back to its English source string
/// until a batch resolves. A successful fetch replaces the whole set, and
/// the next language's result supersedes it wholesale. There is no partial
/// update path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationSet {
    title: Option<String>,
    total_loans: Option<String>,
    active_loans: Option<String>,
    monthly_emi: Option<String>,
    distribution: Option<String>,
    timeline: Option<String>,
    types: Option<String>,
    amount_dist: Option<String>,
}

impl TranslationSet {
    /// Assembles a set from a batch response: positions 0-7 map to the keys
    /// in `DASHBOARD_LABELS` order. Any other length is an error and the
    /// caller treats the fetch as failed.
    pub fn from_batch(batch: Vec<String>) -> Result<Self, String> {
        if batch.len() != DASHBOARD_LABELS.len() {
            return Err(format!(
                "translation batch has {} strings, expected {}",
                batch.len(),
                DASHBOARD_LABELS.len()
            ));
        }

        let mut strings = batch.into_iter();
        Ok(Self {
            title: strings.next(),
            total_loans: strings.next(),
            active_loans: strings.next(),
            monthly_emi: strings.next(),
            distribution: strings.next(),
            timeline: strings.next(),
            types: strings.next(),
            amount_dist: strings.next(),
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DASHBOARD_LABELS[0])
    }

    pub fn total_loans(&self) -> &str {
        self.total_loans.as_deref().unwrap_or(DASHBOARD_LABELS[1])
    }

    pub fn active_loans(&self) -> &str {
        self.active_loans.as_deref().unwrap_or(DASHBOARD_LABELS[2])
    }

    pub fn monthly_emi(&self) -> &str {
        self.monthly_emi.as_deref().unwrap_or(DASHBOARD_LABELS[3])
    }

    pub fn distribution(&self) -> &str {
        self.distribution.as_deref().unwrap_or(DASHBOARD_LABELS[4])
    }

    pub fn timeline(&self) -> &str {
        self.timeline.as_deref().unwrap_or(DASHBOARD_LABELS[5])
    }

    pub fn types(&self) -> &str {
        self.types.as_deref().unwrap_or(DASHBOARD_LABELS[6])
    }

    pub fn amount_dist(&self) -> &str {
        self.amount_dist.as_deref().unwrap_or(DASHBOARD_LABELS[7])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_of(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("t{i}")).collect()
    }

    #[test]
    fn test_empty_set_falls_back_to_english() {
        let set = TranslationSet::default();
        assert_eq!(set.title(), "Loan Analytics");
        assert_eq!(set.total_loans(), "Total Loans");
        assert_eq!(set.active_loans(), "Active Loans");
        assert_eq!(set.monthly_emi(), "Monthly EMI");
        assert_eq!(set.distribution(), "Loan Distribution");
        assert_eq!(set.timeline(), "EMI Timeline");
        assert_eq!(set.types(), "Loan Types");
        assert_eq!(set.amount_dist(), "Amount Distribution");
    }

    #[test]
    fn test_batch_assigns_positionally() {
        let set = TranslationSet::from_batch(batch_of(8)).unwrap();
        assert_eq!(set.title(), "t0");
        assert_eq!(set.total_loans(), "t1");
        assert_eq!(set.active_loans(), "t2");
        assert_eq!(set.monthly_emi(), "t3");
        assert_eq!(set.distribution(), "t4");
        assert_eq!(set.timeline(), "t5");
        assert_eq!(set.types(), "t6");
        assert_eq!(set.amount_dist(), "t7");
    }

    #[test]
    fn test_wrong_length_batch_is_rejected() {
        assert!(TranslationSet::from_batch(batch_of(7)).is_err());
        assert!(TranslationSet::from_batch(batch_of(9)).is_err());
        assert!(TranslationSet::from_batch(Vec::new()).is_err());
    }

    #[test]
    fn test_language_code_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("hi-IN"), Some(Language::Hi));
        assert_eq!(Language::from_code("klingon"), None);
    }

    #[test]
    fn test_language_serializes_as_code() {
        let request = TranslateBatchRequest {
            texts: vec!["Loan Analytics".to_string()],
            target_language: Language::Hi,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["target_language"], "hi");
    }
}
