//! Shared core for the loanrust dashboard, kept free of browser and wasm
//! dependencies so the whole module tree runs under plain `cargo test`.
//! The frontend pulls its transport shapes, chart aggregation, rupee
//! formatting and translated-label handling from here.

pub mod analytics;
pub mod currency;
pub mod i18n;

pub use analytics::{
    aggregate_by_type, build_emi_series, coerce_amount, to_series, EmiPoint, LoanRecord,
    LoanTypeTotals, SeriesPoint,
};
pub use currency::format_inr;
pub use i18n::{Language, TranslateBatchRequest, TranslationSet, DASHBOARD_LABELS};

use serde::{Deserialize, Serialize};

/// Generic API response wrapper shared by the loans API and the translation
/// service. Both wrap their payloads in the same envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
