//! Aggregation of loan records into chart-ready series.
//!
//! Everything here is a pure function over the `loans` input: totals and
//! series are recomputed from scratch on every call, nothing is cached, and
//! malformed numeric input degrades to a zero contribution instead of an
//! error. Empty input produces empty output; the charts render with no data
//! rather than failing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A single loan as served by the loans API. This crate never mutates or
/// persists records; they are supplied by the data-fetching collaborator on
/// every render.
///
/// The amount fields are lenient on the wire: the upstream service has been
/// observed to emit numbers, numeric strings, and outright garbage such as
/// `"N/A"`. Garbage deserializes as zero so one bad record cannot poison a
/// whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: i32,
    pub loan_type: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub loan_amount: Decimal,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub emi_amount: Decimal,
    pub status: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl LoanRecord {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_amount(&raw))
}

/// Normalizes a loosely-typed amount to a `Decimal`.
///
/// JSON numbers and parseable numeric strings map to their value; anything
/// else (non-numeric strings, null, booleans, arrays, objects) maps to zero.
/// The zero fallback is deliberate: a record with a malformed amount still
/// contributes its other fields to the dashboard.
pub fn coerce_amount(raw: &serde_json::Value) -> Decimal {
    match raw {
        serde_json::Value::Number(number) => {
            parse_decimal(&number.to_string()).unwrap_or_default()
        }
        serde_json::Value::String(text) => parse_decimal(text.trim()).unwrap_or_default(),
        _ => Decimal::ZERO,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}

/// Total loan amount per loan type.
///
/// Keys are unique; equal `loan_type` labels merge into one entry. Iteration
/// follows first-seen order so repeated aggregations of the same input render
/// identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanTypeTotals {
    entries: Vec<(String, Decimal)>,
}

impl LoanTypeTotals {
    pub fn add(&mut self, loan_type: &str, amount: Decimal) {
        match self.entries.iter_mut().find(|(name, _)| name == loan_type) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((loan_type.to_string(), amount)),
        }
    }

    pub fn get(&self, loan_type: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(name, _)| name == loan_type)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grand total across every loan type. Always equals the sum of
    /// `loan_amount` over the records the totals were built from.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, total)| *total).sum()
    }
}

/// One slice of the distribution pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: Decimal,
}

/// One bar of the EMI chart. `name` is the display name of the loan's type
/// and is not deduplicated; two home loans produce two bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmiPoint {
    pub name: String,
    pub amount: Decimal,
}

/// Sums `loan_amount` per `loan_type` across all records.
pub fn aggregate_by_type(records: &[LoanRecord]) -> LoanTypeTotals {
    let mut totals = LoanTypeTotals::default();
    for record in records {
        totals.add(&record.loan_type, record.loan_amount);
    }
    totals
}

/// Flattens totals into pie-chart points, one per loan type, values copied
/// verbatim in the totals' iteration order.
pub fn to_series(totals: &LoanTypeTotals) -> Vec<SeriesPoint> {
    totals
        .iter()
        .map(|(name, value)| SeriesPoint {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Builds the per-loan EMI series: one point per input record, input order
/// preserved, no grouping.
pub fn build_emi_series(records: &[LoanRecord]) -> Vec<EmiPoint> {
    records
        .iter()
        .map(|record| EmiPoint {
            name: record.loan_type.clone(),
            amount: record.emi_amount,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loan(id: i32, loan_type: &str, amount: i64, emi: i64) -> LoanRecord {
        LoanRecord {
            id,
            loan_type: loan_type.to_string(),
            loan_amount: Decimal::from(amount),
            emi_amount: Decimal::from(emi),
            status: "active".to_string(),
            start_date: None,
        }
    }

    #[test]
    fn test_aggregate_merges_equal_types() {
        let records = vec![
            loan(1, "Home", 100_000, 900),
            loan(2, "Home", 50_000, 450),
        ];

        let totals = aggregate_by_type(&records);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("Home"), Some(Decimal::from(150_000)));
    }

    #[test]
    fn test_aggregate_preserves_first_seen_order() {
        let records = vec![
            loan(1, "Auto", 400_000, 8_000),
            loan(2, "Home", 2_500_000, 20_000),
            loan(3, "Auto", 300_000, 6_000),
            loan(4, "Personal", 100_000, 4_500),
        ];

        let totals = aggregate_by_type(&records);
        let names: Vec<&str> = totals.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Auto", "Home", "Personal"]);
    }

    #[test]
    fn test_aggregate_conserves_grand_total() {
        let records = vec![
            loan(1, "Home", 2_500_000, 20_000),
            loan(2, "Auto", 400_000, 8_000),
            loan(3, "Home", 1_200_000, 11_000),
            loan(4, "Education", 800_000, 9_500),
        ];

        let input_sum: Decimal = records.iter().map(|r| r.loan_amount).sum();
        assert_eq!(aggregate_by_type(&records).total(), input_sum);
    }

    #[test]
    fn test_aggregate_empty_input() {
        let totals = aggregate_by_type(&[]);
        assert!(totals.is_empty());
        assert_eq!(totals.total(), Decimal::ZERO);
        assert!(to_series(&totals).is_empty());
    }

    #[test]
    fn test_series_copies_totals_in_order() {
        let records = vec![loan(1, "Home", 150_000, 1_200), loan(2, "Auto", 50_000, 900)];

        let series = to_series(&aggregate_by_type(&records));
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Home");
        assert_eq!(series[0].value, Decimal::from(150_000));
        assert_eq!(series[1].name, "Auto");
        assert_eq!(series[1].value, Decimal::from(50_000));
    }

    #[test]
    fn test_emi_series_one_point_per_record_in_input_order() {
        let records = vec![
            loan(1, "Home", 2_500_000, 20_000),
            loan(2, "Auto", 400_000, 8_000),
            loan(3, "Home", 1_200_000, 11_000),
        ];

        let series = build_emi_series(&records);
        assert_eq!(series.len(), records.len());
        let names: Vec<&str> = series.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Auto", "Home"]);
        assert_eq!(series[1].amount, Decimal::from(8_000));
    }

    #[test]
    fn test_emi_series_empty_input() {
        assert!(build_emi_series(&[]).is_empty());
    }

    #[test]
    fn test_coerce_number_and_numeric_string() {
        assert_eq!(coerce_amount(&json!(1500)), Decimal::from(1500));
        assert_eq!(
            coerce_amount(&json!("2500.75")),
            Decimal::from_str("2500.75").unwrap()
        );
        assert_eq!(coerce_amount(&json!(" 300 ")), Decimal::from(300));
    }

    #[test]
    fn test_coerce_garbage_to_zero() {
        assert_eq!(coerce_amount(&json!("N/A")), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!(null)), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!(true)), Decimal::ZERO);
        assert_eq!(coerce_amount(&json!(["12"])), Decimal::ZERO);
    }

    #[test]
    fn test_record_deserializes_with_malformed_amounts() {
        let record: LoanRecord = serde_json::from_value(json!({
            "id": 7,
            "loan_type": "Auto",
            "loan_amount": "N/A",
            "emi_amount": "8000",
            "status": "active"
        }))
        .expect("lenient amounts must not fail deserialization");

        assert_eq!(record.loan_amount, Decimal::ZERO);
        assert_eq!(record.emi_amount, Decimal::from(8000));
    }

    #[test]
    fn test_record_deserializes_with_missing_amounts() {
        let record: LoanRecord = serde_json::from_value(json!({
            "id": 8,
            "loan_type": "Personal",
            "status": "closed"
        }))
        .expect("missing amounts default to zero");

        assert_eq!(record.loan_amount, Decimal::ZERO);
        assert_eq!(record.emi_amount, Decimal::ZERO);
        assert!(!record.is_active());
    }

    #[test]
    fn test_malformed_emi_contributes_zero_bar() {
        let records: Vec<LoanRecord> = serde_json::from_value(json!([
            {"id": 1, "loan_type": "Home", "loan_amount": 2500000, "emi_amount": "N/A", "status": "active"},
            {"id": 2, "loan_type": "Auto", "loan_amount": 400000, "emi_amount": 8000, "status": "active"}
        ]))
        .unwrap();

        let series = build_emi_series(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].amount, Decimal::ZERO);
        assert_eq!(series[1].amount, Decimal::from(8000));
    }
}
