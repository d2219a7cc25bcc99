//! Candidate Analysis Validator — one declarative coercion pass that turns the
//! model's raw `candidateAnalysis` object (possibly absent, partial, or
//! wrong-typed) into a fully-populated `CandidateAnalysis`.
//!
//! This is a total function: it never fails, whatever the input. Defaulting
//! policy lives here and nowhere else so it stays auditable in one place.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::analysis::models::{
    CandidateAnalysis, EmploymentEntry, GreenFlag, RedFlag, RecommendedAction,
};

/// Fallback hiring-team note when the model supplied none.
const DEFAULT_NOTES: &str = "Manual review recommended.";

/// Validates the raw `candidateAnalysis` value. `None` or a non-object value
/// yields the all-defaults record (scores 50, empty lists).
pub fn validate_candidate_analysis(raw: Option<&Value>) -> CandidateAnalysis {
    let empty = Value::Null;
    let raw = raw.unwrap_or(&empty);

    CandidateAnalysis {
        overall_score: score_or(raw.get("overallScore"), 50),
        stability_score: score_or(raw.get("stabilityScore"), 50),
        experience_score: score_or(raw.get("experienceScore"), 50),
        employment_history: list_of(raw.get("employmentHistory"), employment_entry),
        red_flags: list_of(raw.get("redFlags"), red_flag),
        green_flags: list_of(raw.get("greenFlags"), green_flag),
        total_years_experience: number_or_zero(raw.get("totalYearsExperience")),
        average_tenure_months: number_or_zero(raw.get("averageTenureMonths")),
        longest_tenure_months: number_or_zero(raw.get("longestTenureMonths")),
        recommended_action: enum_or_default::<RecommendedAction>(raw.get("recommendedAction")),
        hiring_team_notes: string_or(raw.get("hiringTeamNotes"), DEFAULT_NOTES),
    }
}

fn employment_entry(item: &Value) -> EmploymentEntry {
    EmploymentEntry {
        company: string_or(item.get("company"), "Unknown"),
        title: string_or(item.get("title"), "Unknown"),
        duration: string_or(item.get("duration"), "Unknown"),
        duration_months: months_or_zero(item.get("durationMonths")),
        start_date: optional_string(item.get("startDate")),
        end_date: optional_string(item.get("endDate")),
    }
}

fn red_flag(item: &Value) -> RedFlag {
    RedFlag {
        flag_type: enum_or_default(item.get("type")),
        severity: enum_or_default(item.get("severity")),
        description: string_or(item.get("description"), ""),
    }
}

fn green_flag(item: &Value) -> GreenFlag {
    GreenFlag {
        flag_type: enum_or_default(item.get("type")),
        description: string_or(item.get("description"), ""),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Coercion helpers (shared with the response normalizer)
// ────────────────────────────────────────────────────────────────────────────

/// Numeric coercion: JSON numbers pass through, numeric strings parse, and
/// anything else (or a non-finite value) is `None`.
fn as_finite_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Score coercion: default when not a finite number, then clamp to [0, 100].
pub(crate) fn score_or(value: Option<&Value>, default: u32) -> u32 {
    match as_finite_number(value) {
        Some(n) => n.clamp(0.0, 100.0).round() as u32,
        None => default,
    }
}

/// Summary-number coercion: non-finite or missing becomes 0.0.
pub(crate) fn number_or_zero(value: Option<&Value>) -> f64 {
    as_finite_number(value).unwrap_or(0.0)
}

/// Tenure months: non-finite, missing, or negative becomes 0.
fn months_or_zero(value: Option<&Value>) -> u32 {
    as_finite_number(value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u32)
        .unwrap_or(0)
}

/// A string value, or `default` when missing, empty, or not a string.
pub(crate) fn string_or(value: Option<&Value>, default: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(|s| s.to_string())
}

/// A list of strings; non-string elements are dropped, anything that is not
/// an array becomes empty.
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Maps each element of an array through a per-item defaulting rule.
/// Anything that is not an array becomes the empty list.
fn list_of<T>(value: Option<&Value>, item: impl Fn(&Value) -> T) -> Vec<T> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(item).collect())
        .unwrap_or_default()
}

/// Deserializes an enum-like string field, falling back to the enum's
/// documented default on any unknown or wrong-typed value.
fn enum_or_default<T: DeserializeOwned + Default>(value: Option<&Value>) -> T {
    value
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
