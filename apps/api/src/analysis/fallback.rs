//! Fallback Analyzer — deterministic, model-free analysis used whenever the
//! completion model is unconfigured, unreachable, or returns unparseable
//! output. Produces the same `AnalysisResult` shape as the model path, with
//! low-confidence scores and a manual-review flag for the hiring team.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::models::{
    missing_contact_fields, AnalysisResult, CandidateAnalysis, JobMatch, JobPosting,
    RecommendedAction, RedFlag, RedFlagType, Severity,
};

/// Fixed low-confidence score for every job when no model ran.
const FALLBACK_JOB_SCORE: u32 = 25;
const FALLBACK_REASONING: &str = "AI analysis unavailable - manual review recommended.";
const FALLBACK_SUMMARY: &str = "Basic resume analysis (AI unavailable). Please review manually.";
const FALLBACK_NOTES: &str =
    "AI analysis was unavailable for this resume. Please review manually and extract employment history.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email regex")
});

/// North-American phone: optional country code, optional parens/dashes/dots.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone regex")
});

/// A plausible name token: letters, apostrophes, hyphens only.
static NAME_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z'-]+$").expect("name token regex"));

/// Pure function of its inputs: identical resume text and catalog always
/// yield identical output.
pub fn fallback_analysis(resume_text: &str, jobs: &[JobPosting]) -> AnalysisResult {
    let email = EMAIL_RE
        .find(resume_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let phone = PHONE_RE
        .find(resume_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let (first_name, last_name) = extract_name(resume_text);

    let job_matches: Vec<JobMatch> = jobs
        .iter()
        .map(|job| JobMatch {
            job_id: job.id,
            job_title: job.title.clone(),
            score: FALLBACK_JOB_SCORE,
            matched_keywords: Vec::new(),
            reasoning: FALLBACK_REASONING.to_string(),
        })
        .collect();

    let missing_fields = missing_contact_fields(&first_name, &last_name, &email, &phone);

    AnalysisResult {
        first_name,
        last_name,
        email,
        phone,
        extracted_skills: Vec::new(),
        summary: FALLBACK_SUMMARY.to_string(),
        job_matches,
        missing_fields,
        candidate_analysis: placeholder_candidate_analysis(),
    }
}

/// Scans the first 5 non-blank lines for a plausible "First [Middle] Last"
/// line. Lines containing '@', starting with a digit, or longer than 50
/// characters are skipped. The first line yielding at least two name tokens
/// supplies first token → firstName and last token → lastName.
fn extract_name(resume_text: &str) -> (String, String) {
    let lines = resume_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(5);

    for line in lines {
        // Length limit is in characters, so accented names don't trip it early
        if line.contains('@')
            || line.starts_with(|c: char| c.is_ascii_digit())
            || line.chars().count() > 50
        {
            continue;
        }

        let tokens: Vec<&str> = line
            .split_whitespace()
            .filter(|t| t.len() > 1 && NAME_TOKEN_RE.is_match(t))
            .collect();

        if tokens.len() >= 2 {
            return (
                tokens[0].to_string(),
                tokens[tokens.len() - 1].to_string(),
            );
        }
    }

    (String::new(), String::new())
}

/// Fixed placeholder signalling that a human must do the real review.
fn placeholder_candidate_analysis() -> CandidateAnalysis {
    CandidateAnalysis {
        overall_score: 50,
        stability_score: 50,
        experience_score: 50,
        employment_history: Vec::new(),
        red_flags: vec![RedFlag {
            flag_type: RedFlagType::Inconsistency,
            severity: Severity::Low,
            description: "AI analysis unavailable - manual review required".to_string(),
        }],
        green_flags: Vec::new(),
        total_years_experience: 0.0,
        average_tenure_months: 0.0,
        longest_tenure_months: 0.0,
        recommended_action: RecommendedAction::ReviewCarefully,
        hiring_team_notes: FALLBACK_NOTES.to_string(),
    }
}
