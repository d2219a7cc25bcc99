//! Response Normalizer — maps the model's index-keyed job scores back onto
//! the authoritative catalog so every active job receives exactly one match,
//! then assembles the final `AnalysisResult`.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::analysis::models::{missing_contact_fields, AnalysisResult, JobMatch, JobPosting};
use crate::analysis::validator::{
    score_or, string_list, string_or, validate_candidate_analysis,
};
use crate::llm_client::strip_json_fences;

/// Score given to jobs the model dropped from its response.
const OMITTED_JOB_SCORE: u32 = 10;
const OMITTED_JOB_REASONING: &str = "Limited match based on resume analysis.";
const DEFAULT_SUMMARY: &str = "Resume analyzed successfully.";

/// Parses and normalizes the raw model response against the catalog.
///
/// Returns `None` only when the response is not valid JSON after fence
/// stripping — that is the caller's signal to use the fallback analyzer.
/// Partial or wrong-typed fields are never an error; they are absorbed by
/// per-field defaulting here and in the validator.
pub fn normalize_response(raw_text: &str, jobs: &[JobPosting]) -> Option<AnalysisResult> {
    let cleaned = strip_json_fences(raw_text);
    let response: Value = serde_json::from_str(cleaned).ok()?;

    let first_name = string_or(response.get("firstName"), "");
    let last_name = string_or(response.get("lastName"), "");
    let email = string_or(response.get("email"), "");
    let phone = string_or(response.get("phone"), "");

    let job_matches = map_job_scores(response.get("jobMatches"), jobs);
    let missing_fields = missing_contact_fields(&first_name, &last_name, &email, &phone);
    let candidate_analysis = validate_candidate_analysis(response.get("candidateAnalysis"));

    Some(AnalysisResult {
        first_name,
        last_name,
        email,
        phone,
        extracted_skills: string_list(response.get("extractedSkills")),
        summary: string_or(response.get("summary"), DEFAULT_SUMMARY),
        job_matches,
        missing_fields,
        candidate_analysis,
    })
}

struct ScoredMatch {
    score: u32,
    keywords: Vec<String>,
    reasoning: String,
}

/// Builds one `JobMatch` per catalog entry, keyed by the model's 1-based
/// `jobIndex`. Out-of-range indices are silently discarded; jobs the model
/// never mentioned get the low-confidence default. Result is sorted by score
/// descending.
fn map_job_scores(raw_matches: Option<&Value>, jobs: &[JobPosting]) -> Vec<JobMatch> {
    let mut by_index: HashMap<usize, ScoredMatch> = HashMap::new();

    if let Some(items) = raw_matches.and_then(Value::as_array) {
        debug!("Model returned {} job match entries", items.len());
        for item in items {
            let Some(index) = as_job_index(item.get("jobIndex")) else {
                continue;
            };
            if index < 1 || index > jobs.len() {
                continue;
            }
            by_index.insert(
                index,
                ScoredMatch {
                    score: score_or(item.get("score"), 0),
                    keywords: string_list(item.get("matchedKeywords")),
                    reasoning: string_or(item.get("reasoning"), ""),
                },
            );
        }
    }

    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| match by_index.remove(&(i + 1)) {
            Some(scored) => JobMatch {
                job_id: job.id,
                job_title: job.title.clone(),
                score: scored.score,
                matched_keywords: scored.keywords,
                reasoning: scored.reasoning,
            },
            None => JobMatch {
                job_id: job.id,
                job_title: job.title.clone(),
                score: OMITTED_JOB_SCORE,
                matched_keywords: Vec::new(),
                reasoning: OMITTED_JOB_REASONING.to_string(),
            },
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Accepts the index as a JSON number or a numeric string.
fn as_job_index(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_jobs(n: usize) -> Vec<JobPosting> {
        (0..n)
            .map(|i| JobPosting {
                id: Uuid::new_v4(),
                title: format!("Job {}", i + 1),
                description: "desc".to_string(),
                department: "Operations".to_string(),
                keywords: vec![],
            })
            .collect()
    }

    #[test]
    fn test_invalid_json_returns_none() {
        let jobs = make_jobs(2);
        assert!(normalize_response("I'm sorry, I can't do that", &jobs).is_none());
        assert!(normalize_response("", &jobs).is_none());
    }

    #[test]
    fn test_fenced_json_is_parsed() {
        let jobs = make_jobs(1);
        let raw = "```json\n{\"firstName\": \"Jane\"}\n```";
        let result = normalize_response(raw, &jobs).unwrap();
        assert_eq!(result.first_name, "Jane");
    }

    #[test]
    fn test_every_job_gets_exactly_one_match() {
        let jobs = make_jobs(9);
        // Model only scored two of nine jobs
        let raw = r#"{"jobMatches": [
            {"jobIndex": 1, "score": 90, "matchedKeywords": ["forklift"], "reasoning": "good"},
            {"jobIndex": 5, "score": 40, "matchedKeywords": [], "reasoning": "ok"}
        ]}"#;
        let result = normalize_response(raw, &jobs).unwrap();
        assert_eq!(result.job_matches.len(), 9);
        for job in &jobs {
            assert_eq!(
                result.job_matches.iter().filter(|m| m.job_id == job.id).count(),
                1
            );
        }
    }

    #[test]
    fn test_index_mapping_is_one_based() {
        let jobs = make_jobs(3);
        let raw = r#"{"jobMatches": [{"jobIndex": 2, "score": 77, "matchedKeywords": [], "reasoning": "r"}]}"#;
        let result = normalize_response(raw, &jobs).unwrap();
        let m = result
            .job_matches
            .iter()
            .find(|m| m.job_id == jobs[1].id)
            .unwrap();
        assert_eq!(m.score, 77);
    }

    #[test]
    fn test_out_of_range_indices_discarded() {
        let jobs = make_jobs(2);
        let raw = r#"{"jobMatches": [
            {"jobIndex": 0, "score": 99},
            {"jobIndex": 3, "score": 99},
            {"jobIndex": -1, "score": 99}
        ]}"#;
        let result = normalize_response(raw, &jobs).unwrap();
        // No entry picked up a stray 99; both jobs got the omitted default
        assert!(result.job_matches.iter().all(|m| m.score == 10));
        assert!(result
            .job_matches
            .iter()
            .all(|m| m.reasoning == "Limited match based on resume analysis."));
    }

    #[test]
    fn test_scores_clamped_and_defaulted() {
        let jobs = make_jobs(3);
        let raw = r#"{"jobMatches": [
            {"jobIndex": 1, "score": 250},
            {"jobIndex": 2, "score": "not a number"},
            {"jobIndex": 3, "score": -12}
        ]}"#;
        let result = normalize_response(raw, &jobs).unwrap();
        let score_of = |id| {
            result
                .job_matches
                .iter()
                .find(|m| m.job_id == id)
                .unwrap()
                .score
        };
        assert_eq!(score_of(jobs[0].id), 100);
        assert_eq!(score_of(jobs[1].id), 0);
        assert_eq!(score_of(jobs[2].id), 0);
    }

    #[test]
    fn test_matches_sorted_descending() {
        let jobs = make_jobs(4);
        let raw = r#"{"jobMatches": [
            {"jobIndex": 1, "score": 20},
            {"jobIndex": 2, "score": 90},
            {"jobIndex": 3, "score": 55},
            {"jobIndex": 4, "score": 70}
        ]}"#;
        let result = normalize_response(raw, &jobs).unwrap();
        let scores: Vec<u32> = result.job_matches.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![90, 70, 55, 20]);
    }

    #[test]
    fn test_string_job_index_is_accepted() {
        let jobs = make_jobs(2);
        let raw = r#"{"jobMatches": [{"jobIndex": "2", "score": 65}]}"#;
        let result = normalize_response(raw, &jobs).unwrap();
        let m = result
            .job_matches
            .iter()
            .find(|m| m.job_id == jobs[1].id)
            .unwrap();
        assert_eq!(m.score, 65);
    }

    #[test]
    fn test_missing_fields_from_contact_info() {
        let jobs = make_jobs(1);
        let raw = r#"{"firstName": "Jane", "lastName": "Doe", "email": "", "phone": ""}"#;
        let result = normalize_response(raw, &jobs).unwrap();
        assert_eq!(result.missing_fields, vec!["email", "phone"]);
    }

    #[test]
    fn test_summary_and_skills_default() {
        let jobs = make_jobs(1);
        let result = normalize_response("{}", &jobs).unwrap();
        assert_eq!(result.summary, "Resume analyzed successfully.");
        assert!(result.extracted_skills.is_empty());
        // candidateAnalysis absent → validator defaults
        assert_eq!(result.candidate_analysis.overall_score, 50);
    }

    #[test]
    fn test_empty_catalog_yields_empty_matches() {
        let result = normalize_response(r#"{"jobMatches": [{"jobIndex": 1, "score": 80}]}"#, &[])
            .unwrap();
        assert!(result.job_matches.is_empty());
    }
}
