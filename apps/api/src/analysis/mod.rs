//! Resume analysis pipeline.
//!
//! Orchestration: catalog → prompt → model call → normalize + validate, with
//! a deterministic fallback on every failure mode (missing key, transport or
//! auth error, unparseable output). The caller always receives a complete,
//! well-typed `AnalysisResult` — quality degrades, the operation never fails.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod validator;

use tracing::{error, info, warn};

use crate::analysis::fallback::fallback_analysis;
use crate::analysis::models::{AnalysisResult, JobPosting};
use crate::analysis::normalizer::normalize_response;
use crate::analysis::prompts::build_analysis_prompt;
use crate::llm_client::CompletionModel;

/// How much resume text may appear in logs.
const LOG_PREVIEW_CHARS: usize = 200;

/// Analyzes a resume against the active job catalog.
///
/// `model` is `None` when no API credential is configured; that case routes
/// straight to the fallback analyzer without attempting a call. Model errors
/// and unparseable responses are recorded and fall back the same way —
/// nothing propagates to the caller.
pub async fn analyze_resume(
    resume_text: &str,
    jobs: &[JobPosting],
    model: Option<&dyn CompletionModel>,
) -> AnalysisResult {
    info!(
        "Analyzing resume ({} chars) against {} active jobs",
        resume_text.len(),
        jobs.len()
    );
    info!("Resume preview: {}...", preview(resume_text));

    let Some(model) = model else {
        warn!("No Anthropic API key configured - using fallback analysis");
        return fallback_analysis(resume_text, jobs);
    };

    let prompt = build_analysis_prompt(resume_text, jobs);

    match model.complete(&prompt).await {
        Ok(response_text) => {
            info!("Model response received, length: {}", response_text.len());
            match normalize_response(&response_text, jobs) {
                Some(result) => result,
                None => {
                    error!(
                        "Failed to parse model response: {}",
                        preview_n(&response_text, 500)
                    );
                    fallback_analysis(resume_text, jobs)
                }
            }
        }
        Err(e) => {
            error!("Model call failed: {e}");
            fallback_analysis(resume_text, jobs)
        }
    }
}

fn preview(text: &str) -> String {
    preview_n(text, LOG_PREVIEW_CHARS)
}

/// Bounded, char-boundary-safe prefix for logging.
fn preview_n(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use uuid::Uuid;

    struct FixedModel(&'static str);

    #[async_trait]
    impl CompletionModel for FixedModel {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl CompletionModel for FailingModel {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 429,
                message: "rate limited".to_string(),
            })
        }
    }

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

    const RESUME: &str = "Jane Doe\njane.doe@example.com\n(412) 555-0199\nAcme Tire warehouse.";

    #[tokio::test]
    async fn test_no_model_uses_fallback() {
        let jobs = make_jobs(9);
        let result = analyze_resume(RESUME, &jobs, None).await;
        assert_eq!(result.first_name, "Jane");
        assert_eq!(result.last_name, "Doe");
        assert_eq!(result.email, "jane.doe@example.com");
        assert_eq!(result.phone, "(412) 555-0199");
        assert_eq!(result.job_matches.len(), 9);
        assert!(result.job_matches.iter().all(|m| m.score == 25));
        assert!(result.missing_fields.is_empty());
    }

    #[tokio::test]
    async fn test_model_error_uses_fallback() {
        let jobs = make_jobs(3);
        let result = analyze_resume(RESUME, &jobs, Some(&FailingModel)).await;
        assert!(result.job_matches.iter().all(|m| m.score == 25));
        assert!(result.summary.contains("AI unavailable"));
    }

    #[tokio::test]
    async fn test_unparseable_response_uses_fallback() {
        let jobs = make_jobs(2);
        let model = FixedModel("I cannot produce JSON today.");
        let result = analyze_resume(RESUME, &jobs, Some(&model)).await;
        assert!(result.job_matches.iter().all(|m| m.score == 25));
    }

    #[tokio::test]
    async fn test_valid_response_is_normalized() {
        let jobs = make_jobs(2);
        let model = FixedModel(
            r#"```json
            {
              "firstName": "Jane", "lastName": "Doe",
              "email": "jane.doe@example.com", "phone": "(412) 555-0199",
              "extractedSkills": ["forklift"],
              "summary": "Warehouse candidate.",
              "jobMatches": [{"jobIndex": 1, "score": 88, "matchedKeywords": ["forklift"], "reasoning": "Acme Tire experience."}],
              "candidateAnalysis": {"overallScore": 70}
            }
            ```"#,
        );
        let result = analyze_resume(RESUME, &jobs, Some(&model)).await;
        assert_eq!(result.first_name, "Jane");
        assert_eq!(result.job_matches.len(), 2);
        assert_eq!(result.job_matches[0].score, 88);
        assert_eq!(result.job_matches[1].score, 10);
        assert_eq!(result.candidate_analysis.overall_score, 70);
        assert_eq!(result.candidate_analysis.stability_score, 50);
        assert!(result.missing_fields.is_empty());
    }

    #[tokio::test]
    async fn test_result_shape_identical_across_paths() {
        let jobs = make_jobs(1);
        let ai = analyze_resume(RESUME, &jobs, Some(&FixedModel("{}"))).await;
        let fb = analyze_resume(RESUME, &jobs, None).await;
        let ai_json = serde_json::to_value(&ai).unwrap();
        let fb_json = serde_json::to_value(&fb).unwrap();
        let keys = |v: &serde_json::Value| {
            v.as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect::<Vec<String>>()
        };
        assert_eq!(keys(&ai_json), keys(&fb_json));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(300);
        let p = preview(&text);
        assert_eq!(p.chars().count(), 200);
    }
}
