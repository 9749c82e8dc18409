//! JD Analyzer: extracts required skills and minimum experience from a job description.
//!
//! Never fails outright: any completion or extraction failure degrades to empty
//! requirements and a warning the caller shows next to the job description.

use serde::Serialize;
use tracing::warn;

use crate::llm_client::CompletionService;
use crate::screening::extraction::{extract_json_object, number_field, string_list_field};
use crate::screening::prompts::JD_PARSE_SYSTEM;
use crate::screening::AnalysisError;

/// Requirements extracted from one job description. Skills are lowercase.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub minimum_experience_years: f64,
}

/// Requirements plus the recoverable failure, if the fallback was used.
#[derive(Debug, Clone)]
pub struct JdAnalysis {
    pub requirements: JobRequirements,
    pub warning: Option<String>,
}

/// Runs the JD completion call and normalizes its output.
/// The caller rejects empty JD text before calling.
pub async fn analyze_job_description(jd_text: &str, llm: &dyn CompletionService) -> JdAnalysis {
    match request_requirements(jd_text, llm).await {
        Ok(requirements) => JdAnalysis {
            requirements,
            warning: None,
        },
        Err(e) => {
            warn!("JD extraction failed, falling back to empty requirements: {e}");
            JdAnalysis {
                requirements: JobRequirements::default(),
                warning: Some(format!("Failed to parse JD JSON. ({e})")),
            }
        }
    }
}

async fn request_requirements(
    jd_text: &str,
    llm: &dyn CompletionService,
) -> Result<JobRequirements, AnalysisError> {
    let raw = llm.complete(JD_PARSE_SYSTEM, jd_text).await?;
    let object = extract_json_object(&raw)?;

    Ok(JobRequirements {
        required_skills: string_list_field(&object, "required_skills")
            .into_iter()
            .map(|s| s.to_lowercase())
            .collect(),
        minimum_experience_years: number_field(&object, "minimum_experience_years"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::testing::ScriptedCompletion;

    const JD: &str = "Backend engineer. Python and SQL required. 3+ years.";

    #[tokio::test]
    async fn test_skills_are_lowercased_and_kept_in_order() {
        let llm = ScriptedCompletion::new().reply(
            JD,
            r#"{"required_skills": ["Python", "SQL", "python"], "minimum_experience_years": 3}"#,
        );

        let analysis = analyze_job_description(JD, &llm).await;
        assert!(analysis.warning.is_none());
        assert_eq!(
            analysis.requirements.required_skills,
            vec!["python", "sql", "python"]
        );
        assert_eq!(analysis.requirements.minimum_experience_years, 3.0);
        assert_eq!(llm.systems(), vec![JD_PARSE_SYSTEM.to_string()]);
    }

    #[tokio::test]
    async fn test_prose_around_json_is_tolerated() {
        let llm = ScriptedCompletion::new().reply(
            JD,
            "Sure! Here you go:\n{\"required_skills\": [\"Go\"], \"minimum_experience_years\": 2}\nLet me know.",
        );

        let analysis = analyze_job_description(JD, &llm).await;
        assert_eq!(analysis.requirements.required_skills, vec!["go"]);
        assert_eq!(analysis.requirements.minimum_experience_years, 2.0);
    }

    #[tokio::test]
    async fn test_missing_or_non_numeric_experience_is_zero() {
        let llm = ScriptedCompletion::new()
            .reply("a", r#"{"required_skills": ["Rust"]}"#)
            .reply(
                "b",
                r#"{"required_skills": [], "minimum_experience_years": "several"}"#,
            );

        let a = analyze_job_description("a", &llm).await;
        assert_eq!(a.requirements.minimum_experience_years, 0.0);
        let b = analyze_job_description("b", &llm).await;
        assert_eq!(b.requirements.minimum_experience_years, 0.0);
        assert!(b.warning.is_none());
    }

    #[tokio::test]
    async fn test_malformed_output_falls_back_with_warning() {
        let llm = ScriptedCompletion::new().reply(JD, "{required_skills: python}");

        let analysis = analyze_job_description(JD, &llm).await;
        assert_eq!(analysis.requirements, JobRequirements::default());
        let warning = analysis.warning.unwrap();
        assert!(warning.starts_with("Failed to parse JD JSON."));
    }

    #[tokio::test]
    async fn test_completion_failure_falls_back_with_warning() {
        let llm = ScriptedCompletion::new().fail(JD, "upstream unavailable");

        let analysis = analyze_job_description(JD, &llm).await;
        assert!(analysis.requirements.required_skills.is_empty());
        assert_eq!(analysis.requirements.minimum_experience_years, 0.0);
        assert!(analysis.warning.unwrap().contains("upstream unavailable"));
    }
}
