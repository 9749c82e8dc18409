//! Resume Analyzer: extracts skills, experience and education from each resume.
//!
//! A failed resume becomes an absent record with a failure message. It never
//! aborts the rest of the batch.

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::CompletionService;
use crate::screening::extraction::{
    extract_json_object, number_field, string_field, string_list_field,
};
use crate::screening::prompts::RESUME_PARSE_SYSTEM;
use crate::screening::AnalysisError;

/// Facts extracted from one resume. `skills` keeps the model's order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeRecord {
    pub skills: Vec<String>,
    pub experience_years: f64,
    /// Display only, never scored.
    pub education: String,
}

/// Retained analyzer output for one resume in the batch.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    pub label: String,
    pub record: Option<ResumeRecord>,
    pub failure: Option<String>,
}

/// Label shown for the resume at zero-based `index`.
pub fn resume_label(index: usize) -> String {
    format!("Resume {}", index + 1)
}

/// Runs one resume through the completion service and coerces the result.
pub async fn analyze_resume(
    resume_text: &str,
    llm: &dyn CompletionService,
) -> Result<ResumeRecord, AnalysisError> {
    if resume_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let raw = llm.complete(RESUME_PARSE_SYSTEM, resume_text).await?;
    let object = extract_json_object(&raw)?;
    if object.is_empty() {
        return Err(AnalysisError::EmptyObject);
    }

    Ok(ResumeRecord {
        skills: string_list_field(&object, "skills"),
        experience_years: number_field(&object, "experience_years"),
        education: string_field(&object, "education"),
    })
}

/// Analyzes every resume, at most `concurrency` in flight.
/// The output has one entry per input, in input order.
pub async fn analyze_batch(
    resumes: &[String],
    llm: &dyn CompletionService,
    concurrency: usize,
) -> Vec<ParsedResume> {
    let pending: Vec<_> = resumes
        .iter()
        .enumerate()
        .map(|(index, text)| async move {
            let label = resume_label(index);
            match analyze_resume(text, llm).await {
                Ok(record) => ParsedResume {
                    label,
                    record: Some(record),
                    failure: None,
                },
                Err(e) => {
                    warn!("{label}: extraction failed: {e}");
                    ParsedResume {
                        label,
                        record: None,
                        failure: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    let parsed: Vec<ParsedResume> = stream::iter(pending)
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let failed = parsed.iter().filter(|p| p.record.is_none()).count();
    info!(
        "Analyzed {} resumes ({} failed extraction)",
        parsed.len(),
        failed
    );

    parsed
}
