// Screening pipeline: JD analysis, resume analysis, scoring, ranking, report.
// All completion calls go through llm_client::CompletionService.

pub mod batch;
pub mod extraction;
pub mod handlers;
pub mod jd_analyzer;
pub mod prompts;
pub mod ranking;
pub mod report;
pub mod resume_analyzer;
pub mod scoring;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

use crate::llm_client::LlmError;
use crate::screening::extraction::ExtractionError;

/// Why a single analyzer call produced nothing usable.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("model returned an empty JSON object")]
    EmptyObject,

    #[error("completion call failed: {0}")]
    Completion(#[from] LlmError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
