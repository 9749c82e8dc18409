//! Report: scores every retained resume for one set of weights and ranks them.

use std::collections::BTreeSet;

use serde::Serialize;
use uuid::Uuid;

use crate::screening::jd_analyzer::JobRequirements;
use crate::screening::ranking::{rank, Ranking};
use crate::screening::resume_analyzer::ResumeRecord;
use crate::screening::scoring::{score_resume, ScoringWeights};
use crate::screening::session::AnalysisSession;

pub const RESUME_FAILURE_MESSAGE: &str = "Failed to parse resume.";

/// Per-resume row, in original input order.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
    pub label: String,
    pub record: Option<ResumeRecord>,
    pub matched_skills: BTreeSet<String>,
    pub experience_met: bool,
    pub total_score: u32,
    /// Present when the record was scored.
    pub explanation: Option<String>,
    /// Present when extraction failed and the resume scored 0.
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub weights: ScoringWeights,
    pub requirements: JobRequirements,
    pub jd_warning: Option<String>,
    pub candidates: Vec<CandidateReport>,
    pub ranking: Ranking,
}

/// Pure function of the session contents and the weights.
pub fn build_report(session: &AnalysisSession, weights: ScoringWeights) -> AnalysisReport {
    let candidates: Vec<CandidateReport> = session
        .resumes
        .iter()
        .map(|parsed| {
            let score = score_resume(
                &parsed.label,
                &session.requirements,
                parsed.record.as_ref(),
                &weights,
            );

            let (explanation, failure) = match &parsed.record {
                Some(_) => (Some(score.explanation(&weights)), None),
                None => {
                    let failure = match &parsed.failure {
                        Some(detail) => format!("{RESUME_FAILURE_MESSAGE} ({detail})"),
                        None => RESUME_FAILURE_MESSAGE.to_string(),
                    };
                    (None, Some(failure))
                }
            };

            CandidateReport {
                label: score.label,
                record: parsed.record.clone(),
                matched_skills: score.matched_skills,
                experience_met: score.experience_met,
                total_score: score.total_score,
                explanation,
                failure,
            }
        })
        .collect();

    let ranking = rank(
        candidates
            .iter()
            .map(|c| (c.label.clone(), c.total_score))
            .collect(),
    );

    AnalysisReport {
        analysis_id: session.id,
        weights,
        requirements: session.requirements.clone(),
        jd_warning: session.jd_warning.clone(),
        candidates,
        ranking,
    }
}
