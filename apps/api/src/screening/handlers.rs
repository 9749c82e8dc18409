//! Axum route handlers for the Screening API.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::batch::split_resumes;
use crate::screening::jd_analyzer::{analyze_job_description, JobRequirements};
use crate::screening::ranking::RANKING_CSV_FILE_NAME;
use crate::screening::report::{build_report, AnalysisReport};
use crate::screening::resume_analyzer::{analyze_batch, ParsedResume};
use crate::screening::scoring::{
    ScoringWeights, DEFAULT_EXPERIENCE_WEIGHT, DEFAULT_SKILL_WEIGHT,
};
use crate::screening::session::{AnalysisSession, SessionStore};
use crate::state::AppState;

const MIN_WEIGHT: u32 = 1;
const MAX_WEIGHT: u32 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateAnalysisRequest {
    pub job_description: String,
    /// Resumes separated by `###`.
    pub resumes: String,
}

#[derive(Debug, Serialize)]
pub struct CreateAnalysisResponse {
    pub analysis_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub requirements: JobRequirements,
    pub jd_warning: Option<String>,
    pub resumes: Vec<ParsedResume>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeightsQuery {
    pub skill_weight: Option<u32>,
    pub experience_weight: Option<u32>,
}

impl WeightsQuery {
    fn into_weights(self) -> Result<ScoringWeights, AppError> {
        let skill_weight = self.skill_weight.unwrap_or(DEFAULT_SKILL_WEIGHT);
        let experience_weight = self.experience_weight.unwrap_or(DEFAULT_EXPERIENCE_WEIGHT);
        for (name, value) in [
            ("skill_weight", skill_weight),
            ("experience_weight", experience_weight),
        ] {
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&value) {
                return Err(AppError::Validation(format!(
                    "{name} must be between {MIN_WEIGHT} and {MAX_WEIGHT}, got {value}"
                )));
            }
        }
        Ok(ScoringWeights {
            skill_weight,
            experience_weight,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Runs JD and resume extraction once and retains the results for re-scoring.
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    Json(request): Json<CreateAnalysisRequest>,
) -> Result<(StatusCode, Json<CreateAnalysisResponse>), AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    let resume_texts = split_resumes(&request.resumes);
    if resume_texts.is_empty() {
        return Err(AppError::Validation(
            "resumes must contain at least one non-empty resume".to_string(),
        ));
    }

    let jd = analyze_job_description(&request.job_description, state.llm.as_ref()).await;
    let resumes = analyze_batch(
        &resume_texts,
        state.llm.as_ref(),
        state.config.resume_concurrency,
    )
    .await;

    let session = state
        .sessions
        .insert(AnalysisSession::new(jd.requirements, jd.warning, resumes))
        .await;

    info!(
        "Analysis {} stored: {} required skills, {} resumes",
        session.id,
        session.requirements.required_skills.len(),
        session.resumes.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateAnalysisResponse {
            analysis_id: session.id,
            created_at: session.created_at,
            requirements: session.requirements.clone(),
            jd_warning: session.jd_warning.clone(),
            resumes: session.resumes.clone(),
        }),
    ))
}

/// GET /api/v1/analyses/:id/report
///
/// Re-scores the retained analysis with the given weights. No completion calls.
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
    weights: Result<Query<WeightsQuery>, QueryRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let weights = weights_from_query(weights)?;
    let report = load_report(&state.sessions, analysis_id, weights).await?;
    Ok(Json(report))
}

/// GET /api/v1/analyses/:id/ranking.csv
///
/// Ranking table as a `Candidate,Score` CSV download.
pub async fn handle_download_ranking(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
    weights: Result<Query<WeightsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let weights = weights_from_query(weights)?;
    let report = load_report(&state.sessions, analysis_id, weights).await?;
    let body = report.ranking.to_csv()?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RANKING_CSV_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}

/// Unparseable weights get the same error body as out-of-range ones.
fn weights_from_query(
    query: Result<Query<WeightsQuery>, QueryRejection>,
) -> Result<ScoringWeights, AppError> {
    let Query(weights) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    weights.into_weights()
}

async fn load_report(
    sessions: &SessionStore,
    analysis_id: Uuid,
    weights: ScoringWeights,
) -> Result<AnalysisReport, AppError> {
    let session = sessions
        .get(analysis_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Analysis {analysis_id} not found")))?;
    Ok(build_report(&session, weights))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_default_to_three_and_two() {
        let weights = WeightsQuery::default().into_weights().unwrap();
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_weights_accept_bounds() {
        let weights = WeightsQuery {
            skill_weight: Some(1),
            experience_weight: Some(5),
        }
        .into_weights()
        .unwrap();
        assert_eq!(weights.skill_weight, 1);
        assert_eq!(weights.experience_weight, 5);
    }

    #[test]
    fn test_weights_out_of_range_rejected() {
        for (s, e) in [(0, 2), (6, 2), (3, 0), (3, 9)] {
            let result = WeightsQuery {
                skill_weight: Some(s),
                experience_weight: Some(e),
            }
            .into_weights();
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }
}
