//! Scoring: weighted match of one resume record against the job requirements.
//!
//! total = |matched required skills| × skill_weight + (experience met ? 1 : 0) × experience_weight
//!
//! Skill matching is bidirectional substring containment on lowercase strings, so
//! "java" matches "javascript" and "c" matches "react". This is intentionally crude
//! and kept as-is.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::screening::jd_analyzer::JobRequirements;
use crate::screening::resume_analyzer::ResumeRecord;

pub const DEFAULT_SKILL_WEIGHT: u32 = 3;
pub const DEFAULT_EXPERIENCE_WEIGHT: u32 = 2;

/// Multipliers for the two score components. Bounds are enforced by the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringWeights {
    pub skill_weight: u32,
    pub experience_weight: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_weight: DEFAULT_SKILL_WEIGHT,
            experience_weight: DEFAULT_EXPERIENCE_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub label: String,
    pub matched_skills: BTreeSet<String>,
    pub experience_met: bool,
    pub total_score: u32,
}

impl ScoreResult {
    fn zero(label: &str) -> Self {
        Self {
            label: label.to_string(),
            matched_skills: BTreeSet::new(),
            experience_met: false,
            total_score: 0,
        }
    }

    /// Human-readable breakdown of how `total_score` was reached.
    pub fn explanation(&self, weights: &ScoringWeights) -> String {
        let skill_score = self.matched_skills.len();
        let experience_score = u32::from(self.experience_met);
        format!(
            "Matched {skill_score} required skills. \
             Experience requirement met: {}. \
             Score formula: ({skill_score} × {}) + ({experience_score} × {}) = {}",
            self.experience_met, weights.skill_weight, weights.experience_weight, self.total_score
        )
    }
}

/// Scores one resume. An absent record scores 0 regardless of weights.
pub fn score_resume(
    label: &str,
    requirements: &JobRequirements,
    record: Option<&ResumeRecord>,
    weights: &ScoringWeights,
) -> ScoreResult {
    let Some(record) = record else {
        return ScoreResult::zero(label);
    };

    let candidate_skills: Vec<String> = record.skills.iter().map(|s| s.to_lowercase()).collect();
    let matched_skills = match_skills(&requirements.required_skills, &candidate_skills);
    let experience_met = record.experience_years >= requirements.minimum_experience_years;

    let skill_score = matched_skills.len() as u32;
    let total_score = skill_score
        .saturating_mul(weights.skill_weight)
        .saturating_add(u32::from(experience_met).saturating_mul(weights.experience_weight));

    ScoreResult {
        label: label.to_string(),
        matched_skills,
        experience_met,
        total_score,
    }
}

/// Required skills with at least one containing-or-contained candidate skill.
/// Both sides must already be lowercase.
fn match_skills(required: &[String], candidate: &[String]) -> BTreeSet<String> {
    required
        .iter()
        .filter(|req| {
            candidate
                .iter()
                .any(|cand| cand.contains(req.as_str()) || req.contains(cand.as_str()))
        })
        .cloned()
        .collect()
}
