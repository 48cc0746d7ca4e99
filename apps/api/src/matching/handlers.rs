//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::recommend::{recommend_jobs, Preferences, Recommendation};
use crate::matching::scoring::MatchResult;
use crate::matching::skills::{normalize_skills, SkillSet};
use crate::models::job::JobPosting;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    #[serde(default)]
    pub skills_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Candidate skills as comma-separated text.
    #[serde(default)]
    pub skills: Option<String>,
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/normalize
pub async fn handle_normalize(Json(request): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    let skills = normalize_skills(request.skills_text.as_deref().unwrap_or_default());
    Json(NormalizeResponse { skills })
}

/// POST /api/v1/match
///
/// Scores one candidate against one job's required skills.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<MatchResult> {
    let candidate = SkillSet::from_tokens(&request.candidate_skills);
    let result = state
        .match_scorer
        .score(&candidate, request.required_skills.as_deref().unwrap_or_default());

    debug!(
        backend = state.match_scorer.backend(),
        score = result.score,
        "Scored candidate against requirements"
    );
    Json(result)
}

/// POST /api/v1/recommendations
///
/// Ranks the supplied jobs for a candidate, best match first.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Vec<Recommendation<JobPosting>>>, AppError> {
    let limit = state.config.max_jobs_per_request;
    if request.jobs.len() > limit {
        return Err(AppError::Validation(format!(
            "at most {limit} jobs can be ranked per request, got {}",
            request.jobs.len()
        )));
    }

    let job_count = request.jobs.len();
    let recommendations = recommend_jobs(
        state.match_scorer.as_ref(),
        request.skills.as_deref().unwrap_or_default(),
        request.jobs,
        request.preferences.as_ref(),
    );

    debug!(
        jobs = job_count,
        top_score = recommendations.first().map(|r| r.score),
        "Ranked job recommendations"
    );
    Ok(Json(recommendations))
}
