//! Axum route handlers for the coaching API (interview feedback, career, resume).

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coaching::career::{build_career_plan, predict_career_paths, CareerPath, CareerPlan};
use crate::coaching::interview::{score_answer_against_keywords, AnswerFeedback};
use crate::coaching::resume::{
    generate_resume_html, generate_resume_sections, sanitize_template, ResumeSections,
    DEFAULT_TEMPLATE,
};
use crate::matching::skills::split_skills;
use crate::models::profile::Profile;

#[derive(Debug, Deserialize)]
pub struct InterviewFeedbackRequest {
    #[serde(default)]
    pub answer: Option<String>,
    /// Explicit keywords. When absent, keywords come from `skills`.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Candidate skills as comma-separated text.
    #[serde(default)]
    pub skills: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CareerPathsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub years_experience: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CareerPlanRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResumeHtmlRequest {
    pub profile: Profile,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeHtmlResponse {
    pub template: String,
    pub html: String,
}

/// POST /api/v1/interview/feedback
pub async fn handle_interview_feedback(
    Json(request): Json<InterviewFeedbackRequest>,
) -> Json<AnswerFeedback> {
    let keywords = request
        .keywords
        .unwrap_or_else(|| split_skills(request.skills.as_deref().unwrap_or_default()));

    let answer = request.answer.as_deref().unwrap_or_default();
    let feedback = score_answer_against_keywords(answer, &keywords);
    debug!(
        keywords = keywords.len(),
        score = feedback.score,
        "Scored interview answer"
    );
    Json(feedback)
}

/// POST /api/v1/career/paths
pub async fn handle_career_paths(
    Json(request): Json<CareerPathsRequest>,
) -> Json<Vec<CareerPath>> {
    Json(predict_career_paths(
        &request.skills,
        request.years_experience.unwrap_or_default(),
    ))
}

/// POST /api/v1/career/plan
pub async fn handle_career_plan(Json(request): Json<CareerPlanRequest>) -> Json<CareerPlan> {
    Json(build_career_plan(&request.skills))
}

/// POST /api/v1/resume/sections
pub async fn handle_resume_sections(Json(profile): Json<Profile>) -> Json<ResumeSections> {
    Json(generate_resume_sections(&profile))
}

/// POST /api/v1/resume/html
pub async fn handle_resume_html(
    Json(request): Json<ResumeHtmlRequest>,
) -> Json<ResumeHtmlResponse> {
    let template = sanitize_template(request.template.as_deref().unwrap_or(DEFAULT_TEMPLATE));
    let sections = generate_resume_sections(&request.profile);
    let html = generate_resume_html(&sections, &template);
    Json(ResumeHtmlResponse { template, html })
}
