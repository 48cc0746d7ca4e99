//! Recommendation ranking — scores every job for one candidate and orders them best-first.

use serde::{Deserialize, Serialize};

use crate::matching::scoring::{MatchScorer, OverlapScorer};
use crate::matching::skills::SkillSet;
use crate::models::job::JobPosting;

/// Points added when a job sits in the candidate's preferred location.
pub const LOCATION_BONUS: u32 = 5;

const MAX_SCORE: u32 = 100;

/// Anything that can be ranked: exposes free-text required skills and a location.
pub trait JobListing {
    fn required_skills(&self) -> &str;
    fn location(&self) -> &str;
}

impl JobListing for JobPosting {
    fn required_skills(&self) -> &str {
        self.required_skills.as_deref().unwrap_or_default()
    }

    fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }
}

/// Candidate preferences that adjust ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub location: Option<String>,
}

/// One ranked job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation<J> {
    pub job: J,
    pub score: u32,
    pub matching: Vec<String>,
    pub missing: Vec<String>,
}

/// Ranks `jobs` for a candidate whose skills are given as comma-separated text,
/// using the default overlap scorer.
#[allow(dead_code)]
pub fn recommend_jobs_for_user<J: JobListing>(
    candidate_skills: &str,
    jobs: impl IntoIterator<Item = J>,
    preferences: Option<&Preferences>,
) -> Vec<Recommendation<J>> {
    recommend_jobs(&OverlapScorer, candidate_skills, jobs, preferences)
}

/// Ranks `jobs` best-first.
///
/// Each job's match score gets `LOCATION_BONUS` (total capped at 100) when the
/// desired location is a case-insensitive substring of the job's location.
/// Jobs with equal final scores keep their input order.
pub fn recommend_jobs<J: JobListing>(
    scorer: &dyn MatchScorer,
    candidate_skills: &str,
    jobs: impl IntoIterator<Item = J>,
    preferences: Option<&Preferences>,
) -> Vec<Recommendation<J>> {
    let candidate = SkillSet::parse(candidate_skills);
    let desired_location = preferences
        .and_then(|p| p.location.as_deref())
        .unwrap_or_default()
        .to_lowercase();

    let mut results: Vec<Recommendation<J>> = jobs
        .into_iter()
        .map(|job| {
            let result = scorer.score(&candidate, job.required_skills());
            let bonus = if location_matches(&desired_location, job.location()) {
                LOCATION_BONUS
            } else {
                0
            };
            Recommendation {
                score: (result.score + bonus).min(MAX_SCORE),
                matching: result.matching,
                missing: result.missing,
                job,
            }
        })
        .collect();

    // `sort_by` is stable: ties keep input order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

fn location_matches(desired_lower: &str, job_location: &str) -> bool {
    !desired_lower.is_empty() && job_location.to_lowercase().contains(desired_lower)
}
