//! Match Scoring — percentage of a job's required skills that a candidate already has.
//!
//! Default: `OverlapScorer` (set intersection over normalized skills, deterministic).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, so handlers never depend on a concrete backend.

use serde::{Deserialize, Serialize};

use crate::matching::skills::SkillSet;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Result of scoring one candidate against one set of required skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,            // 0 – 100
    pub matching: Vec<String>, // required skills the candidate has, sorted
    pub missing: Vec<String>,  // required skills the candidate lacks, sorted
}

impl MatchResult {
    /// The result for a job that lists no required skills.
    pub fn empty() -> Self {
        Self {
            score: 0,
            matching: vec![],
            missing: vec![],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a candidate's skills against a job's free-text requirement list.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &SkillSet, required_skills: &str) -> MatchResult;

    /// Label reported in logs, e.g. "overlap".
    fn backend(&self) -> &'static str;
}

/// Set-overlap scorer: `floor(100 × |matching| / |required|)`.
pub struct OverlapScorer;

impl MatchScorer for OverlapScorer {
    fn score(&self, candidate: &SkillSet, required_skills: &str) -> MatchResult {
        score_overlap(candidate, &SkillSet::parse(required_skills))
    }

    fn backend(&self) -> &'static str {
        "overlap"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `candidate_skills` (any casing, one skill per element) against a
/// comma-separated `required_skills` string.
#[allow(dead_code)]
pub fn compute_match_score<S: AsRef<str>>(
    candidate_skills: &[S],
    required_skills: &str,
) -> MatchResult {
    OverlapScorer.score(&SkillSet::from_tokens(candidate_skills), required_skills)
}

fn score_overlap(candidate: &SkillSet, required: &SkillSet) -> MatchResult {
    if required.is_empty() {
        return MatchResult::empty();
    }

    let matching = required.shared_with(candidate);
    let missing = required.missing_from(candidate);

    // Integer division truncates, which is the floor for non-negative operands.
    let score = (matching.len() * 100 / required.len()) as u32;

    MatchResult {
        score,
        matching,
        missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
