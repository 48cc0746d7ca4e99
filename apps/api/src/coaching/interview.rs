//! Interview feedback — keyword heuristic that grades a practice answer.
//!
//! Three sub-scores (relevance, clarity, structure) are averaged into an overall score.
//! Each sub-score below `SUGGESTION_THRESHOLD` contributes one fixed suggestion.

use serde::{Deserialize, Serialize};

const SUGGESTION_THRESHOLD: u32 = 60;

const POINTS_PER_KEYWORD: u32 = 20;
const CLARITY_BASE: u32 = 30;
const STRUCTURE_BASE: u32 = 50;
const STRUCTURE_MARKER_BONUS: u32 = 5;

/// Phrases that signal a structured answer.
const STRUCTURE_MARKERS: &[&str] = &["for example", "first", "second"];

const EMPTY_ANSWER_SUGGESTION: &str = "Provide a complete answer.";
const RELEVANCE_SUGGESTION: &str = "Use role-related keywords to increase relevance.";
const CLARITY_SUGGESTION: &str = "Add specifics, metrics, and outcomes for clarity.";
const STRUCTURE_SUGGESTION: &str = "Organize with STAR: Situation, Task, Action, Result.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub score: u32,
    pub clarity: u32,
    pub relevance: u32,
    pub structure: u32,
    pub suggestions: Vec<String>,
}

impl AnswerFeedback {
    fn empty_answer() -> Self {
        Self {
            score: 0,
            clarity: 0,
            relevance: 0,
            structure: 0,
            suggestions: vec![EMPTY_ANSWER_SUGGESTION.to_string()],
        }
    }
}

/// Grades `answer` against `keywords` (matched case-insensitively as substrings).
pub fn score_answer_against_keywords<S: AsRef<str>>(
    answer: &str,
    keywords: &[S],
) -> AnswerFeedback {
    if answer.is_empty() {
        return AnswerFeedback::empty_answer();
    }

    let answer_lower = answer.to_lowercase();

    let hits = keywords
        .iter()
        .filter(|k| {
            let keyword: &str = (*k).as_ref();
            answer_lower.contains(&keyword.to_lowercase())
        })
        .count() as u32;
    let relevance = (hits * POINTS_PER_KEYWORD).min(100);

    let length = answer.chars().count() as u32;
    let clarity = (CLARITY_BASE + length / 3).min(100);

    let structured = STRUCTURE_MARKERS
        .iter()
        .any(|marker| answer_lower.contains(marker));
    let structure = STRUCTURE_BASE + if structured { STRUCTURE_MARKER_BONUS } else { 0 };

    let mut suggestions = Vec::new();
    for (sub_score, suggestion) in [
        (relevance, RELEVANCE_SUGGESTION),
        (clarity, CLARITY_SUGGESTION),
        (structure, STRUCTURE_SUGGESTION),
    ] {
        if sub_score < SUGGESTION_THRESHOLD {
            suggestions.push(suggestion.to_string());
        }
    }

    // Nearest-integer mean; a sum of integers over 3 never ends in .5.
    let score = (relevance + clarity + structure + 1) / 3;

    AnswerFeedback {
        score,
        clarity,
        relevance,
        structure,
        suggestions,
    }
}
