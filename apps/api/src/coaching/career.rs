//! Career paths — static decision tables mapping skill combinations to suggested roles.
//!
//! Rules are evaluated strictly in table order; each rule contributes at most once.
//! When no rule fires, a single generalist entry is returned. New rules are appended
//! to the tables without changing how earlier ones behave.

use serde::{Deserialize, Serialize};

use crate::matching::skills::SkillSet;

const MAX_PROBABILITY: i64 = 95;
const MAX_EXPERIENCE_BOOST: i64 = 20;
const BOOST_PER_YEAR: i64 = 5;

const DATA_ENGINEER: &str = "Data Engineer";
const ML_ENGINEER: &str = "ML Engineer";
const FRONTEND_ENGINEER: &str = "Frontend Engineer";
const DATA_ANALYST: &str = "Data Analyst";
const GENERALIST: &str = "Generalist Contributor";

const UPSKILLING_TRACKS: &[&str] = &["cloud", "docker", "security"];
const UPSKILLING_RESOURCE: &str = "Explore beginner courses and certifications";

/// Next steps recommended for each role.
fn next_steps(role: &str) -> &'static [&'static str] {
    match role {
        DATA_ENGINEER => &["ETL pipelines", "Cloud data ops", "SQL mastery"],
        ML_ENGINEER => &["Model deployment", "MLOps", "Experiment tracking"],
        FRONTEND_ENGINEER => &[
            "Accessibility (WCAG)",
            "Performance auditing",
            "Design systems",
        ],
        DATA_ANALYST => &["Dashboards", "A/B testing", "Statistical analysis"],
        _ => &["Portfolio building", "Industry networking", "Core fundamentals"],
    }
}

fn owned(steps: &[&str]) -> Vec<String> {
    steps.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Predicates
// ────────────────────────────────────────────────────────────────────────────

fn has_python_and_sql(skills: &SkillSet) -> bool {
    skills.contains("python") && skills.contains("sql")
}

fn has_python_and_ml(skills: &SkillSet) -> bool {
    skills.contains("python") && (skills.contains("ml") || skills.contains("data analysis"))
}

fn has_frontend(skills: &SkillSet) -> bool {
    skills.contains("javascript") || skills.contains("react")
}

fn has_sql_and_analysis(skills: &SkillSet) -> bool {
    skills.contains("sql") && skills.contains("data analysis")
}

fn has_python(skills: &SkillSet) -> bool {
    skills.contains("python")
}

fn has_sql(skills: &SkillSet) -> bool {
    skills.contains("sql")
}

// ────────────────────────────────────────────────────────────────────────────
// Career path prediction
// ────────────────────────────────────────────────────────────────────────────

/// A role suggestion with an experience-adjusted probability (0 – 95).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub role: String,
    pub probability: u32,
    pub next_steps: Vec<String>,
}

struct PathRule {
    applies: fn(&SkillSet) -> bool,
    role: &'static str,
    base_probability: u32,
}

const PATH_RULES: &[PathRule] = &[
    PathRule {
        applies: has_python_and_sql,
        role: DATA_ENGINEER,
        base_probability: 60,
    },
    PathRule {
        applies: has_python_and_ml,
        role: ML_ENGINEER,
        base_probability: 55,
    },
    PathRule {
        applies: has_frontend,
        role: FRONTEND_ENGINEER,
        base_probability: 50,
    },
    PathRule {
        applies: has_sql_and_analysis,
        role: DATA_ANALYST,
        base_probability: 65,
    },
];

const GENERALIST_BASE_PROBABILITY: u32 = 40;

/// `min(95, base + min(20, 5 × years))`. Negative years lower the value;
/// the result is floored at 0.
fn probability(base: u32, years_experience: i64) -> u32 {
    let boost = years_experience
        .saturating_mul(BOOST_PER_YEAR)
        .min(MAX_EXPERIENCE_BOOST);
    i64::from(base).saturating_add(boost).clamp(0, MAX_PROBABILITY) as u32
}

/// Suggests career paths for `skills`, boosted by years of experience.
pub fn predict_career_paths<S: AsRef<str>>(
    skills: &[S],
    years_experience: i64,
) -> Vec<CareerPath> {
    let skills = SkillSet::from_tokens(skills);

    let mut paths: Vec<CareerPath> = PATH_RULES
        .iter()
        .filter(|rule| (rule.applies)(&skills))
        .map(|rule| CareerPath {
            role: rule.role.to_string(),
            probability: probability(rule.base_probability, years_experience),
            next_steps: owned(next_steps(rule.role)),
        })
        .collect();

    if paths.is_empty() {
        paths.push(CareerPath {
            role: GENERALIST.to_string(),
            probability: probability(GENERALIST_BASE_PROBABILITY, years_experience),
            next_steps: owned(next_steps(GENERALIST)),
        });
    }

    paths
}

// ────────────────────────────────────────────────────────────────────────────
// Career plan
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedPath {
    pub role: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upskilling {
    pub skill: String,
    pub resource: String,
}

/// Roles to explore plus foundational skills the candidate has not listed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPlan {
    pub paths: Vec<PlannedPath>,
    pub upskilling: Vec<Upskilling>,
}

struct PlanRule {
    applies: fn(&SkillSet) -> bool,
    roles: &'static [&'static str],
}

const PLAN_RULES: &[PlanRule] = &[
    PlanRule {
        applies: has_python,
        roles: &[DATA_ENGINEER, ML_ENGINEER],
    },
    PlanRule {
        applies: has_frontend,
        roles: &[FRONTEND_ENGINEER],
    },
    PlanRule {
        applies: has_sql,
        roles: &[DATA_ANALYST],
    },
];

/// Builds the plan shown on the career page: looser role rules than
/// `predict_career_paths`, no probabilities, plus an upskilling list.
pub fn build_career_plan<S: AsRef<str>>(skills: &[S]) -> CareerPlan {
    let skills = SkillSet::from_tokens(skills);

    let mut roles: Vec<&str> = PLAN_RULES
        .iter()
        .filter(|rule| (rule.applies)(&skills))
        .flat_map(|rule| rule.roles.iter().copied())
        .collect();
    if roles.is_empty() {
        roles.push(GENERALIST);
    }

    let paths = roles
        .into_iter()
        .map(|role| PlannedPath {
            role: role.to_string(),
            steps: owned(next_steps(role)),
        })
        .collect();

    let upskilling = UPSKILLING_TRACKS
        .iter()
        .filter(|track| !skills.contains(track))
        .map(|track| Upskilling {
            skill: track.to_string(),
            resource: UPSKILLING_RESOURCE.to_string(),
        })
        .collect();

    CareerPlan { paths, upskilling }
}
