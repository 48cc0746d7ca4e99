use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form record (experience, education, project). Keys vary by source, e.g.
/// experience may carry `dates` or `period`, `details` or `description`.
pub type Record = Map<String, Value>;

/// A candidate profile used to build a resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<Record>,
    #[serde(default)]
    pub education: Vec<Record>,
    #[serde(default)]
    pub projects: Vec<Record>,
}
