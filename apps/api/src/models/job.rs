use serde::{Deserialize, Serialize};

/// A job posting as supplied by the caller. Only `required_skills` and `location`
/// influence ranking; the other fields are echoed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Comma-separated, free text, e.g. "Python, SQL, AWS". Null or absent means
    /// the job lists no requirements.
    #[serde(default)]
    pub required_skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
