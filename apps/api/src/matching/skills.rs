//! Skill normalization — turns free-text, comma-separated skill lists into comparable tokens.
//!
//! Every skill comparison in the service goes through here, so "Python", " python " and
//! "PYTHON" are always the same skill.

use std::collections::BTreeSet;

/// Splits a comma-separated skill list into lowercased, trimmed tokens.
///
/// Input order and duplicates are preserved; empty and whitespace-only tokens are dropped.
/// An empty string yields an empty list.
pub fn normalize_skills(skills_text: &str) -> Vec<String> {
    skills_text
        .split(',')
        .filter_map(normalize_token)
        .collect()
}

/// Splits a comma-separated skill list into trimmed tokens, keeping the original casing.
/// Used where the tokens are shown back to the user (interview keywords).
pub fn split_skills(skills_text: &str) -> Vec<String> {
    skills_text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_token(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// A normalized, de-duplicated set of skills. Iteration is in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Parses a comma-separated skill list.
    pub fn parse(skills_text: &str) -> Self {
        Self(normalize_skills(skills_text).into_iter().collect())
    }

    /// Builds a set from already-split tokens (e.g. a JSON array of skills).
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .filter_map(|t| normalize_token(t.as_ref()))
                .collect(),
        )
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Skills present in both sets, sorted.
    pub fn shared_with(&self, other: &SkillSet) -> Vec<String> {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Skills in `self` that `other` lacks, sorted.
    pub fn missing_from(&self, other: &SkillSet) -> Vec<String> {
        self.0.difference(&other.0).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(
            normalize_skills(" Python , SQL,AWS "),
            vec!["python", "sql", "aws"]
        );
    }

    #[test]
    fn test_normalize_drops_empty_tokens() {
        assert_eq!(normalize_skills("rust,, ,  ,go,"), vec!["rust", "go"]);
    }

    #[test]
    fn test_normalize_empty_input_is_empty() {
        assert!(normalize_skills("").is_empty());
        assert!(normalize_skills("  ,  ").is_empty());
    }

    #[test]
    fn test_normalize_keeps_order_and_duplicates() {
        assert_eq!(
            normalize_skills("SQL, python, sql"),
            vec!["sql", "python", "sql"]
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for text in [
            "Python, SQL , aws",
            ",,Data Analysis,  ML ,",
            "",
            "React,react,REACT",
        ] {
            let once = normalize_skills(text);
            let twice = normalize_skills(&once.join(","));
            assert_eq!(once, twice, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn test_split_skills_keeps_case() {
        assert_eq!(split_skills("Python, ,SQL "), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_skill_set_collapses_duplicates() {
        let set = SkillSet::parse("Python, python ,PYTHON, sql");
        assert_eq!(set.len(), 2);
        assert!(set.contains("python"));
        assert!(set.contains("sql"));
    }

    #[test]
    fn test_skill_set_from_tokens_normalizes() {
        let set = SkillSet::from_tokens(["  Rust", "", "GO "]);
        assert_eq!(set, SkillSet::parse("rust, go"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_shared_and_missing_are_sorted() {
        let required = SkillSet::parse("sql, aws, python");
        let candidate = SkillSet::parse("python, docker");
        assert_eq!(required.shared_with(&candidate), vec!["python"]);
        assert_eq!(required.missing_from(&candidate), vec!["aws", "sql"]);
    }
}
