//! Resume builder — structured sections and an HTML snippet generated from a profile.
//!
//! The HTML is a fragment meant to be embedded in a page and printed to PDF client-side.
//! Every interpolated value is escaped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::profile::{Profile, Record};

pub const DEFAULT_TEMPLATE: &str = "classic";

/// Number of skills mentioned in a generated summary.
const SUMMARY_SKILL_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeHeader {
    pub name: String,
    pub title: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub header: ResumeHeader,
    pub summary: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Record>,
    #[serde(default)]
    pub education: Vec<Record>,
    #[serde(default)]
    pub projects: Vec<Record>,
}

/// Lays a profile out as resume sections. A missing or blank summary is generated
/// from the name, title, location and first five skills.
pub fn generate_resume_sections(profile: &Profile) -> ResumeSections {
    let summary = match profile.summary.as_deref() {
        Some(summary) if !summary.is_empty() => summary.to_string(),
        _ => format!(
            "{} is a {} based in {} with strengths in {}",
            profile.name,
            profile.title,
            profile.location,
            profile
                .skills
                .iter()
                .take(SUMMARY_SKILL_COUNT)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };

    ResumeSections {
        header: ResumeHeader {
            name: profile.name.clone(),
            title: profile.title.clone(),
            contact: Contact {
                email: profile.email.clone(),
                phone: profile.phone.clone(),
                location: profile.location.clone(),
            },
        },
        summary,
        skills: profile.skills.clone(),
        experience: profile.experience.clone(),
        education: profile.education.clone(),
        projects: profile.projects.clone(),
    }
}

/// Reduces a template name to a safe CSS class suffix. Falls back to `classic`.
pub fn sanitize_template(template: &str) -> String {
    let cleaned: String = template
        .trim()
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if cleaned.is_empty() {
        DEFAULT_TEMPLATE.to_string()
    } else {
        cleaned
    }
}

/// Renders resume sections as an HTML fragment. Experience, education and projects
/// only appear when non-empty.
pub fn generate_resume_html(sections: &ResumeSections, template: &str) -> String {
    let header = &sections.header;
    let mut html = String::new();

    html.push_str(&format!(
        "<div class='resume resume-{}'>",
        sanitize_template(template)
    ));
    html.push_str(&format!(
        "<section class='resume-header'><h1>{}</h1><p class='subtitle'>{}</p>\
         <p class='contact'><span>{}</span> · <span>{}</span> · <span>{}</span></p></section>",
        escape_html(&header.name),
        escape_html(&header.title),
        escape_html(&header.contact.email),
        escape_html(&header.contact.phone),
        escape_html(&header.contact.location),
    ));
    html.push_str(&format!(
        "<section class='resume-summary'><h2>Professional Summary</h2><p>{}</p></section>",
        escape_html(&sections.summary)
    ));

    html.push_str("<section class='resume-skills'><h2>Skills</h2><ul>");
    for skill in &sections.skills {
        html.push_str(&format!("<li>{}</li>", escape_html(skill)));
    }
    html.push_str("</ul></section>");

    if !sections.experience.is_empty() {
        html.push_str("<section class='resume-experience'><h2>Experience</h2>");
        for role in &sections.experience {
            html.push_str(&format!(
                "<div class='role'><h3>{}</h3><p class='company'>{} · {}</p><p>{}</p></div>",
                escape_html(&field(role, "role")),
                escape_html(&field(role, "company")),
                escape_html(&first_field(role, &["dates", "period"])),
                escape_html(&first_field(role, &["details", "description"])),
            ));
        }
        html.push_str("</section>");
    }

    if !sections.education.is_empty() {
        html.push_str("<section class='resume-education'><h2>Education</h2>");
        for education in &sections.education {
            html.push_str(&format!(
                "<div class='edu'><h3>{}</h3><p class='school'>{} · {}</p></div>",
                escape_html(&field(education, "degree")),
                escape_html(&first_field(education, &["school", "institution"])),
                escape_html(&field(education, "year")),
            ));
        }
        html.push_str("</section>");
    }

    if !sections.projects.is_empty() {
        html.push_str("<section class='resume-projects'><h2>Projects</h2>");
        for project in &sections.projects {
            html.push_str(&format!(
                "<div class='project'><h3>{}</h3><p>{}</p></div>",
                escape_html(&field(project, "title")),
                escape_html(&field(project, "description")),
            ));
        }
        html.push_str("</section>");
    }

    html.push_str("</div>");
    html
}

/// Text of a record field. Missing and null become "", numbers and booleans are
/// printed as-is.
fn field(record: &Record, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// First non-empty field among `keys`.
fn first_field(record: &Record, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| field(record, key))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
