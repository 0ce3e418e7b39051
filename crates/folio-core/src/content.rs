//! Project / experience records and the popup content built from them.
//!
//! Records arrive as JSON from the portfolio API. Descriptions are either free
//! text or a structured object, so both shapes are accepted.

use crate::constants::{EXPERIENCE_PREVIEW_CHARS, SUMMARY_CUT_CHARS, SUMMARY_PREVIEW_CHARS};
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProjectDetails {
    pub summary: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(rename = "githubLink", alias = "GitHubLink")]
    pub github_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProjectDescription {
    Text(String),
    Details(ProjectDetails),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<ProjectDescription>,
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExperienceDetails {
    pub header: Option<String>,
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExperienceDescription {
    Text(String),
    Details(ExperienceDetails),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<ExperienceDescription>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

/// First `n` characters of `s` (not bytes).
pub fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Leading calendar year of an ISO-8601 date such as `2021-03-01T00:00:00Z`.
pub fn year_of(date: &str) -> Option<i32> {
    let digits: String = date.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return None;
    }
    digits.parse().ok()
}

impl ProjectRecord {
    pub fn summary(&self) -> String {
        let raw = match &self.description {
            Some(ProjectDescription::Details(d)) => d
                .summary
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "No summary available".to_string()),
            Some(ProjectDescription::Text(t)) if !t.is_empty() => {
                format!("{}...", truncate_chars(t, SUMMARY_PREVIEW_CHARS))
            }
            _ => "No description available".to_string(),
        };
        if raw.chars().count() > SUMMARY_PREVIEW_CHARS {
            format!(
                "{}... Open page to see more",
                truncate_chars(&raw, SUMMARY_CUT_CHARS)
            )
        } else {
            raw
        }
    }

    pub fn tech(&self) -> &[String] {
        match &self.description {
            Some(ProjectDescription::Details(d)) => &d.tech,
            _ => &[],
        }
    }

    pub fn repository_link(&self) -> Option<&str> {
        match &self.description {
            Some(ProjectDescription::Details(d)) => d.github_link.as_deref().filter(|l| !l.is_empty()),
            _ => None,
        }
    }
}

impl ExperienceRecord {
    pub fn period(&self) -> String {
        let start = self
            .start_date
            .as_deref()
            .and_then(year_of)
            .map(|y| y.to_string())
            .unwrap_or_default();
        let end = self
            .end_date
            .as_deref()
            .and_then(year_of)
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Present".to_string());
        format!("{start} - {end}")
    }

    pub fn summary(&self) -> String {
        match &self.description {
            Some(ExperienceDescription::Text(t)) if !t.is_empty() => {
                format!("{}...", truncate_chars(t, EXPERIENCE_PREVIEW_CHARS))
            }
            Some(ExperienceDescription::Details(ExperienceDetails {
                header: Some(h), ..
            })) if !h.is_empty() => format!("{h} | {}", self.period()),
            _ => self.period(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Projects,
    Experiences,
    About,
}

impl PopupKind {
    /// Case-insensitive substring match on the interactive object's name.
    pub fn classify(target: &str) -> Option<Self> {
        let name = target.to_lowercase();
        if name.contains("projects") {
            Some(PopupKind::Projects)
        } else if name.contains("experience") {
            Some(PopupKind::Experiences)
        } else if name.contains("about") {
            Some(PopupKind::About)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentRow {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub tech: Vec<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopupContent {
    pub kind: PopupKind,
    pub title: &'static str,
    pub subtitle: Option<String>,
    pub description: &'static str,
    pub rows: Vec<ContentRow>,
    pub details: Vec<&'static str>,
    pub resume_url: Option<String>,
}

pub const ABOUT_DETAILS: [&str; 4] = [
    "Created with Rust, WebAssembly and a WebGL renderer",
    "Responsive design for all devices",
    "Interactive 3D elements and animations",
    "Optimized for performance and accessibility",
];

#[derive(Clone, Debug, Default)]
pub struct ContentLibrary {
    pub projects: Vec<ProjectRecord>,
    pub experiences: Vec<ExperienceRecord>,
    pub loading: bool,
    pub resume_url: Option<String>,
}

impl ContentLibrary {
    pub fn new(resume_url: Option<String>) -> Self {
        Self {
            resume_url,
            ..Self::default()
        }
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn finish_loading(&mut self, projects: Vec<ProjectRecord>, experiences: Vec<ExperienceRecord>) {
        log::info!(
            "[api] content ready: {} projects, {} experiences",
            projects.len(),
            experiences.len()
        );
        self.projects = projects;
        self.experiences = experiences;
        self.loading = false;
    }

    pub fn content_for(&self, target: &str) -> Option<PopupContent> {
        let kind = PopupKind::classify(target)?;
        let content = match kind {
            PopupKind::Projects => PopupContent {
                kind,
                title: "PROJECTS",
                subtitle: None,
                description: "Explore my latest projects including web applications, 3D visualizations, and full-stack development work.",
                rows: self
                    .projects
                    .iter()
                    .map(|p| ContentRow {
                        id: p.id,
                        title: p.title.clone(),
                        summary: p.summary(),
                        tech: p.tech().to_vec(),
                        link: p.repository_link().map(str::to_string),
                    })
                    .collect(),
                details: Vec::new(),
                resume_url: None,
            },
            PopupKind::Experiences => PopupContent {
                kind,
                title: "EXPERIENCE",
                subtitle: None,
                description: "My work experience and the projects I've contributed to in my career.",
                rows: self
                    .experiences
                    .iter()
                    .map(|e| ContentRow {
                        id: e.id,
                        title: e.title.clone(),
                        summary: e.summary(),
                        tech: Vec::new(),
                        link: None,
                    })
                    .collect(),
                details: Vec::new(),
                resume_url: self.resume_url.clone(),
            },
            PopupKind::About => PopupContent {
                kind,
                title: "ABOUT THIS PAGE",
                subtitle: Some("How I Built This".to_string()),
                description: "This page is built with Rust, WebAssembly and a 3D canvas.",
                rows: Vec::new(),
                details: ABOUT_DETAILS.to_vec(),
                resume_url: None,
            },
        };
        Some(self.with_loading_subtitle(content))
    }

    fn with_loading_subtitle(&self, mut content: PopupContent) -> PopupContent {
        if self.loading && content.subtitle.is_some() {
            content.subtitle = Some("Loading...".to_string());
        }
        content
    }
}
