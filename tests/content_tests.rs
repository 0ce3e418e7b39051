// Host-side tests for content records and popup content selection.

use folio_core::*;

const PROJECTS_JSON: &str = r#"[
    {
        "id": 1,
        "title": "Atlas",
        "description": {
            "summary": "Map viewer",
            "tech": ["Rust", "wgpu"],
            "GitHubLink": "https://github.com/example/atlas"
        },
        "images": [{ "id": 3, "url": "atlas.png" }]
    },
    { "id": 2, "title": "Notes", "description": "plain text" },
    { "id": 3, "title": "Empty" }
]"#;

const EXPERIENCES_JSON: &str = r#"[
    {
        "id": 7,
        "title": "Engineer",
        "description": { "header": "Backend", "body": "Services" },
        "startDate": "2019-06-01T00:00:00Z",
        "endDate": null
    },
    {
        "id": 8,
        "title": "Intern",
        "description": { "body": "Tooling" },
        "startDate": "2016-01-01",
        "endDate": "2017-08-31"
    }
]"#;

fn library() -> ContentLibrary {
    let projects: Vec<ProjectRecord> = serde_json::from_str(PROJECTS_JSON).expect("projects");
    let experiences: Vec<ExperienceRecord> =
        serde_json::from_str(EXPERIENCES_JSON).expect("experiences");
    let mut lib = ContentLibrary::new(Some("https://example.com/resume.pdf".into()));
    lib.begin_loading();
    lib.finish_loading(projects, experiences);
    lib
}

#[test]
fn both_description_shapes_parse() {
    let projects: Vec<ProjectRecord> = serde_json::from_str(PROJECTS_JSON).expect("projects");
    assert_eq!(projects.len(), 3);
    assert!(matches!(projects[0].description, Some(ProjectDescription::Details(_))));
    assert!(matches!(projects[1].description, Some(ProjectDescription::Text(_))));
    assert_eq!(projects[2].description, None);
    assert_eq!(projects[0].images[0].url, "atlas.png");
    assert_eq!(projects[0].tech(), ["Rust".to_string(), "wgpu".to_string()]);
    assert_eq!(projects[0].repository_link(), Some("https://github.com/example/atlas"));
    assert_eq!(projects[1].repository_link(), None);
}

#[test]
fn project_summaries() {
    let projects: Vec<ProjectRecord> = serde_json::from_str(PROJECTS_JSON).expect("projects");
    assert_eq!(projects[0].summary(), "Map viewer");
    assert_eq!(projects[1].summary(), "plain text...");
    assert_eq!(projects[2].summary(), "No description available");

    let no_summary: ProjectRecord =
        serde_json::from_str(r#"{ "title": "x", "description": { "tech": [] } }"#).expect("parse");
    assert_eq!(no_summary.summary(), "No summary available");
}

#[test]
fn long_project_summary_is_cut() {
    let long = "a".repeat(130);
    let p = ProjectRecord {
        description: Some(ProjectDescription::Details(ProjectDetails {
            summary: Some(long),
            ..ProjectDetails::default()
        })),
        ..ProjectRecord::default()
    };
    let s = p.summary();
    assert_eq!(s, format!("{}... Open page to see more", "a".repeat(100)));
}

#[test]
fn experience_period_and_summary() {
    let exps: Vec<ExperienceRecord> = serde_json::from_str(EXPERIENCES_JSON).expect("experiences");
    assert_eq!(exps[0].period(), "2019 - Present");
    assert_eq!(exps[0].summary(), "Backend | 2019 - Present");
    assert_eq!(exps[1].period(), "2016 - 2017");
    assert_eq!(exps[1].summary(), "2016 - 2017");

    let text = ExperienceRecord {
        description: Some(ExperienceDescription::Text("b".repeat(250))),
        start_date: Some("2020-01-01".into()),
        ..ExperienceRecord::default()
    };
    assert_eq!(text.summary(), format!("{}...", "b".repeat(200)));
}

#[test]
fn date_and_text_helpers() {
    assert_eq!(year_of("2021-03-01T00:00:00Z"), Some(2021));
    assert_eq!(year_of(" 1999"), Some(1999));
    assert_eq!(year_of("19"), None);
    assert_eq!(year_of("soon"), None);
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("hi", 10), "hi");
}

#[test]
fn target_names_classify_case_insensitively() {
    assert_eq!(PopupKind::classify("Clickable_Projects"), Some(PopupKind::Projects));
    assert_eq!(PopupKind::classify("experience_board"), Some(PopupKind::Experiences));
    assert_eq!(PopupKind::classify("ABOUTsign"), Some(PopupKind::About));
    assert_eq!(PopupKind::classify("door"), None);
}

#[test]
fn projects_content_lists_every_record() {
    let content = library().content_for("clickable_projects").expect("content");
    assert_eq!(content.title, "PROJECTS");
    assert_eq!(content.rows.len(), 3);
    assert_eq!(content.rows[0].title, "Atlas");
    assert_eq!(content.rows[0].tech, vec!["Rust", "wgpu"]);
    assert!(content.rows[0].link.is_some());
    assert_eq!(content.resume_url, None);
}

#[test]
fn experience_content_carries_resume_link() {
    let content = library().content_for("clickable_experience").expect("content");
    assert_eq!(content.title, "EXPERIENCE");
    assert_eq!(content.rows.len(), 2);
    assert_eq!(content.resume_url.as_deref(), Some("https://example.com/resume.pdf"));
}

#[test]
fn about_content_shows_loading_until_fetch_settles() {
    let mut lib = ContentLibrary::new(None);
    lib.begin_loading();
    let loading = lib.content_for("about").expect("content");
    assert_eq!(loading.subtitle.as_deref(), Some("Loading..."));
    // Record-backed content has no subtitle to replace.
    assert_eq!(lib.content_for("projects").expect("content").subtitle, None);

    lib.finish_loading(Vec::new(), Vec::new());
    let ready = lib.content_for("about").expect("content");
    assert_eq!(ready.title, "ABOUT THIS PAGE");
    assert_eq!(ready.subtitle.as_deref(), Some("How I Built This"));
    assert_eq!(ready.details.len(), ABOUT_DETAILS.len());
}

#[test]
fn failed_fetch_still_renders_headers() {
    let mut lib = ContentLibrary::new(None);
    lib.begin_loading();
    lib.finish_loading(Vec::new(), Vec::new());
    let content = lib.content_for("clickable_projects").expect("content");
    assert!(content.rows.is_empty());
    assert!(!lib.loading);
    assert_eq!(lib.content_for("door"), None);
}
