// Host-side tests for popup HTML rendering.
// The main crate is wasm-only, so the pure renderer is included directly.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use folio_core::*;
use markup::*;

fn project_content(link: &str) -> PopupContent {
    let mut lib = ContentLibrary::new(None);
    lib.finish_loading(
        vec![ProjectRecord {
            id: 4,
            title: "Tom & Jerry <3".into(),
            description: Some(ProjectDescription::Details(ProjectDetails {
                summary: Some("Cartoon \"demo\"".into()),
                tech: vec!["Rust".into(), "WebGL".into()],
                github_link: Some(link.into()),
            })),
            images: Vec::new(),
        }],
        Vec::new(),
    );
    lib.content_for("clickable_projects").expect("content")
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn only_http_links_are_allowed() {
    assert_eq!(safe_href(" https://github.com/x "), Some("https://github.com/x".into()));
    assert_eq!(safe_href("HTTP://example.com"), Some("HTTP://example.com".into()));
    assert_eq!(safe_href("javascript:alert(1)"), None);
    assert_eq!(safe_href("/relative"), None);
}

#[test]
fn project_rows_render_escaped_with_link() {
    let html = render_popup(&project_content("https://github.com/example/tj"));
    assert!(html.contains("<h3 class=\"popup-title\">PROJECTS</h3>"));
    assert!(html.contains("Tom &amp; Jerry &lt;3"));
    assert!(html.contains("Cartoon &quot;demo&quot;"));
    assert!(html.contains("Tech: Rust, WebGL"));
    assert!(html.contains("href=\"https://github.com/example/tj\""));
    assert!(html.contains("data-id=\"4\""));
    assert!(!html.contains("popup-subtitle"));
}

#[test]
fn unsafe_link_is_dropped() {
    let html = render_popup(&project_content("javascript:alert(1)"));
    assert!(!html.contains("github-link"));
    assert!(!html.contains("javascript:"));
}

#[test]
fn experience_popup_has_resume_link() {
    let lib = ContentLibrary::new(Some("https://example.com/cv.pdf".into()));
    let html = render_popup(&lib.content_for("clickable_experience").expect("content"));
    assert!(html.contains("EXPERIENCE"));
    assert!(html.contains("class=\"resume-link\""));
}

#[test]
fn about_popup_lists_details_and_subtitle() {
    let mut lib = ContentLibrary::new(None);
    lib.begin_loading();
    let html = render_popup(&lib.content_for("about_sign").expect("content"));
    assert!(html.contains("ABOUT THIS PAGE"));
    assert!(html.contains("<p class=\"popup-subtitle\">Loading...</p>"));
    assert_eq!(html.matches("detail-item").count(), ABOUT_DETAILS.len());
    assert!(!html.contains("list-item"));
}
