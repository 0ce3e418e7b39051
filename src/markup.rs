use folio_core::{PopupContent, PopupKind};
use std::fmt::Write;

/// Minimal HTML escaping for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only http(s) links are rendered as anchors.
pub fn safe_href(url: &str) -> Option<String> {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://")).then(|| escape_html(trimmed))
}

pub fn render_popup(content: &PopupContent) -> String {
    let mut html = String::new();
    _ = write!(
        html,
        "<div class=\"popup-header\"><h3 class=\"popup-title\">{}</h3>",
        escape_html(content.title)
    );
    if let Some(sub) = content.subtitle.as_deref().filter(|s| !s.is_empty()) {
        _ = write!(html, "<p class=\"popup-subtitle\">{}</p>", escape_html(sub));
    }
    html.push_str("</div>");
    if !content.description.is_empty() {
        _ = write!(
            html,
            "<p class=\"popup-description\">{}</p>",
            escape_html(content.description)
        );
    }
    match content.kind {
        PopupKind::Projects | PopupKind::Experiences => {
            html.push_str("<div class=\"popup-section\"><div class=\"scrollable-content\">");
            for row in &content.rows {
                _ = write!(
                    html,
                    "<div class=\"list-item\" data-id=\"{}\"><strong class=\"item-title\">{}</strong><span class=\"item-description\">{}</span>",
                    row.id,
                    escape_html(&row.title),
                    escape_html(&row.summary)
                );
                if !row.tech.is_empty() {
                    _ = write!(
                        html,
                        "<div class=\"item-tech\"><small>Tech: {}</small></div>",
                        escape_html(&row.tech.join(", "))
                    );
                }
                if let Some(href) = row.link.as_deref().and_then(safe_href) {
                    _ = write!(
                        html,
                        "<div class=\"item-github\"><a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"github-link\">GitHub</a></div>"
                    );
                }
                html.push_str("</div>");
            }
            html.push_str("</div>");
            if let Some(href) = content.resume_url.as_deref().and_then(safe_href) {
                _ = write!(
                    html,
                    "<div class=\"popup-resume-section\"><a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"resume-link\">View Full Resume</a></div>"
                );
            }
            html.push_str("</div>");
        }
        PopupKind::About => {
            html.push_str("<div class=\"popup-section\">");
            for detail in &content.details {
                _ = write!(html, "<div class=\"detail-item\">{}</div>", escape_html(detail));
            }
            html.push_str("</div>");
        }
    }
    html
}
