use serde::Deserialize;

/// One navigation entry. Rebuilt on every render, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkEntry {
    pub href: String,
    pub text: String,
}

/// Site-wide links shown by every navbar and footer, ahead of any
/// page-supplied links.
const SITE_LINKS: &[(&str, &str)] = &[("/", "Home"), ("/domains.html", "Domains")];

pub fn site_links() -> Vec<LinkEntry> {
    SITE_LINKS
        .iter()
        .map(|(href, text)| LinkEntry {
            href: (*href).to_string(),
            text: (*text).to_string(),
        })
        .collect()
}

/// Site-wide links followed by the page-supplied ones, order preserved.
pub fn merge_links(page_links: &[LinkEntry]) -> Vec<LinkEntry> {
    let mut merged = site_links();
    merged.extend(page_links.iter().cloned());
    merged
}

/// The footer's quick-links view: the merged list minus home entries.
pub fn quick_links(merged: &[LinkEntry]) -> Vec<LinkEntry> {
    merged
        .iter()
        .filter(|l| !is_home(&l.href))
        .cloned()
        .collect()
}

fn is_home(href: &str) -> bool {
    matches!(href.trim(), "/" | "/index.html" | "index.html")
}

/// Parses a JSON-encoded `page-links` attribute value. Malformed input
/// degrades to an empty list with a logged warning; it must never take the
/// navbar down with it.
pub fn parse_page_links(raw: Option<&str>) -> Vec<LinkEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<LinkEntry>>(raw) {
        Ok(links) => links,
        Err(e) => {
            tracing::warn!(error = %e, "malformed page-links attribute; using no page links");
            Vec::new()
        }
    }
}
