use maud::{Markup, html};
use serde::Deserialize;

use crate::attrs::Attrs;
use crate::badge::{self, Variant};
use crate::theme::Theme;

/// One entry of the `color-badges` attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorBadge {
    pub text: String,
    #[serde(default)]
    pub color: String,
}

/// Parsed card configuration. A card is cosmetic, so parsing never fails:
/// malformed badge lists become empty lists and a missing title becomes a
/// placeholder.
#[derive(Debug, Clone)]
pub struct CardSpec {
    pub title: String,
    pub description: String,
    pub colored_badges: Vec<ColorBadge>,
    pub plain_badges: Vec<String>,
    pub green_variant: bool,
    pub icon: Option<String>,
    pub href: Option<String>,
}

impl CardSpec {
    pub fn from_attrs(attrs: &Attrs) -> Self {
        let title = match attrs.get("title") {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => {
                tracing::warn!("card is missing a title; using placeholder");
                "Untitled".to_string()
            }
        };

        Self {
            title,
            description: attrs.get("description").unwrap_or_default().to_string(),
            colored_badges: parse_badge_list(attrs.get("color-badges"), "color-badges"),
            plain_badges: parse_badge_list(attrs.get("badges"), "badges"),
            green_variant: attrs.get("variant") == Some("green"),
            icon: non_empty(attrs.get("icon")),
            href: non_empty(attrs.get("href")),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_badge_list<T: serde::de::DeserializeOwned>(raw: Option<&str>, attr: &str) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(error = %e, attr, "malformed badge list attribute; rendering none");
            Vec::new()
        }
    }
}

/// Renders one card. Colored badges come before plain ones, each list in its
/// own order. Every configured string, including `icon` and `href`, goes
/// through maud's escaping.
pub fn render(spec: &CardSpec, theme: Theme) -> Markup {
    let class = if spec.green_variant {
        "msu-card msu-card--green"
    } else {
        "msu-card"
    };
    let has_badges = !spec.colored_badges.is_empty() || !spec.plain_badges.is_empty();

    let body = html! {
        article class=(class) {
            @if let Some(icon) = &spec.icon {
                div class="msu-card-icon" aria-hidden="true" { (icon) }
            }
            h3 class="msu-card-title" { (spec.title) }
            @if !spec.description.is_empty() {
                p class="msu-card-desc" { (spec.description) }
            }
            @if has_badges {
                div class="msu-card-badges" {
                    @for b in &spec.colored_badges {
                        (colored_badge(b, theme))
                    }
                    @for text in &spec.plain_badges {
                        (badge::render(None, None, theme, &escaped(text)))
                    }
                }
            }
        }
    };

    html! {
        @if let Some(href) = &spec.href {
            a class="msu-card-link" href=(href) { (body) }
        } @else {
            (body)
        }
    }
}

/// A `color` naming a preset variant selects that variant's path; any other
/// non-empty value is treated as a custom color literal.
fn colored_badge(b: &ColorBadge, theme: Theme) -> Markup {
    let children = escaped(&b.text);
    let color = b.color.trim();
    if color.is_empty() {
        badge::render(None, None, theme, &children)
    } else if Variant::parse(color).is_some() {
        badge::render(Some(color), None, theme, &children)
    } else {
        badge::render(None, Some(color), theme, &children)
    }
}

fn escaped(text: &str) -> String {
    html! { (text) }.into_string()
}
