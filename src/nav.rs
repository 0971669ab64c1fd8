use maud::{Markup, html};

use crate::links::{self, LinkEntry};
use crate::manifest::SiteMeta;
use crate::theme::Theme;

/// Renders the navbar: desktop link list, mobile drawer with the same links,
/// scrim, and a theme toggle duplicated in both layouts. Renders fully up
/// front; nothing here reacts to later attribute changes.
pub fn render_navbar(site: &SiteMeta, page_links: &[LinkEntry], theme: Theme) -> Markup {
    let merged = links::merge_links(page_links);

    html! {
        header class="msu-navbar" {
            nav class="msu-container msu-navbar-inner" aria-label="Main" {
                a class="msu-brand" href="/" { (site.name) }
                ul class="msu-nav-links" {
                    (link_items(&merged))
                }
                div class="msu-nav-actions" {
                    (theme_toggle(theme))
                    button type="button" class="msu-drawer-open" data-drawer-open
                        aria-label="Open menu" { "\u{2630}" }
                }
            }
            div class="msu-scrim" data-drawer-scrim {}
            aside class="msu-drawer" data-drawer aria-hidden="true" {
                div class="msu-drawer-head" {
                    span class="msu-brand" { (site.name) }
                    button type="button" class="msu-drawer-close" data-drawer-close
                        aria-label="Close menu" { "\u{00d7}" }
                }
                ul class="msu-drawer-links" {
                    (link_items(&merged))
                }
                (theme_toggle(theme))
            }
        }
    }
}

/// Renders the footer: branding, the merged link list minus home entries,
/// and contact details when the manifest has them.
pub fn render_footer(site: &SiteMeta, page_links: &[LinkEntry]) -> Markup {
    let quick = links::quick_links(&links::merge_links(page_links));

    html! {
        footer class="msu-footer" {
            div class="msu-container msu-footer-inner" {
                div class="msu-footer-brand" {
                    span class="msu-brand" { (site.name) }
                    @if let Some(tagline) = &site.tagline {
                        p class="msu-footer-tagline" { (tagline) }
                    }
                }
                div class="msu-footer-links" {
                    h4 { "Quick links" }
                    ul {
                        (link_items(&quick))
                    }
                }
                @if let Some(email) = &site.contact_email {
                    div class="msu-footer-contact" {
                        h4 { "Contact" }
                        a href=(format!("mailto:{email}")) { (email) }
                    }
                }
            }
            div class="msu-container msu-footer-copy" {
                "\u{00a9} " (site.name) ". All rights reserved."
            }
        }
    }
}

fn link_items(entries: &[LinkEntry]) -> Markup {
    html! {
        @for l in entries {
            li {
                a href=(l.href) { (l.text) }
            }
        }
    }
}

/// The toggle's label names the theme the next press selects.
fn theme_toggle(theme: Theme) -> Markup {
    let next = theme.flipped();
    let label = match next {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    };
    html! {
        button type="button" class="msu-theme-toggle" data-theme-toggle
            aria-label=(format!("Switch to {} theme", next.as_str())) { (label) }
    }
}
