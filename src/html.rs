use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::attrs::Attrs;
use crate::builtin;
use crate::document::Document;
use crate::links;
use crate::manifest::{PageSpec, SiteMeta};
use crate::nav;
use crate::theme::Theme;

/// Renders a page's sections, mounting every card into the document so it
/// takes part in theme-change propagation. Returns one markup string per
/// section.
pub fn render_sections(doc: &Document, page: &PageSpec) -> Vec<String> {
    page.sections
        .iter()
        .map(|section| {
            let cards: Vec<String> = section
                .cards
                .iter()
                .map(|raw| {
                    let attrs: Attrs = raw.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
                    doc.create_card(attrs).html()
                })
                .collect();

            let markup: Markup = html! {
                section class="msu-section" {
                    div class="msu-container" {
                        @if let Some(heading) = &section.heading {
                            h2 { (heading) }
                        }
                        @if let Some(intro) = &section.intro {
                            p class="msu-section-intro" { (intro) }
                        }
                        @if !cards.is_empty() {
                            div class="msu-card-grid" {
                                @for card in &cards {
                                    (PreEscaped(card.as_str()))
                                }
                            }
                        }
                    }
                }
            };
            markup.into_string()
        })
        .collect()
}

/// Assembles one full page. With `css_link_href` the stylesheet is linked;
/// without it the page is self-contained and the CSS is inlined, the same
/// split the output modes expose.
pub fn build_page(
    site: &SiteMeta,
    page: &PageSpec,
    sections: &[String],
    theme: Theme,
    css_link_href: Option<&str>,
) -> String {
    let page_links = links::parse_page_links(page.page_links.as_deref());
    let title = format!("{} | {}", page.title, site.name);

    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { (title) }
                @if let Some(href) = css_link_href {
                    link rel="stylesheet" href=(href);
                } @else {
                    style { (PreEscaped(builtin::SITE_CSS)) }
                }
            }
            body {
                (nav::render_navbar(site, &page_links, theme))
                @if let Some(hero) = &page.hero {
                    section class="msu-hero" {
                        div class="msu-container" {
                            h1 { (hero.heading) }
                            @if let Some(tagline) = &hero.tagline {
                                p { (tagline) }
                            }
                        }
                    }
                }
                main {
                    @for section in sections {
                        (PreEscaped(section.as_str()))
                    }
                }
                (nav::render_footer(site, &page_links))
                script { (PreEscaped(builtin::NAV_JS)) }
                script { (PreEscaped(builtin::theme_js())) }
            }
        }
    };
    markup.into_string()
}
