use std::collections::BTreeMap;

use serde::Deserialize;

/// The site manifest: one JSON file describing every page to render.
#[derive(Debug, Deserialize)]
pub struct SiteManifest {
    pub site: SiteMeta,
    pub pages: Vec<PageSpec>,
}

#[derive(Debug, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageSpec {
    /// Output file stem, e.g. `index` becomes `index.html`.
    pub slug: String,
    pub title: String,
    /// JSON-encoded `[{href,text}]` list, the `page-links` attribute value.
    #[serde(default)]
    pub page_links: Option<String>,
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
pub struct Hero {
    pub heading: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    /// Card element attribute maps; badge lists stay JSON-encoded strings,
    /// exactly as they would appear in markup.
    #[serde(default)]
    pub cards: Vec<BTreeMap<String, String>>,
}
