mod attrs;
mod badge;
mod builtin;
mod card;
mod cli;
mod color;
mod document;
mod html;
mod links;
mod manifest;
mod nav;
mod theme;

use std::path::{Path, PathBuf};

use anyhow::Context as _;

pub use cli::{Args as CliArgs, Mode, ThemeChoice};
pub use theme::{Theme, ThemeStore};

pub fn run(args: cli::Args) -> anyhow::Result<()> {
    let site: manifest::SiteManifest = {
        let bytes =
            std::fs::read(&args.input).with_context(|| format!("read {}", args.input.display()))?;
        serde_json::from_slice(&bytes).context("parse site manifest")?
    };

    let store = match &args.state {
        Some(path) => theme::ThemeStore::with_file(path.clone()),
        None => theme::ThemeStore::in_memory(theme::Theme::Light),
    };
    if let Some(choice) = args.theme {
        store.set(choice.into());
    }
    let theme = store.read();

    let out_dir = args.out.clone().unwrap_or_else(|| PathBuf::from("site"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir.display()))?;

    let css_rel = match args.mode {
        cli::Mode::Dir => Some(write_css_file(&out_dir, &args.assets_dir_name)?),
        cli::Mode::Single => None,
    };

    for page in &site.pages {
        let doc = document::Document::new(store.clone());
        let sections = html::render_sections(&doc, page);
        let rendered = html::build_page(&site.site, page, &sections, theme, css_rel.as_deref());

        let path = out_dir.join(format!("{}.html", page.slug));
        std::fs::write(&path, rendered).with_context(|| format!("write {}", path.display()))?;
        tracing::info!(page = %page.slug, theme = theme.as_str(), "rendered page");
    }

    Ok(())
}

fn write_css_file(out_dir: &Path, assets_dir_name: &str) -> anyhow::Result<String> {
    let rel = format!("{}/css/site.css", assets_dir_name);
    let abs = out_dir.join(&rel);
    if let Some(parent) = abs.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(&abs, builtin::SITE_CSS).with_context(|| format!("write {}", abs.display()))?;
    Ok(rel)
}
