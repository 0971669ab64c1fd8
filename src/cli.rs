use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// Pages plus a shared `assets/css/site.css`.
    Dir,
    /// Self-contained pages with the stylesheet inlined.
    Single,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Theme {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Site manifest JSON file describing the pages to render.
    #[arg(long)]
    pub input: PathBuf,

    /// Output mode: `dir` (pages + assets/) or `single` (self-contained pages).
    #[arg(long, value_enum, default_value = "dir")]
    pub mode: Mode,

    /// Output directory. Defaults to `site`.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Theme preference state file. Read at startup; written whenever the
    /// flag is set or toggled. Without it the preference is in-memory only.
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Set (and persist) the theme flag before rendering, overriding the
    /// stored preference.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeChoice>,

    /// Assets directory name for `dir` mode.
    #[arg(long, default_value = "assets")]
    pub assets_dir_name: String,
}
