use maud::{Markup, PreEscaped, html};

use crate::color;
use crate::theme::Theme;

/// Named preset style categories. `Green` is the default when neither a
/// variant nor a custom color is supplied; only `purple` and `orange` are
/// legal attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Green,
    Purple,
    Orange,
}

impl Variant {
    pub fn parse(s: &str) -> Option<Variant> {
        match s.trim() {
            "purple" => Some(Variant::Purple),
            "orange" => Some(Variant::Orange),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Green => "green",
            Variant::Purple => "purple",
            Variant::Orange => "orange",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    bg: &'static str,
    fg: &'static str,
    border: &'static str,
}

const GREEN_LIGHT: Palette = Palette {
    bg: "#dcfce7",
    fg: "#1a9659",
    border: "#bbf7d0",
};
const GREEN_DARK: Palette = Palette {
    bg: "#1a2622",
    fg: "#4ade80",
    border: "#14532d",
};
const PURPLE_LIGHT: Palette = Palette {
    bg: "#f3e8ff",
    fg: "#7e22ce",
    border: "#e9d5ff",
};
const PURPLE_DARK: Palette = Palette {
    bg: "#231a2e",
    fg: "#c084fc",
    border: "#4c1d95",
};
const ORANGE_LIGHT: Palette = Palette {
    bg: "#ffedd5",
    fg: "#c2410c",
    border: "#fed7aa",
};
const ORANGE_DARK: Palette = Palette {
    bg: "#2b2015",
    fg: "#fb923c",
    border: "#7c2d12",
};

// Custom-color translucency: background is stronger in dark mode, and the
// border is always more transparent than the background.
const LIGHT_BG_ALPHA: f32 = 0.1;
const DARK_BG_ALPHA: f32 = 0.25;
const LIGHT_BORDER_ALPHA: f32 = 0.05;
const DARK_BORDER_ALPHA: f32 = 0.12;

fn palette(variant: Variant, theme: Theme) -> Palette {
    match (variant, theme) {
        (Variant::Green, Theme::Light) => GREEN_LIGHT,
        (Variant::Green, Theme::Dark) => GREEN_DARK,
        (Variant::Purple, Theme::Light) => PURPLE_LIGHT,
        (Variant::Purple, Theme::Dark) => PURPLE_DARK,
        (Variant::Orange, Theme::Light) => ORANGE_LIGHT,
        (Variant::Orange, Theme::Dark) => ORANGE_DARK,
    }
}

/// The colors a single badge renders with under one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: String,
    pub color: String,
    pub border: String,
}

impl BadgeStyle {
    fn from_palette(p: Palette) -> Self {
        Self {
            background: p.bg.to_string(),
            color: p.fg.to_string(),
            border: p.border.to_string(),
        }
    }

    fn css(&self) -> String {
        format!(
            "background:{};color:{};border:1px solid {};",
            self.background, self.color, self.border
        )
    }
}

/// Selects the render path for a badge. An explicit `color` overrides
/// `variant`; with neither, the green default applies. The theme flag is read
/// per call, never cached, so a flag change takes effect on the next render.
pub fn resolve_style(variant: Option<&str>, color: Option<&str>, theme: Theme) -> BadgeStyle {
    if let Some(c) = custom_color(color) {
        let (bg_alpha, border_alpha) = match theme {
            Theme::Light => (LIGHT_BG_ALPHA, LIGHT_BORDER_ALPHA),
            Theme::Dark => (DARK_BG_ALPHA, DARK_BORDER_ALPHA),
        };
        return BadgeStyle {
            background: color::with_alpha(c, bg_alpha),
            color: c.to_string(),
            border: color::with_alpha(c, border_alpha),
        };
    }

    let variant = variant.and_then(Variant::parse).unwrap_or(Variant::Green);
    BadgeStyle::from_palette(palette(variant, theme))
}

fn custom_color(color: Option<&str>) -> Option<&str> {
    color.map(str::trim).filter(|c| !c.is_empty())
}

/// Renders one pill badge. `children` is the element's own content, passed
/// through as-is; callers escape text before handing it over. The effective
/// render path is mirrored into `data-*` attributes so the embedded client
/// script can restyle the badge when the theme attribute changes.
pub fn render(variant: Option<&str>, color: Option<&str>, theme: Theme, children: &str) -> Markup {
    let style = resolve_style(variant, color, theme);
    let custom = custom_color(color);
    let named = if custom.is_none() {
        variant.and_then(Variant::parse).map(Variant::as_str)
    } else {
        None
    };

    html! {
        span class="msu-badge" data-variant=[named] data-color=[custom] style=(style.css()) {
            (PreEscaped(children))
        }
    }
}

/// Variant palettes and alpha constants in one JSON table, embedded into the
/// theme script so the client restyles badges with the same numbers this
/// module renders with.
pub fn client_style_table() -> serde_json::Value {
    fn palette_json(p: Palette) -> serde_json::Value {
        serde_json::json!({ "bg": p.bg, "fg": p.fg, "border": p.border })
    }

    serde_json::json!({
        "alphas": {
            "light": { "bg": LIGHT_BG_ALPHA, "border": LIGHT_BORDER_ALPHA },
            "dark": { "bg": DARK_BG_ALPHA, "border": DARK_BORDER_ALPHA },
        },
        "variants": {
            "green": { "light": palette_json(GREEN_LIGHT), "dark": palette_json(GREEN_DARK) },
            "purple": { "light": palette_json(PURPLE_LIGHT), "dark": palette_json(PURPLE_DARK) },
            "orange": { "light": palette_json(ORANGE_LIGHT), "dark": palette_json(ORANGE_DARK) },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_badge_palette_per_theme() {
        let light = resolve_style(None, None, Theme::Light);
        assert_eq!(light.background, "#dcfce7");
        assert_eq!(light.color, "#1a9659");

        let dark = resolve_style(None, None, Theme::Dark);
        assert_eq!(dark.background, "#1a2622");
        assert_eq!(dark.color, "#4ade80");
    }

    #[test]
    fn custom_color_blends_background_and_keeps_text() {
        let light = resolve_style(None, Some("#3b82f6"), Theme::Light);
        assert_eq!(light.background, "rgba(59,130,246,0.1)");
        assert_eq!(light.color, "#3b82f6");

        let dark = resolve_style(None, Some("#3b82f6"), Theme::Dark);
        assert_eq!(dark.background, "rgba(59,130,246,0.25)");
        assert_eq!(dark.color, "#3b82f6");
    }

    #[test]
    fn functional_rgb_blends_too() {
        let style = resolve_style(None, Some("rgb(255,0,0)"), Theme::Light);
        assert_eq!(style.background, "rgba(255,0,0,0.1)");
        assert_eq!(style.border, "rgba(255,0,0,0.05)");
    }

    #[test]
    fn explicit_color_overrides_variant() {
        let style = resolve_style(Some("purple"), Some("#ff0000"), Theme::Light);
        assert_eq!(style.color, "#ff0000");

        // Blank color does not count as explicit.
        let style = resolve_style(Some("purple"), Some("  "), Theme::Light);
        assert_eq!(style.background, PURPLE_LIGHT.bg);
    }

    #[test]
    fn unknown_variant_falls_back_to_green() {
        let style = resolve_style(Some("chartreuse"), None, Theme::Light);
        assert_eq!(style.background, GREEN_LIGHT.bg);
    }

    #[test]
    fn render_passes_children_through_untouched() {
        let html = render(None, None, Theme::Light, "<b>New</b>").into_string();
        assert!(html.contains("<b>New</b>"));
        assert!(html.contains("class=\"msu-badge\""));
    }

    #[test]
    fn render_tags_effective_path() {
        let named = render(Some("orange"), None, Theme::Light, "x").into_string();
        assert!(named.contains("data-variant=\"orange\""));
        assert!(!named.contains("data-color"));

        let custom = render(Some("orange"), Some("#123456"), Theme::Light, "x").into_string();
        assert!(custom.contains("data-color=\"#123456\""));
        assert!(!custom.contains("data-variant"));
    }
}
