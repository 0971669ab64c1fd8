/// Parses a CSS color literal and re-emits it as `rgba(r,g,b,alpha)` with the
/// requested alpha. Accepts `#rrggbb` hex and functional `rgb()`/`rgba()`
/// forms; anything else is returned unchanged so an unrecognized literal
/// degrades to no blending instead of an error.
pub fn with_alpha(color: &str, alpha: f32) -> String {
    match parse_channels(color) {
        Some((r, g, b)) => format!("rgba({r},{g},{b},{alpha})"),
        None => color.to_string(),
    }
}

fn parse_channels(color: &str) -> Option<(u8, u8, u8)> {
    let c = color.trim();
    if let Some(hex) = c.strip_prefix('#') {
        return parse_hex(hex);
    }
    parse_rgb_functional(c)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn parse_rgb_functional(c: &str) -> Option<(u8, u8, u8)> {
    let re = regex::Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[0-9.]+\s*)?\)$",
    )
    .expect("rgb literal regex");
    let caps = re.captures(c)?;
    let r = caps.get(1)?.as_str().parse::<u8>().ok()?;
    let g = caps.get(2)?.as_str().parse::<u8>().ok()?;
    let b = caps.get(3)?.as_str().parse::<u8>().ok()?;
    Some((r, g, b))
}
