pub const SITE_CSS: &str = include_str!("site.css");

/// Drawer behavior for the emitted page: open/close controls, scrim click,
/// delayed close after a drawer link click, and background scroll lock while
/// open.
pub const NAV_JS: &str = r#"(function () {
  var drawer = document.querySelector("[data-drawer]");
  var scrim = document.querySelector("[data-drawer-scrim]");
  var openBtn = document.querySelector("[data-drawer-open]");
  var closeBtn = document.querySelector("[data-drawer-close]");
  if (!drawer || !openBtn) return;

  function open() {
    drawer.classList.add("is-open");
    if (scrim) scrim.classList.add("is-open");
    drawer.setAttribute("aria-hidden", "false");
    document.body.classList.add("msu-no-scroll");
  }

  function close() {
    drawer.classList.remove("is-open");
    if (scrim) scrim.classList.remove("is-open");
    drawer.setAttribute("aria-hidden", "true");
    document.body.classList.remove("msu-no-scroll");
  }

  openBtn.addEventListener("click", open);
  if (closeBtn) closeBtn.addEventListener("click", close);
  if (scrim) scrim.addEventListener("click", close);

  // Let the browser start navigating before the drawer slides away.
  var links = drawer.querySelectorAll("a");
  for (var i = 0; i < links.length; i++) {
    links[i].addEventListener("click", function () {
      window.setTimeout(close, 150);
    });
  }
})();"#;

const THEME_JS_TEMPLATE: &str = r#"(function () {
  var storageKey = "msu-theme";
  var root = document.documentElement;
  var style = __MSU_STYLE_TABLE__;
  var buttons = document.querySelectorAll("[data-theme-toggle]");

  function currentTheme() {
    return root.getAttribute("data-theme") === "dark" ? "dark" : "light";
  }

  function withAlpha(color, alpha) {
    var m = /^#([0-9a-fA-F]{6})$/.exec(color.trim());
    if (m) {
      var n = parseInt(m[1], 16);
      return "rgba(" + (n >> 16) + "," + ((n >> 8) & 255) + "," + (n & 255) + "," + alpha + ")";
    }
    m = /^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*[0-9.]+\s*)?\)$/.exec(color.trim());
    if (m) {
      return "rgba(" + m[1] + "," + m[2] + "," + m[3] + "," + alpha + ")";
    }
    return color;
  }

  function styleBadge(el, theme) {
    var custom = el.getAttribute("data-color");
    if (custom) {
      el.style.background = withAlpha(custom, style.alphas[theme].bg);
      el.style.borderColor = withAlpha(custom, style.alphas[theme].border);
      el.style.color = custom;
      return;
    }
    var variant = el.getAttribute("data-variant") || "green";
    var p = (style.variants[variant] || style.variants.green)[theme];
    el.style.background = p.bg;
    el.style.borderColor = p.border;
    el.style.color = p.fg;
  }

  function refresh(theme) {
    var badges = document.querySelectorAll(".msu-badge");
    for (var i = 0; i < badges.length; i++) {
      styleBadge(badges[i], theme);
    }
    var next = theme === "dark" ? "light" : "dark";
    var label = next === "dark" ? "Dark" : "Light";
    for (var j = 0; j < buttons.length; j++) {
      buttons[j].textContent = label;
      buttons[j].setAttribute("aria-label", "Switch to " + next + " theme");
    }
  }

  // Badges are pushed a refresh whenever the root theme attribute changes;
  // they never poll the flag themselves.
  if (window.MutationObserver) {
    new MutationObserver(function () {
      refresh(currentTheme());
    }).observe(root, { attributes: true, attributeFilter: ["data-theme"] });
  }

  var saved = null;
  try {
    saved = localStorage.getItem(storageKey);
  } catch (_) {
    saved = null;
  }
  var theme = saved === "dark" || saved === "light" ? saved : currentTheme();
  root.setAttribute("data-theme", theme);
  refresh(theme);

  for (var k = 0; k < buttons.length; k++) {
    buttons[k].addEventListener("click", function () {
      var next = currentTheme() === "dark" ? "light" : "dark";
      try {
        localStorage.setItem(storageKey, next);
      } catch (_) {}
      root.setAttribute("data-theme", next);
    });
  }
})();"#;

/// The theme/badge script with the badge style table baked in, so the client
/// restyles badges with the same palettes and alphas the Rust renderer uses.
pub fn theme_js() -> String {
    THEME_JS_TEMPLATE.replace(
        "__MSU_STYLE_TABLE__",
        &crate::badge::client_style_table().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_js_embeds_the_style_table() {
        let js = theme_js();
        assert!(!js.contains("__MSU_STYLE_TABLE__"));
        assert!(js.contains("#dcfce7"));
        assert!(js.contains("\"bg\":0.1"));
    }
}
