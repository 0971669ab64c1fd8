use std::path::Path;

use kuchiki::traits::TendrilSink as _;

const MANIFEST: &str = r##"{
  "site": {
    "name": "MSU Domains",
    "tagline": "Short names that work",
    "contact_email": "hello@msu.example"
  },
  "pages": [
    {
      "slug": "index",
      "title": "Home",
      "page_links": "[{\"href\":\"/pricing.html\",\"text\":\"Pricing\"}]",
      "hero": { "heading": "Find your name", "tagline": "Premium, memorable domains" },
      "sections": [
        {
          "heading": "Featured",
          "cards": [
            {
              "title": "quick.dev",
              "description": "A short name for fast things",
              "badges": "[\"Available\",\"Popular\"]",
              "color-badges": "[{\"text\":\"Featured\",\"color\":\"purple\"},{\"text\":\"Hot\",\"color\":\"#3b82f6\"}]",
              "variant": "green",
              "icon": "⚡",
              "href": "/domains.html"
            },
            {
              "title": "<script>alert(1)</script>",
              "description": "escaping probe",
              "badges": "{not json"
            }
          ]
        }
      ]
    },
    {
      "slug": "domains",
      "title": "Domains",
      "sections": [
        {
          "heading": "All domains",
          "intro": "Everything currently listed.",
          "cards": [
            { "title": "steady.io", "badges": "[\"Available\"]" }
          ]
        }
      ]
    }
  ]
}"##;

fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

fn link_list(html: &str, selector: &str) -> Vec<(String, String)> {
    let doc = kuchiki::parse_html().one(html);
    let mut out = Vec::new();
    if let Ok(nodes) = doc.select(selector) {
        for node in nodes {
            let href = node
                .attributes
                .borrow()
                .get("href")
                .unwrap_or("")
                .to_string();
            out.push((href, node.text_contents()));
        }
    }
    out
}

#[test]
fn renders_dir_mode_with_shared_stylesheet() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("site.json");
    std::fs::write(&input, MANIFEST).unwrap();

    let out_dir = tmp.path().join("out");
    let args = msu_site_render::CliArgs {
        input,
        mode: msu_site_render::Mode::Dir,
        out: Some(out_dir.clone()),
        state: None,
        theme: None,
        assets_dir_name: "assets".to_string(),
    };
    msu_site_render::run(args).unwrap();

    let index = read_to_string(&out_dir.join("index.html"));
    let domains = read_to_string(&out_dir.join("domains.html"));
    let css = read_to_string(&out_dir.join("assets/css/site.css"));

    assert!(css.contains(".msu-badge"));
    assert!(index.contains("assets/css/site.css"));
    assert!(!index.contains("<style>"));

    // Desktop and drawer nav render the same merged list, in order.
    let expected = vec![
        ("/".to_string(), "Home".to_string()),
        ("/domains.html".to_string(), "Domains".to_string()),
        ("/pricing.html".to_string(), "Pricing".to_string()),
    ];
    assert_eq!(link_list(&index, ".msu-nav-links a"), expected);
    assert_eq!(link_list(&index, ".msu-drawer-links a"), expected);

    // Footer quick links are the merged list minus home.
    let quick = link_list(&index, ".msu-footer-links a");
    assert!(quick.iter().all(|(href, _)| href != "/"));
    assert_eq!(quick.len(), expected.len() - 1);

    // A page without page_links still gets the site-wide list.
    assert_eq!(link_list(&domains, ".msu-nav-links a").len(), 2);

    // Cards and badges made it through, colored before plain.
    assert!(index.contains("quick.dev"));
    assert!(index.contains("data-variant=\"purple\""));
    assert!(index.contains("data-color=\"#3b82f6\""));
    assert!(index.contains("rgba(59,130,246,0.1)"));
    let featured = index.find(">Featured</span>").unwrap();
    let available = index.find(">Available</span>").unwrap();
    assert!(featured < available);

    // The escaping probe rendered as text, and its malformed badge list
    // rendered nothing at all.
    assert!(!index.contains("<script>alert(1)</script>"));
    assert!(index.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));

    // Both behavior scripts are embedded.
    assert!(index.contains("data-drawer-open"));
    assert!(index.contains("msu-theme"));
    assert!(index.contains("MutationObserver"));
}

#[test]
fn renders_single_mode_self_contained() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("site.json");
    std::fs::write(&input, MANIFEST).unwrap();

    let out_dir = tmp.path().join("out");
    let args = msu_site_render::CliArgs {
        input,
        mode: msu_site_render::Mode::Single,
        out: Some(out_dir.clone()),
        state: None,
        theme: None,
        assets_dir_name: "assets".to_string(),
    };
    msu_site_render::run(args).unwrap();

    let index = read_to_string(&out_dir.join("index.html"));
    assert!(index.contains("<style>"));
    assert!(index.contains(".msu-badge"));
    assert!(!out_dir.join("assets").exists());
}

#[test]
fn theme_state_file_bakes_and_persists_the_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("site.json");
    std::fs::write(&input, MANIFEST).unwrap();
    let state = tmp.path().join("theme-state");

    let out_dark = tmp.path().join("dark");
    let args = msu_site_render::CliArgs {
        input: input.clone(),
        mode: msu_site_render::Mode::Single,
        out: Some(out_dark.clone()),
        state: Some(state.clone()),
        theme: Some(msu_site_render::ThemeChoice::Dark),
        assets_dir_name: "assets".to_string(),
    };
    msu_site_render::run(args).unwrap();

    assert_eq!(std::fs::read_to_string(&state).unwrap(), "dark");
    let index = read_to_string(&out_dark.join("index.html"));
    assert!(index.contains("data-theme=\"dark\""));
    // Default badges bake the dark palette.
    assert!(index.contains("#1a2622"));

    // A later run with no override picks the persisted preference up.
    let out_again = tmp.path().join("again");
    let args = msu_site_render::CliArgs {
        input,
        mode: msu_site_render::Mode::Single,
        out: Some(out_again.clone()),
        state: Some(state),
        theme: None,
        assets_dir_name: "assets".to_string(),
    };
    msu_site_render::run(args).unwrap();
    let index = read_to_string(&out_again.join("index.html"));
    assert!(index.contains("data-theme=\"dark\""));
}
