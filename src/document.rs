//! Mounted-element runtime. A [`Document`] owns the components rendered into
//! one page and wires the single piece of cross-component coordination: when
//! the shared theme flag changes, every mounted badge (and every card, whose
//! markup embeds badge styling) is pushed a re-render. Elements never poll
//! the flag.

use std::sync::{Arc, Mutex, Weak};

use crate::attrs::Attrs;
use crate::badge;
use crate::card::{self, CardSpec};
use crate::theme::{Theme, ThemeStore};

const BADGE_OBSERVED: &[&str] = &["variant", "color"];
const CARD_OBSERVED: &[&str] = &[
    "title",
    "description",
    "badges",
    "color-badges",
    "variant",
    "icon",
    "href",
];

/// A mounted badge. Writes to an observed attribute re-render synchronously;
/// the rendered markup is cached until the next trigger.
pub struct BadgeElement {
    theme: Arc<ThemeStore>,
    attrs: Mutex<Attrs>,
    children: String,
    html: Mutex<String>,
}

impl BadgeElement {
    fn mount(theme: Arc<ThemeStore>, attrs: Attrs, children: String) -> Arc<Self> {
        let el = Arc::new(Self {
            theme,
            attrs: Mutex::new(attrs),
            children,
            html: Mutex::new(String::new()),
        });
        el.refresh(el.theme.read());
        el
    }

    pub fn html(&self) -> String {
        self.html.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        let changed = self
            .attrs
            .lock()
            .map(|mut a| a.set(name, value))
            .unwrap_or(false);
        if changed && BADGE_OBSERVED.contains(&name) {
            self.refresh(self.theme.read());
        }
    }

    pub fn remove_attr(&self, name: &str) {
        let removed = self.attrs.lock().map(|mut a| a.remove(name)).unwrap_or(false);
        if removed && BADGE_OBSERVED.contains(&name) {
            self.refresh(self.theme.read());
        }
    }

    fn refresh(&self, theme: Theme) {
        let rendered = match self.attrs.lock() {
            Ok(attrs) => {
                badge::render(attrs.get("variant"), attrs.get("color"), theme, &self.children)
                    .into_string()
            }
            Err(_) => return,
        };
        if let Ok(mut html) = self.html.lock() {
            *html = rendered;
        }
    }
}

/// A mounted card. Same reactive contract as the badge, over the full card
/// attribute set.
pub struct CardElement {
    theme: Arc<ThemeStore>,
    attrs: Mutex<Attrs>,
    html: Mutex<String>,
}

impl CardElement {
    fn mount(theme: Arc<ThemeStore>, attrs: Attrs) -> Arc<Self> {
        let el = Arc::new(Self {
            theme,
            attrs: Mutex::new(attrs),
            html: Mutex::new(String::new()),
        });
        el.refresh(el.theme.read());
        el
    }

    pub fn html(&self) -> String {
        self.html.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        let changed = self
            .attrs
            .lock()
            .map(|mut a| a.set(name, value))
            .unwrap_or(false);
        if changed && CARD_OBSERVED.contains(&name) {
            self.refresh(self.theme.read());
        }
    }

    fn refresh(&self, theme: Theme) {
        let spec = match self.attrs.lock() {
            Ok(attrs) => CardSpec::from_attrs(&attrs),
            Err(_) => return,
        };
        let rendered = card::render(&spec, theme).into_string();
        if let Ok(mut html) = self.html.lock() {
            *html = rendered;
        }
    }
}

pub struct Document {
    inner: Arc<DocumentInner>,
}

struct DocumentInner {
    theme: Arc<ThemeStore>,
    badges: Mutex<Vec<Arc<BadgeElement>>>,
    cards: Mutex<Vec<Arc<CardElement>>>,
}

impl Document {
    /// Subscribes to the store on construction, so every mounted element
    /// follows theme changes for the document's lifetime.
    pub fn new(theme: Arc<ThemeStore>) -> Self {
        let inner = Arc::new(DocumentInner {
            theme: theme.clone(),
            badges: Mutex::new(Vec::new()),
            cards: Mutex::new(Vec::new()),
        });
        let weak: Weak<DocumentInner> = Arc::downgrade(&inner);
        theme.subscribe(move |t| {
            if let Some(doc) = weak.upgrade() {
                doc.refresh_all(t);
            }
        });
        Self { inner }
    }

    pub fn theme(&self) -> Theme {
        self.inner.theme.read()
    }

    pub fn create_badge(&self, attrs: Attrs, children: &str) -> Arc<BadgeElement> {
        let el = BadgeElement::mount(self.inner.theme.clone(), attrs, children.to_string());
        if let Ok(mut badges) = self.inner.badges.lock() {
            badges.push(el.clone());
        }
        el
    }

    pub fn create_card(&self, attrs: Attrs) -> Arc<CardElement> {
        let el = CardElement::mount(self.inner.theme.clone(), attrs);
        if let Ok(mut cards) = self.inner.cards.lock() {
            cards.push(el.clone());
        }
        el
    }
}

impl DocumentInner {
    fn refresh_all(&self, theme: Theme) {
        if let Ok(badges) = self.badges.lock() {
            for b in badges.iter() {
                b.refresh(theme);
            }
        }
        if let Ok(cards) = self.cards.lock() {
            for c in cards.iter() {
                c.refresh(theme);
            }
        }
    }
}
