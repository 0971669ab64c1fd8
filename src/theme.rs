use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// The persisted light/dark display mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than the two known values reads as `None`; callers
    /// substitute the light default.
    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

type Subscriber = Box<dyn Fn(Theme) + Send + Sync>;

/// The shared theme flag cell: one value, read by every badge render, written
/// only through [`ThemeStore::set`] / [`ThemeStore::toggle`]. Writes persist
/// the new value and push it to every subscriber, so components never poll.
///
/// The state mutex also serializes writes to the backing file.
pub struct ThemeStore {
    state: Mutex<Theme>,
    file: Option<PathBuf>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl ThemeStore {
    /// Ephemeral store, used when no state file is configured and in tests.
    pub fn in_memory(initial: Theme) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(initial),
            file: None,
            subscribers: Mutex::new(Vec::new()),
        })
    }

    /// File-backed store. An absent, unreadable, or invalid state file reads
    /// as the light default.
    pub fn with_file(path: PathBuf) -> Arc<Self> {
        let initial = std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| Theme::parse(&s))
            .unwrap_or(Theme::Light);
        Arc::new(Self {
            state: Mutex::new(initial),
            file: Some(path),
            subscribers: Mutex::new(Vec::new()),
        })
    }

    pub fn read(&self) -> Theme {
        self.state.lock().map(|t| *t).unwrap_or(Theme::Light)
    }

    /// Flips the flag, persists it, and notifies subscribers. Returns the new
    /// value.
    pub fn toggle(&self) -> Theme {
        let next = self.read().flipped();
        self.set(next);
        next
    }

    pub fn set(&self, theme: Theme) {
        if let Ok(mut state) = self.state.lock() {
            *state = theme;
            if let Some(path) = &self.file {
                // A preference that fails to stick must not break anything.
                if let Err(e) = std::fs::write(path, theme.as_str()) {
                    tracing::warn!(error = %e, path = %path.display(), "failed to persist theme flag");
                }
            }
        }
        self.notify(theme);
    }

    /// Registers a push subscriber, called on every subsequent change.
    pub fn subscribe(&self, f: impl Fn(Theme) + Send + Sync + 'static) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(Box::new(f));
        }
    }

    fn notify(&self, theme: Theme) {
        if let Ok(subs) = self.subscribers.lock() {
            for sub in subs.iter() {
                sub(theme);
            }
        }
    }
}
