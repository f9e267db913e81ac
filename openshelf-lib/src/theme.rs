//! Presentation theme preference.
//!
//! A single value that survives across invocations. Persistence is
//! best-effort by design: a missing, unreadable or corrupt stored value
//! falls back to the default theme and a failed write is logged but never
//! surfaced to the caller.

use std::path::PathBuf;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// The presentation mode, dark unless the user has chosen otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The default mode.
    #[default]
    Dark,
    /// Light mode, only active when explicitly stored.
    Light,
}

impl Theme {
    /// The other mode.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph shown next to the mode label.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dark => "\u{263e}",
            Self::Light => "\u{2600}",
        }
    }

    /// Human readable name of the mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark mode",
            Self::Light => "Light mode",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}

/// Persisted preference document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

/// Capability for persisting the preference document.
///
/// Both operations are infallible on purpose: a store that cannot read
/// reports an absent value and a store that cannot write drops the value.
pub trait PreferenceStore {
    /// Returns the stored document, or `None` when there is none.
    fn read(&self) -> Option<String>;

    /// Replaces the stored document, best-effort.
    fn write(&self, contents: &str);
}

/// A [`PreferenceStore`] backed by a small TOML file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over the given file path. The file and its parent
    /// directories are only created on the first write.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FileStore {
    fn read(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn write(&self, contents: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!("Cannot create '{}': {err}", parent.display());
                return;
            }
        }
        if let Err(err) = std::fs::write(&self.path, contents) {
            warn!("Cannot persist the theme to '{}': {err}", self.path.display());
        }
    }
}

/// Reads the stored theme.
///
/// An absent or corrupt stored document yields [`Theme::Dark`], there is no
/// error path.
pub fn load_theme<S: PreferenceStore>(store: &S) -> Theme {
    store
        .read()
        .and_then(|contents| toml::from_str::<Preferences>(&contents).ok())
        .map(|prefs| prefs.theme)
        .unwrap_or_default()
}

/// Flips the current theme, persists the new value and returns it.
pub fn toggle_theme<S: PreferenceStore>(store: &S) -> Theme {
    let theme = load_theme(store).toggle();
    trace!("Switching to {}", theme.label());

    match toml::to_string(&Preferences { theme }) {
        Ok(document) => store.write(&document),
        Err(err) => warn!("Cannot serialize the preference document: {err}"),
    }

    theme
}
