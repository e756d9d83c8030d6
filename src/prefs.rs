use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_wire(raw: &str) -> Option<Theme> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Blue,
    Purple,
    Pink,
    Green,
    Orange,
    Red,
}

impl AccentColor {
    pub const ALL: [AccentColor; 6] = [
        AccentColor::Blue,
        AccentColor::Purple,
        AccentColor::Pink,
        AccentColor::Green,
        AccentColor::Orange,
        AccentColor::Red,
    ];

    pub fn from_wire(raw: &str) -> Option<AccentColor> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(AccentColor::Blue),
            "purple" => Some(AccentColor::Purple),
            "pink" => Some(AccentColor::Pink),
            "green" => Some(AccentColor::Green),
            "orange" => Some(AccentColor::Orange),
            "red" => Some(AccentColor::Red),
            _ => None,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            AccentColor::Blue => "#0ea5e9",
            AccentColor::Purple => "#a855f7",
            AccentColor::Pink => "#ec4899",
            AccentColor::Green => "#10b981",
            AccentColor::Orange => "#f59e0b",
            AccentColor::Red => "#ef4444",
        }
    }
}

/// What actually lands on disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPrefs {
    pub theme: Theme,
    pub accent_color: AccentColor,
}

impl Default for StoredPrefs {
    fn default() -> StoredPrefs {
        StoredPrefs {
            theme: Theme::Light,
            accent_color: AccentColor::Blue,
        }
    }
}

/// Key-value persistence capability for preferences. Both operations may
/// fail; the caller decides that neither failure is fatal.
pub trait PrefStorage {
    fn load(&self) -> anyhow::Result<Option<StoredPrefs>>;
    fn save(&self, prefs: &StoredPrefs) -> anyhow::Result<()>;
}

/// JSON-file storage. A missing file is not an error; a corrupt one is,
/// and the caller falls back to defaults.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> FileStorage {
        FileStorage { path: path.into() }
    }

    /// `$CAMPUSD_PREFS` wins; otherwise a file next to the process.
    pub fn default_path() -> PathBuf {
        std::env::var_os("CAMPUSD_PREFS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("campusd-prefs.json"))
    }
}

impl PrefStorage for FileStorage {
    fn load(&self) -> anyhow::Result<Option<StoredPrefs>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read prefs file {}", self.path.display()))?;
        let prefs: StoredPrefs = serde_json::from_str(&raw)
            .with_context(|| format!("parse prefs file {}", self.path.display()))?;
        Ok(Some(prefs))
    }

    fn save(&self, prefs: &StoredPrefs) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("write prefs file {}", self.path.display()))?;
        Ok(())
    }
}

/// Live preference state. Reads once at construction with a silent
/// fallback to defaults; every change is written through, last write
/// wins, and a failed write is logged and otherwise ignored.
pub struct Preferences {
    current: StoredPrefs,
    storage: Box<dyn PrefStorage>,
}

impl Preferences {
    pub fn open(storage: Box<dyn PrefStorage>) -> Preferences {
        let current = match storage.load() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => StoredPrefs::default(),
            Err(e) => {
                warn!("could not read preferences, using defaults: {e:#}");
                StoredPrefs::default()
            }
        };
        Preferences { current, storage }
    }

    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    pub fn accent_color(&self) -> AccentColor {
        self.current.accent_color
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current.theme = theme;
        self.persist();
    }

    pub fn set_accent_color(&mut self, accent: AccentColor) {
        self.current.accent_color = accent;
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.current) {
            warn!("could not save preferences: {e:#}");
        }
    }
}
