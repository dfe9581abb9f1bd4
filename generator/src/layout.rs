//! Canonical paths for a generator project root.

use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "generator.json";
pub const SIGNALS_FILE: &str = "signals.lua";
pub const GROUPS_FILE: &str = "groups.lua";
pub const LOCALE_FILE: &str = "mdi_signals.cfg";

/// All paths the generator reads or writes, derived from one root.
#[derive(Debug, Clone)]
pub struct GeneratorPaths {
    pub root: PathBuf,
    pub settings_path: PathBuf,
    pub scratch_dir: PathBuf,
    pub source_zip_path: PathBuf,
    pub source_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub graphics_dir: PathBuf,
    pub signals_path: PathBuf,
    pub groups_path: PathBuf,
}

impl GeneratorPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let scratch_dir = root.join("temp");
        let dist_dir = root.join("dist");
        Self {
            root: root.clone(),
            settings_path: root.join(SETTINGS_FILE),
            source_zip_path: scratch_dir.join("source.zip"),
            source_dir: scratch_dir.join("source"),
            scratch_dir,
            assets_dir: root.join("src"),
            cache_dir: root.join("cache"),
            graphics_dir: dist_dir.join("graphics").join("signal"),
            signals_path: dist_dir.join(SIGNALS_FILE),
            groups_path: dist_dir.join(GROUPS_FILE),
            dist_dir,
        }
    }

    /// Override the settings file location (relative paths resolve against the root).
    pub fn with_settings(mut self, settings: &Path) -> Self {
        self.settings_path = self.root.join(settings);
        self
    }

    /// Folder holding the locale file for `locale` (e.g. `dist/locale/en`).
    pub fn locale_dir(&self, locale: &str) -> PathBuf {
        self.dist_dir.join("locale").join(locale)
    }

    pub fn locale_path(&self, locale: &str) -> PathBuf {
        self.locale_dir(locale).join(LOCALE_FILE)
    }
}
