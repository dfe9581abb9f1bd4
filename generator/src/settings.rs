//! Generator settings stored in `generator.json`.
//!
//! The JSON form uses camelCase keys (`repo`, `tag`, `zipPath`). A path ending
//! in `.toml` is read as TOML instead; snake_case keys are accepted by both.

use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MOD_NAME: &str = "factorio-mdi-signals";
pub const DEFAULT_ICON_PREFIX: &str = "mdi-";
pub const DEFAULT_GROUP: &str = "mdi-signals";
pub const DEFAULT_GROUP_TITLE: &str = "Material Design Icon Signals";
pub const DEFAULT_LOCALE: &str = "en";

/// What to download and how to name the generated content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorSettings {
    /// Repository base URL, e.g. `https://github.com/Templarian/MaterialDesign`.
    pub repo: String,

    /// Release tag; also the cache key.
    pub tag: String,

    /// Path segments from the extracted archive root to the SVG folder.
    #[serde(alias = "zip_path")]
    pub zip_path: Vec<String>,

    /// Mod name used in `__<mod>__/graphics/...` icon paths.
    #[serde(default = "default_mod_name", alias = "mod_name")]
    pub mod_name: String,

    /// Prepended to every SVG file stem to form the icon name.
    #[serde(default = "default_icon_prefix", alias = "icon_prefix")]
    pub icon_prefix: String,

    /// Item group every generated subgroup belongs to.
    #[serde(default = "default_group")]
    pub group: String,

    /// Display name of the item group.
    #[serde(default = "default_group_title", alias = "group_title")]
    pub group_title: String,

    /// Locale folder under `dist/locale/`.
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_mod_name() -> String {
    DEFAULT_MOD_NAME.to_string()
}

fn default_icon_prefix() -> String {
    DEFAULT_ICON_PREFIX.to_string()
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

fn default_group_title() -> String {
    DEFAULT_GROUP_TITLE.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<()> {
        if self.repo.trim().is_empty() {
            bail!("repo must be non-empty");
        }
        validate_file_name("tag", &self.tag)?;
        for (index, segment) in self.zip_path.iter().enumerate() {
            validate_relative_segment(segment)
                .with_context(|| format!("zipPath[{}] invalid", index))?;
        }
        validate_file_name("modName", &self.mod_name)?;
        validate_file_name("locale", &self.locale)?;
        if self.icon_prefix.is_empty() {
            bail!("iconPrefix must be non-empty");
        }
        if self.group.trim().is_empty() {
            bail!("group must be non-empty");
        }
        Ok(())
    }
}

/// Values that end up as a single path component.
fn validate_file_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{} must be non-empty", field);
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        bail!("{} must be a plain file name, got {:?}", field, value);
    }
    Ok(())
}

fn validate_relative_segment(segment: &str) -> Result<()> {
    if segment.trim().is_empty() {
        bail!("segment must be non-empty");
    }
    for component in Path::new(segment).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => bail!("segment {:?} must stay inside the archive", segment),
        }
    }
    Ok(())
}

/// Load and validate settings from `path`.
pub fn load_settings(path: &Path) -> Result<GeneratorSettings> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings = parse_settings(path, &contents)?;
    settings
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(settings)
}

fn parse_settings(path: &Path, contents: &str) -> Result<GeneratorSettings> {
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    if is_toml {
        toml::from_str(contents).with_context(|| format!("parse {}", path.display()))
    } else {
        serde_json::from_str(contents).with_context(|| format!("parse {}", path.display()))
    }
}
