//! Naming rules that map an SVG file onto a signal definition.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// One icon and every name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// `icon_prefix` + file stem, e.g. `mdi-account-box`.
    pub name: String,
    /// First two `-` separated parts of `name`, e.g. `mdi-account`.
    pub subgroup: String,
}

impl Icon {
    pub fn from_svg_path(path: &Path, icon_prefix: &str) -> Result<Self> {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("icon file name is not valid UTF-8: {}", path.display()))?;
        Ok(Self::new(format!("{}{}", icon_prefix, stem)))
    }

    pub fn new(name: String) -> Self {
        let subgroup = subgroup_of(&name);
        Self { name, subgroup }
    }

    pub fn signal_name(&self) -> String {
        format!("signal-{}", self.name)
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }

    /// Path the game uses to load the icon from the mod.
    pub fn game_path(&self, mod_name: &str) -> String {
        format!("__{}__/graphics/signal/{}", mod_name, self.file_name())
    }
}

pub fn subgroup_of(icon_name: &str) -> String {
    icon_name.split('-').take(2).collect::<Vec<_>>().join("-")
}

/// Subgroup names in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct Subgroups {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl Subgroups {
    pub fn insert(&mut self, subgroup: &str) -> bool {
        if self.seen.contains(subgroup) {
            return false;
        }
        self.seen.insert(subgroup.to_string());
        self.order.push(subgroup.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
