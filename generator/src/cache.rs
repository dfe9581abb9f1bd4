//! Source archive cache.
//!
//! Archives are stored flat at `cache/{tag}.zip`. A tag is either present or
//! not; nothing is ever evicted.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

const ARCHIVE_EXTENSION: &str = "zip";

pub struct ArchiveCache {
    dir: PathBuf,
}

impl ArchiveCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the cache directory if this is the first run.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            info!(path = %self.dir.display(), "creating new cache");
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("create cache dir {}", self.dir.display()))?;
        }
        Ok(())
    }

    pub fn archive_path(&self, tag: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", tag, ARCHIVE_EXTENSION))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.archive_path(tag).is_file()
    }

    /// Copy the cached archive for `tag` to `dest`.
    pub fn restore(&self, tag: &str, dest: &Path) -> Result<()> {
        let cached = self.archive_path(tag);
        info!(from = %cached.display(), to = %dest.display(), "loading from cache");
        fs::copy(&cached, dest)
            .with_context(|| format!("copy {} -> {}", cached.display(), dest.display()))?;
        Ok(())
    }

    /// Copy a freshly downloaded archive into the cache, replacing any entry.
    pub fn store(&self, tag: &str, src: &Path) -> Result<()> {
        let cached = self.archive_path(tag);
        debug!(from = %src.display(), to = %cached.display(), "storing archive in cache");
        fs::copy(src, &cached)
            .with_context(|| format!("copy {} -> {}", src.display(), cached.display()))?;
        Ok(())
    }

    /// Tags with a cached archive, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(vec![]);
        }
        let mut tags = Vec::new();
        for entry in
            fs::read_dir(&self.dir).with_context(|| format!("read {}", self.dir.display()))?
        {
            let entry = entry.context("read entry")?;
            let path = entry.path();
            if !path.is_file() || !path.extension().is_some_and(|e| e == ARCHIVE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                tags.push(stem.to_string_lossy().into_owned());
            }
        }
        tags.sort();
        Ok(tags)
    }
}
