//! Scratch and output directory management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Temporary working directory, removed recursively when dropped.
///
/// Creation wipes whatever a previous (possibly crashed) run left behind.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn create(path: &Path) -> Result<Self> {
        remove_dir_if_exists(path)?;
        fs::create_dir_all(path).with_context(|| format!("create {}", path.display()))?;
        info!(path = %path.display(), "created temporary directory");
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => info!(path = %self.path.display(), "deleted temporary directory"),
            Err(err) => warn!(
                path = %self.path.display(),
                error = %err,
                "failed to delete temporary directory"
            ),
        }
    }
}

/// Recreate `dist_dir` and seed it with a copy of `assets_dir`.
pub fn reset_dist(dist_dir: &Path, assets_dir: &Path) -> Result<()> {
    remove_dir_if_exists(dist_dir)?;
    fs::create_dir_all(dist_dir).with_context(|| format!("create {}", dist_dir.display()))?;
    let copied = copy_tree(assets_dir, dist_dir)
        .with_context(|| format!("copy static assets from {}", assets_dir.display()))?;
    debug!(copied, dist = %dist_dir.display(), "seeded output directory");
    Ok(())
}

/// Copy every file under `source` into `target`, keeping relative paths and
/// overwriting existing files. Returns the number of files copied.
pub fn copy_tree(source: &Path, target: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.with_context(|| format!("walk {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("relativize {}", entry.path().display()))?;
        let destination = target.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination)
                .with_context(|| format!("create {}", destination.display()))?;
        } else {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            fs::copy(entry.path(), &destination).with_context(|| {
                format!(
                    "copy {} -> {}",
                    entry.path().display(),
                    destination.display()
                )
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).with_context(|| format!("remove {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_dir_is_wiped_on_create_and_removed_on_drop() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("temp");
        fs::create_dir_all(&path).expect("mkdir");
        fs::write(path.join("stale.zip"), b"old").expect("write stale");

        {
            let scratch = ScratchDir::create(&path).expect("create");
            assert!(scratch.path().exists());
            assert!(!path.join("stale.zip").exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn reset_dist_replaces_output_with_assets() {
        let temp = tempfile::tempdir().expect("tempdir");
        let assets = temp.path().join("src");
        let dist = temp.path().join("dist");
        fs::create_dir_all(assets.join("locale/en")).expect("mkdir assets");
        fs::write(assets.join("info.json"), "{}").expect("write info");
        fs::write(assets.join("locale/en/extra.cfg"), "[x]").expect("write cfg");
        fs::create_dir_all(&dist).expect("mkdir dist");
        fs::write(dist.join("old.lua"), "--").expect("write old");

        reset_dist(&dist, &assets).expect("reset");

        assert!(!dist.join("old.lua").exists());
        assert_eq!(fs::read_to_string(dist.join("info.json")).unwrap(), "{}");
        assert_eq!(
            fs::read_to_string(dist.join("locale/en/extra.cfg")).unwrap(),
            "[x]"
        );
    }

    #[test]
    fn reset_dist_fails_without_assets() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = reset_dist(&temp.path().join("dist"), &temp.path().join("src")).unwrap_err();
        assert!(format!("{:#}", err).contains("copy static assets"));
    }
}
