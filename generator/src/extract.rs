//! Archive extraction and SVG discovery.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;
use zip::ZipArchive;

/// Extract every entry of `archive_path` into `dest`. Returns the number of files written.
///
/// Entries whose names would land outside `dest` abort the extraction.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize> {
    info!(from = %archive_path.display(), to = %dest.display(), "extracting");
    let file =
        File::open(archive_path).with_context(|| format!("open {}", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("read archive {}", archive_path.display()))?;
    fs::create_dir_all(dest).with_context(|| format!("create {}", dest.display()))?;

    let mut written = 0;
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .with_context(|| format!("read entry {} of {}", index, archive_path.display()))?;
        let Some(relative) = entry.enclosed_name() else {
            bail!("archive entry {:?} escapes the extraction directory", entry.name());
        };
        let outpath = dest.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&outpath)
                .with_context(|| format!("create {}", outpath.display()))?;
            continue;
        }
        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        let mut outfile =
            File::create(&outpath).with_context(|| format!("create {}", outpath.display()))?;
        io::copy(&mut entry, &mut outfile)
            .with_context(|| format!("extract {}", outpath.display()))?;
        written += 1;
    }
    info!(files = written, "extract complete");
    Ok(written)
}

/// Folder inside the extracted tree that holds the SVG files.
pub fn svg_dir(extracted: &Path, zip_path: &[String]) -> PathBuf {
    zip_path
        .iter()
        .fold(extracted.to_path_buf(), |dir, segment| dir.join(segment))
}

/// SVG files directly inside `dir`, sorted by file name.
pub fn list_svgs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut svgs = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read svg folder {}", dir.display()))? {
        let entry = entry.context("read entry")?;
        let path = entry.path();
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg && entry.file_type().context("file type")?.is_file() {
            svgs.push(path);
        }
    }
    svgs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(svgs)
}
