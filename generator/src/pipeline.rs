//! The generate run, start to finish.
//!
//! Steps run strictly in order; the first error aborts the rest. The scratch
//! directory is removed on every exit path.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::cache::ArchiveCache;
use crate::download::{ArchiveSource, Fetcher, acquire_archive};
use crate::extract::{extract_archive, list_svgs, svg_dir};
use crate::icon::{Icon, Subgroups};
use crate::layout::GeneratorPaths;
use crate::raster::rasterize_file;
use crate::render::{render_groups, render_locale, render_signals};
use crate::scratch::{ScratchDir, remove_dir_if_exists, reset_dist};
use crate::settings::GeneratorSettings;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Download even when the tag is cached, replacing the cache entry.
    pub refresh: bool,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub icons: usize,
    pub subgroups: usize,
    pub source: ArchiveSource,
}

#[instrument(skip_all, fields(tag = %settings.tag))]
pub fn generate(
    paths: &GeneratorPaths,
    settings: &GeneratorSettings,
    fetcher: &dyn Fetcher,
    options: &GenerateOptions,
) -> Result<Summary> {
    let scratch = ScratchDir::create(&paths.scratch_dir)?;

    reset_dist(&paths.dist_dir, &paths.assets_dir).context("prepare output directory")?;

    let cache = ArchiveCache::new(&paths.cache_dir);
    cache.ensure_dir()?;
    let source = acquire_archive(
        &cache,
        fetcher,
        settings,
        &paths.source_zip_path,
        options.refresh,
    )
    .context("acquire source archive")?;

    extract_archive(&paths.source_zip_path, &paths.source_dir)
        .context("extract source archive")?;

    let svg_folder = svg_dir(&paths.source_dir, &settings.zip_path);
    create_dir(&paths.graphics_dir)?;
    create_dir(&paths.locale_dir(&settings.locale))?;
    let svgs = list_svgs(&svg_folder)?;
    info!(count = svgs.len(), "converting svg files");

    let mut icons = Vec::with_capacity(svgs.len());
    let mut subgroups = Subgroups::default();
    for svg in &svgs {
        let icon = Icon::from_svg_path(svg, &settings.icon_prefix)?;
        let png = paths.graphics_dir.join(icon.file_name());
        info!(
            subgroup = %icon.subgroup,
            svg = %svg.display(),
            png = %png.display(),
            "converting"
        );
        subgroups.insert(&icon.subgroup);
        rasterize_file(svg, &png)?;
        icons.push(icon);
    }

    write_text(&paths.signals_path, &render_signals(&icons, settings))?;
    write_text(
        &paths.locale_path(&settings.locale),
        &render_locale(&icons, settings),
    )?;
    write_text(&paths.groups_path, &render_groups(&subgroups, settings))?;

    drop(scratch);
    info!(
        icons = icons.len(),
        subgroups = subgroups.len(),
        "generation complete"
    );
    Ok(Summary {
        icons: icons.len(),
        subgroups: subgroups.len(),
        source,
    })
}

/// Remove the scratch and output directories, and the cache when `include_cache` is set.
pub fn clean(paths: &GeneratorPaths, include_cache: bool) -> Result<()> {
    remove_dir_if_exists(&paths.scratch_dir)?;
    remove_dir_if_exists(&paths.dist_dir)?;
    if include_cache {
        remove_dir_if_exists(&paths.cache_dir)?;
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create {}", path.display()))
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
