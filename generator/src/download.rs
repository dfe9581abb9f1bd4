//! Fetching the tagged source archive, from cache or over HTTP.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::cache::ArchiveCache;
use crate::settings::GeneratorSettings;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// URL of the GitHub-style tag archive for `repo` at `tag`.
pub fn archive_url(repo: &str, tag: &str) -> String {
    format!("{}/archive/refs/tags/{}.zip", repo.trim_end_matches('/'), tag)
}

/// Retrieves a URL into a local file.
pub trait Fetcher {
    /// Write the body of `url` to `dest`, returning the number of bytes written.
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Blocking HTTP fetcher.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .user_agent(concat!("generator/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {}", url))?
            .error_for_status()
            .with_context(|| format!("GET {}", url))?;
        let mut file =
            File::create(dest).with_context(|| format!("create {}", dest.display()))?;
        let written = response
            .copy_to(&mut file)
            .with_context(|| format!("download {} -> {}", url, dest.display()))?;
        file.flush()
            .with_context(|| format!("flush {}", dest.display()))?;
        Ok(written)
    }
}

/// Where the archive used by a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveSource {
    Cache,
    Download,
}

/// Put the archive for `settings.tag` at `dest`.
///
/// A cache hit is copied unless `refresh` is set; otherwise the archive is
/// downloaded and then copied into the cache.
pub fn acquire_archive(
    cache: &ArchiveCache,
    fetcher: &dyn Fetcher,
    settings: &GeneratorSettings,
    dest: &Path,
    refresh: bool,
) -> Result<ArchiveSource> {
    if !refresh && cache.contains(&settings.tag) {
        cache.restore(&settings.tag, dest)?;
        return Ok(ArchiveSource::Cache);
    }

    let url = archive_url(&settings.repo, &settings.tag);
    info!(url = %url, dest = %dest.display(), "downloading");
    let bytes = fetcher.fetch(&url, dest)?;
    info!(bytes, "download complete, copying to cache");
    cache.store(&settings.tag, dest)?;
    Ok(ArchiveSource::Download)
}
