//! Test-only helpers: fixture settings, in-memory archives and a stub fetcher.

use std::cell::RefCell;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use anyhow::{Result, bail};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::download::Fetcher;
use crate::settings::{
    DEFAULT_GROUP, DEFAULT_GROUP_TITLE, DEFAULT_ICON_PREFIX, DEFAULT_LOCALE, DEFAULT_MOD_NAME,
    GeneratorSettings,
};

/// 24x24 icon whose left half is filled black.
pub const HALF_FILLED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0H12V24H0Z"/></svg>"#;

/// Folder the fixture archive keeps its SVGs in (`zipPath` of [`settings`]).
pub const ARCHIVE_ROOT: &str = "Icons-1.0";

/// Deterministic settings pointing at a fake repository, tag `v1`.
pub fn settings() -> GeneratorSettings {
    GeneratorSettings {
        repo: "https://example.invalid/icons".to_string(),
        tag: "v1".to_string(),
        zip_path: vec![ARCHIVE_ROOT.to_string(), "svg".to_string()],
        mod_name: DEFAULT_MOD_NAME.to_string(),
        icon_prefix: DEFAULT_ICON_PREFIX.to_string(),
        group: DEFAULT_GROUP.to_string(),
        group_title: DEFAULT_GROUP_TITLE.to_string(),
        locale: DEFAULT_LOCALE.to_string(),
    }
}

/// `generator.json` contents equivalent to [`settings`].
pub fn settings_json() -> String {
    format!(
        r#"{{
    "repo": "https://example.invalid/icons",
    "tag": "v1",
    "zipPath": ["{}", "svg"]
}}"#,
        ARCHIVE_ROOT
    )
}

/// Build a zip archive in memory from `(name, contents)` pairs.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(contents).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    fs::write(path, build_zip(entries)).expect("write zip");
}

/// Archive laid out like a tag download: `Icons-1.0/svg/<name>.svg` per icon stem.
pub fn icon_archive(stems: &[&str]) -> Vec<u8> {
    let names: Vec<String> = stems
        .iter()
        .map(|stem| format!("{}/svg/{}.svg", ARCHIVE_ROOT, stem))
        .collect();
    let mut entries: Vec<(&str, &[u8])> = vec![(
        "Icons-1.0/README.md",
        b"fixture".as_slice(),
    )];
    entries.extend(
        names
            .iter()
            .map(|name| (name.as_str(), HALF_FILLED_SVG.as_bytes())),
    );
    build_zip(&entries)
}

/// Create a project root with `generator.json` and a static `src/` tree.
pub fn seed_project(root: &Path) {
    fs::write(root.join("generator.json"), settings_json()).expect("write settings");
    fs::create_dir_all(root.join("src")).expect("create src");
    fs::write(root.join("src/info.json"), r#"{"name": "factorio-mdi-signals"}"#)
        .expect("write info.json");
}

/// Serves a fixed body and records requested URLs.
pub struct StubFetcher {
    body: Option<Vec<u8>>,
    calls: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A fetcher whose every request fails.
    pub fn failing() -> Self {
        Self {
            body: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        self.calls.borrow_mut().push(url.to_string());
        let Some(body) = &self.body else {
            bail!("GET {}: connection refused", url);
        };
        fs::write(dest, body)?;
        Ok(body.len() as u64)
    }
}
