//! End-to-end pipeline tests against a stub fetcher and fixture archives.

use std::fs;

use generator::download::ArchiveSource;
use generator::layout::GeneratorPaths;
use generator::pipeline::{GenerateOptions, generate};
use generator::test_support::{StubFetcher, icon_archive, seed_project, settings};

#[test]
fn generate_downloads_converts_and_writes_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    seed_project(temp.path());
    let paths = GeneratorPaths::new(temp.path());
    let fetcher = StubFetcher::new(icon_archive(&["account-box", "account", "abacus"]));

    let summary =
        generate(&paths, &settings(), &fetcher, &GenerateOptions::default()).expect("generate");

    assert_eq!(summary.icons, 3);
    assert_eq!(summary.subgroups, 2);
    assert_eq!(summary.source, ArchiveSource::Download);
    assert_eq!(
        fetcher.calls(),
        vec!["https://example.invalid/icons/archive/refs/tags/v1.zip"]
    );

    for name in ["mdi-abacus", "mdi-account", "mdi-account-box"] {
        let png = paths.graphics_dir.join(format!("{name}.png"));
        let strip = image::open(&png).expect("decode png").to_rgba8();
        assert_eq!(strip.dimensions(), (120, 64), "{}", png.display());
    }

    let signals = fs::read_to_string(&paths.signals_path).expect("signals");
    assert!(signals.starts_with("data:extend({\n    {\n        type = \"virtual-signal\",\n        name = \"signal-mdi-abacus\","));
    assert!(signals.ends_with("        subgroup = \"mdi-account\"\n    }\n})"));

    let groups = fs::read_to_string(&paths.groups_path).expect("groups");
    let abacus = groups.find("name = \"mdi-abacus\"").expect("abacus group");
    let account = groups.find("name = \"mdi-account\"").expect("account group");
    assert!(abacus < account);
    assert_eq!(groups.matches("item-subgroup").count(), 2);

    // File-name order: "account-box.svg" sorts before "account.svg".
    let locale = fs::read_to_string(paths.locale_path("en")).expect("locale");
    assert_eq!(
        locale,
        "[item-group-name]\n\
         mdi-signals=Material Design Icon Signals\n\
         [virtual-signal-name]\n\
         signal-mdi-abacus=mdi-abacus\n\
         signal-mdi-account-box=mdi-account-box\n\
         signal-mdi-account=mdi-account"
    );

    assert!(paths.dist_dir.join("info.json").exists());
    assert!(paths.cache_dir.join("v1.zip").exists());
    assert!(!paths.scratch_dir.exists());
}

#[test]
fn second_run_uses_cache_and_replaces_dist() {
    let temp = tempfile::tempdir().expect("tempdir");
    seed_project(temp.path());
    let paths = GeneratorPaths::new(temp.path());
    let fetcher = StubFetcher::new(icon_archive(&["account"]));

    generate(&paths, &settings(), &fetcher, &GenerateOptions::default()).expect("first run");
    fs::write(paths.dist_dir.join("stale.lua"), "--").expect("write stale");

    let summary =
        generate(&paths, &settings(), &fetcher, &GenerateOptions::default()).expect("second run");

    assert_eq!(summary.source, ArchiveSource::Cache);
    assert_eq!(fetcher.calls().len(), 1);
    assert!(!paths.dist_dir.join("stale.lua").exists());
    assert!(paths.graphics_dir.join("mdi-account.png").exists());
}

#[test]
fn refresh_downloads_even_when_cached() {
    let temp = tempfile::tempdir().expect("tempdir");
    seed_project(temp.path());
    let paths = GeneratorPaths::new(temp.path());
    let fetcher = StubFetcher::new(icon_archive(&["account"]));

    generate(&paths, &settings(), &fetcher, &GenerateOptions::default()).expect("first run");
    let summary = generate(
        &paths,
        &settings(),
        &fetcher,
        &GenerateOptions { refresh: true },
    )
    .expect("refresh run");

    assert_eq!(summary.source, ArchiveSource::Download);
    assert_eq!(fetcher.calls().len(), 2);
}

#[test]
fn empty_icon_folder_writes_empty_tables() {
    let temp = tempfile::tempdir().expect("tempdir");
    seed_project(temp.path());
    let paths = GeneratorPaths::new(temp.path());
    let fetcher = StubFetcher::new(icon_archive(&[]));
    let mut settings = settings();
    settings.zip_path = vec!["Icons-1.0".to_string()];

    let summary =
        generate(&paths, &settings, &fetcher, &GenerateOptions::default()).expect("generate");

    assert_eq!(summary.icons, 0);
    assert_eq!(
        fs::read_to_string(&paths.signals_path).unwrap(),
        "data:extend({\n})"
    );
    assert_eq!(
        fs::read_to_string(&paths.groups_path).unwrap(),
        "data:extend({\n})"
    );
}

#[test]
fn download_failure_removes_scratch_and_skips_outputs() {
    let temp = tempfile::tempdir().expect("tempdir");
    seed_project(temp.path());
    let paths = GeneratorPaths::new(temp.path());
    let fetcher = StubFetcher::failing();

    let err = generate(&paths, &settings(), &fetcher, &GenerateOptions::default()).unwrap_err();

    assert!(format!("{:#}", err).contains("connection refused"));
    assert!(!paths.scratch_dir.exists());
    assert!(!paths.signals_path.exists());
    assert!(!paths.cache_dir.join("v1.zip").exists());
}

#[test]
fn broken_svg_aborts_the_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    seed_project(temp.path());
    let paths = GeneratorPaths::new(temp.path());
    let archive = generator::test_support::build_zip(&[(
        "Icons-1.0/svg/broken.svg",
        b"<svg".as_slice(),
    )]);
    let fetcher = StubFetcher::new(archive);

    let err = generate(&paths, &settings(), &fetcher, &GenerateOptions::default()).unwrap_err();

    assert!(format!("{:#}", err).contains("broken.svg"));
    assert!(!paths.signals_path.exists());
    assert!(!paths.scratch_dir.exists());
}
