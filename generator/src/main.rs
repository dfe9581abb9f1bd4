//! Icon signal generator CLI.
//!
//! `generator generate` turns the tagged icon archive named in
//! `generator.json` into `dist/`: mipmap strips, `signals.lua`, `groups.lua`
//! and a locale file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use generator::cache::ArchiveCache;
use generator::download::HttpFetcher;
use generator::exit_codes;
use generator::layout::GeneratorPaths;
use generator::logging;
use generator::pipeline::{GenerateOptions, clean, generate};
use generator::settings::load_settings;

#[derive(Parser)]
#[command(
    name = "generator",
    version,
    about = "Generate icon signal assets from a tagged SVG icon set"
)]
struct Cli {
    /// Project root holding `generator.json`, `src/`, `cache/` and `dist/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download (or reuse) the icon archive and rebuild `dist/`.
    Generate {
        /// Settings file, relative to the root. `.toml` files are read as TOML.
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Download even if the tag is already cached.
        #[arg(long)]
        refresh: bool,
    },
    /// Inspect the archive cache.
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },
    /// Remove `temp/` and `dist/`.
    Clean {
        /// Also remove the archive cache.
        #[arg(long)]
        cache: bool,
    },
}

#[derive(Subcommand)]
enum CacheCommand {
    /// Print every cached tag.
    List,
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => std::process::exit(usage_exit(&err)),
    };
    std::process::exit(run(cli));
}

/// Print a clap error; `--help`/`--version` exit cleanly, anything else is a usage error.
fn usage_exit(err: &clap::Error) -> i32 {
    let _ = err.print();
    if err.use_stderr() {
        exit_codes::INVALID
    } else {
        exit_codes::OK
    }
}

fn run(cli: Cli) -> i32 {
    let paths = GeneratorPaths::new(cli.root);
    let result = match cli.command {
        Command::Generate { settings, refresh } => {
            return cmd_generate(paths, settings, refresh);
        }
        Command::Cache {
            command: CacheCommand::List,
        } => cmd_cache_list(&paths),
        Command::Clean { cache } => clean(&paths, cache),
    };
    match result {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILED
        }
    }
}

fn cmd_generate(paths: GeneratorPaths, settings: Option<PathBuf>, refresh: bool) -> i32 {
    let paths = match settings {
        Some(settings) => paths.with_settings(&settings),
        None => paths,
    };

    let settings = match load_settings(&paths.settings_path) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to load the settings file: {:#}", err);
            return exit_codes::INVALID;
        }
    };

    let outcome = HttpFetcher::new().and_then(|fetcher| {
        generate(&paths, &settings, &fetcher, &GenerateOptions { refresh })
            .context("generate")
    });
    match outcome {
        Ok(summary) => {
            println!(
                "generate: tag={} icons={} subgroups={} source={:?} dist={}",
                settings.tag,
                summary.icons,
                summary.subgroups,
                summary.source,
                paths.dist_dir.display()
            );
            exit_codes::OK
        }
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILED
        }
    }
}

fn cmd_cache_list(paths: &GeneratorPaths) -> Result<()> {
    let cache = ArchiveCache::new(&paths.cache_dir);
    for tag in cache.list()? {
        println!("{}", tag);
    }
    Ok(())
}
