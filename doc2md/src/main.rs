//! doc2md — generate Markdown documentation from Javadoc, PHPDoc and JSDoc
//! comments.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `doc2md < Point.java`
//! - **directory mode**: `doc2md -o docs src/main/java` writes one `.md` per
//!   source file, mirroring the directory layout, plus an `_index.md`

mod discover;
mod index;

use anyhow::{Context, Result};
use clap::Parser;
use doc2md_syntax::{render, Flavor};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doc2md",
    about = "Generate Markdown documentation from Javadoc, PHPDoc and JSDoc comments"
)]
struct Cli {
    /// Source directory to scan recursively. If omitted, reads from stdin.
    source: Option<PathBuf>,

    /// Output directory (required when a source directory is given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Extension of the files to document. Defaults to the flavor's
    /// (java, php or js).
    #[arg(short = 'e', long)]
    ext: Option<String>,

    /// Doc comment flavor: javadoc (default), phpdoc, jsdoc
    #[arg(short = 'f', long, default_value = "javadoc")]
    flavor: String,

    /// Heading level of the document title; sections start one below
    #[arg(short = 'l', long, default_value_t = 1)]
    level: usize,

    /// Do not write _index.md
    #[arg(long)]
    no_index: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let flavor: Flavor = cli.flavor.parse()?;

    match cli.source.as_deref() {
        None => stdin_mode(flavor, cli.level),
        Some(source) => directory_mode(&cli, source, flavor),
    }
}

/// Log to stderr so stdout stays reserved for stdin-mode output.
/// `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// stdin mode: read from stdin, write markdown to stdout.
fn stdin_mode(flavor: Flavor, level: usize) -> Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("failed to read stdin")?;

    print!("{}", render(&String::from_utf8_lossy(&input), flavor, level));
    Ok(())
}

/// directory mode: document every matching file below `source_dir`.
fn directory_mode(cli: &Cli, source_dir: &Path, flavor: Flavor) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when a source directory is given")?;

    let ext = cli
        .ext
        .as_deref()
        .unwrap_or(flavor.file_extension())
        .trim_start_matches('.');

    let sources = discover::find_sources(source_dir, ext)?;
    if sources.is_empty() {
        anyhow::bail!("{} contains no .{} files", source_dir.display(), ext);
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let mut entries = Vec::new();
    for relative in sources {
        let source_path = source_dir.join(&relative);
        let bytes = fs::read(&source_path)
            .with_context(|| format!("failed to read {}", source_path.display()))?;
        // Latin-1 and other legacy encodings are still documented
        let content = String::from_utf8_lossy(&bytes);

        let target_relative = discover::target_path(&relative, ext);
        let target = output_dir.join(&target_relative);
        tracing::info!("creating {}", target.display());

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, render(&content, flavor, cli.level))
            .with_context(|| format!("failed to write {}", target.display()))?;

        entries.push(index::IndexEntry {
            source: relative,
            target: target_relative,
        });
    }

    if !cli.no_index {
        let index_path = output_dir.join(index::INDEX_FILE);
        tracing::info!("creating {}", index_path.display());
        fs::write(&index_path, index::render_index(&entries))
            .with_context(|| format!("failed to write {}", index_path.display()))?;
    }

    Ok(())
}
