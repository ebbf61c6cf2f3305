//! Source discovery — every file with a given extension below a root
//! directory, and where its Markdown goes.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Find `**/*.<ext>` below `root`. Paths are relative to `root` and sorted
/// for deterministic output.
pub fn find_sources(root: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("not a directory: {}", root.display());
    }

    let root_str = root
        .to_str()
        .with_context(|| format!("source path is not valid UTF-8: {}", root.display()))?;
    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(root_str.trim_end_matches('/')),
        glob::Pattern::escape(ext)
    );

    let mut files = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .map(|p| relative_to(root, &p))
        .collect::<Result<Vec<_>>>()?;

    files.sort();
    files.dedup();
    Ok(files)
}

/// `path` relative to `root`. glob drops a leading `./` from its matches, so
/// both sides are compared without `.` components.
fn relative_to(root: &Path, path: &Path) -> Result<PathBuf> {
    let root = without_cur_dir(root);
    without_cur_dir(path)
        .strip_prefix(&root)
        .map(Path::to_path_buf)
        .with_context(|| format!("{} is not below {}", path.display(), root.display()))
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Output path for a source file: same relative location, `.<ext>` replaced
/// by `.md`.
///
/// "geo/Point.java" → "geo/Point.md", "types.d.ts" (ext "d.ts") → "types.md"
pub fn target_path(relative: &Path, ext: &str) -> PathBuf {
    let name = relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = format!(".{}", ext);
    let stem = name.strip_suffix(suffix.as_str()).unwrap_or(&name);
    relative.with_file_name(format!("{}.md", stem))
}
