//! Tree copier: materializes the template tree at the destination.
//!
//! Copies the source tree entry by entry, stripping the reserved `.stub`
//! suffix from file names. The destination must not exist beforehand;
//! partially written output is left behind on failure.

use crate::error::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix marking template files that are materialized without it.
pub const STUB_SUFFIX: &str = ".stub";

/// Pre-flight check: the destination may not exist yet, not even as an
/// empty directory. The caller runs this before any filesystem mutation.
pub fn ensure_dest_available<P: AsRef<Path>>(dest_dir: P) -> Result<PathBuf> {
    let dest_dir = dest_dir.as_ref();
    if dest_dir.exists() {
        return Err(Error::DestinationExists {
            dest_dir: dest_dir.display().to_string(),
        });
    }
    Ok(dest_dir.to_path_buf())
}

/// Counts every entry below `dir`; used as the progress bar total.
pub fn count_entries<P: AsRef<Path>>(dir: P) -> u64 {
    WalkDir::new(dir).min_depth(1).into_iter().filter_map(|e| e.ok()).count() as u64
}

/// Strips the `.stub` suffix from a file name, if present.
pub fn strip_stub_suffix(file_name: &str) -> &str {
    file_name.strip_suffix(STUB_SUFFIX).unwrap_or(file_name)
}

/// Copies `source_dir` into the not-yet-existing `dest_dir`, mirroring its
/// structure and stripping `.stub` suffixes from file names.
///
/// Progress is a best-effort UI signal: one tick per entry, files and
/// directories alike.
///
/// # Errors
/// * `Error::SourceRead` if a source entry cannot be enumerated or read
/// * `Error::DestWrite` if a destination path cannot be created or written
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(source_dir: P, dest_dir: Q) -> Result<()> {
    let source_dir = source_dir.as_ref();
    let dest_dir = dest_dir.as_ref();

    let progress = ProgressBar::new(count_entries(source_dir));
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:30}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    progress.set_message("Generating files");

    copy_dir(source_dir, dest_dir, &progress)?;
    progress.finish();

    Ok(())
}

fn copy_dir(source_dir: &Path, dest_dir: &Path, progress: &ProgressBar) -> Result<()> {
    fs::create_dir_all(dest_dir).map_err(|source| Error::DestWrite {
        path: dest_dir.display().to_string(),
        source,
    })?;

    let entries = fs::read_dir(source_dir).map_err(|source| Error::SourceRead {
        path: source_dir.display().to_string(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| Error::SourceRead {
            path: source_dir.display().to_string(),
            source,
        })?;
        progress.inc(1);

        let source_path = entry.path();
        let file_type = entry.file_type().map_err(|source| Error::SourceRead {
            path: source_path.display().to_string(),
            source,
        })?;
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();

        if file_type.is_dir() {
            copy_dir(&source_path, &dest_dir.join(file_name.as_ref()), progress)?;
        } else {
            let dest_path = dest_dir.join(strip_stub_suffix(&file_name));
            debug!("Copying '{}' -> '{}'", source_path.display(), dest_path.display());
            fs::copy(&source_path, &dest_path).map_err(|source| Error::DestWrite {
                path: dest_path.display().to_string(),
                source,
            })?;
        }
    }

    Ok(())
}
