//! Composer dependency installation for the generated plugin.
//!
//! The install step is best-effort: the plugin tree is complete before it
//! runs, so a failed install downgrades to a warning and generation still
//! succeeds.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Dependency manifest that gates the install step.
pub const MANIFEST_FILE: &str = "composer.json";

/// Returns the manifest path that would trigger an install for `dest_dir`.
pub fn manifest_path<P: AsRef<Path>>(dest_dir: P) -> PathBuf {
    dest_dir.as_ref().join(MANIFEST_FILE)
}

/// Runs `composer install` in `dest_dir` if a manifest is present.
///
/// The subprocess inherits the terminal's stdio and is waited on until it
/// exits. A non-zero exit status or a failed launch is reported as a
/// warning, never as a generation failure.
pub fn run_installer<P: AsRef<Path>>(dest_dir: P) {
    let dest_dir = dest_dir.as_ref();

    if !manifest_path(dest_dir).exists() {
        debug!("No {} found, skipping composer install", MANIFEST_FILE);
        return;
    }

    println!("Running composer install...");

    let status = Command::new("composer")
        .arg("install")
        .arg("--no-interaction")
        .current_dir(dest_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(status) if status.success() => {}
        Ok(status) => {
            warn!(
                "composer install exited with {}. Run it manually in '{}'.",
                status,
                dest_dir.display()
            );
        }
        Err(err) => {
            warn!(
                "Could not run composer ({}). Install dependencies manually in '{}'.",
                err,
                dest_dir.display()
            );
        }
    }
}
