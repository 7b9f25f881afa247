//! Bundled template tree resolution.
//!
//! The boilerplate ships with the tool and is treated as read-only; an
//! explicit `--template` path overrides it.

use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Location of the bundled boilerplate, relative to the executable or to
/// the crate root in a development checkout.
pub const TEMPLATE_SUBDIR: &str = "templates/boilerplate";

/// Resolves the template directory to instantiate.
///
/// An explicit path wins and must exist. Otherwise the bundled boilerplate
/// is looked up next to the running executable, falling back to the crate
/// root for `cargo run` style invocations.
///
/// # Errors
/// * `Error::TemplateDoesNotExist` if no candidate directory exists
pub fn resolve_template_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::TemplateDoesNotExist {
                template_dir: path.display().to_string(),
            });
        }
        return Ok(path);
    }

    for candidate in bundled_candidates() {
        if candidate.is_dir() {
            debug!("Using bundled template at {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(Error::TemplateDoesNotExist { template_dir: TEMPLATE_SUBDIR.to_string() })
}

fn bundled_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join(TEMPLATE_SUBDIR));
        }
    }
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_SUBDIR));

    candidates
}
