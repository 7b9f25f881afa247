//! Placeholder substitution over the generated tree.
//!
//! Replaces `{{key}}` tokens in file contents and renames the `plugin.php`
//! entry file to its slug-derived name. Substitution is literal token
//! replacement: one regex sweep per file with a key lookup per match, so
//! replacement values are never re-scanned for tokens.

use crate::error::{Error, Result};
use crate::inputs::InputSet;
use indexmap::IndexMap;
use log::debug;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Base name of the template's plugin entry file.
pub const ENTRY_FILE: &str = "plugin.php";

/// Performs `{{key}}` replacement and entry-file renaming over a tree.
pub struct Substitutor {
    token_re: Regex,
    vars: IndexMap<String, String>,
    entry_name: String,
}

impl Substitutor {
    /// Builds a substitutor for the given input set.
    pub fn new(inputs: &InputSet) -> Self {
        // The pattern is a literal constant; compilation cannot fail.
        let token_re = Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").unwrap();

        Self {
            token_re,
            vars: inputs.as_map(),
            entry_name: format!("{}.php", inputs.slug),
        }
    }

    /// Replaces every known `{{key}}` token in `content`.
    ///
    /// Tokens whose key has no value are left verbatim.
    pub fn substitute_content<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.token_re.replace_all(content, |caps: &Captures| {
            match self.vars.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
    }

    /// Walks `root` child-first, substituting file contents and renaming
    /// every entry named `plugin.php` to the slug-derived name.
    ///
    /// # Errors
    /// * `Error::SourceRead` if an entry or file content cannot be read
    /// * `Error::DestWrite` if a file cannot be written back or renamed
    pub fn substitute_tree<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let root = root.as_ref();

        // Collect up front so the renames below cannot disturb the walk.
        let entries: Vec<walkdir::DirEntry> = WalkDir::new(root)
            .min_depth(1)
            .contents_first(true)
            .into_iter()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::SourceRead {
                path: root.display().to_string(),
                source: e.into(),
            })?;

        for entry in entries {
            let path = entry.path();

            if entry.file_type().is_file() {
                self.substitute_file(path)?;
            }

            if entry.file_name() == ENTRY_FILE {
                let renamed = path.with_file_name(&self.entry_name);
                debug!("Renaming '{}' -> '{}'", path.display(), renamed.display());
                fs::rename(path, &renamed).map_err(|source| Error::DestWrite {
                    path: renamed.display().to_string(),
                    source,
                })?;
            }
        }

        Ok(())
    }

    fn substitute_file(&self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|source| Error::SourceRead {
            path: path.display().to_string(),
            source,
        })?;

        debug!("Substituting placeholders in '{}'", path.display());
        let substituted = self.substitute_content(&content);

        fs::write(path, substituted.as_ref()).map_err(|source| Error::DestWrite {
            path: path.display().to_string(),
            source,
        })
    }
}
