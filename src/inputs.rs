//! Plugin metadata collection and derivation.
//!
//! Everything the template tree can reference lives in an [`InputSet`].
//! Values come from command-line flags, a JSON object on stdin, or
//! interactive prompts, in that order of precedence. The slug and the
//! remaining derived fields are deterministic functions of the answers.

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use cruet::Inflector;
use indexmap::IndexMap;
use serde::Deserialize;
use std::io::Read;

/// The full set of values the template tree can reference as `{{key}}`
/// tokens. Field names are exactly the token identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub author: String,
    pub uri: String,
    pub namespace: String,
    pub vendor: String,
    pub version: String,
    pub license: String,
    pub const_prefix: String,
    pub package_name: String,
}

impl InputSet {
    /// Ordered token map consumed by the substitutor.
    pub fn as_map(&self) -> IndexMap<String, String> {
        IndexMap::from([
            ("name".to_string(), self.name.clone()),
            ("slug".to_string(), self.slug.clone()),
            ("description".to_string(), self.description.clone()),
            ("author".to_string(), self.author.clone()),
            ("uri".to_string(), self.uri.clone()),
            ("namespace".to_string(), self.namespace.clone()),
            ("vendor".to_string(), self.vendor.clone()),
            ("version".to_string(), self.version.clone()),
            ("license".to_string(), self.license.clone()),
            ("const_prefix".to_string(), self.const_prefix.clone()),
            ("package_name".to_string(), self.package_name.clone()),
        ])
    }
}

/// Subset of fields accepted as preloaded answers on stdin.
///
/// Derived fields (slug, const_prefix, package_name) are never accepted
/// directly; they always follow from the answered fields.
#[derive(Debug, Default, Deserialize)]
pub struct Overrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub uri: Option<String>,
    pub namespace: Option<String>,
    pub vendor: Option<String>,
}

/// Reads preloaded answers as a single JSON object from stdin.
pub fn load_overrides_from_stdin() -> Result<Overrides> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    serde_json::from_str(buffer.trim())
        .map_err(|e| Error::ValidationError(format!("invalid answers on stdin: {}", e)))
}

/// Derives the plugin slug from the display name: lowercased, spaces
/// replaced with hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

fn const_prefix_of(name: &str) -> String {
    name.to_uppercase().replace(' ', "")
}

fn package_name_of(vendor: &str, name: &str) -> String {
    format!("{}/{}", vendor, name.replace(' ', "-")).to_lowercase()
}

/// Checks that a slug is non-empty and safe to use as a directory name.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::ValidationError("plugin slug must not be empty".to_string()));
    }
    if slug == "." || slug == ".." {
        return Err(Error::ValidationError(format!(
            "plugin slug '{}' is not a valid directory name",
            slug
        )));
    }
    let safe = slug.chars().all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')
    });
    if !safe {
        return Err(Error::ValidationError(format!(
            "plugin slug '{}' contains characters unsafe for a directory name",
            slug
        )));
    }
    Ok(())
}

/// Picks the value for one field: flag wins over a stdin override, which
/// wins over an interactive prompt.
fn resolve<F>(flag: &Option<String>, preloaded: &Option<String>, prompt: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(value) = flag {
        return Ok(value.clone());
    }
    if let Some(value) = preloaded {
        return Ok(value.clone());
    }
    prompt()
}

/// Collects the full input set for a generation run.
///
/// # Arguments
/// * `args` - Parsed command line arguments (flag values)
/// * `overrides` - Preloaded answers from stdin, if any
/// * `prompter` - Interaction capability for unanswered fields
///
/// # Errors
/// * `Error::ValidationError` if the derived slug is empty or unsafe
/// * `Error::PromptError` if an interactive prompt fails
pub fn collect_inputs(
    args: &Args,
    overrides: &Overrides,
    prompter: &dyn Prompter,
) -> Result<InputSet> {
    let name = resolve(&args.name, &overrides.name, || {
        prompter.input("Plugin Name (human-readable)", Some("My Plugin"))
    })?;

    let slug = slugify(&name);
    validate_slug(&slug)?;

    let description = resolve(&args.description, &overrides.description, || {
        prompter.input("Description", None)
    })?;
    let author = resolve(&args.author, &overrides.author, || {
        prompter.input("Author", Some("Unknown"))
    })?;

    let default_uri = format!("https://wordpress.org/plugins/{}", slug);
    let uri = resolve(&args.uri, &overrides.uri, || {
        prompter.input("Plugin URI", Some(&default_uri))
    })?;

    let pascal_name = name.to_pascal_case();
    let namespace = resolve(&args.namespace, &overrides.namespace, || {
        prompter.input("Namespace", Some(&pascal_name))
    })?;
    let vendor = resolve(&args.vendor, &overrides.vendor, || {
        prompter.input("Vendor (for composer.json)", Some(&pascal_name))
    })?;

    let const_prefix = const_prefix_of(&name);
    let package_name = package_name_of(&vendor, &name);

    Ok(InputSet {
        name,
        slug,
        description,
        author,
        uri,
        namespace,
        vendor,
        version: "1.0.0".to_string(),
        license: "GPL-2.0-or-later".to_string(),
        const_prefix,
        package_name,
    })
}
