//! Command-line interface implementation for plugsmith.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for plugsmith.
///
/// Every plugin metadata field can be supplied as a flag; fields left unset
/// are answered from stdin (with `--stdin`) or through interactive prompts.
#[derive(Parser, Debug)]
#[command(version, about = "Plugsmith: WordPress plugin scaffolding tool", long_about = None)]
pub struct Args {
    /// Directory under which the plugin directory is created
    #[arg(value_name = "PLUGINS_DIR", default_value = ".")]
    pub plugins_dir: PathBuf,

    /// Plugin display name
    #[arg(long)]
    pub name: Option<String>,

    /// Short plugin description
    #[arg(long)]
    pub description: Option<String>,

    /// Plugin author
    #[arg(long)]
    pub author: Option<String>,

    /// Plugin URI
    #[arg(long)]
    pub uri: Option<String>,

    /// PHP namespace (defaults to the PascalCase plugin name)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Composer vendor name (defaults to the PascalCase plugin name)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Path to an alternative template directory
    #[arg(long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Get answers from stdin as a JSON object
    #[arg(short, long)]
    pub stdin: bool,

    /// Skip the composer install step even when composer.json is present
    #[arg(long)]
    pub skip_install: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
