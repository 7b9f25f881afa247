use clap::Parser;
use plugsmith::cli::Args;
use plugsmith::error::Result;
use plugsmith::inputs::{collect_inputs, slugify, validate_slug, Overrides};
use plugsmith::prompt::Prompter;
use std::ffi::OsString;

/// Prompter that always answers with the offered default.
struct DefaultPrompter;

impl Prompter for DefaultPrompter {
    fn input(&self, _prompt: &str, default: Option<&str>) -> Result<String> {
        Ok(default.unwrap_or("").to_string())
    }
}

fn parse_args(args: &[&str]) -> Args {
    let mut argv = vec![OsString::from("plugsmith")];
    argv.extend(args.iter().map(OsString::from));
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("My Plugin"), "my-plugin");
    assert_eq!(slugify("Demo"), "demo");
    assert_eq!(slugify("ACME SEO Tools"), "acme-seo-tools");
}

#[test]
fn test_validate_slug() {
    assert!(validate_slug("my-plugin").is_ok());
    assert!(validate_slug("plugin_2").is_ok());

    assert!(validate_slug("").is_err());
    assert!(validate_slug("my/plugin").is_err());
    assert!(validate_slug("..").is_err());
    assert!(validate_slug("My-Plugin").is_err());
}

#[test]
fn test_derivations_from_name() {
    let args = parse_args(&["--name", "My Plugin"]);
    let inputs = collect_inputs(&args, &Overrides::default(), &DefaultPrompter).unwrap();

    assert_eq!(inputs.slug, "my-plugin");
    assert_eq!(inputs.const_prefix, "MYPLUGIN");
    assert_eq!(inputs.namespace, "MyPlugin");
    assert_eq!(inputs.vendor, "MyPlugin");
    assert_eq!(inputs.package_name, "myplugin/my-plugin");
    assert_eq!(inputs.uri, "https://wordpress.org/plugins/my-plugin");
    assert_eq!(inputs.author, "Unknown");
    assert_eq!(inputs.version, "1.0.0");
    assert_eq!(inputs.license, "GPL-2.0-or-later");
}

#[test]
fn test_package_name_uses_vendor() {
    let args = parse_args(&["--name", "My Plugin", "--vendor", "Acme"]);
    let inputs = collect_inputs(&args, &Overrides::default(), &DefaultPrompter).unwrap();

    assert_eq!(inputs.vendor, "Acme");
    assert_eq!(inputs.package_name, "acme/my-plugin");
}

#[test]
fn test_flag_beats_override_beats_prompt() {
    let args = parse_args(&["--name", "Flag Name", "--author", "Flag Author"]);
    let overrides = Overrides {
        author: Some("Preloaded Author".to_string()),
        description: Some("Preloaded description".to_string()),
        ..Default::default()
    };
    let inputs = collect_inputs(&args, &overrides, &DefaultPrompter).unwrap();

    assert_eq!(inputs.name, "Flag Name");
    assert_eq!(inputs.author, "Flag Author");
    assert_eq!(inputs.description, "Preloaded description");
}

#[test]
fn test_prompted_name_uses_default() {
    let args = parse_args(&[]);
    let inputs = collect_inputs(&args, &Overrides::default(), &DefaultPrompter).unwrap();

    assert_eq!(inputs.name, "My Plugin");
    assert_eq!(inputs.slug, "my-plugin");
}

#[test]
fn test_overrides_deserialization() {
    let overrides: Overrides =
        serde_json::from_str(r#"{"name": "Demo", "vendor": "Acme"}"#).unwrap();

    assert_eq!(overrides.name.as_deref(), Some("Demo"));
    assert_eq!(overrides.vendor.as_deref(), Some("Acme"));
    assert!(overrides.author.is_none());
}

#[test]
fn test_as_map_contains_all_tokens() {
    let args = parse_args(&["--name", "Demo"]);
    let inputs = collect_inputs(&args, &Overrides::default(), &DefaultPrompter).unwrap();
    let map = inputs.as_map();

    for key in [
        "name",
        "slug",
        "description",
        "author",
        "uri",
        "namespace",
        "vendor",
        "version",
        "license",
        "const_prefix",
        "package_name",
    ] {
        assert!(map.contains_key(key), "missing token key '{}'", key);
    }
}
