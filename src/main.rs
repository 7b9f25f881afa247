//! Plugsmith's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates input collection,
//! template instantiation, and dependency installation.

use plugsmith::{
    cli::{get_args, Args},
    copier::{copy_tree, ensure_dest_available},
    error::{default_error_handler, Result},
    inputs::{collect_inputs, load_overrides_from_stdin, Overrides},
    installer::run_installer,
    logger::init_logger,
    prompt::DialoguerPrompter,
    substitutor::Substitutor,
    template::resolve_template_dir,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects inputs from flags, stdin answers, and interactive prompts
/// 2. Validates that the destination directory does not exist yet
/// 3. Copies the template tree to the destination
/// 4. Substitutes placeholders and renames the entry file
/// 5. Runs composer install when a manifest is present
fn run(args: Args) -> Result<()> {
    let prompter = DialoguerPrompter::new();

    let overrides =
        if args.stdin { load_overrides_from_stdin()? } else { Overrides::default() };
    let inputs = collect_inputs(&args, &overrides, &prompter)?;

    let dest_dir = ensure_dest_available(args.plugins_dir.join(&inputs.slug))?;
    let template_dir = resolve_template_dir(args.template.clone())?;

    copy_tree(&template_dir, &dest_dir)?;

    let substitutor = Substitutor::new(&inputs);
    substitutor.substitute_tree(&dest_dir)?;

    if args.skip_install {
        log::debug!("Skipping composer install on request");
    } else {
        run_installer(&dest_dir);
    }

    println!("Plugin '{}' created at {}.", inputs.name, dest_dir.display());
    Ok(())
}
