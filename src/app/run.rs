use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, error::ErrorKind};
use std::{
    env,
    process::{self, ExitCode},
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::{
    app::App,
    cli::{Args, completions::generate_completions},
    configs::{Config, expand_path, find_config_file, load_config, validate_config},
    error::BacklightError,
    exit_code::ExitStatus,
    privilege::{ProcessIdentity, drop_privileges},
};

const DEFAULT_PROGRAM_NAME: &str = "backlight";

/// Main entry point for the backlight binary.
///
/// 1. **Parse CLI arguments**: malformed input prints usage and exits 1
///    before any file is touched
/// 2. **Set up logging** on stderr, so stdout stays a single line
/// 3. **Drop privileges** to the invoking user
/// 4. **Load config** and apply CLI overrides
/// 5. **Apply the operation** and print the resulting percentage
///
/// Every failure is mapped to its [`ExitStatus`]. Invariant violations
/// abort the process after printing their message.
pub fn run() -> ExitCode {
    let cli_args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return report_usage_error(err),
    };

    init_logging(cli_args.verbose);

    if let Some(shell) = cli_args.completions {
        generate_completions(shell, &mut Args::command());
        return ExitStatus::Success.into();
    }

    match setup_the_environment_and_run(&cli_args) {
        Ok(percent) => {
            println!("{percent}%");
            ExitStatus::Success.into()
        }
        Err(err) => report_error(err),
    }
}

// Drops privileges, loads config, then runs the operation against the device.
// Returns the percentage to display.
fn setup_the_environment_and_run(cli_args: &Args) -> Result<u32> {
    let program = program_name();
    let identity = ProcessIdentity;

    drop_privileges(&identity, &program)?;

    let config = handle_config(cli_args).map_err(|err| BacklightError::Config(format!("{err:#}")))?;

    let app = App::new(config, program);
    let operation = cli_args.operation.unwrap_or_default();
    let adjustment = app.apply(operation, &identity)?;

    Ok(adjustment.percent())
}

// Loads and validates the config file using XDG-compliant path resolution.
// --device overrides the configured device.
fn handle_config(cli_args: &Args) -> Result<Config> {
    let expanded_config = cli_args
        .config
        .clone()
        .map(expand_path)
        .transpose()
        .context("Failed to expand config path")?;

    let config_path_opt =
        find_config_file(expanded_config).context("Failed to find config file")?;

    let mut config = match config_path_opt {
        Some(path) => load_config(path).context("Failed to load config file")?,
        None => Config::default(),
    };

    if let Some(ref device) = cli_args.device {
        config.device = Some(device.clone());
    }

    validate_config(&config)?;

    Ok(config)
}

fn init_logging(verbose: u8) {
    let mut env_filter = EnvFilter::from_default_env().add_directive(Level::WARN.into());

    let directive = match verbose {
        0 => None,
        1 => Some("backlight=debug"),
        _ => Some("backlight=trace"),
    };
    if let Some(directive) = directive
        && let Ok(parsed) = directive.parse()
    {
        env_filter = env_filter.add_directive(parsed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

// clap handles --help and --version through the error path too
fn report_usage_error(err: clap::Error) -> ExitCode {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        let _ = err.print();
        return ExitStatus::Success.into();
    }

    let _ = err.print();
    let _ = Args::command().print_help();
    ExitStatus::Usage.into()
}

fn report_error(err: anyhow::Error) -> ExitCode {
    let program = program_name();
    eprintln!("{program}: {err:#}");

    match err.downcast_ref::<BacklightError>() {
        Some(backlight_err) if backlight_err.is_invariant() => process::abort(),
        Some(backlight_err) => backlight_err.exit_status().into(),
        None => ExitStatus::Usage.into(),
    }
}

fn program_name() -> String {
    env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}
