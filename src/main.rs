//! latwalk CLI entry point

use anyhow::{Context, Result};
use latwalk::config::cli::Cli;
use latwalk::config::toml::{merge_cli_with_config, parse_toml_file};
use latwalk::config::validator::validate_config;
use latwalk::config::Config;
use latwalk::output::json::write_json_report;
use latwalk::output::text::{print_configuration, print_report};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    println!("latwalk v{}", env!("CARGO_PKG_VERSION"));
    println!("Lattice random walk simulator");
    println!();

    let config = build_config(&cli)?;
    validate_config(&config).context("Configuration validation failed")?;
    print_configuration(&config);

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();
    println!("Starting simulation...");
    println!();

    let report = latwalk::coordinator::run(&config)?;
    print_report(&report);

    if let Some(ref path) = config.output.json_output {
        write_json_report(path, &report, config.output.pretty)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

/// Initialise env_logger; `--debug` raises the default level when RUST_LOG is unset
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

/// Build configuration from an optional TOML file plus CLI overrides
fn build_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    Ok(merge_cli_with_config(cli, base))
}
