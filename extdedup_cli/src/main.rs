use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::path::Path;

use extdedup_cli::{Cli, CliResult, RunSettings, load_config, run_with_stdio};

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("extdedup_core", log::LevelFilter::Debug)
            .filter_module("extdedup_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        log::debug!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    if let Err(error) = execute(&cli) {
        eprint!("{}", error.format_for_user(cli.debug));
        std::process::exit(error.exit_code() as i32);
    }
}

fn execute(cli: &Cli) -> CliResult<()> {
    let config = load_config(cli)?;
    let settings = RunSettings::resolve(cli, config)?;
    log::debug!("Resolved settings: {settings:?}");

    // The working directory is always the scan root
    run_with_stdio(&settings, Path::new("."))
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
