//! Run orchestration: configuration, scan, report, delete

use colored::Colorize;
use extdedup_core::{
    DeleteMode, DeletionEvent, ExtensionPair, FsRemover, Remover, ScanOptions, execute,
};
use std::io::Write;
use std::path::Path;

use crate::cli::Cli;
use crate::config::{AppConfig, ConfigManager};
use crate::error::{CliError, CliResult, ErrorContext};
use crate::report::{OutputFormat, create_reporter};
use crate::terminal::ColorMode;

/// Everything a run needs, after merging flags over configuration
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub pair: ExtensionPair,
    pub scan: ScanOptions,
    pub mode: DeleteMode,
    pub verbose: bool,
    pub format: OutputFormat,
    pub color: ColorMode,
}

impl RunSettings {
    /// Merge command line flags over loaded configuration
    ///
    /// Switches are additive: a flag can turn a behavior on, and the
    /// configuration can turn it on by default. Exclude patterns from both
    /// sources are combined.
    pub fn resolve(cli: &Cli, config: AppConfig) -> CliResult<Self> {
        let (Some(preferred), Some(default_ext)) = (&cli.preferred, &cli.default_ext) else {
            return Err(CliError::misuse(
                "Both --preferred and --default extensions are required",
            ));
        };
        let pair = ExtensionPair::parse(preferred, default_ext)?;

        let mut exclude_patterns = config.scan.exclude;
        exclude_patterns.extend(cli.exclude_patterns.iter().cloned());

        let scan = ScanOptions::new()
            .with_recursive(cli.recursive || config.scan.recursive)
            .with_follow_links(cli.follow_links || config.scan.follow_links)
            .with_max_depth(cli.max_depth.or(config.scan.max_depth))
            .with_exclude_patterns(exclude_patterns);

        Ok(Self {
            pair,
            scan,
            mode: DeleteMode::from_dry_run(cli.dry_run),
            verbose: cli.verbose || config.output.verbose,
            format: cli.format.unwrap_or(config.output.format),
            color: cli.color.unwrap_or(config.output.color),
        })
    }
}

/// Load configuration as selected on the command line
pub fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    manager.load().map_err(|e| {
        CliError::misuse(&format!("{e:#}")).with_context(
            "config",
            &manager.get_config_path().display().to_string(),
        )
    })
}

/// Execute one run against `root`
///
/// The report goes to `out`; per-file failures go to `err` as they happen.
/// Returns an error when the scan fails, in which case nothing was deleted,
/// or when at least one removal failed for a reason other than the file
/// already being gone.
pub fn run(
    settings: &RunSettings,
    root: &Path,
    remover: &dyn Remover,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> CliResult<()> {
    let use_color = settings.color.enabled();
    colored::control::set_override(use_color);

    let plan = extdedup_core::plan(root, &settings.pair, &settings.scan)?;
    log::info!(
        "{} to keep, {} to delete",
        plan.keep_count(),
        plan.delete_count()
    );

    let mut reporter = create_reporter(settings.format, use_color, settings.verbose);
    out.write_all(reporter.plan(&plan, settings.mode).as_bytes())?;

    let mut write_error = None;
    let report = execute(&plan, root, settings.mode, remover, |event| {
        let mut result = out.write_all(reporter.event(event).as_bytes());
        if let DeletionEvent::Failed(path, reason) = event {
            let line = format!("{} {}: {reason}", "Failed to delete".red(), path.display());
            result = result.and_then(|()| writeln!(err, "{line}"));
        }
        if let Err(e) = result {
            write_error.get_or_insert(e);
        }
    });

    if let Some(e) = write_error {
        return Err(e.into());
    }

    out.write_all(reporter.finish(&plan, &report, settings.mode)?.as_bytes())?;
    out.flush()?;

    if report.has_failures() {
        return Err(CliError::filesystem(&format!(
            "Failed to delete {} of {} file(s)",
            report.failed.len(),
            plan.delete_count()
        ))
        .with_suggestion("Check file permissions"));
    }

    Ok(())
}

/// Execute a run with the real filesystem remover on stdout/stderr
pub fn run_with_stdio(settings: &RunSettings, root: &Path) -> CliResult<()> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run(
        settings,
        root,
        &FsRemover,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
