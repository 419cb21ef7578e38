use std::io::{self, Write};
use std::path::Path;

use crate::catalog::{Family, RoutineId};
use crate::config::Config;
use crate::evaluator::Evaluator;
use crate::output::Reporter;
use crate::output::json::JsonReporter;
use crate::output::text::TextReporter;
use crate::verifier;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors returned by CLI command functions.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error (exit code 2).
    Io(io::Error),
    /// Config loading, parsing or evaluation failed (exit code 2).
    Fixtures(crate::error::Error),
    /// A duplicate family disagreed or failed (exit code 1).
    CheckFailed,
}

impl CliError {
    /// Map to an appropriate process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CheckFailed => 1,
            Self::Io(_) | Self::Fixtures(_) => 2,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Fixtures(e) => write!(f, "{e}"),
            Self::CheckFailed => write!(f, "Check failed"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Fixtures(e) => Some(e),
            Self::CheckFailed => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<crate::error::Error> for CliError {
    fn from(e: crate::error::Error) -> Self {
        Self::Fixtures(e)
    }
}

/// Result type for CLI operations.
pub type CliResult<T = ()> = Result<T, CliError>;

// ---------------------------------------------------------------------------
// Shared CLI types
// ---------------------------------------------------------------------------

/// Output format for CLI reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI subcommands.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(clap::Subcommand))]
pub enum Command {
    /// List routines grouped by family (default).
    List {
        /// Only list this family.
        #[cfg_attr(feature = "cli", arg(long))]
        family: Option<Family>,
    },
    /// Run one routine on the given arguments.
    Run {
        /// Routine name, e.g. `process_data` or `MathUtils::factorial`.
        routine: String,
        /// Integers for sequence and integer routines, two numbers for arithmetic.
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        args: Vec<String>,
    },
    /// Check that every duplicate family agrees; exit 1 if any does not.
    Check,
}

/// Optional CLI overrides applied on top of file-based config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub fibonacci_limit: Option<u32>,
    pub check_max_n: Option<u32>,
    pub exclude: Vec<Family>,
}

// ---------------------------------------------------------------------------
// Config helpers
// ---------------------------------------------------------------------------

/// Apply CLI overrides to a loaded `Config`.
///
/// CLI `--exclude` families are *appended* to config-file excludes (not replaced).
pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(limit) = overrides.fibonacci_limit {
        config.fibonacci_limit = limit;
    }
    if let Some(max_n) = overrides.check_max_n {
        config.check_max_n = max_n;
    }
    for family in &overrides.exclude {
        if !config.exclude.contains(family) {
            config.exclude.push(*family);
        }
    }
}

/// Load config from `root` and apply CLI overrides.
pub fn load_config(root: &Path, overrides: &CliOverrides) -> CliResult<Config> {
    let mut config = Config::load(root)?;
    apply_overrides(&mut config, overrides);
    Ok(config)
}

/// Create a reporter for the given output format.
#[must_use]
pub fn create_reporter(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new()),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

/// List the catalog, optionally restricted to one family.
pub fn cmd_list(
    family: Option<Family>,
    reporter: &dyn Reporter,
    writer: &mut impl Write,
) -> CliResult {
    let families: Vec<Family> = match family {
        Some(f) => vec![f],
        None => Family::ALL.to_vec(),
    };
    reporter.report_catalog(&families, writer)?;
    Ok(())
}

/// Parse arguments for `routine`, evaluate it and report the result.
pub fn cmd_run(
    config: &Config,
    routine: &str,
    args: &[String],
    reporter: &dyn Reporter,
    writer: &mut impl Write,
) -> CliResult {
    let routine: RoutineId = routine.parse()?;
    let mut evaluator = Evaluator::new(config.fibonacci_limit);
    let evaluation = evaluator.run(routine, args)?;
    reporter.report_evaluation(&evaluation, writer)?;
    Ok(())
}

/// Cross-check all duplicate families; returns `Err(CliError::CheckFailed)` on
/// any mismatch or failure.
pub fn cmd_check(config: &Config, reporter: &dyn Reporter, writer: &mut impl Write) -> CliResult {
    let report = verifier::verify(config);
    reporter.report_check(&report, writer)?;

    if report.passed() {
        writeln!(writer, "\nCheck passed.")?;
        Ok(())
    } else {
        writeln!(
            writer,
            "\nCheck FAILED: {} of {} families disagree",
            report.failed_families(),
            report.families.len()
        )?;
        Err(CliError::CheckFailed)
    }
}
