use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;

use fixtures_core::catalog::Family;
use fixtures_core::cli::{self, CliError, CliOverrides, Command, OutputFormat};

#[derive(Parser)]
#[command(
    name = "dupe-fixtures",
    version,
    about = "List, run and cross-check deliberately duplicated fixture routines"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory to load fixtures.toml / Cargo.toml config from (defaults to current directory).
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Largest n the Fibonacci routines will be run with.
    #[arg(long, global = true)]
    fibonacci_limit: Option<u32>,

    /// Check integer families on every n in 0..=MAX_N.
    #[arg(long, global = true)]
    max_n: Option<u32>,

    /// Families to skip during check (can be repeated).
    #[arg(long, global = true)]
    exclude: Vec<Family>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();
}

fn main() {
    let Cli {
        command,
        path,
        format,
        fibonacci_limit,
        max_n,
        exclude,
        verbose,
    } = Cli::parse();

    init_tracing(verbose);

    let root =
        path.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    debug!(root = %root.display(), "starting");

    let command = command.unwrap_or(Command::List { family: None });
    let reporter = cli::create_reporter(format);
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    let overrides = CliOverrides {
        fibonacci_limit,
        check_max_n: max_n,
        exclude,
    };

    let result = match command {
        Command::List { family } => cli::cmd_list(family, &*reporter, &mut writer),
        Command::Run { routine, args } => cli::load_config(&root, &overrides)
            .and_then(|config| cli::cmd_run(&config, &routine, &args, &*reporter, &mut writer)),
        Command::Check => cli::load_config(&root, &overrides)
            .and_then(|config| cli::cmd_check(&config, &*reporter, &mut writer)),
    };

    if let Err(e) = result {
        if matches!(e, CliError::CheckFailed) {
            process::exit(1);
        } else {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}
