use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::SiteCheckError;
use crate::suite::run_suite;
use crate::tools::extract::extract_page;
use crate::types::{Locale, Report, Status};

#[derive(Parser)]
#[command(name = "sitecheck", version, about = "Content-contract checks for the marketing site")]
pub struct Cli {
    /// Site root holding index.html and en/index.html
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// JSON file overriding the default expectations
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every check; exits 1 if any fails
    Check(CheckArgs),
    /// Print the extracted head/body attributes of one HTML file
    Extract {
        /// File path, or `-` for stdin
        input: String,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Only check one page variant
    #[arg(long, value_enum)]
    page: Option<Locale>,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Check(args) => {
            let mut config = SiteConfig::load(cli.config.as_deref())?;
            if let Some(root) = cli.root {
                config = config.with_root(root);
            }
            let report = run_suite(&config, args.page);
            if args.json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
            Ok(if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Extract { input } => {
            let html = read_input(&input)?;
            print_json(&extract_page(&html))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sitecheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: &str) -> crate::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(SiteCheckError::Stdin)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).map_err(|e| SiteCheckError::page_read(input, e))
    }
}

fn print_report(report: &Report) {
    for outcome in &report.outcomes {
        let label = match outcome.status {
            Status::Pass => "PASS ",
            Status::Fail => "FAIL ",
            Status::Error => "ERROR",
        };
        println!("{label} {:<12} {}", outcome.check.name(), outcome.locale);
        for message in &outcome.messages {
            println!("      - {message}");
        }
    }
    let failed = report.failures().count();
    println!(
        "\n{} checks, {} passed, {failed} failed",
        report.outcomes.len(),
        report.outcomes.len() - failed
    );
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
