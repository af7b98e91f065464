mod analyze;
mod cli;
mod config;
mod error;
mod remote;
mod report;
mod scan;
mod types;

use crate::analyze::{Analyzer, Heuristics};
use crate::error::Result;
use crate::remote::github::GitHubHost;
use crate::remote::RemoteRepository;
use crate::types::config::DepthConfig;
use crate::types::report::AccountReport;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config files first, then command-line overrides, then validation.
fn resolve_config(args: &cli::RemoteArgs) -> Result<DepthConfig> {
    let root = std::env::current_dir()?;
    let mut cfg = config::load_config(&root, args.config.as_deref())?;
    if let Some(max_repos) = args.max_repos {
        cfg.limits.max_repositories = max_repos;
    }
    if let Some(max_files) = args.max_files {
        cfg.limits.max_files_per_repository = max_files;
    }
    if let Some(api_base) = &args.api_base {
        cfg.remote.api_base = api_base.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32> {
    dotenvy::dotenv().ok();
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let cfg = resolve_config(&cmd.remote)?;
            let host = GitHubHost::from_config(&cfg.remote, cfg.token())?;
            let analyzer = Analyzer::new(&host, cfg.limits, Heuristics::default())?;

            let result = analyzer.analyze_account(&cmd.account)?;
            let has_skipped = !result.skipped_repositories.is_empty();
            let account_report = AccountReport::new(&cmd.account, result);
            let rendered = report::render(&account_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if has_skipped {
                if !cli.quiet {
                    eprintln!(
                        "warning: skipped {} repositories: {}",
                        account_report.skipped_repositories.len(),
                        account_report.skipped_repositories.join(", ")
                    );
                }
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Repo(cmd) => {
            let cfg = resolve_config(&cmd.remote)?;
            let host = GitHubHost::from_config(&cfg.remote, cfg.token())?;
            let analyzer = Analyzer::new(&host, cfg.limits, Heuristics::default())?;

            let repository = RemoteRepository {
                name: cmd.repo.clone(),
                fork: false,
                size: 0,
                pushed_at: None,
                url: None,
            };
            match analyzer.analyze_repository(&cmd.account, &repository)? {
                Some(record) => {
                    let rendered =
                        report::render_repository(&record, output_format(&cmd.format))?;
                    println!("{rendered}");
                    Ok(exit_code::SUCCESS)
                }
                None => {
                    if !cli.quiet {
                        eprintln!("warning: {}/{} has no files", cmd.account, cmd.repo);
                    }
                    Ok(exit_code::WARNINGS)
                }
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
