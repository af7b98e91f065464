use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repodepth",
    version,
    about = "Score the engineering depth of a code-hosting account's repositories"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the most recently pushed repositories of an account
    Analyze(AnalyzeCommand),
    /// Analyze a single repository
    Repo(RepoCommand),
}

/// Flags shared by every command that talks to the host.
#[derive(Args, Clone, Debug, Default)]
pub struct RemoteArgs {
    /// Maximum number of repositories to analyze
    #[arg(long)]
    pub max_repos: Option<usize>,

    /// Maximum number of source files fetched per repository
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Base URL of the host API
    #[arg(long)]
    pub api_base: Option<String>,

    /// Config file (defaults to ./repodepth.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub account: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[command(flatten)]
    pub remote: RemoteArgs,
}

#[derive(Args)]
pub struct RepoCommand {
    pub account: String,
    pub repo: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[command(flatten)]
    pub remote: RemoteArgs,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
