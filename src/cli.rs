use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pairscore",
    version,
    about = "Relationship-compatibility quiz scorer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a set of quiz answers and print the full profile.
    Score(ScoreArgs),
    /// Print the teaser shown before the full report.
    Preview(PreviewArgs),
    /// Write a default pairscore.toml.
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    /// JSON answers file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub answers: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Fixed seed for filler tip selection.
    #[arg(long, conflicts_with = "random_tips")]
    pub seed: Option<u64>,
    /// Pick filler tips with fresh randomness on every run.
    #[arg(long)]
    pub random_tips: bool,
}

#[derive(Debug, Args, Clone)]
pub struct PreviewArgs {
    /// JSON answers file, or `-` for stdin.
    #[arg(long, conflicts_with = "profile")]
    pub answers: Option<PathBuf>,
    /// Previously stored profile JSON.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the file. Defaults to ./pairscore.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
