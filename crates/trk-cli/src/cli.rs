use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use trk_provider::SETTINGS_FILE_NAME;

#[derive(Parser)]
#[command(
    name = "trk",
    about = "Inspect tracker configuration profiles and the merged result",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Provider settings file
    #[arg(long, global = true, env = "TRK_SETTINGS", default_value = SETTINGS_FILE_NAME)]
    pub settings: PathBuf,

    /// Directory holding user profiles (overrides settings and TRK_CONFIG_DIR)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Ignore the profiles compiled into the binary
    #[arg(long, global = true)]
    pub no_bundled: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Command {
    /// List selectable profiles
    Profiles,
    /// List configuration kinds
    Kinds,
    /// List moods offered by profiles
    Moods(MoodsArgs),
    /// Print a configuration kind with profiles merged in
    Show(ShowArgs),
    /// Load every kind for every profile and mood, reporting failures
    Check(CheckArgs),
}

#[derive(Args)]
pub struct MoodsArgs {
    /// Profiles to inspect, in order
    #[arg(short = 'p', long = "profile")]
    pub profiles: Vec<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Kind name, e.g. `items` or `responses`
    pub kind: String,
    /// Profiles to merge, in order
    #[arg(short = 'p', long = "profile")]
    pub profiles: Vec<String>,
    #[arg(short, long)]
    pub mood: Option<String>,
    /// Also list the overlay documents that were applied
    #[arg(long)]
    pub sources: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Profiles to check; all available profiles when omitted
    #[arg(short = 'p', long = "profile")]
    pub profiles: Vec<String>,
}
