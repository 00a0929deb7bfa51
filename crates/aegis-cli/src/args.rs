use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use aegis_core::shell::BridgeProfile;

#[derive(Debug, Parser)]
#[command(
    name = "aegis",
    version,
    about = "Trust verification shell for web targets"
)]
pub struct Args {
    /// Target URL to navigate to (bare hosts gain an https:// prefix)
    pub target: String,

    /// Scorer program, invoked as `<program> [scorer-args...] <target> <content>`
    #[arg(long)]
    pub scorer: Option<String>,

    /// Leading argument passed to the scorer before the positionals (repeatable)
    #[arg(long = "scorer-arg")]
    pub scorer_args: Vec<String>,

    /// File with a page-content snapshot to hand the scorer
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Seconds to wait for the scorer before failing the scan
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Navigate only; skip the verification scan
    #[arg(long)]
    pub no_verify: bool,

    /// Bridge profile
    #[arg(long, default_value = "hardened")]
    pub profile: Profile,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Profile {
    /// Scorer reachable only through the isolated process channel
    Hardened,
    /// Allows the in-process fallback scorer when no --scorer is given
    Permissive,
}

impl From<Profile> for BridgeProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Hardened => BridgeProfile::Hardened,
            Profile::Permissive => BridgeProfile::Permissive,
        }
    }
}
