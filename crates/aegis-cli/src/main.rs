use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aegis_core::report::{model::ToolInfo, render};
use aegis_core::scorer::Scorer;
use aegis_core::scorer::fixed::StaticScorer;
use aegis_core::scorer::process::ProcessScorer;
use aegis_core::shell::{BridgeProfile, ShellController};

mod args;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::Args::parse();
    let profile = BridgeProfile::from(args.profile);

    let scorer: Arc<dyn Scorer> = match (&args.scorer, profile) {
        (Some(program), _) => Arc::new(
            ProcessScorer::new(program.clone(), args.scorer_args.clone())
                .with_timeout(Duration::from_secs(args.timeout_secs)),
        ),
        (None, BridgeProfile::Permissive) => Arc::new(StaticScorer::fallback()),
        (None, BridgeProfile::Hardened) => {
            bail!("--scorer is required under the hardened profile")
        }
    };

    let mut shell = ShellController::new(scorer, profile);
    shell.navigate(&args.target);

    if !args.no_verify {
        let content = match &args.content {
            Some(path) => Some(std::fs::read_to_string(path)?),
            None => None,
        };
        shell.verify(content.as_deref()).await;
    }

    let summary = shell.summary(ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    });

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
        args::OutputFormat::Text => render::render_text(&summary),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => println!("{output}"),
    }

    std::process::exit(summary.exit_code());
}
