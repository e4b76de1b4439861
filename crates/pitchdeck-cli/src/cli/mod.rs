//! CLI for the pitch deck analyzer.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pitchdeck_core::config;
use std::path::PathBuf;

use commands::{run_analyze, run_completions, run_config, run_render, AnalyzeOptions};

/// Top-level CLI for the pitch deck analyzer.
#[derive(Debug, Parser)]
#[command(name = "pitchdeck")]
#[command(about = "Contrarian Ventures. Pitch Deck Analyzer. Upload your pitch deck for analysis.", long_about = None)]
pub struct Cli {
    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload a pitch deck for analysis and show the evaluation.
    Analyze {
        /// Path to the PDF deck.
        path: Option<PathBuf>,

        /// Analysis service base URL (overrides config and PITCHDECK_API_URL).
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print the analysis as JSON instead of cards.
        #[arg(long)]
        json: bool,

        /// Also write the analysis JSON to this file.
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Show a previously saved analysis.
    Render {
        /// Path to an analysis JSON document.
        path: PathBuf,

        /// Print as JSON instead of cards.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file location and effective settings.
    Config,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if cli.no_color {
            colored::control::set_override(false);
        }

        match cli.command {
            CliCommand::Analyze {
                path,
                api_url,
                json,
                save,
            } => {
                let mut cfg = config::load_effective()?;
                if let Some(url) = api_url {
                    cfg.api_base_url = url;
                }
                tracing::debug!("effective config: {:?}", cfg);
                let opts = AnalyzeOptions { json, save };
                run_analyze(&cfg, path.as_deref(), &opts).await?;
            }
            CliCommand::Render { path, json } => run_render(&path, json)?,
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
