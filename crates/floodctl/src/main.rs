//! Floodctl - terminal front end for the flood-safety assistant
//!
//! Stands in for the portal's assistant panel: asks questions, runs an
//! interactive chat and validates knowledge documents.

use anyhow::Result;
use clap::{Parser, Subcommand};
use floodctl::app::{self, AppContext, Overrides};
use floodctl::{commands, logging};
use std::io;
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "floodctl")]
#[command(about = "Flood-safety assistant - canned answers for flood preparedness", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (overrides FLOOD_ASSISTANT_CONFIG and default locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Knowledge document (TOML or JSON) instead of the embedded FAQ
    #[arg(long, global = true)]
    knowledge: Option<PathBuf>,

    /// Reply delay in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Print messages as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask one question and print the answer
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Interactive assistant on stdin
    Chat,

    /// List suggested questions
    Suggestions,

    /// Validate a knowledge document
    Check {
        /// Document to validate (configured document, then embedded table, when omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut stdout = io::stdout().lock();

    let overrides = Overrides {
        config: cli.config,
        knowledge: cli.knowledge,
        delay_ms: cli.delay_ms,
        json: cli.json,
    };

    // check validates documents itself, so it must not fail on a bad one
    if let Commands::Check { file } = &cli.command {
        let config = app::load_config(&overrides)?;
        return commands::check::run(file.as_deref(), &config, &mut stdout);
    }

    let ctx = AppContext::load(overrides)?;

    match cli.command {
        Commands::Ask { question } => commands::ask::run(&ctx, &question.join(" "), &mut stdout).await,
        Commands::Chat => {
            let stdin = BufReader::new(tokio::io::stdin());
            commands::chat::run(&ctx, stdin, &mut stdout).await
        }
        Commands::Suggestions => commands::suggestions::run(&ctx, &mut stdout),
        Commands::Check { .. } => Ok(()),
    }
}
