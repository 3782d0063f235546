//! Podforge CLI - multi-voice podcast synthesis.
//!
//! Subcommands:
//!   - serve: run the HTTP synthesis server
//!   - synth: synthesize an annotated script file into an MP3
//!   - script: generate an annotated script for a topic
//!   - cover: generate cover art for a title
//!   - list: list stored podcasts

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod server;
mod store;

use commands::{CoverCommand, ListCommand, ScriptCommand, ServeCommand, SynthCommand};
use config::PodforgeConfig;

#[derive(Parser)]
#[command(name = "podforge")]
#[command(about = "Podcast synthesis CLI and server")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the synthesis HTTP server
    Serve(ServeCommand),
    /// Synthesize a script file into an MP3
    Synth(SynthCommand),
    /// Generate an annotated podcast script
    Script(ScriptCommand),
    /// Generate podcast cover art
    Cover(CoverCommand),
    /// List stored podcasts
    List(ListCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "podforge=debug,podforge_speech=debug"
    } else {
        "podforge=info,podforge_speech=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = PodforgeConfig::from_env();

    match &cli.command {
        Commands::Serve(cmd) => cmd.run(&config).await,
        Commands::Synth(cmd) => cmd.run(&config).await,
        Commands::Script(cmd) => cmd.run(&config).await,
        Commands::Cover(cmd) => cmd.run(&config).await,
        Commands::List(cmd) => cmd.run(&config).await,
    }
}
