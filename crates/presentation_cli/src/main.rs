//! JARVIS CLI
//!
//! Command-line interface to the voice assistant core. The terminal
//! stands in for the speech engines: each line read is one final
//! transcript and responses are printed instead of synthesized.

#![allow(clippy::print_stdout)]

use std::{path::PathBuf, sync::Arc};

use application::{
    DialogueService, IntentMatcher, Responder,
    ports::{BatteryPort, SpeechInputPort, SpeechOutputPort},
};
use clap::{Parser, Subcommand};
use domain::Speaker;
use infrastructure::{
    AppConfig, ConsoleSpeechInput, ConsoleSpeechOutput, NullSpeechInput, NullSpeechOutput,
    SysfsBattery, SystemLinkOpener,
};
use tracing_subscriber::EnvFilter;

/// JARVIS CLI
#[derive(Parser)]
#[command(name = "jarvis-cli")]
#[command(version, about = "JARVIS voice assistant CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, default_value = "jarvis.toml")]
    config: PathBuf,

    /// Log external links instead of opening them
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: each line is one spoken command
    Repl,

    /// Process a single utterance and print the exchange
    Say {
        /// The utterance to process
        utterance: String,
    },

    /// List the intent rules in evaluation order
    Rules,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load_or_default(&cli.config)?;
    let dry_run = cli.dry_run || config.links.dry_run;

    match cli.command {
        Commands::Repl => repl(&config, dry_run).await,
        Commands::Say { utterance } => say(&config, dry_run, &utterance).await,
        Commands::Rules => {
            for (i, name) in IntentMatcher::new().rule_names().iter().enumerate() {
                println!("{:2}. {name}", i + 1);
            }
            println!("    (anything else echoes what was heard)");
            Ok(())
        },
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn build_service(
    config: &AppConfig,
    dry_run: bool,
    speech_in: Arc<dyn SpeechInputPort>,
    speech_out: Arc<dyn SpeechOutputPort>,
) -> DialogueService {
    let battery = SysfsBattery::probe().map(|b| Arc::new(b) as Arc<dyn BatteryPort>);
    let links = Arc::new(SystemLinkOpener::new(dry_run));
    let responder = Responder::new(battery, links);
    DialogueService::with_speech_params(
        IntentMatcher::new(),
        responder,
        speech_in,
        speech_out,
        config.speech,
    )
}

async fn repl(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let service = build_service(
        config,
        dry_run,
        Arc::new(ConsoleSpeechInput::new()),
        Arc::new(ConsoleSpeechOutput::new()),
    );

    println!("JARVIS at your service. Type a command, Ctrl-D to leave.");
    let events = service.start_listening().await?;
    service.run(events).await;
    service.stop_listening().await?;

    println!(
        "Session over: {} turns exchanged.",
        service.transcript().len()
    );
    Ok(())
}

async fn say(config: &AppConfig, dry_run: bool, utterance: &str) -> anyhow::Result<()> {
    let service = build_service(
        config,
        dry_run,
        Arc::new(NullSpeechInput::new()),
        Arc::new(NullSpeechOutput::new()),
    );

    service.handle_final(utterance).await;

    for turn in service.recent_turns(config.display.recent_turns) {
        let who = match turn.speaker {
            Speaker::User => "you",
            Speaker::Assistant => "jarvis",
        };
        println!("[{}] {who}: {}", turn.occurred_at.format("%H:%M:%S"), turn.text);
    }
    Ok(())
}
