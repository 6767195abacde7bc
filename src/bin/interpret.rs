//! Headless Command Interpreter
//!
//! Resolves Korean battle speech into the simulation's wire-form JSON,
//! printing it on stdout and optionally delivering it over UDP.

use clap::Parser;
use std::path::PathBuf;
use warcry_command::command::{interpret, to_wire_form, to_wire_json};
use warcry_command::core::config::config;
use warcry_command::dispatch::{Dispatcher, Tokenizer, UdpTransport, WhitespaceTokenizer};
use warcry_command::vocab::loader::load_vocab_file;
use warcry_command::vocab::set_vocabulary;

/// Headless Command Interpreter - Korean battle speech to simulation commands
#[derive(Parser, Debug)]
#[command(name = "interpret")]
#[command(about = "Resolve Korean battle speech into simulation commands")]
struct Args {
    /// Utterance tokens (a quoted phrase is split on whitespace)
    tokens: Vec<String>,

    /// TOML file replacing the built-in synonym tables
    #[arg(long)]
    vocab: Option<PathBuf>,

    /// Deliver the wire JSON to the simulation endpoint over UDP
    #[arg(long)]
    send: bool,

    /// Pretty-print the wire JSON
    #[arg(long)]
    pretty: bool,
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the wire JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warcry_command=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.vocab {
        let vocab = match load_vocab_file(path) {
            Ok(vocab) => vocab,
            Err(e) => {
                eprintln!("Failed to load vocabulary {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        tracing::info!(
            units = vocab.unit_count(),
            directions = vocab.direction_count(),
            "custom vocabulary loaded"
        );
        if set_vocabulary(vocab).is_err() {
            eprintln!("Vocabulary was already initialized");
            std::process::exit(1);
        }
    }

    let utterance = args.tokens.join(" ");

    let command = if args.send {
        let transport = match UdpTransport::new(config()) {
            Ok(transport) => transport,
            Err(e) => {
                eprintln!("Failed to open transport: {}", e);
                std::process::exit(1);
            }
        };
        Dispatcher::new(WhitespaceTokenizer, transport).handle_utterance(&utterance)
    } else {
        interpret(&WhitespaceTokenizer.tokenize(&utterance))
    };

    if !command.is_actionable() {
        tracing::info!("no actionable command in input");
    }

    if args.pretty {
        println!(
            "{}",
            serde_json::to_string_pretty(&to_wire_form(&command)).unwrap()
        );
    } else {
        println!("{}", to_wire_json(&command));
    }
}
