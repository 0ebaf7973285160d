use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use inflekt_parser::Morpher;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Inflects template sentences against a plain-text dictionary")]
struct Cli {
    /// Dictionary source: block markers, headers and forms, one per line.
    #[arg(short, long, value_name = "FILE")]
    dict: PathBuf,

    /// Print the resolution of a single WORD{tag,...} token as JSON.
    #[arg(short, long, value_name = "TOKEN", conflicts_with = "sentences")]
    explain: Option<String>,

    /// Log compilation details (repeat for per-line traces).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Sentences to render. Read from stdin, one per line, when omitted.
    sentences: Vec<String>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file = File::open(&cli.dict)
        .with_context(|| format!("cannot open dictionary {:?}", cli.dict))?;
    let morpher = Morpher::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot compile dictionary {:?}", cli.dict))?;

    let stats = morpher.dictionary().stats();
    tracing::info!(
        normal_forms = morpher.dictionary().table().len(),
        forms = stats.forms,
        tags = morpher.dictionary().registry().len(),
        "dictionary loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(token) = &cli.explain {
        let report = morpher.explain_token(token);
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    if cli.sentences.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("cannot read sentence from stdin")?;
            writeln!(out, "{}", morpher.morph(&line))?;
        }
    } else {
        for sentence in &cli.sentences {
            writeln!(out, "{}", morpher.morph(sentence))?;
        }
    }

    Ok(())
}
