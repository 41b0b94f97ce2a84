use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use medextract::config;

/// Extract structured medical facts from clinical text and print them as JSON.
#[derive(Parser)]
#[command(name = config::APP_NAME, version, about)]
struct Cli {
    /// Clinical text file to read; stdin when omitted.
    input: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    if text.len() > config::INPUT_SIZE_ADVISORY_BYTES {
        tracing::warn!(
            bytes = text.len(),
            "input exceeds the size advisory; bound input upstream for predictable latency"
        );
    }

    let record = medextract::extract_all_medical_info(&text);
    if record.is_empty() {
        tracing::info!("no medical facts found in input");
    }

    let json = if cli.compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    println!("{json}");

    Ok(())
}
