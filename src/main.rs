//! Entrypoint for `headline-desk` — the terminal satirical-headline
//! generator. Wires logging, content loading, and the TUI together.

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use headline_engine::core::generator::HeadlineGenerator;
use headline_engine::tui::DeskApp;

fn print_usage() {
    println!("Usage: headline-desk [--content <pack.ron>]... [--seed <n>] [--log <file>]");
    println!();
    println!("Options:");
    println!("  --content <pack.ron>  merge a RON content pack onto the builtin pools");
    println!("                        (may be given more than once)");
    println!("  --seed <n>            seed the RNG for reproducible headlines");
    println!("  --log <file>          log file path (default: headline-desk.log)");
    println!("  --help, -h            show this help");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut packs: Vec<String> = Vec::new();
    let mut seed: Option<u64> = None;
    let mut log_path = "headline-desk.log".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--content" if i + 1 < args.len() => {
                i += 1;
                packs.push(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = Some(args[i].parse().context("--seed expects an integer")?);
            }
            "--log" if i + 1 < args.len() => {
                i += 1;
                log_path = args[i].clone();
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => bail!("unknown argument: {other} (try --help)"),
        }
        i += 1;
    }

    // Logs go to a file: the TUI owns the terminal.
    let path = Path::new(&log_path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = path
        .file_name()
        .with_context(|| format!("--log expects a file path, got {log_path:?}"))?;
    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!(packs = packs.len(), seed = ?seed, "starting headline desk");

    let mut builder = HeadlineGenerator::builder();
    for pack in &packs {
        builder = builder.content_pack(pack);
    }
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let generator = builder
        .build()
        .context("failed to assemble content pools")?;

    let mut app = DeskApp::new(generator);
    app.run().await.context("desk loop failed")?;

    // Terminal is restored; leave the session tally behind.
    println!("{}", app.stats_line());
    Ok(())
}
