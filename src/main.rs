//! Table Dynamics Tracker (TDT) - CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use tdt::cli::Cli;
use tdt::export;
use tdt::files::collect_inputs;
use tdt::hand_history::parser::HandParser;
use tdt::ingest::{ingest_file, IngestSummary};
use tdt::stats::WindowEngine;
use tdt::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    tdt::logging::init_logging(cli.quiet);

    let config = load_config(&cli)?;
    run(&cli, &config)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    debug!(?config, "Effective configuration");
    Ok(config)
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let files = collect_inputs(&cli.hh)?;
    info!("Found {} hand history file(s)", files.len());

    let parser = HandParser::new(config.parser.street_tracking);
    let mut engine = WindowEngine::from_config(config);
    let mut total = IngestSummary::default();

    for file in &files {
        let summary = ingest_file(&mut engine, &parser, file)?;
        total.merge(summary);
    }
    info!(
        hands = total.hands,
        discarded = total.discarded,
        players = engine.player_count(),
        "Finished ingesting"
    );

    let Some(latest) = engine.latest() else {
        println!("No hands processed");
        return Ok(());
    };

    println!();
    println!(
        "{}",
        export::render_heading(config.window.hands, config.window.accumulation)
    );
    print!(
        "{}",
        export::render_table(&latest.players, cli.player.as_deref())
    );

    if let Some(path) = &cli.export_csv {
        export::write_csv(engine.history(), path)
            .with_context(|| format!("CSV export to {:?} failed", path))?;
        println!("Exported to {}", path.display());
    }
    if let Some(path) = &cli.export_json {
        export::write_json(engine.history(), path)
            .with_context(|| format!("JSON export to {:?} failed", path))?;
        println!("Exported to {}", path.display());
    }

    Ok(())
}
