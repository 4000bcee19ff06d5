mod cli;
mod commands;
mod config;
mod dataset;
mod terminal;

use anyhow::{Context, Result};
use cellsense_core::load_dotenv;
use clap::Parser;
use tracing::info;

use crate::cli::{CliArgs, Command};
use crate::config::CliConfig;
use crate::dataset::Dataset;
use crate::terminal::Terminal;

fn main() -> Result<()> {
    load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let terminal = Terminal::new();

    let config = CliConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .template_config()
        .install()
        .context("failed to install template configuration")?;
    config.log_summary();

    match args.command {
        Command::Classify { dataset, json } => {
            let data = Dataset::load(&dataset)?;
            let ranked = commands::suggestions(&data, config);
            info!(fields = ranked.len(), "classification finished");
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                terminal.print_suggestions(&ranked)?;
            }
        }
        Command::Render {
            dataset,
            field,
            kind,
            rows,
            json,
        } => {
            let data = Dataset::load(&dataset)?;
            let rendered = match commands::render_field(&data, &field, kind.as_deref(), rows, config)
            {
                Ok(r) => r,
                Err(e) => {
                    terminal.print_error(&format!("{:#}", e))?;
                    std::process::exit(2);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&rendered.nodes)?);
            } else if rendered.nodes.is_empty() {
                terminal.print_info("dataset has no rows")?;
            } else {
                terminal.print_render_header(&rendered.field, rendered.kind)?;
                for (i, node) in rendered.nodes.iter().enumerate() {
                    terminal.print_row(i, &node.to_markup())?;
                }
            }
        }
    }

    Ok(())
}
