use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Suggest and preview cell templates for tabular data.
///
/// Reads a JSON dataset (`{"fields": [...], "rows": [...]}`), classifies
/// its fields and renders rows through the suggested templates.
#[derive(Parser, Debug)]
#[command(name = "cellsense", about = "Suggest and preview cell templates for tabular data")]
#[command(version)]
pub struct CliArgs {
    /// Path to config file (default: ~/.config/cellsense/config.toml)
    #[arg(long, global = true, env = "CELLSENSE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify every field and print suggestions ranked by confidence
    Classify {
        /// Dataset file (JSON)
        dataset: PathBuf,

        /// Print suggestions as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render rows of one field through a template
    Render {
        /// Dataset file (JSON)
        dataset: PathBuf,

        /// Field to render
        #[arg(long)]
        field: String,

        /// Template kind; defaults to the field's suggestion
        #[arg(long)]
        kind: Option<String>,

        /// Number of rows to render
        #[arg(long, default_value = "5")]
        rows: usize,

        /// Print node trees as JSON instead of markup
        #[arg(long)]
        json: bool,
    },
}
