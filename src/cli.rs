use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tradeflow::config::StoreKind;

/// Trading workflow backend: store editor graphs and preview their
/// execution path.
#[derive(Parser)]
#[command(name = "tradeflow", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Interface to bind
        #[arg(long, env = "TRADEFLOW_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "TRADEFLOW_PORT", default_value = "4000")]
        port: u16,

        /// Storage backend
        #[arg(long, env = "TRADEFLOW_STORE", value_enum, default_value = "json")]
        store: StoreKind,

        /// Data file (default: workflows.json, or workflows.db for sqlite)
        #[arg(long, env = "TRADEFLOW_DATA_FILE")]
        data_file: Option<PathBuf>,

        /// Directory of a built editor frontend to serve
        #[arg(long, env = "TRADEFLOW_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },

    /// Print the execution path of a workflow JSON file
    Walk {
        /// Path to the workflow JSON file
        file: PathBuf,

        /// Print the result as JSON instead of a numbered list
        #[arg(long)]
        json: bool,
    },

    /// Validate a workflow JSON file
    Validate {
        /// Path to the workflow JSON file
        file: PathBuf,
    },

    /// Output the JSON schema for workflow definitions
    Schema,

    /// Output the default workflow JSON to stdout
    Example,

    /// List all node kinds and their parameters
    ListNodes,
}
