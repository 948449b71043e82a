use clap::Parser;
use tracing_subscriber::EnvFilter;

use tradeflow::config::ServerConfig;
use tradeflow::{api, engine, schema, validate};

mod cli;
mod example;
mod list_nodes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tradeflow=info,warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Serve {
            host,
            port,
            store,
            data_file,
            static_dir,
        } => {
            api::serve(ServerConfig {
                host,
                port,
                store,
                data_file,
                static_dir,
            })
            .await
        }
        cli::Command::Walk { file, json } => engine::run(&file, json),
        cli::Command::Validate { file } => validate::run(&file),
        cli::Command::Schema => schema::run(),
        cli::Command::Example => example::run(),
        cli::Command::ListNodes => list_nodes::run(),
    }
}
