use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dirtree::cli::Cli;
use dirtree::fs::RealFileSystem;
use dirtree::output::{resolve_output_path, write_report};
use dirtree::{explore_dir_tree, resolve_root};

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG controls verbosity; logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let dir_path = resolve_root(&RealFileSystem, &cli.directory).await?;
    let output_path = resolve_output_path(&dir_path, cli.output.as_deref())?;

    let tree = explore_dir_tree(&RealFileSystem, &dir_path, &cli.explore_options()).await?;
    write_report(&output_path, &dir_path, &tree)?;

    info!(
        entries = tree.len(),
        output = %output_path.display(),
        "wrote directory tree"
    );
    Ok(())
}
