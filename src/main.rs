use anyhow::{Context, Result};
use assist::manager::Manager;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    root_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Average,

    Inspect,

    Clean,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mgr = Manager::new(&args.root_dir).context("failed to construct mgr")?;
    log::info!("using root dir {:?}", mgr.root_dir());

    match args.command {
        Command::Average => mgr.save_averages()?,
        Command::Inspect => mgr.inspect_series()?,
        Command::Clean => mgr.clean_results()?,
    }

    Ok(())
}
