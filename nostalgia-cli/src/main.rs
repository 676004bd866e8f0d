mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::{Cli, Command};
use cli_modes::{count_mode, repair_mode, save_mode, view_mode};
use nostalgia_core::{Config, Nostalgia};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("nostalgia: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::new();

    let mut config = Config::load()?;
    if let Some(data_file) = &cli.data_file {
        config.data_file = data_file.clone();
    }
    tracing::debug!(?config, "configuration resolved");

    let nostalgia = Nostalgia::with_config(config)?;
    let renderer = Renderer::new(RenderOptions {
        date_format: nostalgia.config.date_format.clone(),
        use_color: cli.color.use_color(),
    });

    if cli.path {
        renderer.print_info(&format!("{}", nostalgia.store.path().display()));
        return Ok(());
    }

    let Some(command) = &cli.command else {
        anyhow::bail!("no command given; try `nostalgia --help`");
    };

    nostalgia.unlock(cli.password.as_deref())?;

    match command {
        Command::Save(args) => save_mode(args, &renderer, &nostalgia),
        Command::View(args) => view_mode(args, &renderer, &nostalgia),
        Command::Count => count_mode(&renderer, &nostalgia),
        Command::Repair => repair_mode(&renderer, &nostalgia),
    }
}
