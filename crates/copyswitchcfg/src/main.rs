mod cli;
mod commands;
mod config;
mod error;

use std::io::Write;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use swcfg_api::DashboardClient;
use swcfg_core::{Console, Mode, resolve_networks, resolve_organization};

use crate::cli::Cli;
use crate::error::{CliError, exit_code};

#[tokio::main]
async fn main() {
    let mut console = Console::stdout();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == clap::error::ErrorKind::DisplayVersion => {
            let _ = err.print();
            std::process::exit(exit_code::SUCCESS);
        }
        Err(_) => {
            print_help(&mut console);
            std::process::exit(exit_code::USAGE);
        }
    };

    if cli.help {
        print_help(&mut console);
        std::process::exit(exit_code::SUCCESS);
    }

    init_tracing(cli.verbose);

    if let Err(err) = run(&cli, &mut console).await {
        let code = err.exit_code();
        if err.shows_usage() {
            print_help(&mut console);
        }
        console.error(&err);
        if cli.verbose > 0 {
            eprintln!("{:?}", miette::Report::new(err));
        }
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_help<W: Write>(console: &mut Console<W>) {
    let help = Cli::command().render_help().to_string();
    console.block(&help);
}

async fn run<W: Write>(cli: &Cli, console: &mut Console<W>) -> Result<(), CliError> {
    let settings = config::resolve(cli)?;
    let migration = &settings.migration;

    let client = DashboardClient::from_api_key(
        settings.base_url.as_str(),
        &migration.api_key,
        &settings.transport,
    )?;

    let org = resolve_organization(&client, &migration.org_name).await?;
    let networks = resolve_networks(&client, &org).await?;

    tracing::debug!(mode = %migration.mode, file = %migration.file.display(), "dispatching");
    match migration.mode {
        Mode::Export => commands::export::handle(&client, &networks, &migration.file, console).await,
        Mode::Import => commands::import::handle(&client, &networks, &migration.file, console).await,
    }
}
