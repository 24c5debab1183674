mod auth;
mod cli;
mod logging;
mod output;
mod picker;

use clap::{Parser, Subcommand};
use cxmenu_core::{CancelToken, config};
use output::{MAX_VERBOSITY, Printer};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(version, about = "Pick a Codex auth profile and install it as ~/.codex/auth.json")]
struct Cli {
    /// Override path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Folder containing Codex auth profiles (overrides CODEX_AUTHS_PATH)
    #[arg(short, long, value_name = "PATH", global = true)]
    auths_path: Option<PathBuf>,

    /// 0 = silent, 1 = JSON result, 2 = environment dump plus JSON
    #[arg(
        short,
        long,
        default_value_t = 1,
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_VERBOSITY))
    )]
    verbosity: u8,

    /// Log level written to the log file
    #[arg(long, default_value_t = logging::DEFAULT_LOG_LEVEL, global = true)]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List auth profiles, least recently used first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Install a profile by file name without opening the picker
    Use { name: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_errors = matches!(cli.command, Some(Commands::List { json: true }));

    if let Err(error) = logging::setup_logging(cli.log_level) {
        // Logging is best effort; the command still runs without it
        eprintln!("Warning: {error:#}");
    }

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            log::error!("config load failed: {error:#}");
            let cli_error = cli::CliError::system(format!("{error:#}"));
            cli::print_error(&cli_error, json_errors);
            return ExitCode::from(2);
        }
    };

    let printer = Printer::new(cli.verbosity);
    let result = cli::resolve_auths_root(cli.auths_path.as_deref(), &config).and_then(|root| {
        match cli.command {
            Some(Commands::List { json }) => cli::cmd_list(&root, json),
            Some(Commands::Use { name }) => cli::cmd_use(&root, &name, printer),
            None => {
                let session = CancelToken::new();
                install_signal_handler(&session);
                cli::cmd_pick(&config, root, printer, session)
            }
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{}", error.message());
            cli::print_error(&error, json_errors);
            ExitCode::from(error.code())
        }
    }
}

/// SIGINT/SIGTERM cancel the menu session instead of killing the process,
/// so the terminal is restored before exit.
fn install_signal_handler(session: &CancelToken) {
    let session = session.clone();
    if let Err(e) = ctrlc::set_handler(move || session.cancel()) {
        log::warn!("could not install signal handler: {e}");
    }
}
