use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_rules::cli::{self, CliOptions};

fn main() -> ExitCode {
    // Library logging goes through `log`; the subscriber picks it up.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = CliOptions::parse();
    let board = match options.initial_board() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Invalid FEN: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match cli::run_game(board, &options, stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
