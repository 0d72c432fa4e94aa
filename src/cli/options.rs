use clap::Parser;

use crate::board::{Board, FenError};

/// Two players at one terminal, taking turns.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "chess_rules", version, about)]
pub struct CliOptions {
    /// Draw pieces with FEN letters instead of Unicode symbols
    #[arg(long)]
    pub ascii: bool,

    /// Start from this position instead of the initial one
    #[arg(long, value_name = "FEN")]
    pub fen: Option<String>,

    /// Print the board from Black's side
    #[arg(long)]
    pub flip: bool,
}

impl CliOptions {
    /// The board the game starts from.
    pub fn initial_board(&self) -> Result<Board, FenError> {
        match &self.fen {
            Some(fen) => Board::try_from_fen(fen),
            None => Ok(Board::new()),
        }
    }
}
