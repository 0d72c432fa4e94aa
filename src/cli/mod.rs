//! Terminal front end: two players share one input stream and take turns.
//!
//! The loop is generic over `BufRead`/`Write` so it can be driven from
//! stdin/stdout or from in-memory buffers.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::board::{Board, Color, GameStatus, MoveError, Promotion, Square};

pub mod command;
pub mod options;
pub mod print;

pub use command::{parse_command, Command};
pub use options::CliOptions;

const HELP: &str = "\
Commands:
  e2 e4 | e2e4    move a piece (append q/r/b/n to pick a promotion, e.g. e7e8n)
  moves <square>  list the legal destinations of a piece
  board           print the board
  fen             print the position in FEN
  resign          give up the game
  quit            leave without a result
  help            show this text";

/// How a game loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Checkmate { winner: Color },
    Stalemate,
    KingCaptured { winner: Color },
    Resigned { winner: Color },
    Quit,
    /// Input ran out before the game finished
    EndOfInput,
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Write part of the promotion prompt. A broken output does not stop the
/// prompt from reading a choice.
fn prompt<W: Write>(output: &mut W, args: fmt::Arguments<'_>) {
    if let Err(err) = output.write_fmt(args).and_then(|()| output.flush()) {
        warn!("writing promotion prompt failed: {err}");
    }
}

/// Ask for a promotion piece until a number 1-4 is entered. Falls back to a
/// queen when the input ends or fails.
fn prompt_promotion<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    color: Color,
    square: Square,
) -> Promotion {
    prompt(
        output,
        format_args!("{color} pawn promotes on {square}. Choose promotion piece:\n"),
    );
    for (idx, promotion) in Promotion::ALL.iter().enumerate() {
        prompt(output, format_args!("{}. {}\n", idx + 1, promotion.kind()));
    }

    loop {
        prompt(output, format_args!("Enter number (1-4): "));
        let line = match read_line(input) {
            Ok(Some(line)) => line,
            Ok(None) => return Promotion::Queen,
            Err(err) => {
                warn!("reading promotion choice failed: {err}");
                return Promotion::Queen;
            }
        };
        match line.trim().parse::<usize>() {
            Ok(choice) => match Promotion::from_menu_index(choice) {
                Some(promotion) => return promotion,
                None => prompt(output, format_args!("Please enter valid number (1-4)\n")),
            },
            Err(_) => prompt(output, format_args!("Please enter valid number\n")),
        }
    }
}

/// Report a finished game, or `None` while it goes on.
fn announce<W: Write>(board: &Board, output: &mut W) -> io::Result<Option<GameEnd>> {
    let end = match board.status() {
        GameStatus::Checkmate { winner } => {
            writeln!(output, "Checkmate! {winner} wins!")?;
            GameEnd::Checkmate { winner }
        }
        GameStatus::Stalemate => {
            writeln!(output, "Stalemate!")?;
            GameEnd::Stalemate
        }
        GameStatus::KingCaptured { winner } => {
            writeln!(output, "Game Over! {winner} wins!")?;
            GameEnd::KingCaptured { winner }
        }
        GameStatus::Check => {
            writeln!(output, "{}'s king is in check!", board.current_turn())?;
            return Ok(None);
        }
        GameStatus::Ongoing => return Ok(None),
    };
    Ok(Some(end))
}

/// Play a game from `board` until it ends, the input runs out, or a player
/// quits or resigns.
pub fn run_game<R, W>(
    mut board: Board,
    options: &CliOptions,
    mut input: R,
    output: &mut W,
) -> io::Result<GameEnd>
where
    R: BufRead,
    W: Write,
{
    info!("starting game from {}", board.to_fen());
    write!(output, "{}", print::render_board(&board, options.ascii, options.flip))?;

    let end = loop {
        if let Some(end) = announce(&board, output)? {
            break end;
        }

        let side = board.current_turn();
        write!(output, "\n{side} to move> ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break GameEnd::EndOfInput;
        };
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Move {
                from,
                to,
                promotion,
            } => {
                let result = match promotion {
                    Some(fixed) => {
                        board.try_make_move(&from, &to, &mut |_: Color, _: Square| fixed)
                    }
                    None => board.try_make_move(&from, &to, &mut |color: Color, square: Square| {
                        prompt_promotion(&mut input, output, color, square)
                    }),
                };
                match result {
                    Ok(_) => {
                        writeln!(output, "Move successful!")?;
                        write!(
                            output,
                            "{}",
                            print::render_board(&board, options.ascii, options.flip)
                        )?;
                    }
                    Err(err @ MoveError::GameOver { .. }) => {
                        writeln!(output, "{err}")?;
                    }
                    Err(err) => {
                        writeln!(output, "Invalid move! {err}")?;
                    }
                }
            }
            Command::Moves(square) => match square.parse::<Square>() {
                Ok(sq) => {
                    let moves = board.get_valid_moves(sq);
                    writeln!(output, "{sq}: {}", print::format_squares(moves))?;
                }
                Err(err) => writeln!(output, "{err}")?,
            },
            Command::Board => {
                write!(
                    output,
                    "{}",
                    print::render_board(&board, options.ascii, options.flip)
                )?;
            }
            Command::Fen => writeln!(output, "{}", board.to_fen())?,
            Command::Resign => {
                let winner = side.opponent();
                writeln!(output, "{side} resigns! {winner} wins!")?;
                break GameEnd::Resigned { winner };
            }
            Command::Quit => break GameEnd::Quit,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Unknown(text) => {
                writeln!(output, "Unknown command '{text}', type 'help' for a list")?;
            }
        }
    };

    info!("game ended after {} moves: {end:?}", board.move_count());
    Ok(end)
}
