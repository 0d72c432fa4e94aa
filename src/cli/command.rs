use crate::board::Promotion;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2 e4`, `e2e4`, or `e7e8q` with a promotion letter
    Move {
        from: String,
        to: String,
        promotion: Option<Promotion>,
    },
    /// `moves e2`: list the legal destinations of a piece
    Moves(String),
    Board,
    Fen,
    Resign,
    Quit,
    Help,
    Unknown(String),
}

fn promotion_from_char(c: char) -> Option<Promotion> {
    match c.to_ascii_lowercase() {
        'q' => Some(Promotion::Queen),
        'r' => Some(Promotion::Rook),
        'b' => Some(Promotion::Bishop),
        'n' => Some(Promotion::Knight),
        _ => None,
    }
}

/// Split a compact move such as `e2e4` or `e7e8q`.
fn parse_compact_move(token: &str) -> Option<Command> {
    if !token.is_ascii() {
        return None;
    }
    let promotion = match token.len() {
        4 => None,
        5 => Some(promotion_from_char(token.chars().last()?)?),
        _ => return None,
    };
    Some(Command::Move {
        from: token[0..2].to_string(),
        to: token[2..4].to_string(),
        promotion,
    })
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts.as_slice() {
        ["board"] => Command::Board,
        ["fen"] => Command::Fen,
        ["resign"] => Command::Resign,
        ["quit" | "exit"] => Command::Quit,
        ["help" | "?"] => Command::Help,
        ["moves", square] => Command::Moves((*square).to_string()),
        [from, to] => Command::Move {
            from: (*from).to_string(),
            to: (*to).to_string(),
            promotion: None,
        },
        [token] => {
            parse_compact_move(token).unwrap_or_else(|| Command::Unknown(trimmed.to_string()))
        }
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
