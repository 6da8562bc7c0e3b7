//! PGN movetext replay and writing.
//!
//! Only the movetext matters here: tag pairs, comments and variations are
//! stripped, move numbers and results are dropped, and every remaining token
//! is read as SAN against the current position.

use log::debug;

use super::error::MoveError;
use super::{Board, Move};

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Outcome of replaying PGN movetext.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PgnReplay {
    /// Moves applied, in order
    pub moves: Vec<Move>,
    /// SAN of each applied move as rendered before it was played
    pub sans: Vec<String>,
    /// Tokens that did not match any legal move and were passed over
    pub skipped: Vec<String>,
}

/// Remove tag pairs, brace and semicolon comments, and parenthesised variations.
fn strip_non_movetext(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    let mut in_brace = false;
    let mut in_line_comment = false;
    let mut variation_depth = 0usize;

    for c in text.chars() {
        if in_line_comment {
            if c == '\n' {
                in_line_comment = false;
                out.push(' ');
            }
            continue;
        }
        if in_brace {
            in_brace = c != '}';
            continue;
        }
        if in_tag {
            in_tag = c != ']';
            continue;
        }
        match c {
            '{' => in_brace = true,
            '[' if variation_depth == 0 => in_tag = true,
            ';' => in_line_comment = true,
            '(' => variation_depth += 1,
            ')' => variation_depth = variation_depth.saturating_sub(1),
            _ if variation_depth > 0 => {}
            _ => {
                out.push(c);
                continue;
            }
        }
        out.push(' ');
    }
    out
}

/// Reduce a raw token to candidate SAN, or `None` if it carries no move.
fn san_candidate(token: &str) -> Option<&str> {
    if RESULT_TOKENS.contains(&token) || token.starts_with('$') {
        return None;
    }
    // "12." and "12..." are numbers; "1.e4" fuses a number onto a move
    let token = match token.rfind('.') {
        Some(idx) => &token[idx + 1..],
        None => token,
    };
    let token = token.trim_end_matches(['!', '?']);
    (!token.is_empty()).then_some(token)
}

impl Board {
    /// Reset to the standard starting position and replay PGN movetext.
    ///
    /// Tokens that match no legal move are skipped and reported in
    /// [`PgnReplay::skipped`]; the replay never aborts.
    pub fn load_pgn(&mut self, pgn: &str) -> PgnReplay {
        *self = Board::new();
        self.replay_movetext(pgn)
    }

    /// Replay PGN movetext from the current position.
    pub fn replay_movetext(&mut self, pgn: &str) -> PgnReplay {
        let mut replay = PgnReplay::default();
        let movetext = strip_non_movetext(pgn);

        for token in movetext.split_whitespace() {
            let Some(san) = san_candidate(token) else {
                continue;
            };
            match self.parse_san(san) {
                Ok(mv) => {
                    let rendered = self.move_to_san(&mv);
                    if self.apply_move(mv) {
                        replay.moves.push(mv);
                        replay.sans.push(rendered);
                    } else {
                        replay.skipped.push(token.to_string());
                    }
                }
                Err(err) => {
                    debug!("skipping PGN token '{token}': {err}");
                    replay.skipped.push(token.to_string());
                }
            }
        }
        replay
    }

    /// Numbered SAN movetext for `moves` played from this position.
    ///
    /// A sequence starting with black to move opens with "N...". Fails on the
    /// first move that is not legal where it is played.
    pub fn movetext(&self, moves: &[Move]) -> Result<String, MoveError> {
        let mut board = self.detached();
        let mut parts: Vec<String> = Vec::with_capacity(moves.len() * 3 / 2);

        for (ply, &mv) in moves.iter().enumerate() {
            if board.white_to_move() {
                parts.push(format!("{}.", board.fullmove_number()));
            } else if ply == 0 {
                parts.push(format!("{}...", board.fullmove_number()));
            }
            let san = board.move_to_san(&mv);
            board.play(mv)?;
            parts.push(san);
        }
        Ok(parts.join(" "))
    }
}
