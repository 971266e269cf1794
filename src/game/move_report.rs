//! Move classification and terminal results reported to the caller.

use crate::board::piece::Color;

/// How an applied move is classified for the presentation shell (sound
/// selection, highlights). Mutually exclusive; a capturing promotion counts
/// as `Promotion`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveClass {
    Quiet,
    Capture,
    Castle,
    Promotion,
}

/// A decided game. `Checkmate` carries the winning color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TerminalState {
    Checkmate(Color),
    Stalemate,
}

impl TerminalState {
    /// Human-readable result string for the shell's end screen.
    pub fn describe(&self) -> String {
        match self {
            TerminalState::Checkmate(Color::White) => "White Wins by Checkmate".to_owned(),
            TerminalState::Checkmate(Color::Black) => "Black Wins by Checkmate".to_owned(),
            TerminalState::Stalemate => "Draw by Stalemate".to_owned(),
        }
    }
}

/// Outcome of a successfully applied move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub classification: MoveClass,
    /// Set when this move ended the game.
    pub terminal: Option<TerminalState>,
}
