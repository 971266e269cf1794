//! Random self-play harness for exercising the full rule pipeline.
//!
//! Plays uniformly random legal moves from the starting position until the
//! game ends or a ply cap is reached. No search or evaluation is involved;
//! this exists for soak-style testing, demos, and benchmarks.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board::piece::{Color, PieceKind};
use crate::board::square::Square;
use crate::game::game_state::GameState;
use crate::game::move_report::TerminalState;

#[derive(Debug, Clone, Copy)]
pub struct PlayoutConfig {
    /// Hard cap on total half-moves before the playout is abandoned.
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig { max_plies: 300 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    /// The ply cap was reached with the game still in progress.
    Unfinished,
}

impl PlayoutOutcome {
    pub fn describe(&self) -> &'static str {
        match self {
            PlayoutOutcome::WhiteWinCheckmate => "White Wins by Checkmate",
            PlayoutOutcome::BlackWinCheckmate => "Black Wins by Checkmate",
            PlayoutOutcome::DrawStalemate => "Draw by Stalemate",
            PlayoutOutcome::Unfinished => "Unfinished (ply cap reached)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutRecord {
    pub outcome: PlayoutOutcome,
    pub plies: u16,
    pub final_state: GameState,
}

/// Every (from, to) pair the side to move can legally play.
pub fn collect_legal_moves(game: &GameState) -> Vec<(Square, Square)> {
    game.board
        .pieces_of(game.side_to_move)
        .flat_map(|piece| {
            let from = piece.square;
            game.legal_moves_for(from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Play one game of uniformly random legal moves.
pub fn random_playout<R: Rng>(rng: &mut R, config: &PlayoutConfig) -> PlayoutRecord {
    let mut game = GameState::new_game();
    let mut plies = 0u16;

    while plies < config.max_plies && game.terminal.is_none() {
        let moves = collect_legal_moves(&game);
        let &(from, to) = moves
            .choose(rng)
            .expect("a game still in progress has at least one legal move");

        // The random player always queens.
        let promotion = promotion_choice(&game, from, to);
        game.attempt_move(from, to, promotion)
            .expect("a collected legal move must apply cleanly");
        plies += 1;
    }

    let outcome = match game.terminal {
        Some(TerminalState::Checkmate(Color::White)) => PlayoutOutcome::WhiteWinCheckmate,
        Some(TerminalState::Checkmate(Color::Black)) => PlayoutOutcome::BlackWinCheckmate,
        Some(TerminalState::Stalemate) => PlayoutOutcome::DrawStalemate,
        None => PlayoutOutcome::Unfinished,
    };

    PlayoutRecord {
        outcome,
        plies,
        final_state: game,
    }
}

fn promotion_choice(game: &GameState, from: Square, to: Square) -> Option<PieceKind> {
    let piece = game.board.piece_at(from)?;
    if piece.kind == PieceKind::Pawn && to.rank == piece.color.promotion_rank() {
        Some(PieceKind::Queen)
    } else {
        None
    }
}
