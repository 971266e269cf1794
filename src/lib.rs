//! Crate root module declarations for the Parlor Chess rule engine.
//!
//! This file exposes all top-level subsystems (board model, move generation,
//! game state machine, and utility helpers) so binaries, tests, and external
//! presentation shells can import stable module paths.

pub mod chess_errors;

pub mod board {
    pub mod board;
    pub mod piece;
    pub mod square;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod castling;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod legal_filter;
    pub mod pawn_moves;
    pub mod pseudo_legal;
    pub mod sliding_moves;
}

pub mod game {
    pub mod game_state;
    pub mod move_report;
}

pub mod utils {
    pub mod algebraic;
    pub mod match_harness;
    pub mod render_board;
}
