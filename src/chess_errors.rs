//! Errors used throughout the rule engine.
//!
//! This module defines the canonical error type returned by game logic and
//! parsing utilities. The enum `ChessErrors` is used as the single error type
//! across the crate to simplify propagation and matching. Each variant
//! carries contextual information where appropriate to aid diagnostics and
//! user-facing error messages.
//!
//! Usage guidelines:
//! - Engine functions return `Result<..., ChessErrors>` for recoverable or
//!   expected failure modes (illegal moves, bad input).
//! - A rejected move never mutates game state; callers re-prompt.
//! - Out-of-range board coordinates are caller contract violations handled
//!   with assertions, not error variants.

use std::fmt;

use crate::board::piece::PieceKind;
use crate::board::square::Square;

/// Unified error type for the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The requested destination is not in the moving piece's legal set.
    ///
    /// Payload: (origin, requested destination).
    IllegalMove(Square, Square),

    /// A move was requested from a square that holds no piece.
    EmptySourceSquare(Square),

    /// A move was requested for a piece belonging to the side not on move.
    NotThisSidesTurn(Square),

    /// A pawn reached its promotion rank but the caller supplied no
    /// replacement kind. The move is rejected; the caller must retry with a
    /// concrete choice.
    PromotionChoiceRequired(Square),

    /// The supplied promotion kind is not one of queen/rook/bishop/knight.
    InvalidPromotionKind(PieceKind),

    /// A move was attempted after the game already ended in checkmate or
    /// stalemate.
    GameAlreadyDecided,

    /// An algebraic square string (for example `"e4"`) failed to parse.
    InvalidAlgebraicSquare(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::IllegalMove(from, to) => write!(
                f,
                "illegal move from ({}, {}) to ({}, {})",
                from.file, from.rank, to.file, to.rank
            ),
            ChessErrors::EmptySourceSquare(square) => {
                write!(f, "no piece on square ({}, {})", square.file, square.rank)
            }
            ChessErrors::NotThisSidesTurn(square) => write!(
                f,
                "piece on ({}, {}) does not belong to the side to move",
                square.file, square.rank
            ),
            ChessErrors::PromotionChoiceRequired(square) => write!(
                f,
                "pawn arriving on ({}, {}) needs a promotion choice",
                square.file, square.rank
            ),
            ChessErrors::InvalidPromotionKind(kind) => {
                write!(f, "cannot promote a pawn to {kind:?}")
            }
            ChessErrors::GameAlreadyDecided => write!(f, "the game has already ended"),
            ChessErrors::InvalidAlgebraicSquare(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
        }
    }
}

impl std::error::Error for ChessErrors {}
