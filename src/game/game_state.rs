//! Turn-based game state machine.
//!
//! `GameState` exclusively owns the board; the presentation shell never
//! mutates it directly. All mutation flows through `attempt_move`, which
//! keeps `has_moved` flags and terminal evaluation consistent. A rejected
//! move is guaranteed to leave the state untouched.

use crate::board::board::Board;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;
use crate::chess_errors::ChessErrors;
use crate::game::move_report::{MoveClass, MoveReport, TerminalState};
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::castling::{castling_moves, rook_castling_vector};
use crate::move_generation::legal_filter::filter_self_check_moves;
use crate::move_generation::pseudo_legal::pseudo_legal_moves;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// `Some` once the game has ended; no further moves are accepted.
    pub terminal: Option<TerminalState>,
}

impl GameState {
    /// A fresh game with the standard starting placement, White to move.
    pub fn new_game() -> Self {
        GameState {
            board: Board::standard(),
            side_to_move: Color::White,
            terminal: None,
        }
    }

    /// Discards the current game and starts over.
    pub fn reset(&mut self) {
        *self = GameState::new_game();
    }

    /// Pure check query for UI highlighting.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    /// Legal destinations for the piece on `square`, castling included for
    /// the king. Empty when the square is empty, holds a piece of the side
    /// not on move, or the game is over.
    pub fn legal_moves_for(&self, square: Square) -> Vec<Square> {
        if self.terminal.is_some() {
            return Vec::new();
        }
        let Some(piece) = self.board.piece_at(square) else {
            return Vec::new();
        };
        if piece.color != self.side_to_move {
            return Vec::new();
        }
        Self::legal_destinations(&self.board, piece)
    }

    /// Validates and applies one move.
    ///
    /// On success the side to move has flipped and the report carries the
    /// move classification plus any terminal result. On error nothing
    /// changed; the caller re-prompts (supplying a promotion kind when the
    /// error asks for one).
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveReport, ChessErrors> {
        if self.terminal.is_some() {
            return Err(ChessErrors::GameAlreadyDecided);
        }
        let piece = *self
            .board
            .piece_at(from)
            .ok_or(ChessErrors::EmptySourceSquare(from))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::NotThisSidesTurn(from));
        }

        // Castling destinations were already king-safety checked during
        // eligibility; regular destinations go through simulation.
        let is_castle = piece.kind == PieceKind::King && castling_moves(&self.board, &piece).contains(&to);
        if !is_castle {
            let pseudo = pseudo_legal_moves(&self.board, &piece);
            let legal = filter_self_check_moves(&self.board, &piece, pseudo);
            if !legal.contains(&to) {
                return Err(ChessErrors::IllegalMove(from, to));
            }
        }

        // A promotion must have a concrete replacement kind before any slot
        // is touched; rejecting here keeps the rejected-move guarantee.
        let promotion_kind =
            if piece.kind == PieceKind::Pawn && to.rank == piece.color.promotion_rank() {
                Some(Self::validated_promotion_kind(to, promotion)?)
            } else {
                None
            };

        let classification = if is_castle {
            self.board.move_piece(from, to);
            let (rook_from, rook_to) = rook_castling_vector(to);
            self.board.move_piece(rook_from, rook_to);
            if let Some(rook) = self.board.piece_at_mut(rook_to) {
                rook.has_moved = true;
            }
            MoveClass::Castle
        } else {
            let captured = self.board.move_piece(from, to);
            if let Some(kind) = promotion_kind {
                // Replace the pawn in place with the chosen piece.
                let mut promoted = Piece::new(kind, piece.color, to);
                promoted.has_moved = true;
                self.board.place(promoted);
                MoveClass::Promotion
            } else if captured.is_some() {
                MoveClass::Capture
            } else {
                MoveClass::Quiet
            }
        };

        if let Some(moved) = self.board.piece_at_mut(to) {
            moved.has_moved = true;
        }
        self.side_to_move = self.side_to_move.opposite();

        let defender = self.side_to_move;
        self.terminal = if self.side_has_any_legal_move(defender) {
            None
        } else if is_king_in_check(&self.board, defender) {
            Some(TerminalState::Checkmate(defender.opposite()))
        } else {
            Some(TerminalState::Stalemate)
        };

        Ok(MoveReport {
            classification,
            terminal: self.terminal,
        })
    }

    fn legal_destinations(board: &Board, piece: &Piece) -> Vec<Square> {
        let pseudo = pseudo_legal_moves(board, piece);
        let mut legal = filter_self_check_moves(board, piece, pseudo);
        if piece.kind == PieceKind::King {
            legal.extend(castling_moves(board, piece));
        }
        legal
    }

    fn side_has_any_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|piece| !Self::legal_destinations(&self.board, piece).is_empty())
    }

    fn validated_promotion_kind(
        to: Square,
        choice: Option<PieceKind>,
    ) -> Result<PieceKind, ChessErrors> {
        match choice {
            None => Err(ChessErrors::PromotionChoiceRequired(to)),
            Some(kind @ (PieceKind::Pawn | PieceKind::King)) => {
                Err(ChessErrors::InvalidPromotionKind(kind))
            }
            Some(kind) => Ok(kind),
        }
    }
}
