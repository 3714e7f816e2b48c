//! The board contract the search is written against.
//!
//! Any two-player, turn-based game whose state can be advanced and rewound in
//! place can be searched. The search owns the board exclusively for the whole
//! call and leaves it exactly as it found it.

use std::fmt;

use crate::errors::ChessError;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::Player;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::board_weight;

pub trait GameBoard {
    type Move: Clone + fmt::Debug + fmt::Display;
    type Error: fmt::Debug + fmt::Display;

    /// Legal moves for the side to move, in the order the search visits them.
    fn possible_moves(&mut self) -> Vec<Self::Move>;

    fn apply_move(&mut self, mv: Self::Move) -> Result<(), Self::Error>;

    fn undo_last_move(&mut self) -> Result<(), Self::Error>;

    /// The first player maximises the weight; the second minimises it.
    fn is_first_player_to_move(&self) -> bool;

    fn is_finished(&mut self) -> bool;

    /// Static evaluation from the first player's point of view.
    fn board_weight(&self) -> i64;
}

impl GameBoard for ChessBoard {
    type Move = ChessMove;
    type Error = ChessError;

    fn possible_moves(&mut self) -> Vec<ChessMove> {
        self.legal_moves()
    }

    fn apply_move(&mut self, mv: ChessMove) -> Result<(), ChessError> {
        ChessBoard::apply_move(self, &mv).map(|_| ())
    }

    fn undo_last_move(&mut self) -> Result<(), ChessError> {
        ChessBoard::undo_last_move(self).map(|_| ())
    }

    fn is_first_player_to_move(&self) -> bool {
        self.current_player() == Player::Light
    }

    fn is_finished(&mut self) -> bool {
        ChessBoard::is_finished(self)
    }

    fn board_weight(&self) -> i64 {
        board_weight(self.squares(), self.current_advantage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chess_board_satisfies_the_contract() {
        let mut board = ChessBoard::new_game();
        assert!(board.is_first_player_to_move());
        assert!(!GameBoard::is_finished(&mut board));
        assert_eq!(GameBoard::board_weight(&board), 0);

        let first = board.possible_moves()[0];
        GameBoard::apply_move(&mut board, first).expect("generated move applies");
        assert!(!board.is_first_player_to_move());
        GameBoard::undo_last_move(&mut board).expect("undo");
        assert!(board.is_first_player_to_move());
        assert!(GameBoard::undo_last_move(&mut board).is_err());
    }
}
