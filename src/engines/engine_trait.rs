//! Engine abstraction used by the binary and the match harness.
//!
//! Defines common input parameters and output payloads so different move
//! pickers can be swapped behind a single trait.

use crate::errors::ChessResult;
use crate::game_state::chess_board::ChessBoard;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    /// Search weight of `best_move`, when the engine searched.
    pub weight: Option<i64>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for the side to move. The board must come back unchanged.
    fn choose_move(&mut self, board: &mut ChessBoard, params: &GoParams) -> ChessResult<EngineOutput>;
}
