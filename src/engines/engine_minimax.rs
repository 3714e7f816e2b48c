//! Fixed-depth minimax engine.

use tracing::info;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::chess_board::ChessBoard;
use crate::search::minimax::{find_best_move, SearchConfig};

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig::with_depth(depth),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, board: &mut ChessBoard, params: &GoParams) -> ChessResult<EngineOutput> {
        let config = SearchConfig::with_depth(params.depth.unwrap_or(self.config.depth));
        let outcome = find_best_move(board, &config)?;

        let mut out = EngineOutput {
            best_move: outcome.best_move,
            weight: Some(outcome.weight),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "minimax depth {} nodes {} weight {}",
            config.depth, outcome.nodes, outcome.weight
        ));
        if let Some(mv) = &out.best_move {
            info!(engine = self.name(), depth = config.depth, weight = outcome.weight, %mv, "chose move");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;

    #[test]
    fn default_depth_is_four() {
        assert_eq!(MinimaxEngine::default().depth(), DEFAULT_SEARCH_DEPTH);
        assert_eq!(MinimaxEngine::new(2).depth(), 2);
    }

    #[test]
    fn params_override_depth() {
        let mut board = ChessBoard::new_game();
        let mut engine = MinimaxEngine::default();
        let out = engine
            .choose_move(&mut board, &GoParams { depth: Some(1) })
            .expect("search should succeed");
        assert!(out.best_move.is_some());
        assert!(out.weight.is_some());
        assert!(out.info_lines[0].starts_with("minimax depth 1 "));
        assert!(board.move_history().is_empty());
    }
}
