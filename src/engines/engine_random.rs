//! Uniform random-move engine.
//!
//! Used as a baseline opponent and for diagnostics.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::chess_board::ChessBoard;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &mut ChessBoard, params: &GoParams) -> ChessResult<EngineOutput> {
        let legal_moves = board.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("random_engine ignored_depth {depth}"));
        }

        out.best_move = legal_moves.choose(&mut self.rng).copied();
        if let Some(mv) = &out.best_move {
            info!(engine = self.name(), %mv, "chose move");
        }
        Ok(out)
    }
}
