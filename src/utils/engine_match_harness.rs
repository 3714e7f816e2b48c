//! Head-to-head engine matches for local testing.
//!
//! Runs two `Engine` implementations against each other from the starting
//! position (or a supplied board) until the game ends or a ply cap is hit.

use tracing::info;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_board::{ChessBoard, GameStatus};
use crate::game_state::chess_types::Player;
use crate::utils::move_text::format_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawCounter,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Plies counted from the supplied board's history length.
    pub max_plies: u16,
    pub white_depth: Option<u8>,
    pub black_depth: Option<u8>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            white_depth: None,
            black_depth: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: ChessBoard,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

/// Play a match from the standard starting position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_board(ChessBoard::new_game(), engine_white, engine_black, config)
}

/// Play a match from a caller-provided board.
pub fn play_engine_match_from_board(
    mut board: ChessBoard,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let white_params = GoParams {
        depth: config.white_depth,
    };
    let black_params = GoParams {
        depth: config.black_depth,
    };

    let mut played_moves = Vec::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;

    let outcome = loop {
        match board.status() {
            GameStatus::Checkmate(Player::Light) => break MatchOutcome::WhiteWinCheckmate,
            GameStatus::Checkmate(Player::Dark) => break MatchOutcome::BlackWinCheckmate,
            GameStatus::Stalemate => break MatchOutcome::DrawStalemate,
            GameStatus::Draw => break MatchOutcome::DrawCounter,
            GameStatus::InProgress | GameStatus::Check => {}
        }
        if played_moves.len() >= usize::from(config.max_plies) {
            break MatchOutcome::DrawMaxPlies;
        }

        let mover = board.current_player();
        let output = match mover {
            Player::Light => engine_white.choose_move(&mut board, &white_params)?,
            Player::Dark => engine_black.choose_move(&mut board, &black_params)?,
        };
        let Some(mv) = output.best_move else {
            return Err(ChessError::IllegalMove(format!(
                "{mover} engine returned no move in a live position"
            )));
        };
        let record = board.apply_move(&mv)?;
        played_moves.push(format_move(&record));

        match mover {
            Player::Light => white_move_count += 1,
            Player::Dark => black_move_count += 1,
        }
    };

    info!(?outcome, plies = played_moves.len(), "match finished");
    Ok(MatchResult {
        outcome,
        final_board: board,
        played_moves,
        white_move_count,
        black_move_count,
    })
}
