//! Crate root module declarations for the Ply Chess core.
//!
//! Exposes the board model, pseudo-legal move patterns, legal move
//! generation, the generic minimax search, the engines built on it, and small
//! text and match utilities.

pub mod errors;

pub mod game_state {
    pub mod board_position;
    pub mod chess_board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod packed_board;
}

pub mod moves {
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod attacked_squares;
    pub mod castling;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_moves_pawn;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod game_tree;
    pub mod minimax;
    pub mod threading;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod move_text;
}
