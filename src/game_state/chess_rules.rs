//! Canonical chess-rule constants.
//!
//! Holds the packed starting layout, the draw-counter threshold, castling
//! geometry, and the default search depth.

use crate::game_state::chess_types::PieceKind;

/// Standard starting position, two squares per byte, rank 8 first.
///
/// Each nibble is `owner_bit << 3 | kind_code`; the even column of a pair sits
/// in the high nibble.
pub const STARTING_CELLS: [u8; 32] = [
    0xAB, 0xCD, 0xEC, 0xBA, // r n b q k b n r
    0x99, 0x99, 0x99, 0x99, // p p p p p p p p
    0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, //
    0x11, 0x11, 0x11, 0x11, // P P P P P P P P
    0x23, 0x45, 0x64, 0x32, // R N B Q K B N R
];

/// Half-move clock value at which the game is drawn. Compared in plies.
pub const DRAW_COUNTER_LIMIT: u16 = 50;

/// Promotion choices, in the order the generator emits them.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
];

pub const KING_HOME_COL: i8 = 4;
pub const KING_SIDE_ROOK_COL: i8 = 7;
pub const QUEEN_SIDE_ROOK_COL: i8 = 0;

/// Search depth in plies used when no depth is configured.
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;
