//! Core value types shared by the board, the move generator, and search.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;

/// One of the two players. `Light` moves first and is numbered 1; `Dark` is 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Light,
    Dark,
}

impl Player {
    /// Logical player number (1 or 2).
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Player::Light => 1,
            Player::Dark => 2,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Light => Player::Dark,
            Player::Dark => Player::Light,
        }
    }

    /// Row delta of a single pawn step. Row 0 is Dark's back rank.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Light => -1,
            Player::Dark => 1,
        }
    }

    /// Row holding the king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Player::Light => 7,
            Player::Dark => 0,
        }
    }

    /// Row the pawns start on; the only row a two-square push is allowed from.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Player::Light => 6,
            Player::Dark => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Player::Light => 0,
            Player::Dark => 7,
        }
    }

    /// Row a pawn must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> i8 {
        match self {
            Player::Light => 3,
            Player::Dark => 4,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Light => write!(f, "White"),
            Player::Dark => write!(f, "Black"),
        }
    }
}

/// Piece kind. Discriminants are the 3-bit codes used by the packed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Empty = 0,
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(PieceKind::Empty),
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Rook),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Material points used for the game advantage. Kings carry no material.
    #[inline]
    pub const fn material_value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::Empty | PieceKind::King => 0,
        }
    }

    /// Bonus for attacking an enemy piece of this kind in the board weight.
    #[inline]
    pub const fn threat_value(self) -> i64 {
        match self {
            PieceKind::Knight | PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            PieceKind::King => 4,
            PieceKind::Queen => 5,
            PieceKind::Empty | PieceKind::Pawn => 0,
        }
    }

    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Empty => "Empty",
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = ChessError;

    /// Case-insensitive piece name, e.g. `queen` or `Knight`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pawn" => Ok(PieceKind::Pawn),
            "rook" => Ok(PieceKind::Rook),
            "knight" => Ok(PieceKind::Knight),
            "bishop" => Ok(PieceKind::Bishop),
            "queen" => Ok(PieceKind::Queen),
            "king" => Ok(PieceKind::King),
            _ => Err(ChessError::InvalidPromotion(s.to_owned())),
        }
    }
}

/// A piece kind plus its owner. Empty squares never have an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPiece {
    kind: PieceKind,
    player: Option<Player>,
}

impl ChessPiece {
    pub const EMPTY: ChessPiece = ChessPiece {
        kind: PieceKind::Empty,
        player: None,
    };

    /// Builds a piece owned by `player`; `PieceKind::Empty` yields [`ChessPiece::EMPTY`].
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        match kind {
            PieceKind::Empty => Self::EMPTY,
            _ => Self {
                kind,
                player: Some(player),
            },
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn player(self) -> Option<Player> {
        self.player
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    #[inline]
    pub fn is(self, kind: PieceKind, player: Player) -> bool {
        self.kind == kind && self.player == Some(player)
    }

    #[inline]
    pub fn belongs_to(self, player: Player) -> bool {
        self.player == Some(player)
    }
}

impl Default for ChessPiece {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Material lead: which player is ahead and by how many points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameAdvantage {
    pub leader: Option<Player>,
    pub magnitude: u32,
}

impl GameAdvantage {
    pub const EVEN: GameAdvantage = GameAdvantage {
        leader: None,
        magnitude: 0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_piece_never_has_an_owner() {
        let piece = ChessPiece::new(PieceKind::Empty, Player::Dark);
        assert_eq!(piece, ChessPiece::EMPTY);
        assert_eq!(piece.player(), None);
        assert!(piece.is_empty());
    }

    #[test]
    fn player_numbers_and_opposites() {
        assert_eq!(Player::Light.number(), 1);
        assert_eq!(Player::Dark.number(), 2);
        assert_eq!(Player::Light.opposite(), Player::Dark);
        assert_eq!(Player::Light.to_string(), "White");
    }

    #[test]
    fn piece_kind_names_parse_case_insensitively() {
        assert_eq!("queen".parse::<PieceKind>(), Ok(PieceKind::Queen));
        assert_eq!("KNIGHT".parse::<PieceKind>(), Ok(PieceKind::Knight));
        assert!("dragon".parse::<PieceKind>().is_err());
    }

    #[test]
    fn piece_codes_round_trip() {
        for code in 0..=6u8 {
            let kind = PieceKind::from_code(code).expect("codes 0..=6 are valid");
            assert_eq!(kind.code(), code);
        }
        assert_eq!(PieceKind::from_code(7), None);
    }
}
