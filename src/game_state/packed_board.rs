//! Packed 8x8 square storage.
//!
//! Two squares share one byte. A square's nibble holds a 3-bit piece kind and
//! a 1-bit owner (`player - 1`); an all-zero kind means empty regardless of
//! the owner bit.

use crate::game_state::board_position::{BoardPosition, BOARD_SIZE};
use crate::game_state::chess_rules::STARTING_CELLS;
use crate::game_state::chess_types::{ChessPiece, PieceKind, Player};

const KIND_MASK: u8 = 0x07;
const OWNER_SHIFT: u8 = 3;
const LOW_NIBBLE: u8 = 0x0F;
const HIGH_NIBBLE: u8 = 0xF0;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackedBoard {
    cells: [u8; 32],
}

impl Default for PackedBoard {
    fn default() -> Self {
        Self::empty()
    }
}

impl PackedBoard {
    #[inline]
    pub const fn empty() -> Self {
        Self { cells: [0; 32] }
    }

    #[inline]
    pub const fn starting_position() -> Self {
        Self {
            cells: STARTING_CELLS,
        }
    }

    #[inline]
    fn cell_index(pos: BoardPosition) -> (usize, bool) {
        assert!(pos.in_bounds(), "square {pos} is off the board");
        let index = pos.row() as usize * (BOARD_SIZE as usize / 2) + pos.col() as usize / 2;
        (index, pos.col() % 2 == 0)
    }

    /// Decodes the piece on an in-bounds square.
    ///
    /// # Panics
    /// If `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: BoardPosition) -> ChessPiece {
        let (index, high) = Self::cell_index(pos);
        let cell = self.cells[index];
        let nibble = if high { cell >> 4 } else { cell & LOW_NIBBLE };
        decode_nibble(nibble)
    }

    /// Encodes `piece` onto an in-bounds square, leaving its neighbour intact.
    ///
    /// # Panics
    /// If `pos` is off the board.
    #[inline]
    pub fn set(&mut self, pos: BoardPosition, piece: ChessPiece) {
        let (index, high) = Self::cell_index(pos);
        let nibble = encode_nibble(piece);
        let cell = self.cells[index];
        self.cells[index] = if high {
            (nibble << 4) | (cell & LOW_NIBBLE)
        } else {
            nibble | (cell & HIGH_NIBBLE)
        };
    }

    /// Every square holding `kind` owned by `player`, in row-major order.
    pub fn positions_of(&self, kind: PieceKind, player: Player) -> Vec<BoardPosition> {
        BoardPosition::all()
            .filter(|&pos| self.get(pos).is(kind, player))
            .collect()
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (BoardPosition, ChessPiece)> + '_ {
        BoardPosition::all()
            .map(|pos| (pos, self.get(pos)))
            .filter(|(_, piece)| !piece.is_empty())
    }
}

#[inline]
fn encode_nibble(piece: ChessPiece) -> u8 {
    match piece.player() {
        Some(player) if !piece.is_empty() => {
            ((player.number() - 1) << OWNER_SHIFT) | piece.kind().code()
        }
        _ => 0,
    }
}

#[inline]
fn decode_nibble(nibble: u8) -> ChessPiece {
    let kind = PieceKind::from_code(nibble & KIND_MASK).unwrap_or(PieceKind::Empty);
    let player = if nibble >> OWNER_SHIFT == 0 {
        Player::Light
    } else {
        Player::Dark
    };
    ChessPiece::new(kind, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PIECES: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[test]
    fn starting_cells_decode_to_standard_layout() {
        let board = PackedBoard::starting_position();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back_rank.into_iter().enumerate() {
            let col = col as i8;
            assert_eq!(board.get(BoardPosition::new(0, col)), ChessPiece::new(kind, Player::Dark));
            assert_eq!(board.get(BoardPosition::new(7, col)), ChessPiece::new(kind, Player::Light));
            assert_eq!(
                board.get(BoardPosition::new(1, col)),
                ChessPiece::new(PieceKind::Pawn, Player::Dark)
            );
            assert_eq!(
                board.get(BoardPosition::new(6, col)),
                ChessPiece::new(PieceKind::Pawn, Player::Light)
            );
        }
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.get(BoardPosition::new(row, col)).is_empty());
            }
        }
    }

    #[test]
    fn set_then_get_covers_both_nibbles() {
        let mut board = PackedBoard::empty();
        let even = BoardPosition::new(3, 4);
        let odd = BoardPosition::new(3, 5);
        for kind in ALL_PIECES {
            let light = ChessPiece::new(kind, Player::Light);
            let dark = ChessPiece::new(kind, Player::Dark);
            board.set(even, dark);
            board.set(odd, light);
            assert_eq!(board.get(even), dark);
            assert_eq!(board.get(odd), light);
        }
        board.set(even, ChessPiece::EMPTY);
        board.set(odd, ChessPiece::EMPTY);
        assert_eq!(board, PackedBoard::empty());
    }

    #[test]
    fn writing_one_square_leaves_its_neighbour_alone() {
        let mut board = PackedBoard::starting_position();
        let b8 = BoardPosition::new(0, 1);
        board.set(BoardPosition::new(0, 0), ChessPiece::EMPTY);
        assert_eq!(board.get(b8), ChessPiece::new(PieceKind::Knight, Player::Dark));
        board.set(b8, ChessPiece::new(PieceKind::Queen, Player::Light));
        assert!(board.get(BoardPosition::new(0, 0)).is_empty());
    }

    #[test]
    fn positions_of_scans_row_major() {
        let board = PackedBoard::starting_position();
        assert_eq!(
            board.positions_of(PieceKind::Rook, Player::Light),
            vec![BoardPosition::new(7, 0), BoardPosition::new(7, 7)]
        );
        assert_eq!(board.positions_of(PieceKind::Pawn, Player::Dark).len(), 8);
        assert_eq!(board.occupied().count(), 32);
    }

    #[test]
    #[should_panic]
    fn reading_off_the_board_panics() {
        PackedBoard::empty().get(BoardPosition::new(8, 0));
    }
}
