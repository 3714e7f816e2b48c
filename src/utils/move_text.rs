//! Console move notation: `(e2, e4)` and `(a7, a8, Queen)`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::ChessMove;

#[inline]
pub fn format_move(mv: &ChessMove) -> String {
    mv.to_string()
}

/// Parses a move typed at the console.
///
/// Whitespace and parentheses are ignored, so `e2,e4` and `( E2 , e4 )` both
/// work. The result carries no mover metadata; resolve it against the board
/// before applying.
pub fn parse_move(text: &str) -> ChessResult<ChessMove> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect();
    let parts: Vec<&str> = cleaned.split(',').collect();

    match parts.as_slice() {
        [start, end] => Ok(ChessMove::new(parse_square(start, text)?, parse_square(end, text)?)),
        [start, end, promoted] => {
            let kind: PieceKind = promoted.parse()?;
            if !PROMOTION_KINDS.contains(&kind) {
                return Err(ChessError::InvalidPromotion((*promoted).to_owned()));
            }
            Ok(ChessMove::promotion(
                parse_square(start, text)?,
                parse_square(end, text)?,
                kind,
            ))
        }
        _ => Err(ChessError::InvalidMoveText(text.to_owned())),
    }
}

fn parse_square(square: &str, text: &str) -> ChessResult<BoardPosition> {
    square
        .parse()
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))
}

/// Parses a whitespace-separated list of moves such as
/// `(e2, e4) (e7, e5) (g1, f3)`.
pub fn parse_move_list(text: &str) -> ChessResult<Vec<ChessMove>> {
    text.split(')')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_move)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::chess_move::MoveKind;

    #[test]
    fn formats_plain_and_promotion_moves() {
        let mv = parse_move("(e2, e4)").expect("parses");
        assert_eq!(format_move(&mv), "(e2, e4)");
        let promo = parse_move("(a7, a8, Queen)").expect("parses");
        assert_eq!(format_move(&promo), "(a7, a8, Queen)");
        assert_eq!(promo.kind(), MoveKind::PawnPromote);
    }

    #[test]
    fn parsing_is_lenient_about_spacing_and_case() {
        let mv = parse_move("  ( E2 ,e4 )").expect("parses");
        assert_eq!(mv.start(), BoardPosition::new(6, 4));
        assert_eq!(mv.end(), BoardPosition::new(4, 4));
        let promo = parse_move("b2,b1,knight").expect("parses");
        assert_eq!(promo.promoted_to(), Some(PieceKind::Knight));
    }

    #[test]
    fn rejects_bad_text() {
        assert!(matches!(parse_move("e2 e4"), Err(ChessError::InvalidMoveText(_))));
        assert!(matches!(parse_move("(e2, e9)"), Err(ChessError::InvalidMoveText(_))));
        assert!(matches!(parse_move("(e2, e4, e5, e6)"), Err(ChessError::InvalidMoveText(_))));
        assert!(matches!(parse_move("(a7, a8, King)"), Err(ChessError::InvalidPromotion(_))));
        assert!(matches!(parse_move("(a7, a8, Dragon)"), Err(ChessError::InvalidPromotion(_))));
    }

    #[test]
    fn move_lists_split_on_closing_parens() {
        let moves = parse_move_list("(e2, e4) (e7, e5)\n(g1, f3)").expect("parses");
        assert_eq!(moves.len(), 3);
        assert_eq!(format_move(&moves[2]), "(g1, f3)");
        assert!(parse_move_list("").expect("empty list").is_empty());
    }
}
