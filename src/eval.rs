//! Static evaluation of positions nobody has won yet.
//!
//! Each side is scored by its most advanced window: the largest number of its
//! pieces found in any single shape location (row and column runs, both
//! diagonals and box corners). The two are combined as
//!
//! ```text
//! own_best + opp_best
//! own_best = max over windows of  own_count / 5
//! opp_best = min over windows of  opp_count / -5
//! ```
//!
//! Scaling by 5 rather than 4 keeps every heuristic score strictly inside
//! (-1, 1), below the value of a real win.

use crate::board::{Board, Piece};
use crate::constants::HEURISTIC_SCALE;
use crate::rules::windows;

/// Heuristic score of a non-terminal `board` from `me`'s side.
pub fn heuristic(board: &Board, me: Piece) -> f64 {
    let opp = me.opponent();
    let mut own_best = f64::NEG_INFINITY;
    let mut opp_best = f64::INFINITY;
    for w in windows() {
        own_best = own_best.max(w.count(board, me) as f64 / HEURISTIC_SCALE);
        opp_best = opp_best.min(w.count(board, opp) as f64 / -HEURISTIC_SCALE);
    }
    own_best + opp_best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::game_value;

    fn board(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_board_is_even() {
        assert!(approx(heuristic(&Board::new(), Piece::Black), 0.0));
    }

    #[test]
    fn test_best_window_per_side() {
        let b = board("bbb.. ..... ..... ..... ....r");
        assert_eq!(game_value(&b, Piece::Black), 0.0);
        assert!(approx(heuristic(&b, Piece::Black), 0.6 - 0.2));
        assert!(approx(heuristic(&b, Piece::Red), 0.2 - 0.6));
    }

    #[test]
    fn test_counts_do_not_accumulate_across_windows() {
        // Two pieces per row in separate rows: the best window still holds two.
        let b = board("b...b ..... b...b ..... .....");
        assert!(approx(heuristic(&b, Piece::Black), 0.4));
    }

    #[test]
    fn test_box_corners_count() {
        let b = board("..... .b.b. ..r.. .b... .....");
        // Three black corners around the red center; red only has one piece.
        assert!(approx(heuristic(&b, Piece::Black), 0.6 - 0.2));
    }

    #[test]
    fn test_stays_inside_win_range() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..200 {
            let mut b = Board::new();
            for pt in Board::points() {
                match rng.u8(0..3) {
                    0 => b.set(pt, Some(Piece::Black)),
                    1 => b.set(pt, Some(Piece::Red)),
                    _ => {}
                }
            }
            if game_value(&b, Piece::Black) != 0.0 {
                continue;
            }
            let h = heuristic(&b, Piece::Black);
            assert!(h > -1.0 && h < 1.0, "heuristic {h} out of range");
        }
    }
}
