//! Precomputed leaper targets for knights and kings.
//!
//! Both tables are built from linear square offsets on the flat 0-63 board.
//! An offset only counts when the rank/file delta has the expected step
//! shape, which discards the wrap-around targets the flat encoding produces
//! at the a- and h-files.

use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

fn leaper_targets(offsets: &[i8; 8], is_step: fn(u8, u8) -> bool) -> [Vec<Square>; 64] {
    std::array::from_fn(|from| {
        let from = from as i8;
        offsets
            .iter()
            .filter_map(|&offset| {
                let to = from + offset;
                if !(0..64).contains(&to) {
                    return None;
                }
                let (from_sq, to_sq) = (Square(from as u8), Square(to as u8));
                let dr = from_sq.rank().abs_diff(to_sq.rank());
                let df = from_sq.file().abs_diff(to_sq.file());
                is_step(dr, df).then_some(to_sq)
            })
            .collect()
    })
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KNIGHT_OFFSETS, |dr, df| dr + df == 3 && dr.max(df) == 2));

pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KING_OFFSETS, |dr, df| dr.max(df) == 1));

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(targets: &[Square]) -> Vec<String> {
        let mut names: Vec<String> = targets.iter().map(ToString::to_string).collect();
        names.sort();
        names
    }

    #[test]
    fn test_knight_corner_has_two_targets() {
        assert_eq!(names(&KNIGHT_TARGETS[0]), ["b3", "c2"]);
        assert_eq!(names(&KNIGHT_TARGETS[63]), ["f7", "g6"]);
    }

    #[test]
    fn test_knight_edge_does_not_wrap() {
        // h4: file-wrap offsets would land on the a- and b-files
        let h4 = "h4".parse::<Square>().unwrap();
        assert_eq!(names(&KNIGHT_TARGETS[h4.index()]), ["f3", "f5", "g2", "g6"]);
    }

    #[test]
    fn test_knight_on_d1_does_not_reach_e2() {
        let d1 = KNIGHT_TARGETS[Square::D1.index()].clone();
        assert_eq!(names(&d1), ["b2", "c3", "e3", "f2"]);
    }

    #[test]
    fn test_king_targets() {
        assert_eq!(KING_TARGETS[0].len(), 3);
        assert_eq!(KING_TARGETS[27].len(), 8);
        assert_eq!(names(&KING_TARGETS[Square::H1.index()]), ["g1", "g2", "h2"]);
    }
}
