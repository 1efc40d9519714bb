//! Compile-time line and between tables for sliding rays.

use crate::defs::Square;

/// Squares strictly between two aligned squares, empty otherwise
pub const fn between(a: Square, b: Square) -> u64 {
    BETWEEN[a as usize][b as usize]
}

/// The full board line through two aligned squares, both endpoints
/// included; empty when the squares are not aligned.
pub const fn line(a: Square, b: Square) -> u64 {
    LINE[a as usize][b as usize]
}

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All squares reachable from `sq` by repeating the `(df, dr)` step
const fn ray(sq: Square, df: i8, dr: i8) -> u64 {
    let mut bb = 0u64;
    let mut f = sq % 8 + df;
    let mut r = sq / 8 + dr;
    while f >= 0 && f < 8 && r >= 0 && r < 8 {
        bb |= 1 << (r * 8 + f);
        f += df;
        r += dr;
    }
    bb
}

const LINE: [[u64; 64]; 64] = {
    let mut table = [[0; 64]; 64];

    let mut a = 0;
    while a < 64 {
        let mut d = 0;
        while d < 4 {
            let (df, dr) = ROOK_DIRS[d];
            let full = ray(a, df, dr) | ray(a, -df, -dr) | 1 << a;
            let mut rest = full & !(1 << a);
            while rest != 0 {
                let b = rest.trailing_zeros() as usize;
                table[a as usize][b] = full;
                rest &= rest - 1;
            }

            let (df, dr) = BISHOP_DIRS[d];
            let full = ray(a, df, dr) | ray(a, -df, -dr) | 1 << a;
            let mut rest = full & !(1 << a);
            while rest != 0 {
                let b = rest.trailing_zeros() as usize;
                table[a as usize][b] = full;
                rest &= rest - 1;
            }

            d += 1;
        }
        a += 1;
    }

    table
};

const BETWEEN: [[u64; 64]; 64] = {
    let mut table = [[0; 64]; 64];

    let mut a = 0;
    while a < 64 {
        let mut d = 0;
        while d < 8 {
            let (df, dr) = if d < 4 {
                ROOK_DIRS[d]
            } else {
                BISHOP_DIRS[d - 4]
            };

            let mut acc = 0u64;
            let mut f = a % 8 + df;
            let mut r = a / 8 + dr;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                let s = r * 8 + f;
                table[a as usize][s as usize] = acc;
                acc |= 1 << s;
                f += df;
                r += dr;
            }

            d += 1;
        }
        a += 1;
    }

    table
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::BitBoard;

    #[test]
    fn between_is_exclusive() {
        // a1-a4 spans a2 and a3
        assert_eq!(between(0, 24), BitBoard::from_sq(8) | BitBoard::from_sq(16));
        assert_eq!(between(24, 0), BitBoard::from_sq(8) | BitBoard::from_sq(16));
        // adjacent squares have nothing in between
        assert_eq!(between(0, 8), 0);
        // unaligned squares neither
        assert_eq!(between(0, 12), 0);
    }

    #[test]
    fn line_includes_endpoints() {
        let l = line(0, 9);
        assert!(BitBoard::contains(l, 0));
        assert!(BitBoard::contains(l, 9));
        assert!(BitBoard::contains(l, 63));
        assert_eq!(BitBoard::count(l), 8);

        assert_eq!(line(0, 12), 0);
        assert_eq!(line(0, 7), BitBoard::RANK_1);
    }

    #[test]
    fn line_is_symmetric() {
        for a in 0..64 {
            for b in 0..64 {
                assert_eq!(line(a, b), line(b, a));
                assert_eq!(between(a, b), between(b, a));
            }
        }
    }
}
