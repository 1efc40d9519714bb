use crate::{defs::Square, gen::lines::line};

/// Namespace for operations on `u64` bitboards.
///
/// Bit `i` set means square `i` is a member; square 0 is a1, square 63 is h8.
pub struct BitBoard;

/// Constant masks. Ranks and files use 1-8 / a-h notation.
impl BitBoard {
    pub const EMPTY: u64 = 0;
    pub const FULL: u64 = !0;

    pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
    pub const RANK_2: u64 = BitBoard::RANK_1 << 8;
    pub const RANK_3: u64 = BitBoard::RANK_1 << 16;
    pub const RANK_6: u64 = BitBoard::RANK_1 << 40;
    pub const RANK_7: u64 = BitBoard::RANK_1 << 48;
    pub const RANK_8: u64 = BitBoard::RANK_1 << 56;

    pub const FILE_A: u64 = 0x0101_0101_0101_0101;
    pub const FILE_B: u64 = BitBoard::FILE_A << 1;
    pub const FILE_G: u64 = BitBoard::FILE_A << 6;
    pub const FILE_H: u64 = BitBoard::FILE_A << 7;
}

impl BitBoard {
    pub const fn from_sq(sq: Square) -> u64 {
        1 << sq
    }

    pub const fn file_bb(file: Square) -> u64 {
        BitBoard::FILE_A << (file % 8)
    }

    pub const fn rank_bb(sq: Square) -> u64 {
        BitBoard::RANK_1 << (sq / 8 * 8)
    }

    pub fn set_bit(bb: &mut u64, sq: Square) {
        *bb |= BitBoard::from_sq(sq);
    }

    pub fn pop_bit(bb: &mut u64, sq: Square) {
        *bb ^= BitBoard::from_sq(sq);
    }

    pub const fn contains(bb: u64, sq: Square) -> bool {
        bb & BitBoard::from_sq(sq) != 0
    }

    pub const fn count(bb: u64) -> u8 {
        bb.count_ones() as u8
    }

    pub const fn more_than_one(bb: u64) -> bool {
        bb != 0 && bb & (bb - 1) != 0
    }

    /// Index of the least significant set bit, 64 if the board is empty
    pub const fn bit_scan_forward(bb: u64) -> Square {
        bb.trailing_zeros() as Square
    }

    /// Index of the most significant set bit, 64 if the board is empty
    pub const fn bit_scan_reverse(bb: u64) -> Square {
        if bb == 0 {
            return 64;
        }
        (63 - bb.leading_zeros()) as Square
    }

    /// Pop the lsb of the provided bitboard and return its index.
    ///
    /// Empty bitboards remain empty and return 64.
    pub fn pop_lsb(bb: &mut u64) -> Square {
        let lsb = BitBoard::bit_scan_forward(*bb);
        *bb &= bb.wrapping_sub(1);
        lsb
    }

    /// Shift every member by a signed king-direction offset, masking off
    /// bits that would wrap across the a/h file boundary.
    pub const fn shift(bb: u64, offset: Square) -> u64 {
        match offset {
            8 => bb << 8,
            -8 => bb >> 8,
            1 => (bb & !BitBoard::FILE_H) << 1,
            -1 => (bb & !BitBoard::FILE_A) >> 1,
            9 => (bb & !BitBoard::FILE_H) << 9,
            7 => (bb & !BitBoard::FILE_A) << 7,
            -7 => (bb & !BitBoard::FILE_H) >> 7,
            -9 => (bb & !BitBoard::FILE_A) >> 9,
            _ => 0,
        }
    }

    /// True when `c` lies on the (full) line through `a` and `b`
    pub const fn triple_aligned(a: Square, b: Square, c: Square) -> bool {
        line(a, b) & BitBoard::from_sq(c) != 0
    }

    pub fn pretty_string(bb: u64) -> String {
        let mut output = String::new();
        for y in 0..8 {
            for x in 0..8 {
                let sq = 8 * (7 - y) + x;
                output.push_str(if BitBoard::contains(bb, sq) { " 1" } else { " ." });
            }
            output.push('\n');
        }
        output
    }
}
