use crate::{
    defs::{PieceType, Square},
    utils::square_to_string,
};

/// Move encoded into a `u16`.
///
/// Bits 0-5 are the source square, bits 6-11 the destination square,
/// bits 12-15 the [`MoveFlag`].
pub struct BitMove;

impl BitMove {
    pub const fn from_squares(src: Square, dest: Square) -> u16 {
        src as u16 | ((dest as u16) << 6)
    }

    pub const fn from_flag(src: Square, dest: Square, flag: u8) -> u16 {
        BitMove::from_squares(src, dest) | ((flag as u16) << 12)
    }

    pub const fn src(m: u16) -> Square {
        (m & 0b11_1111) as Square
    }

    pub const fn dest(m: u16) -> Square {
        (m >> 6 & 0b11_1111) as Square
    }

    pub const fn from_to(m: u16) -> (Square, Square) {
        (BitMove::src(m), BitMove::dest(m))
    }

    pub const fn flag(m: u16) -> u8 {
        (m >> 12) as u8
    }

    pub const fn is_cap(m: u16) -> bool {
        BitMove::flag(m) & 0b0100 != 0
    }

    pub const fn is_prom(m: u16) -> bool {
        BitMove::flag(m) & 0b1000 != 0
    }

    pub const fn is_ep(m: u16) -> bool {
        BitMove::flag(m) == MoveFlag::EN_PASSANT
    }

    pub const fn is_castle(m: u16) -> bool {
        BitMove::flag(m) == MoveFlag::CASTLE_KING || BitMove::flag(m) == MoveFlag::CASTLE_QUEEN
    }

    pub const fn is_double_push(m: u16) -> bool {
        BitMove::flag(m) == MoveFlag::DOUBLE_PAWN_PUSH
    }

    pub const fn prom_type(flag: u8) -> PieceType {
        // Strip the capture bit
        match flag & 0b1011 {
            MoveFlag::PROMOTE_KNIGHT => PieceType::Knight,
            MoveFlag::PROMOTE_BISHOP => PieceType::Bishop,
            MoveFlag::PROMOTE_ROOK => PieceType::Rook,
            MoveFlag::PROMOTE_QUEEN => PieceType::Queen,
            _ => PieceType::None,
        }
    }

    /// Long algebraic notation, eg `e2e4` or `a7a8q`; `null` for the sentinel
    pub fn pretty_move(m: u16) -> String {
        if m == 0 {
            return "null".to_owned();
        }

        let mut result = square_to_string(BitMove::src(m));
        result.push_str(&square_to_string(BitMove::dest(m)));

        if BitMove::is_prom(m) {
            result.push(match BitMove::prom_type(BitMove::flag(m)) {
                PieceType::Knight => 'n',
                PieceType::Bishop => 'b',
                PieceType::Rook => 'r',
                _ => 'q',
            });
        }

        result
    }
}

/// Bits 0-1 are special flags, bit 2 marks a capture, bit 3 a promotion.
///
/// See <https://www.chessprogramming.org/Encoding_Moves#From-To_Based>
pub struct MoveFlag;

impl MoveFlag {
    pub const QUIET: u8 = 0;
    pub const DOUBLE_PAWN_PUSH: u8 = 1;
    pub const CASTLE_KING: u8 = 2;
    pub const CASTLE_QUEEN: u8 = 3;
    pub const CAPTURE: u8 = 4;
    pub const EN_PASSANT: u8 = 5;
    pub const PROMOTE_KNIGHT: u8 = 8;
    pub const PROMOTE_BISHOP: u8 = 9;
    pub const PROMOTE_ROOK: u8 = 10;
    pub const PROMOTE_QUEEN: u8 = 11;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_round_trip() {
        let m = BitMove::from_flag(12, 28, MoveFlag::DOUBLE_PAWN_PUSH);
        assert_eq!(BitMove::src(m), 12);
        assert_eq!(BitMove::dest(m), 28);
        assert_eq!(BitMove::flag(m), MoveFlag::DOUBLE_PAWN_PUSH);
        assert!(BitMove::is_double_push(m));
        assert!(!BitMove::is_cap(m));
        assert_eq!(BitMove::pretty_move(m), "e2e4");
    }

    #[test]
    fn promotion_flags() {
        let m = BitMove::from_flag(48, 56, MoveFlag::PROMOTE_QUEEN | MoveFlag::CAPTURE);
        assert!(BitMove::is_prom(m));
        assert!(BitMove::is_cap(m));
        assert!(!BitMove::is_ep(m));
        assert_eq!(BitMove::prom_type(BitMove::flag(m)), PieceType::Queen);
        assert_eq!(BitMove::pretty_move(m), "a7a8q");
    }

    #[test]
    fn null_sentinel_is_not_a_move() {
        assert_eq!(BitMove::pretty_move(crate::defs::NULL_MOVE), "null");
        assert_eq!(BitMove::from_squares(0, 0), crate::defs::NULL_MOVE);
    }
}
