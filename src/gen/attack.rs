//! Attack lookups for all piece types. Leaper tables are computed at
//! compile time, slider attacks go through the magic tables.

use crate::{
    bitboard::BitBoard,
    defs::{PieceType, Player, Square, NUM_SIDES, NUM_SQUARES},
    gen::magic,
};

/// Attack set of `piece` standing on `sq`. Sliders honor `occ`,
/// pawns use `side` and only report their capture squares.
pub fn attacks(piece: PieceType, sq: Square, occ: u64, side: Player) -> u64 {
    match piece {
        PieceType::Pawn => pawn_attacks(sq, side),
        PieceType::Knight => knight_attacks(sq),
        PieceType::Bishop => magic::bishop_attacks(sq, occ),
        PieceType::Rook => magic::rook_attacks(sq, occ),
        PieceType::Queen => magic::queen_attacks(sq, occ),
        PieceType::King => king_attacks(sq),
        PieceType::None => 0,
    }
}

pub const fn knight_attacks(sq: Square) -> u64 {
    KNIGHT_ATK[sq as usize]
}

pub const fn king_attacks(sq: Square) -> u64 {
    KING_ATK[sq as usize]
}

pub const fn pawn_attacks(sq: Square, side: Player) -> u64 {
    PAWN_ATK[side.as_usize()][sq as usize]
}

const fn knight_mask(bb: u64) -> u64 {
    let not_a = bb & !BitBoard::FILE_A;
    let not_h = bb & !BitBoard::FILE_H;
    let not_ab = bb & !(BitBoard::FILE_A | BitBoard::FILE_B);
    let not_gh = bb & !(BitBoard::FILE_G | BitBoard::FILE_H);

    not_h << 17 | not_a << 15 | not_gh << 10 | not_ab << 6
        | not_gh >> 6 | not_ab >> 10 | not_h >> 15 | not_a >> 17
}

const fn king_mask(bb: u64) -> u64 {
    BitBoard::shift(bb, 8)
        | BitBoard::shift(bb, -8)
        | BitBoard::shift(bb, 1)
        | BitBoard::shift(bb, -1)
        | BitBoard::shift(bb, 9)
        | BitBoard::shift(bb, 7)
        | BitBoard::shift(bb, -9)
        | BitBoard::shift(bb, -7)
}

const KNIGHT_ATK: [u64; NUM_SQUARES] = {
    let mut table = [0; NUM_SQUARES];
    let mut sq = 0;
    while sq < NUM_SQUARES {
        table[sq] = knight_mask(1 << sq);
        sq += 1;
    }
    table
};

const KING_ATK: [u64; NUM_SQUARES] = {
    let mut table = [0; NUM_SQUARES];
    let mut sq = 0;
    while sq < NUM_SQUARES {
        table[sq] = king_mask(1 << sq);
        sq += 1;
    }
    table
};

const PAWN_ATK: [[u64; NUM_SQUARES]; NUM_SIDES] = {
    let mut table = [[0; NUM_SQUARES]; NUM_SIDES];
    let mut sq = 0;
    while sq < NUM_SQUARES {
        let bb = 1u64 << sq;
        table[0][sq] = BitBoard::shift(bb, 7) | BitBoard::shift(bb, 9);
        table[1][sq] = BitBoard::shift(bb, -7) | BitBoard::shift(bb, -9);
        sq += 1;
    }
    table
};
