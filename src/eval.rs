//! Static evaluation: material, piece-square tables and a mop-up term
//! that helps the search corner a bare king.

use crate::{
    bitboard::BitBoard,
    board::Board,
    defs::{PieceType, Player, Score, Square},
    psqt, utils,
};

const PIECES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

/// Score from the side to move's point of view.
pub fn evaluate(board: &Board) -> Score {
    let mut material = [0; 2];
    let mut positional = [0; 2];

    for side in [Player::White, Player::Black] {
        for piece in PIECES {
            let mut bb = board.player_piece_bb(side, piece);
            while bb != 0 {
                let sq = BitBoard::pop_lsb(&mut bb);
                material[side.as_usize()] += piece.mg_value();
                positional[side.as_usize()] += psqt::psqt_value(piece, side, sq);
            }
        }
    }

    let mut score = material[0] - material[1] + positional[0] - positional[1];
    score += mop_up(board, Player::White, &material);
    score -= mop_up(board, Player::Black, &material);

    match board.turn {
        Player::White => score,
        Player::Black => -score,
    }
}

/// Bonus for driving a clearly weaker enemy king to the edge and
/// walking our own king up to it. Scales in as the defender's pieces
/// disappear.
fn mop_up(board: &Board, side: Player, material: &[Score; 2]) -> Score {
    let opp = side.opp();
    if material[side.as_usize()] <= material[opp.as_usize()] + 2 * PieceType::Pawn.mg_value() {
        return 0;
    }

    let limit = 2 * PieceType::Rook.mg_value()
        + PieceType::Bishop.mg_value()
        + PieceType::Knight.mg_value();
    let opp_pawns = BitBoard::count(board.player_piece_bb(opp, PieceType::Pawn)) as Score;
    let opp_non_pawn = material[opp.as_usize()] - opp_pawns * PieceType::Pawn.mg_value();
    let weight = 100 - 100 * opp_non_pawn.min(limit) / limit;

    let opp_king = board.king_square(opp);
    let my_king = board.king_square(side);
    let bonus = Score::from(CENTER_DISTANCE[opp_king as usize]) * 10
        + (14 - manhattan(my_king, opp_king)) * 4;

    bonus * weight / 100
}

fn manhattan(a: Square, b: Square) -> Score {
    let (af, ar) = utils::coord_from_square(a);
    let (bf, br) = utils::coord_from_square(b);
    Score::from((af - bf).abs() + (ar - br).abs())
}

/// Manhattan distance to the nearest of the four center squares
const CENTER_DISTANCE: [u8; 64] = {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        let f = (sq % 8) as i32;
        let r = (sq / 8) as i32;
        let df = if f <= 3 { 3 - f } else { f - 4 };
        let dr = if r <= 3 { 3 - r } else { r - 4 };
        table[sq] = (df + dr) as u8;
        sq += 1;
    }
    table
};
