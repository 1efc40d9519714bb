//! Legal move generation.
//!
//! Moves are produced pseudo-legally per piece type and then filtered
//! through [`is_legal_move`], which only has to consider pins, king
//! steps, castling transit squares and en passant discoveries.

use crate::{
    bitboard::BitBoard,
    bitmove::{BitMove, MoveFlag},
    board::Board,
    defs::{PieceType, Square},
    gen::{attack, lines, magic},
    movelist::MoveList,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenType {
    /// Captures and queen promotions
    Captures,
    /// Check evasions: king steps, blocks, and captures of the checker
    Evasions,
    /// Everything
    NonEvasions,
}

pub fn generate_legal(board: &Board) -> MoveList {
    let gen_type = if board.in_check() {
        GenType::Evasions
    } else {
        GenType::NonEvasions
    };
    filter_legal(board, generate_all(board, gen_type))
}

pub fn generate_captures(board: &Board) -> MoveList {
    // When in check the quiet evasions matter just as much
    if board.in_check() {
        return generate_legal(board);
    }
    filter_legal(board, generate_all(board, GenType::Captures))
}

fn filter_legal(board: &Board, list: MoveList) -> MoveList {
    let mut legal = MoveList::new();
    for m in list {
        if is_legal_move(board, m) {
            legal.push(m);
        }
    }
    legal
}

fn generate_all(board: &Board, gen_type: GenType) -> MoveList {
    let mut list = MoveList::new();
    let us = board.turn;
    let king_sq = board.cur_king_square();

    let targets = match gen_type {
        GenType::Captures => board.player_bb(us.opp()),
        GenType::Evasions => {
            let checker = BitBoard::bit_scan_forward(board.pos.checkers_bb);
            lines::between(king_sq, checker) | board.pos.checkers_bb
        }
        GenType::NonEvasions => !board.player_bb(us),
    };

    // Under double check only the king may move
    if !BitBoard::more_than_one(board.pos.checkers_bb) {
        gen_pawn_moves(board, &mut list, gen_type, targets);
        gen_piece_moves(board, &mut list, PieceType::Knight, targets);
        gen_piece_moves(board, &mut list, PieceType::Bishop, targets);
        gen_piece_moves(board, &mut list, PieceType::Rook, targets);
        gen_piece_moves(board, &mut list, PieceType::Queen, targets);
    }

    let king_targets = attack::king_attacks(king_sq)
        & match gen_type {
            GenType::Captures => board.player_bb(us.opp()),
            _ => !board.player_bb(us),
        };
    push_moves(board, &mut list, king_sq, king_targets);

    if gen_type == GenType::NonEvasions {
        gen_castling(board, &mut list);
    }

    list
}

fn gen_piece_moves(board: &Board, list: &mut MoveList, piece: PieceType, targets: u64) {
    let us = board.turn;
    let occ = board.occ_bb();
    let mut pieces = board.player_piece_bb(us, piece);

    while pieces != 0 {
        let src = BitBoard::pop_lsb(&mut pieces);
        let moves = attack::attacks(piece, src, occ, us) & targets;
        push_moves(board, list, src, moves);
    }
}

fn push_moves(board: &Board, list: &mut MoveList, src: Square, mut dests: u64) {
    while dests != 0 {
        let dest = BitBoard::pop_lsb(&mut dests);
        let flag = if board.piece_type(dest) != PieceType::None {
            MoveFlag::CAPTURE
        } else {
            MoveFlag::QUIET
        };
        list.push(BitMove::from_flag(src, dest, flag));
    }
}

fn gen_pawn_moves(board: &Board, list: &mut MoveList, gen_type: GenType, targets: u64) {
    let us = board.turn;
    let opp = us.opp();
    let occ = board.occ_bb();
    let empty = !occ;
    let dir = us.pawn_dir();

    let pawns = board.player_piece_bb(us, PieceType::Pawn);
    let on_7 = pawns & us.rank_7();
    let not_on_7 = pawns & !us.rank_7();

    let cap_targets = match gen_type {
        GenType::Evasions => board.player_bb(opp) & targets,
        _ => board.player_bb(opp),
    };

    if gen_type != GenType::Captures {
        let mut single = BitBoard::shift(not_on_7, dir) & empty;
        let mut double = BitBoard::shift(single & us.rank_3(), dir) & empty;
        if gen_type == GenType::Evasions {
            single &= targets;
            double &= targets;
        }
        while single != 0 {
            let dest = BitBoard::pop_lsb(&mut single);
            list.push(BitMove::from_squares(dest - dir, dest));
        }
        while double != 0 {
            let dest = BitBoard::pop_lsb(&mut double);
            list.push(BitMove::from_flag(
                dest - 2 * dir,
                dest,
                MoveFlag::DOUBLE_PAWN_PUSH,
            ));
        }
    }

    for offset in [dir - 1, dir + 1] {
        let mut caps = BitBoard::shift(not_on_7, offset) & cap_targets;
        while caps != 0 {
            let dest = BitBoard::pop_lsb(&mut caps);
            list.push(BitMove::from_flag(dest - offset, dest, MoveFlag::CAPTURE));
        }
    }

    if on_7 != 0 {
        let mut pushes = BitBoard::shift(on_7, dir) & empty;
        if gen_type == GenType::Evasions {
            pushes &= targets;
        }
        while pushes != 0 {
            let dest = BitBoard::pop_lsb(&mut pushes);
            push_promotions(list, dest - dir, dest, 0, gen_type);
        }

        for offset in [dir - 1, dir + 1] {
            let mut caps = BitBoard::shift(on_7, offset) & cap_targets;
            while caps != 0 {
                let dest = BitBoard::pop_lsb(&mut caps);
                push_promotions(list, dest - offset, dest, MoveFlag::CAPTURE, gen_type);
            }
        }
    }

    if board.can_ep() {
        let ep_sq = board.pos.ep_square;
        // An en passant capture can only evade check by taking the
        // double-pushed pawn itself
        if gen_type == GenType::Evasions
            && !BitBoard::contains(board.pos.checkers_bb, ep_sq - dir)
        {
            return;
        }
        let mut srcs = attack::pawn_attacks(ep_sq, opp) & pawns;
        while srcs != 0 {
            let src = BitBoard::pop_lsb(&mut srcs);
            list.push(BitMove::from_flag(src, ep_sq, MoveFlag::EN_PASSANT));
        }
    }
}

fn push_promotions(list: &mut MoveList, src: Square, dest: Square, cap_bit: u8, gen_type: GenType) {
    list.push(BitMove::from_flag(src, dest, MoveFlag::PROMOTE_QUEEN | cap_bit));
    if gen_type != GenType::Captures {
        list.push(BitMove::from_flag(src, dest, MoveFlag::PROMOTE_KNIGHT | cap_bit));
        list.push(BitMove::from_flag(src, dest, MoveFlag::PROMOTE_BISHOP | cap_bit));
        list.push(BitMove::from_flag(src, dest, MoveFlag::PROMOTE_ROOK | cap_bit));
    }
}

fn gen_castling(board: &Board, list: &mut MoveList) {
    let us = board.turn;
    let occ = board.occ_bb();
    let king_sq = board.cur_king_square();

    if board.can_castle_king(us) && lines::between(king_sq, us.castle_king_sq() + 1) & occ == 0 {
        list.push(BitMove::from_flag(
            king_sq,
            us.castle_king_sq(),
            MoveFlag::CASTLE_KING,
        ));
    }
    if board.can_castle_queen(us) && lines::between(king_sq, us.castle_queen_sq() - 2) & occ == 0 {
        list.push(BitMove::from_flag(
            king_sq,
            us.castle_queen_sq(),
            MoveFlag::CASTLE_QUEEN,
        ));
    }
}

/// Decide whether a pseudo-legal move leaves the own king safe.
pub fn is_legal_move(board: &Board, m: u16) -> bool {
    let us = board.turn;
    let opp = us.opp();
    let (src, dest) = BitMove::from_to(m);
    let king_sq = board.cur_king_square();
    let occ = board.occ_bb();

    if BitMove::is_castle(m) {
        // The king may not pass through or land on an attacked square
        let step: Square = if BitMove::flag(m) == MoveFlag::CASTLE_KING {
            1
        } else {
            -1
        };
        let mut sq = src;
        while sq != dest {
            sq += step;
            if board.attackers_to(sq, occ) & board.player_bb(opp) != 0 {
                return false;
            }
        }
        return true;
    }

    if BitMove::is_ep(m) {
        let cap_sq = dest - us.pawn_dir();

        // A knight or pawn checker other than the captured pawn keeps
        // checking no matter what the occupancy simulation says
        if board.pos.checkers_bb
            & (board.piece_bb(PieceType::Knight) | board.piece_bb(PieceType::Pawn))
            & !BitBoard::from_sq(cap_sq)
            != 0
        {
            return false;
        }

        // Replay the occupancy change and look for discovered sliders
        let new_occ =
            occ ^ BitBoard::from_sq(src) ^ BitBoard::from_sq(cap_sq) | BitBoard::from_sq(dest);
        return magic::rook_attacks(king_sq, new_occ)
            & board.player_piece_like_bb(opp, PieceType::Rook)
            == 0
            && magic::bishop_attacks(king_sq, new_occ)
                & board.player_piece_like_bb(opp, PieceType::Bishop)
                == 0;
    }

    if board.piece_type(src) == PieceType::King {
        // Remove the king from the occupancy so a checking slider
        // cannot hide behind it
        return board.attackers_to(dest, occ ^ BitBoard::from_sq(src)) & board.player_bb(opp) == 0;
    }

    // Non-king movers must not be pinned, or must stay on the pin line
    !BitBoard::contains(board.blockers(us), src)
        || BitBoard::triple_aligned(src, dest, king_sq)
}
