//! Move ordering for the alpha-beta search.

use crate::{
    bitboard::BitBoard,
    bitmove::BitMove,
    board::Board,
    defs::{PieceType, Score},
    gen::attack,
    movelist::MoveList,
};

const HASH_BONUS: Score = 8_000_000;
const CAPTURE_BONUS: Score = 1_000_000;
const PROMOTE_BONUS: Score = 900_000;
const PAWN_THREAT_PENALTY: Score = 50;

/// Assign an ordering score to every move in the list. The hash move
/// goes first, then captures by most-valuable-victim, then promotions,
/// then quiets with a nudge away from squares enemy pawns cover.
pub fn score_moves(list: &mut MoveList, board: &Board, hash_move: u16) {
    let opp = board.turn.opp();
    let mut pawn_threats = 0;
    let mut pawns = board.player_piece_bb(opp, PieceType::Pawn);
    while pawns != 0 {
        let sq = BitBoard::pop_lsb(&mut pawns);
        pawn_threats |= attack::pawn_attacks(sq, opp);
    }

    for idx in 0..list.size() {
        let m = list.get(idx);

        if m == hash_move {
            list.set_score(idx, HASH_BONUS);
            continue;
        }

        let mut score = 0;

        if BitMove::is_cap(m) {
            let victim = if BitMove::is_ep(m) {
                PieceType::Pawn
            } else {
                board.piece_type(BitMove::dest(m))
            };
            let attacker = board.piece_type(BitMove::src(m));
            score += CAPTURE_BONUS + 10 * victim.mg_value() - attacker.mg_value();
        }

        if BitMove::is_prom(m) {
            score += PROMOTE_BONUS + BitMove::prom_type(BitMove::flag(m)).mg_value();
        }

        if score == 0 {
            // Quiet move: discourage walking into a pawn's teeth
            let mover = board.piece_type(BitMove::src(m));
            if mover != PieceType::King && BitBoard::contains(pawn_threats, BitMove::dest(m)) {
                score -= PAWN_THREAT_PENALTY;
            }
        }

        list.set_score(idx, score);
    }
}

/// Selection-sort step: swap the best remaining move into `idx` and
/// return it. Scores must have been assigned first.
pub fn pick_next_move(list: &mut MoveList, idx: usize) -> u16 {
    let mut best_idx = idx;
    let mut best_score = list.score(idx);

    for i in idx + 1..list.size() {
        if list.score(i) > best_score {
            best_idx = i;
            best_score = list.score(i);
        }
    }

    list.swap(idx, best_idx);
    list.get(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zobrist::Zobrist;
    use std::sync::Arc;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen, Arc::new(Zobrist::default())).unwrap()
    }

    #[test]
    fn hash_move_comes_first() {
        let board = Board::start_pos(Arc::new(Zobrist::default()));
        let mut list = MoveList::legal(&board);
        let hash_move = list.get(7);

        score_moves(&mut list, &board, hash_move);
        assert_eq!(pick_next_move(&mut list, 0), hash_move);
    }

    #[test]
    fn captures_before_quiets_and_mvv() {
        // Pawn can take the queen or the knight, knight can move quietly
        let board = board("4k3/8/8/2q1n3/3P4/8/8/3NK3 w - - 0 1");
        let mut list = MoveList::legal(&board);
        score_moves(&mut list, &board, 0);

        let first = pick_next_move(&mut list, 0);
        let second = pick_next_move(&mut list, 1);
        assert_eq!(BitMove::pretty_move(first), "d4c5");
        assert_eq!(BitMove::pretty_move(second), "d4e5");
        assert!(BitMove::is_cap(first) && BitMove::is_cap(second));
    }

    #[test]
    fn negative_scores_still_get_picked() {
        // Only quiet moves, some into pawn coverage; every call must
        // still hand out each move exactly once
        let board = board("4k3/8/2p5/8/8/2N5/8/4K3 w - - 0 1");
        let mut list = MoveList::legal(&board);
        let total = list.size();
        score_moves(&mut list, &board, 0);

        let mut seen = Vec::new();
        for idx in 0..total {
            let m = pick_next_move(&mut list, idx);
            assert!(!seen.contains(&m));
            seen.push(m);
        }
        assert_eq!(seen.len(), total);
    }
}
