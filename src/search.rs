//! Iterative-deepening negamax with alpha-beta, quiescence and the
//! transposition table.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    bitmove::BitMove,
    board::Board,
    defs::{Score, INFINITY, MATE, NULL_MOVE},
    eval,
    movelist::MoveList,
    order,
    table::{Bound, TranspositionTable},
};

pub const MAX_SEARCH_DEPTH: u8 = 64;

#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    pub depth: u8,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits { depth: 6 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    pub best_move: u16,
    pub score: Score,
    /// Deepest fully completed iteration
    pub depth: u8,
    pub nodes: u64,
}

/// Owns the board copy and the transposition table for the duration of
/// one search. The table is handed back through [`Searcher::into_table`]
/// when the search is over.
pub struct Searcher {
    board: Board,
    table: TranspositionTable,
    abort: Arc<AtomicBool>,
    rng: StdRng,
    num_nodes: u64,
    best_move: u16,
}

impl Searcher {
    pub fn new(
        board: Board,
        table: TranspositionTable,
        abort: Arc<AtomicBool>,
        rng_seed: u64,
    ) -> Self {
        Searcher {
            board,
            table,
            abort,
            rng: StdRng::seed_from_u64(rng_seed),
            num_nodes: 0,
            best_move: NULL_MOVE,
        }
    }

    pub fn into_table(self) -> TranspositionTable {
        self.table
    }

    fn aborted(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }

    pub fn iterate(&mut self, limits: SearchLimits) -> SearchResult {
        let start = std::time::Instant::now();
        let depth_limit = limits.depth.clamp(1, MAX_SEARCH_DEPTH);
        self.num_nodes = 0;

        // Fallback answer so even an instantly aborted search plays a
        // legal move
        let legal = MoveList::legal(&self.board);
        self.best_move = if legal.is_empty() {
            NULL_MOVE
        } else {
            legal.get(self.rng.gen_range(0..legal.size()))
        };

        let mut result = SearchResult {
            best_move: self.best_move,
            score: 0,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=depth_limit {
            let score = self.negamax(depth, 0, -INFINITY, INFINITY);
            if self.aborted() {
                break;
            }

            result = SearchResult {
                best_move: self.best_move,
                score,
                depth,
                nodes: self.num_nodes,
            };
            tracing::info!(
                depth,
                score,
                nodes = self.num_nodes,
                best = %BitMove::pretty_move(self.best_move),
                elapsed = ?start.elapsed(),
                "iteration complete"
            );
        }

        result.nodes = self.num_nodes;
        result
    }

    fn negamax(&mut self, depth: u8, ply: u16, mut alpha: Score, mut beta: Score) -> Score {
        if self.aborted() {
            return 0;
        }
        self.num_nodes += 1;

        if ply > 0 {
            // Mate distance pruning
            alpha = alpha.max(-MATE + Score::from(ply));
            beta = beta.min(MATE - Score::from(ply));
            if alpha >= beta {
                return alpha;
            }

            if self.board.is_repetition() {
                return 0;
            }
        }

        let probe = self.table.probe(self.board.key(), depth, ply, alpha, beta);
        if let Some(score) = probe.score {
            // The root must never cut off without a move to play
            if ply > 0 || probe.m != NULL_MOVE {
                if ply == 0 {
                    self.best_move = probe.m;
                }
                return score;
            }
        }
        let hash_move = probe.m;

        if depth == 0 {
            return self.quiescence(ply, alpha, beta);
        }

        let mut list = MoveList::legal(&self.board);
        if list.is_empty() {
            return if self.board.in_check() {
                -(MATE - Score::from(ply))
            } else {
                0
            };
        }

        order::score_moves(&mut list, &self.board, hash_move);

        let key = self.board.key();
        let old_alpha = alpha;
        let mut best_move = NULL_MOVE;
        let mut best_score = -INFINITY;

        for idx in 0..list.size() {
            let m = order::pick_next_move(&mut list, idx);

            self.board.make_move(m);
            let score = -self.negamax(depth - 1, ply + 1, -beta, -alpha);
            self.board.unmake_move();

            // An aborted subtree returns garbage, keep it out of the table
            if self.aborted() {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = m;
                if score > alpha {
                    alpha = score;
                    if ply == 0 {
                        self.best_move = m;
                    }
                }
            }

            if alpha >= beta {
                self.table.store(key, depth, m, beta, Bound::Lower, ply);
                return beta;
            }
        }

        let bound = if alpha > old_alpha {
            Bound::Exact
        } else {
            Bound::Upper
        };
        self.table.store(key, depth, best_move, alpha, bound, ply);

        alpha
    }

    fn quiescence(&mut self, ply: u16, mut alpha: Score, beta: Score) -> Score {
        if self.aborted() {
            return 0;
        }
        self.num_nodes += 1;

        let in_check = self.board.in_check();
        if !in_check {
            let stand_pat = eval::evaluate(&self.board);
            if stand_pat >= beta {
                return beta;
            }
            if stand_pat > alpha {
                alpha = stand_pat;
            }
        }

        // When in check this is every evasion, not just captures
        let mut list = MoveList::captures(&self.board);
        if in_check && list.is_empty() {
            return -(MATE - Score::from(ply));
        }

        order::score_moves(&mut list, &self.board, NULL_MOVE);

        for idx in 0..list.size() {
            let m = order::pick_next_move(&mut list, idx);

            self.board.make_move(m);
            let score = -self.quiescence(ply + 1, -beta, -alpha);
            self.board.unmake_move();

            if self.aborted() {
                return 0;
            }

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::MATE_BOUND;
    use crate::zobrist::Zobrist;

    fn searcher(fen: &str) -> Searcher {
        let board = Board::from_fen(fen, Arc::new(Zobrist::default())).unwrap();
        Searcher::new(
            board,
            TranspositionTable::with_entries(1 << 16),
            Arc::new(AtomicBool::new(false)),
            1,
        )
    }

    #[test]
    fn finds_mate_in_one() {
        // Both Qb7 and Qa7 mate here, so check the property rather
        // than one particular move
        let fen = "k7/8/KQ6/8/8/8/8/8 w - - 0 1";
        let mut searcher = searcher(fen);
        let result = searcher.iterate(SearchLimits { depth: 3 });
        assert!(result.score > MATE_BOUND);

        let mut board = Board::from_fen(fen, Arc::new(Zobrist::default())).unwrap();
        board.make_move(result.best_move);
        assert!(board.in_check());
        assert!(MoveList::legal(&board).is_empty());
    }

    #[test]
    fn mated_side_sees_it_coming() {
        // Black's only move is Kg8, after which Ra8 mates
        let mut searcher = searcher("7k/R7/6K1/8/8/8/8/8 b - - 0 1");
        let result = searcher.iterate(SearchLimits { depth: 3 });
        assert!(result.score < -MATE_BOUND);
        assert_eq!(BitMove::pretty_move(result.best_move), "h8g8");
    }

    #[test]
    fn stalemate_scores_zero() {
        let mut searcher = searcher("k7/8/1Q6/8/8/8/8/K7 b - - 0 1");
        let result = searcher.iterate(SearchLimits { depth: 4 });
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, NULL_MOVE);
    }

    #[test]
    fn instant_abort_still_answers() {
        let abort = Arc::new(AtomicBool::new(true));
        let board = Board::start_pos(Arc::new(Zobrist::default()));
        let mut searcher = Searcher::new(
            board.clone(),
            TranspositionTable::with_entries(1 << 10),
            abort,
            7,
        );

        let result = searcher.iterate(SearchLimits { depth: 8 });
        assert_eq!(result.depth, 0);
        assert!(MoveList::legal(&board).contains(result.best_move));
    }

    #[test]
    fn shuffling_knights_is_a_repetition() {
        let mut board = Board::start_pos(Arc::new(Zobrist::default()));
        for s in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let m = MoveList::legal(&board)
                .find(|&m| BitMove::pretty_move(m) == s)
                .unwrap();
            board.make_move(m);
        }
        assert!(board.is_repetition());
    }

    #[test]
    fn prefers_winning_the_queen() {
        // White queen hangs on d5; depth two is enough to grab it safely
        let mut searcher = searcher("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
        let result = searcher.iterate(SearchLimits { depth: 4 });
        assert_eq!(BitMove::pretty_move(result.best_move), "d2d5");
    }
}
