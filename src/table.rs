use crate::defs::{Score, MATE_BOUND, NULL_MOVE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Fail high, the real score is at least the stored one
    Lower,
    /// Fail low, the real score is at most the stored one
    Upper,
}

#[derive(Clone, Copy)]
struct HashEntry {
    key: u64,
    depth: u8,
    m: u16,
    score: Score,
    bound: Bound,
}

impl HashEntry {
    const EMPTY: HashEntry = HashEntry {
        key: 0,
        depth: 0,
        m: NULL_MOVE,
        score: 0,
        bound: Bound::Exact,
    };

    const fn valid(&self) -> bool {
        self.key != 0
    }
}

/// What a probe gave back: a score usable for an immediate cutoff, and
/// the stored move for ordering regardless.
pub struct Probe {
    pub score: Option<Score>,
    pub m: u16,
}

/// Fixed-size transposition table with replace-always overwriting and
/// full-key verification on probes.
pub struct TranspositionTable {
    entries: Vec<HashEntry>,
}

impl TranspositionTable {
    pub fn with_entries(count: usize) -> Self {
        let count = count.max(1);
        tracing::debug!(
            entries = count,
            bytes = count * std::mem::size_of::<HashEntry>(),
            "allocated transposition table"
        );
        TranspositionTable {
            entries: vec![HashEntry::EMPTY; count],
        }
    }

    pub fn clear(&mut self) {
        self.entries.fill(HashEntry::EMPTY);
    }

    fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    pub fn store(&mut self, key: u64, depth: u8, m: u16, score: Score, bound: Bound, ply: u16) {
        let idx = self.index(key);
        self.entries[idx] = HashEntry {
            key,
            depth,
            m,
            score: score_to_tt(score, ply),
            bound,
        };
    }

    pub fn probe(&self, key: u64, depth: u8, ply: u16, alpha: Score, beta: Score) -> Probe {
        let entry = &self.entries[self.index(key)];
        if !entry.valid() || entry.key != key {
            return Probe {
                score: None,
                m: NULL_MOVE,
            };
        }

        let mut score = None;
        if entry.depth >= depth {
            let entry_score = score_from_tt(entry.score, ply);
            score = match entry.bound {
                Bound::Exact => Some(entry_score),
                Bound::Lower if entry_score >= beta => Some(entry_score),
                Bound::Upper if entry_score <= alpha => Some(entry_score),
                _ => None,
            };
        }

        Probe { score, m: entry.m }
    }

    /// Stored move for `key`, if the slot still belongs to it
    pub fn best_move(&self, key: u64) -> u16 {
        let entry = &self.entries[self.index(key)];
        if entry.valid() && entry.key == key {
            entry.m
        } else {
            NULL_MOVE
        }
    }
}

/// Mate scores are stored relative to the node they were found in, not
/// to the root, so they stay correct when probed at another ply.
pub(crate) fn score_to_tt(score: Score, ply: u16) -> Score {
    if score > MATE_BOUND {
        score + Score::from(ply)
    } else if score < -MATE_BOUND {
        score - Score::from(ply)
    } else {
        score
    }
}

pub(crate) fn score_from_tt(score: Score, ply: u16) -> Score {
    if score > MATE_BOUND {
        score - Score::from(ply)
    } else if score < -MATE_BOUND {
        score + Score::from(ply)
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{INFINITY, MATE};

    #[test]
    fn store_and_probe() {
        let mut table = TranspositionTable::with_entries(1024);
        table.store(0xdead_beef, 5, 1234, 42, Bound::Exact, 0);

        let probe = table.probe(0xdead_beef, 5, 0, -INFINITY, INFINITY);
        assert_eq!(probe.score, Some(42));
        assert_eq!(probe.m, 1234);
        assert_eq!(table.best_move(0xdead_beef), 1234);
    }

    #[test]
    fn shallow_entries_only_give_the_move() {
        let mut table = TranspositionTable::with_entries(1024);
        table.store(7, 3, 99, 10, Bound::Exact, 0);

        let probe = table.probe(7, 6, 0, -INFINITY, INFINITY);
        assert_eq!(probe.score, None);
        assert_eq!(probe.m, 99);
    }

    #[test]
    fn colliding_keys_are_rejected() {
        let mut table = TranspositionTable::with_entries(16);
        table.store(5, 4, 11, 1, Bound::Exact, 0);

        // Same slot, different full key
        let probe = table.probe(5 + 16, 1, 0, -INFINITY, INFINITY);
        assert_eq!(probe.score, None);
        assert_eq!(probe.m, NULL_MOVE);
        assert_eq!(table.best_move(5 + 16), NULL_MOVE);
    }

    #[test]
    fn replace_always() {
        let mut table = TranspositionTable::with_entries(16);
        table.store(5, 9, 11, 1, Bound::Exact, 0);
        // A shallower entry for the colliding key still wins the slot
        table.store(5 + 16, 1, 22, 2, Bound::Exact, 0);

        assert_eq!(table.best_move(5), NULL_MOVE);
        assert_eq!(table.best_move(5 + 16), 22);
    }

    #[test]
    fn bounds_gate_the_score() {
        let mut table = TranspositionTable::with_entries(16);
        table.store(1, 4, 0, 50, Bound::Lower, 0);
        assert_eq!(table.probe(1, 4, 0, 0, 40).score, Some(50));
        assert_eq!(table.probe(1, 4, 0, 0, 100).score, None);

        table.store(2, 4, 0, -50, Bound::Upper, 0);
        assert_eq!(table.probe(2, 4, 0, -40, 0).score, Some(-50));
        assert_eq!(table.probe(2, 4, 0, -100, 0).score, None);
    }

    #[test]
    fn mate_scores_adjust_for_ply() {
        let mut table = TranspositionTable::with_entries(16);
        // Mate two plies below a node at ply 2, root-relative MATE - 4
        table.store(1, 8, 0, MATE - 4, Bound::Exact, 2);

        // The same position reached at the root mates in two plies
        let probe = table.probe(1, 8, 0, -INFINITY, INFINITY);
        assert_eq!(probe.score, Some(MATE - 2));

        // Probed from ply 2 again it comes back unchanged
        let probe = table.probe(1, 8, 2, -INFINITY, INFINITY);
        assert_eq!(probe.score, Some(MATE - 4));

        // Mated-in scores move the other way
        table.store(2, 8, 0, -(MATE - 4), Bound::Exact, 2);
        let probe = table.probe(2, 8, 0, -INFINITY, INFINITY);
        assert_eq!(probe.score, Some(-(MATE - 2)));
    }
}
