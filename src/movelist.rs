use crate::{
    board::Board,
    defs::{Score, MAX_MOVES, NULL_MOVE},
    movegen,
};

/// Stack-allocated list of scored moves.
#[derive(Clone)]
pub struct MoveList {
    entries: [(u16, Score); MAX_MOVES],
    count: usize,
    current: usize,
}

impl MoveList {
    pub const fn new() -> Self {
        MoveList {
            entries: [(NULL_MOVE, 0); MAX_MOVES],
            count: 0,
            current: 0,
        }
    }

    /// All legal moves in the given position
    pub fn legal(board: &Board) -> Self {
        movegen::generate_legal(board)
    }

    /// Legal captures and queen promotions, or every evasion when the
    /// side to move is in check
    pub fn captures(board: &Board) -> Self {
        movegen::generate_captures(board)
    }

    pub fn push(&mut self, m: u16) {
        debug_assert!(self.count < MAX_MOVES);
        self.entries[self.count] = (m, 0);
        self.count += 1;
    }

    pub fn get(&self, idx: usize) -> u16 {
        self.entries[idx].0
    }

    pub fn score(&self, idx: usize) -> Score {
        self.entries[idx].1
    }

    pub fn set_score(&mut self, idx: usize, score: Score) {
        self.entries[idx].1 = score;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
    }

    pub const fn size(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, m: u16) -> bool {
        self.entries[..self.count].iter().any(|&(e, _)| e == m)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Iterator for MoveList {
    type Item = u16;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.count {
            return None;
        }
        let m = self.entries[self.current].0;
        self.current += 1;
        Some(m)
    }
}
