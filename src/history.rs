use crate::{defs::MAX_HISTORY, position::Position};

/// Fixed-size LIFO stack of [`Position`] snapshots.
#[derive(Clone)]
pub struct History {
    positions: [Position; MAX_HISTORY],
    count: usize,
}

impl History {
    pub const fn new() -> Self {
        History {
            positions: [Position::new(); MAX_HISTORY],
            count: 0,
        }
    }

    pub fn push(&mut self, pos: Position) {
        assert!(self.count < MAX_HISTORY, "history overflow");
        self.positions[self.count] = pos;
        self.count += 1;
    }

    pub fn pop(&mut self) -> Position {
        assert!(self.count > 0, "history underflow");
        self.count -= 1;
        self.positions[self.count]
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Hash key of the `idx`-th oldest stored position
    pub fn key(&self, idx: usize) -> u64 {
        self.positions[idx].key
    }

    pub fn clear(&mut self) {
        self.count = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        History::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        let mut a = Position::new();
        a.key = 1;
        let mut b = Position::new();
        b.key = 2;

        history.push(a);
        history.push(b);
        assert_eq!(history.len(), 2);
        assert_eq!(history.key(0), 1);

        assert_eq!(history.pop().key, 2);
        assert_eq!(history.pop().key, 1);
        assert!(history.is_empty());
    }
}
