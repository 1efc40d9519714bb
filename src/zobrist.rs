use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::defs::{Piece, Square, NUM_SQUARES};

pub const ZOBRIST_SEED: u64 = 0x7f6e_5d4c_3b2a_1908;

/// Zobrist keys for incremental position hashing.
///
/// A table is filled once from a seeded rng and shared behind an `Arc`,
/// every board cloned from the same engine hashes identically.
pub struct Zobrist {
    pieces: [[u64; NUM_SQUARES]; 12],
    castle: [u64; 16],
    ep: [u64; 8],
    side: u64,
}

impl Zobrist {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut pieces = [[0; NUM_SQUARES]; 12];
        for piece in pieces.iter_mut() {
            for sq in piece.iter_mut() {
                *sq = rng.gen();
            }
        }

        let mut castle = [0; 16];
        for key in castle.iter_mut() {
            *key = rng.gen();
        }

        let mut ep = [0; 8];
        for key in ep.iter_mut() {
            *key = rng.gen();
        }

        Zobrist {
            pieces,
            castle,
            ep,
            side: rng.gen(),
        }
    }

    pub fn piece(&self, piece: Piece, sq: Square) -> u64 {
        let idx = piece.c.as_usize() * 6 + piece.t.as_usize();
        self.pieces[idx][sq as usize]
    }

    pub fn castle(&self, rights: u8) -> u64 {
        self.castle[rights as usize]
    }

    pub fn ep(&self, file: Square) -> u64 {
        self.ep[file as usize]
    }

    pub fn side(&self) -> u64 {
        self.side
    }
}

impl Default for Zobrist {
    fn default() -> Self {
        Zobrist::new(ZOBRIST_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{PieceType, Player};

    #[test]
    fn same_seed_same_keys() {
        let a = Zobrist::new(42);
        let b = Zobrist::new(42);
        let piece = Piece::new(PieceType::Knight, Player::Black);
        assert_eq!(a.piece(piece, 33), b.piece(piece, 33));
        assert_eq!(a.castle(0b1010), b.castle(0b1010));
        assert_eq!(a.ep(4), b.ep(4));
        assert_eq!(a.side(), b.side());
    }

    #[test]
    fn different_seeds_differ() {
        let a = Zobrist::new(1);
        let b = Zobrist::new(2);
        assert_ne!(a.side(), b.side());
    }
}
