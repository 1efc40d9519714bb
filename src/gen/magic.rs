//! Magic bitboard tables for rook and bishop attacks.
//!
//! The magic factors are discovered at startup from a fixed rng seed, so
//! the tables are deterministic without shipping hardcoded constants.
//! Lookup is the usual fancy-magic scheme: a shared flat attack table
//! indexed by `offset + (occ & mask) * factor >> shift`.

use std::sync::LazyLock;
use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{bitboard::BitBoard, defs::Square};

const MAGIC_SEED: u64 = 70_026_072;

pub const ROOK_TABLE_SIZE: usize = 102_400;
pub const BISHOP_TABLE_SIZE: usize = 5_248;

static SLIDERS: LazyLock<SliderTable> = LazyLock::new(SliderTable::build);

pub fn rook_attacks(sq: Square, occ: u64) -> u64 {
    SLIDERS.attacks[SLIDERS.rook[sq as usize].index(occ)]
}

pub fn bishop_attacks(sq: Square, occ: u64) -> u64 {
    SLIDERS.attacks[SLIDERS.bishop[sq as usize].index(occ)]
}

pub fn queen_attacks(sq: Square, occ: u64) -> u64 {
    rook_attacks(sq, occ) | bishop_attacks(sq, occ)
}

/// Blocker-by-blocker ray walk, the oracle the magic tables are
/// verified against. Only used during table construction and in tests.
pub fn sliding_attacks(sq: Square, occ: u64, orthogonal: bool) -> u64 {
    let dirs: [(i8, i8); 4] = if orthogonal {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
    } else {
        [(1, 1), (1, -1), (-1, 1), (-1, -1)]
    };

    let mut attacks = 0;
    for (df, dr) in dirs {
        let mut f = sq % 8 + df;
        let mut r = sq / 8 + dr;
        while (0..8).contains(&f) && (0..8).contains(&r) {
            let s = r * 8 + f;
            attacks |= BitBoard::from_sq(s);
            if BitBoard::contains(occ, s) {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

#[derive(Clone, Copy)]
struct Magic {
    mask: u64,
    factor: u64,
    shift: u32,
    offset: usize,
}

impl Magic {
    const EMPTY: Magic = Magic {
        mask: 0,
        factor: 0,
        shift: 0,
        offset: 0,
    };

    fn index(&self, occ: u64) -> usize {
        self.offset + ((occ & self.mask).wrapping_mul(self.factor) >> self.shift) as usize
    }
}

struct SliderTable {
    rook: [Magic; 64],
    bishop: [Magic; 64],
    attacks: Vec<u64>,
}

impl SliderTable {
    fn build() -> Self {
        let start = Instant::now();

        let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
        let mut attacks = vec![0u64; ROOK_TABLE_SIZE + BISHOP_TABLE_SIZE];
        let mut rook = [Magic::EMPTY; 64];
        let mut bishop = [Magic::EMPTY; 64];
        let mut offset = 0;

        for sq in 0..64 {
            rook[sq as usize] = find_magic(sq, true, &mut offset, &mut attacks, &mut rng);
        }
        for sq in 0..64 {
            bishop[sq as usize] = find_magic(sq, false, &mut offset, &mut attacks, &mut rng);
        }

        debug_assert_eq!(offset, ROOK_TABLE_SIZE + BISHOP_TABLE_SIZE);
        tracing::debug!(elapsed = ?start.elapsed(), "built slider attack tables");

        SliderTable {
            rook,
            bishop,
            attacks,
        }
    }
}

/// Relevant blockers for a slider on `sq`: its empty-board rays with the
/// terminal edge squares stripped.
fn relevance_mask(sq: Square, orthogonal: bool) -> u64 {
    let edges = ((BitBoard::RANK_1 | BitBoard::RANK_8) & !BitBoard::rank_bb(sq))
        | ((BitBoard::FILE_A | BitBoard::FILE_H) & !BitBoard::file_bb(sq));
    sliding_attacks(sq, 0, orthogonal) & !edges
}

fn find_magic(
    sq: Square,
    orthogonal: bool,
    offset: &mut usize,
    attacks: &mut [u64],
    rng: &mut StdRng,
) -> Magic {
    let mask = relevance_mask(sq, orthogonal);
    let bits = mask.count_ones();
    let size = 1usize << bits;
    let shift = 64 - bits;

    // Enumerate every blocker subset with the carry-rippler trick
    let mut occs = Vec::with_capacity(size);
    let mut refs = Vec::with_capacity(size);
    let mut subset = 0u64;
    loop {
        occs.push(subset);
        refs.push(sliding_attacks(sq, subset, orthogonal));
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }

    let slots = &mut attacks[*offset..*offset + size];
    loop {
        // Sparse candidates converge much faster than uniform ones
        let factor = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (mask.wrapping_mul(factor) >> 56).count_ones() < 6 {
            continue;
        }

        slots.fill(0);
        let mut ok = true;
        for i in 0..size {
            let idx = ((occs[i] & mask).wrapping_mul(factor) >> shift) as usize;
            // A slider always attacks at least one square, so zero
            // doubles as the unused-slot marker. Collisions are fine
            // as long as both subsets map to the same attack set.
            if slots[idx] == 0 {
                slots[idx] = refs[i];
            } else if slots[idx] != refs[i] {
                ok = false;
                break;
            }
        }

        if ok {
            let magic = Magic {
                mask,
                factor,
                shift,
                offset: *offset,
            };
            *offset += size;
            return magic;
        }
    }
}
