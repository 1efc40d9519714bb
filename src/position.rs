use crate::defs::{PieceType, Square, NUM_SIDES, NULL_MOVE};

/// Per-ply state that make_move cannot cheaply recompute on unmake.
/// A copy is pushed onto the board's history before every move.
#[derive(Clone, Copy, Debug)]
pub struct Position {
    pub castling: u8,
    pub rule_fifty: u8,
    /// Halfmoves played since the starting position of the game
    pub ply: u16,
    /// 64 when no en passant capture is available
    pub ep_square: Square,
    pub key: u64,
    /// Enemy pieces currently giving check
    pub checkers_bb: u64,
    /// Per side, own pieces that shield the own king from a slider
    pub king_blockers: [u64; NUM_SIDES],
    pub captured_piece: PieceType,
    pub last_move: u16,
}

impl Position {
    pub const fn new() -> Self {
        Position {
            castling: 0,
            rule_fifty: 0,
            ply: 0,
            ep_square: 64,
            key: 0,
            checkers_bb: 0,
            king_blockers: [0; NUM_SIDES],
            captured_piece: PieceType::None,
            last_move: NULL_MOVE,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
