use std::ops::{Index, IndexMut};

use crate::bitboard::BitBoard;

pub const WHITE_IDX: usize = 0;
pub const BLACK_IDX: usize = 1;

pub const NUM_PIECES: usize = 6;
pub const NUM_SIDES: usize = 2;
pub const NUM_SQUARES: usize = 64;

/// Upper bound on the number of legal moves in any reachable position
pub const MAX_MOVES: usize = 256;
/// Upper bound on game length plus search stack depth
pub const MAX_HISTORY: usize = 512;

pub type Square = i8;
pub type Score = i32;

/// The all-zero move sentinel. A real move can never encode as zero,
/// since a quiet move from a1 to a1 is unconstructible.
pub const NULL_MOVE: u16 = 0;

pub const FEN_START_STRING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Score of a mate delivered at the root
pub const MATE: Score = 100_000;
/// Scores beyond this threshold encode a forced mate
pub const MATE_BOUND: Score = MATE - 1_000;
pub const INFINITY: Score = 200_000;

/// Middlegame-ish material values, indexed by [`PieceType`]
pub const MG_VALUE: [Score; NUM_PIECES] = [100, 300, 330, 500, 900, 0];

pub struct Castling;

impl Castling {
    pub const WQ: u8 = 1;
    pub const WK: u8 = 2;
    pub const BQ: u8 = 4;
    pub const BK: u8 = 8;
    pub const WHITE_ALL: u8 = 3;
    pub const BLACK_ALL: u8 = 12;
    pub const NONE: u8 = 0;
    pub const ALL: u8 = 15;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const fn opp(&self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Board offset of a single pawn push
    pub const fn pawn_dir(&self) -> Square {
        match self {
            Player::White => 8,
            Player::Black => -8,
        }
    }

    /// The rank a pawn lands on after a single push from its home rank
    pub const fn rank_3(&self) -> u64 {
        match self {
            Player::White => BitBoard::RANK_3,
            Player::Black => BitBoard::RANK_6,
        }
    }

    /// The rank a pawn promotes from
    pub const fn rank_7(&self) -> u64 {
        match self {
            Player::White => BitBoard::RANK_7,
            Player::Black => BitBoard::RANK_2,
        }
    }

    pub const fn castle_king_sq(&self) -> Square {
        match self {
            Player::White => 6,
            Player::Black => 62,
        }
    }

    pub const fn castle_queen_sq(&self) -> Square {
        match self {
            Player::White => 2,
            Player::Black => 58,
        }
    }

    pub const fn as_usize(self) -> usize {
        self as usize
    }
}

impl Index<Player> for [u64; NUM_SIDES] {
    type Output = u64;

    fn index(&self, index: Player) -> &Self::Output {
        &self[index.as_usize()]
    }
}

impl IndexMut<Player> for [u64; NUM_SIDES] {
    fn index_mut(&mut self, index: Player) -> &mut Self::Output {
        &mut self[index.as_usize()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    None,
}

impl PieceType {
    pub const fn as_usize(self) -> usize {
        match self {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Queen => 4,
            PieceType::King => 5,
            PieceType::None => 6,
        }
    }

    pub const fn mg_value(self) -> Score {
        match self {
            PieceType::None => 0,
            _ => MG_VALUE[self.as_usize()],
        }
    }

    pub fn from_fen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl Index<PieceType> for [u64; NUM_PIECES] {
    type Output = u64;

    fn index(&self, index: PieceType) -> &Self::Output {
        &self[index.as_usize()]
    }
}

impl IndexMut<PieceType> for [u64; NUM_PIECES] {
    fn index_mut(&mut self, index: PieceType) -> &mut Self::Output {
        &mut self[index.as_usize()]
    }
}

/// A colored piece as stored in the mailbox. An empty square is
/// [`Piece::NONE`]; its color field is meaningless and must not be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub t: PieceType,
    pub c: Player,
}

impl Piece {
    pub const NONE: Piece = Piece {
        t: PieceType::None,
        c: Player::White,
    };

    pub const fn new(t: PieceType, c: Player) -> Self {
        Piece { t, c }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self.t, PieceType::None)
    }

    pub fn fen_char(&self) -> char {
        let c = match self.t {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
            PieceType::None => ' ',
        };

        match self.c {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }
}
