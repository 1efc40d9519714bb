use std::fmt;
use std::sync::Arc;

use crate::{
    bitboard::BitBoard,
    bitmove::{BitMove, MoveFlag},
    defs::{
        Castling, Piece, PieceType, Player, Square, FEN_START_STRING, NUM_PIECES, NUM_SIDES,
        NUM_SQUARES,
    },
    error::FenError,
    gen::{attack, lines, magic},
    history::History,
    position::Position,
    utils,
    zobrist::Zobrist,
};

/// Full game state: bitboards plus a mailbox, the current [`Position`]
/// and the history stack that make/unmake walks.
///
/// Boards are cheap-ish to clone but moves should be retracted with
/// [`Board::unmake_move`], not by cloning.
#[derive(Clone)]
pub struct Board {
    pub turn: Player,
    piece_bb: [u64; NUM_PIECES],
    side_bb: [u64; NUM_SIDES],
    pieces: [Piece; NUM_SQUARES],
    pub pos: Position,
    history: History,
    zobrist: Arc<Zobrist>,
}

impl Board {
    pub fn start_pos(zobrist: Arc<Zobrist>) -> Board {
        Board::from_fen(FEN_START_STRING, zobrist).expect("start fen is valid")
    }

    pub fn from_fen(fen: &str, zobrist: Arc<Zobrist>) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::FieldCount(fields.len()));
        }

        let mut board = Board {
            turn: Player::White,
            piece_bb: [0; NUM_PIECES],
            side_bb: [0; NUM_SIDES],
            pieces: [Piece::NONE; NUM_SQUARES],
            pos: Position::new(),
            history: History::new(),
            zobrist,
        };

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::Ranks);
        }
        for (i, rank) in ranks.iter().enumerate() {
            let mut file: Square = 0;
            for c in rank.chars() {
                if let Some(d) = c.to_digit(10) {
                    if d == 0 || d > 8 {
                        return Err(FenError::Placement(c));
                    }
                    file += d as Square;
                } else {
                    let t = PieceType::from_fen_char(c).ok_or(FenError::Placement(c))?;
                    if file >= 8 {
                        return Err(FenError::Ranks);
                    }
                    let side = if c.is_ascii_uppercase() {
                        Player::White
                    } else {
                        Player::Black
                    };
                    board.add_piece(Piece::new(t, side), (7 - i as Square) * 8 + file);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::Ranks);
            }
        }

        if BitBoard::count(board.player_piece_bb(Player::White, PieceType::King)) != 1
            || BitBoard::count(board.player_piece_bb(Player::Black, PieceType::King)) != 1
        {
            return Err(FenError::Kings);
        }

        match fields[1] {
            "w" => {}
            "b" => {
                board.turn = Player::Black;
                board.pos.key ^= board.zobrist.side();
            }
            _ => return Err(FenError::SideToMove),
        }

        if fields[2] != "-" {
            for c in fields[2].chars() {
                board.pos.castling |= match c {
                    'K' => Castling::WK,
                    'Q' => Castling::WQ,
                    'k' => Castling::BK,
                    'q' => Castling::BQ,
                    _ => return Err(FenError::CastlingRights(c)),
                };
            }
        }
        // A right is only real if its king and rook still sit on their
        // home squares, otherwise castling it later would corrupt the
        // board
        for (bit, side, king_sq, rook_sq) in [
            (Castling::WK, Player::White, 4, 7),
            (Castling::WQ, Player::White, 4, 0),
            (Castling::BK, Player::Black, 60, 63),
            (Castling::BQ, Player::Black, 60, 56),
        ] {
            if board.pos.castling & bit != 0
                && (board.piece(king_sq) != Piece::new(PieceType::King, side)
                    || board.piece(rook_sq) != Piece::new(PieceType::Rook, side))
            {
                board.pos.castling &= !bit;
            }
        }
        board.pos.key ^= board.zobrist.castle(board.pos.castling);

        if fields[3] != "-" {
            let sq = utils::square_from_string(fields[3]).ok_or(FenError::EnPassant)?;
            if sq / 8 != 2 && sq / 8 != 5 {
                return Err(FenError::EnPassant);
            }
            board.pos.ep_square = sq;
            board.pos.key ^= board.zobrist.ep(sq % 8);
        }

        board.pos.rule_fifty = fields[4].parse().map_err(|_| FenError::HalfmoveClock)?;
        let fullmove: u16 = fields[5].parse().map_err(|_| FenError::FullmoveNumber)?;
        if fullmove == 0 {
            return Err(FenError::FullmoveNumber);
        }
        board.pos.ply = (fullmove - 1) * 2 + u16::from(board.turn == Player::Black);

        board.set_check_info();
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let piece = self.pieces[(rank * 8 + file) as usize];
                if piece.is_none() {
                    empty += 1;
                } else {
                    if empty > 0 {
                        fen.push(char::from_digit(empty, 10).unwrap_or('0'));
                        empty = 0;
                    }
                    fen.push(piece.fen_char());
                }
            }
            if empty > 0 {
                fen.push(char::from_digit(empty, 10).unwrap_or('0'));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.turn {
            Player::White => 'w',
            Player::Black => 'b',
        });

        fen.push(' ');
        if self.pos.castling == Castling::NONE {
            fen.push('-');
        } else {
            for (bit, c) in [
                (Castling::WK, 'K'),
                (Castling::WQ, 'Q'),
                (Castling::BK, 'k'),
                (Castling::BQ, 'q'),
            ] {
                if self.pos.castling & bit != 0 {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        if self.can_ep() {
            fen.push_str(&utils::square_to_string(self.pos.ep_square));
        } else {
            fen.push('-');
        }

        fen.push_str(&format!(
            " {} {}",
            self.pos.rule_fifty,
            self.pos.ply / 2 + 1
        ));

        fen
    }
}

/// Accessors
impl Board {
    pub const fn key(&self) -> u64 {
        self.pos.key
    }

    pub fn piece(&self, sq: Square) -> Piece {
        self.pieces[sq as usize]
    }

    pub fn piece_type(&self, sq: Square) -> PieceType {
        self.pieces[sq as usize].t
    }

    pub const fn occ_bb(&self) -> u64 {
        self.side_bb[0] | self.side_bb[1]
    }

    pub const fn player_bb(&self, side: Player) -> u64 {
        self.side_bb[side.as_usize()]
    }

    pub const fn cur_player_bb(&self) -> u64 {
        self.player_bb(self.turn)
    }

    pub const fn piece_bb(&self, t: PieceType) -> u64 {
        self.piece_bb[t.as_usize()]
    }

    /// Pieces moving like `t`, ie including queens
    pub const fn piece_like_bb(&self, t: PieceType) -> u64 {
        self.piece_bb(t) | self.piece_bb(PieceType::Queen)
    }

    pub const fn player_piece_bb(&self, side: Player, t: PieceType) -> u64 {
        self.piece_bb(t) & self.player_bb(side)
    }

    pub const fn player_piece_like_bb(&self, side: Player, t: PieceType) -> u64 {
        self.piece_like_bb(t) & self.player_bb(side)
    }

    pub fn king_square(&self, side: Player) -> Square {
        BitBoard::bit_scan_forward(self.player_piece_bb(side, PieceType::King))
    }

    pub fn cur_king_square(&self) -> Square {
        self.king_square(self.turn)
    }

    pub const fn in_check(&self) -> bool {
        self.pos.checkers_bb != 0
    }

    pub const fn can_ep(&self) -> bool {
        self.pos.ep_square != 64
    }

    pub const fn ep_file(&self) -> Square {
        self.pos.ep_square % 8
    }

    pub const fn can_castle_king(&self, side: Player) -> bool {
        self.pos.castling
            & match side {
                Player::White => Castling::WK,
                Player::Black => Castling::BK,
            }
            != 0
    }

    pub const fn can_castle_queen(&self, side: Player) -> bool {
        self.pos.castling
            & match side {
                Player::White => Castling::WQ,
                Player::Black => Castling::BQ,
            }
            != 0
    }

    /// Pieces that stand alone between a slider and `side`'s king
    pub const fn blockers(&self, side: Player) -> u64 {
        self.pos.king_blockers[side.as_usize()]
    }

    pub const fn half_move_count(&self) -> u16 {
        self.pos.ply
    }
}

/// Move making
impl Board {
    pub fn make_move(&mut self, m: u16) {
        self.history.push(self.pos);

        let us = self.turn;
        let opp = us.opp();
        let (src, dest) = BitMove::from_to(m);
        let flag = BitMove::flag(m);
        let piece = self.piece_type(src);

        self.pos.ply += 1;
        self.pos.rule_fifty += 1;
        self.pos.last_move = m;
        self.pos.captured_piece = PieceType::None;

        if piece == PieceType::Pawn {
            self.pos.rule_fifty = 0;
        }

        if BitMove::is_ep(m) {
            self.pos.captured_piece = PieceType::Pawn;
            self.remove_piece(dest - us.pawn_dir());
        } else if BitMove::is_cap(m) {
            self.pos.captured_piece = self.piece_type(dest);
            self.pos.rule_fifty = 0;
            self.remove_piece(dest);
        }

        if flag == MoveFlag::CASTLE_KING {
            let rook = self.piece(us.castle_king_sq() + 1);
            self.remove_piece(us.castle_king_sq() + 1);
            self.add_piece(rook, us.castle_king_sq() - 1);
        } else if flag == MoveFlag::CASTLE_QUEEN {
            let rook = self.piece(us.castle_queen_sq() - 2);
            self.remove_piece(us.castle_queen_sq() - 2);
            self.add_piece(rook, us.castle_queen_sq() + 1);
        }

        let moved = self.piece(src);
        self.remove_piece(src);
        if BitMove::is_prom(m) {
            self.add_piece(Piece::new(BitMove::prom_type(flag), us), dest);
        } else {
            self.add_piece(moved, dest);
        }

        if self.can_ep() {
            self.pos.key ^= self.zobrist.ep(self.ep_file());
            self.pos.ep_square = 64;
        }
        if flag == MoveFlag::DOUBLE_PAWN_PUSH {
            self.pos.ep_square = dest - us.pawn_dir();
            self.pos.key ^= self.zobrist.ep(self.ep_file());
        }

        let old_rights = self.pos.castling;
        if piece == PieceType::King {
            self.pos.castling &= match us {
                Player::White => !Castling::WHITE_ALL,
                Player::Black => !Castling::BLACK_ALL,
            };
        }
        self.update_castling_rights(src, dest);
        if self.pos.castling != old_rights {
            self.pos.key ^=
                self.zobrist.castle(old_rights) ^ self.zobrist.castle(self.pos.castling);
        }

        self.pos.key ^= self.zobrist.side();
        self.turn = opp;
        self.set_check_info();
    }

    /// Retract the last made move. The board must have at least one
    /// move of history.
    pub fn unmake_move(&mut self) {
        let m = self.pos.last_move;
        let us = self.turn;
        let mover = us.opp();
        let (src, dest) = BitMove::from_to(m);
        let flag = BitMove::flag(m);
        let captured = self.pos.captured_piece;

        let piece_on_dest = self.piece(dest);
        self.remove_piece(dest);
        if BitMove::is_prom(m) {
            self.add_piece(Piece::new(PieceType::Pawn, mover), src);
        } else {
            self.add_piece(piece_on_dest, src);
        }

        if BitMove::is_ep(m) {
            self.add_piece(Piece::new(PieceType::Pawn, us), dest - mover.pawn_dir());
        } else if BitMove::is_cap(m) {
            self.add_piece(Piece::new(captured, us), dest);
        }

        if flag == MoveFlag::CASTLE_KING {
            let rook = self.piece(mover.castle_king_sq() - 1);
            self.remove_piece(mover.castle_king_sq() - 1);
            self.add_piece(rook, mover.castle_king_sq() + 1);
        } else if flag == MoveFlag::CASTLE_QUEEN {
            let rook = self.piece(mover.castle_queen_sq() + 1);
            self.remove_piece(mover.castle_queen_sq() + 1);
            self.add_piece(rook, mover.castle_queen_sq() - 2);
        }

        // key, clocks, rights and check info all come back wholesale
        self.pos = self.history.pop();
        self.turn = mover;
    }

    fn add_piece(&mut self, piece: Piece, sq: Square) {
        self.pieces[sq as usize] = piece;
        BitBoard::set_bit(&mut self.piece_bb[piece.t], sq);
        BitBoard::set_bit(&mut self.side_bb[piece.c], sq);
        self.pos.key ^= self.zobrist.piece(piece, sq);
    }

    fn remove_piece(&mut self, sq: Square) {
        let piece = self.pieces[sq as usize];
        self.pieces[sq as usize] = Piece::NONE;
        BitBoard::pop_bit(&mut self.piece_bb[piece.t], sq);
        BitBoard::pop_bit(&mut self.side_bb[piece.c], sq);
        self.pos.key ^= self.zobrist.piece(piece, sq);
    }

    fn update_castling_rights(&mut self, src: Square, dest: Square) {
        for sq in [src, dest] {
            match sq {
                0 => self.pos.castling &= !Castling::WQ,
                7 => self.pos.castling &= !Castling::WK,
                56 => self.pos.castling &= !Castling::BQ,
                63 => self.pos.castling &= !Castling::BK,
                _ => (),
            }
        }
    }
}

/// Attack queries
impl Board {
    /// All pieces of either color attacking `sq` under occupancy `occ`
    pub fn attackers_to(&self, sq: Square, occ: u64) -> u64 {
        attack::pawn_attacks(sq, Player::White)
            & self.player_piece_bb(Player::Black, PieceType::Pawn)
            | attack::pawn_attacks(sq, Player::Black)
                & self.player_piece_bb(Player::White, PieceType::Pawn)
            | attack::knight_attacks(sq) & self.piece_bb(PieceType::Knight)
            | magic::rook_attacks(sq, occ) & self.piece_like_bb(PieceType::Rook)
            | magic::bishop_attacks(sq, occ) & self.piece_like_bb(PieceType::Bishop)
            | attack::king_attacks(sq) & self.piece_bb(PieceType::King)
    }

    pub fn set_check_info(&mut self) {
        let us = self.turn;
        let opp = us.opp();

        self.pos.checkers_bb =
            self.attackers_to(self.king_square(us), self.occ_bb()) & self.player_bb(opp);
        self.pos.king_blockers[us] = self.slider_blockers(opp, self.king_square(us));
        self.pos.king_blockers[opp] = self.slider_blockers(us, self.king_square(opp));
    }

    /// Pieces that are the sole occupant between a slider of
    /// `attacker_side` and `king_sq`.
    fn slider_blockers(&self, attacker_side: Player, king_sq: Square) -> u64 {
        let mut blockers = 0;
        let occ = self.occ_bb();

        let mut snipers = magic::rook_attacks(king_sq, 0)
            & self.player_piece_like_bb(attacker_side, PieceType::Rook)
            | magic::bishop_attacks(king_sq, 0)
                & self.player_piece_like_bb(attacker_side, PieceType::Bishop);

        while snipers != 0 {
            let sniper_sq = BitBoard::pop_lsb(&mut snipers);
            let wall = lines::between(king_sq, sniper_sq) & occ;
            if wall != 0 && !BitBoard::more_than_one(wall) {
                blockers |= wall;
            }
        }

        blockers
    }
}

/// Hashing helpers
impl Board {
    /// Recompute the zobrist key from scratch. The incremental key in
    /// `pos.key` must always equal this.
    pub fn compute_key(&self) -> u64 {
        let mut key = 0;
        for sq in 0..NUM_SQUARES as Square {
            let piece = self.piece(sq);
            if !piece.is_none() {
                key ^= self.zobrist.piece(piece, sq);
            }
        }
        key ^= self.zobrist.castle(self.pos.castling);
        if self.can_ep() {
            key ^= self.zobrist.ep(self.ep_file());
        }
        if self.turn == Player::Black {
            key ^= self.zobrist.side();
        }
        key
    }

    /// Has the current position occurred before within the fifty-move
    /// window? Twofold is enough for search purposes.
    pub fn is_repetition(&self) -> bool {
        let len = self.history.len();
        let span = (self.pos.rule_fifty as usize).min(len);
        (1..=span).any(|back| self.history.key(len - back) == self.pos.key)
    }

    pub fn zobrist(&self) -> Arc<Zobrist> {
        Arc::clone(&self.zobrist)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let piece = self.pieces[(rank * 8 + file) as usize];
                let c = if piece.is_none() { '.' } else { piece.fen_char() };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        writeln!(f, "fen: {}", self.to_fen())?;
        write!(f, "key: {:#018x}", self.pos.key)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zobrist() -> Arc<Zobrist> {
        Arc::new(Zobrist::default())
    }

    #[test]
    fn start_pos_fields() {
        let board = Board::start_pos(zobrist());
        assert_eq!(board.turn, Player::White);
        assert_eq!(board.pos.castling, Castling::ALL);
        assert!(!board.can_ep());
        assert!(!board.in_check());
        assert_eq!(BitBoard::count(board.occ_bb()), 32);
        assert_eq!(board.king_square(Player::White), 4);
        assert_eq!(board.king_square(Player::Black), 60);
        assert_eq!(board.pos.key, board.compute_key());
    }

    #[test]
    fn fen_round_trip() {
        let fens = [
            FEN_START_STRING,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "4k3/8/8/8/8/8/8/4K3 b - - 12 40",
        ];
        for fen in fens {
            let board = Board::from_fen(fen, zobrist()).unwrap();
            assert_eq!(board.to_fen(), fen);
            assert_eq!(board.pos.key, board.compute_key());
        }
    }

    #[test]
    fn malformed_fens() {
        let z = zobrist();
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - -", Arc::clone(&z)).unwrap_err(),
            FenError::FieldCount(4)
        );
        assert_eq!(
            Board::from_fen("9/8/8/8/8/8/8/8 w - - 0 1", Arc::clone(&z)).unwrap_err(),
            FenError::Placement('9')
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1", Arc::clone(&z)).unwrap_err(),
            FenError::Kings
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1", Arc::clone(&z)).unwrap_err(),
            FenError::SideToMove
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w Kx - 0 1", Arc::clone(&z)).unwrap_err(),
            FenError::CastlingRights('x')
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - e5 0 1", Arc::clone(&z)).unwrap_err(),
            FenError::EnPassant
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1", Arc::clone(&z)).unwrap_err(),
            FenError::HalfmoveClock
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 0", Arc::clone(&z)).unwrap_err(),
            FenError::FullmoveNumber
        );
    }

    #[test]
    fn make_unmake_restores_everything() {
        let mut board = Board::start_pos(zobrist());
        let before_fen = board.to_fen();
        let before_key = board.pos.key;

        // e4
        let e4 = BitMove::from_flag(12, 28, MoveFlag::DOUBLE_PAWN_PUSH);
        board.make_move(e4);
        assert_eq!(board.turn, Player::Black);
        assert!(board.can_ep());
        assert_eq!(board.pos.ep_square, 20);
        assert_eq!(board.pos.key, board.compute_key());
        assert_ne!(board.pos.key, before_key);

        board.unmake_move();
        assert_eq!(board.to_fen(), before_fen);
        assert_eq!(board.pos.key, before_key);
    }

    #[test]
    fn castling_moves_the_rook() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let mut board = Board::from_fen(fen, zobrist()).unwrap();

        let castle = BitMove::from_flag(4, 6, MoveFlag::CASTLE_KING);
        board.make_move(castle);
        assert_eq!(board.piece_type(6), PieceType::King);
        assert_eq!(board.piece_type(5), PieceType::Rook);
        assert_eq!(board.piece_type(7), PieceType::None);
        assert!(!board.can_castle_king(Player::White));
        assert!(!board.can_castle_queen(Player::White));
        assert!(board.can_castle_king(Player::Black));
        assert_eq!(board.pos.key, board.compute_key());

        board.unmake_move();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn en_passant_capture_removes_the_pawn() {
        let mut board =
            Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3", zobrist()).unwrap();
        let ep = BitMove::from_flag(36, 43, MoveFlag::EN_PASSANT);
        board.make_move(ep);
        assert_eq!(board.piece_type(43), PieceType::Pawn);
        assert_eq!(board.piece_type(35), PieceType::None);
        assert_eq!(board.pos.key, board.compute_key());

        board.unmake_move();
        assert_eq!(board.piece_type(35), PieceType::Pawn);
        assert_eq!(board.piece_type(36), PieceType::Pawn);
        assert_eq!(board.piece_type(43), PieceType::None);
    }

    #[test]
    fn rook_capture_clears_castling_rights() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let mut board = Board::from_fen(fen, zobrist()).unwrap();
        // Ra1xa8 takes black's queen-side rook
        board.make_move(BitMove::from_flag(0, 56, MoveFlag::CAPTURE));
        assert!(!board.can_castle_queen(Player::White));
        assert!(!board.can_castle_queen(Player::Black));
        assert!(board.can_castle_king(Player::White));
        assert!(board.can_castle_king(Player::Black));
        assert_eq!(board.pos.key, board.compute_key());
    }

    #[test]
    fn misplaced_rook_clears_castling_rights() {
        // Claimed rights without the matching rook on its home square
        // must not survive parsing
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1", zobrist()).unwrap();
        assert_eq!(board.pos.castling, Castling::NONE);
        assert_eq!(board.pos.key, board.compute_key());

        // A king off its home square drops both of that side's rights
        let board =
            Board::from_fen("r2k3r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", zobrist()).unwrap();
        assert!(board.can_castle_king(Player::White));
        assert!(board.can_castle_queen(Player::White));
        assert!(!board.can_castle_king(Player::Black));
        assert!(!board.can_castle_queen(Player::Black));
        assert_eq!(board.pos.key, board.compute_key());
    }

    #[test]
    fn promotion_spawns_the_piece() {
        let mut board =
            Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", zobrist()).unwrap();
        board.make_move(BitMove::from_flag(48, 56, MoveFlag::PROMOTE_QUEEN));
        assert_eq!(board.piece_type(56), PieceType::Queen);
        assert_eq!(board.pos.key, board.compute_key());

        board.unmake_move();
        assert_eq!(board.piece_type(48), PieceType::Pawn);
        assert_eq!(board.piece_type(56), PieceType::None);
    }

    #[test]
    fn check_detection() {
        let board =
            Board::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1", zobrist()).unwrap();
        assert!(board.in_check());
        assert_eq!(board.pos.checkers_bb, BitBoard::from_sq(12));
    }

    #[test]
    fn pinned_piece_is_a_blocker() {
        let board =
            Board::from_fen("4k3/8/4r3/8/8/8/4N3/4K3 w - - 0 1", zobrist()).unwrap();
        // white knight on e2 shields the white king from the e6 rook
        assert!(BitBoard::contains(board.blockers(Player::White), 12));
        assert!(!board.in_check());
    }
}
