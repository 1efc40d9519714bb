pub mod bitboard;
pub mod bitmove;
pub mod board;
pub mod defs;
pub mod engine;
pub mod error;
pub mod eval;
pub mod gen;
pub mod history;
pub mod movegen;
pub mod movelist;
pub mod order;
pub mod perft;
pub mod position;
pub mod psqt;
pub mod search;
pub mod table;
pub mod utils;
pub mod zobrist;
