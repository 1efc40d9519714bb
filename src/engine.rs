//! The engine facade: owns the game board and the transposition table,
//! and runs searches on a worker thread.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver};

use crate::{
    bitmove::BitMove,
    board::Board,
    error::EngineError,
    movelist::MoveList,
    search::{SearchLimits, SearchResult, Searcher},
    table::TranspositionTable,
    zobrist::{Zobrist, ZOBRIST_SEED},
};

#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    pub table_entries: usize,
    pub zobrist_seed: u64,
    pub rng_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            table_entries: 1 << 20,
            zobrist_seed: ZOBRIST_SEED,
            rng_seed: 0x00c0_ffee,
        }
    }
}

struct Pending {
    rx: Receiver<(SearchResult, TranspositionTable)>,
    handle: JoinHandle<()>,
}

/// One engine instance. At most one search runs at a time; while it
/// does, the transposition table lives on the worker and comes back
/// with the result.
pub struct Engine {
    board: Board,
    table: Option<TranspositionTable>,
    table_entries: usize,
    abort: Arc<AtomicBool>,
    rng_seed: u64,
    pending: Option<Pending>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let zobrist = Arc::new(Zobrist::new(config.zobrist_seed));
        Engine {
            board: Board::start_pos(zobrist),
            table: Some(TranspositionTable::with_entries(config.table_entries)),
            table_entries: config.table_entries,
            abort: Arc::new(AtomicBool::new(false)),
            rng_seed: config.rng_seed,
            pending: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn set_position(&mut self, fen: &str) -> Result<(), EngineError> {
        if self.pending.is_some() {
            return Err(EngineError::SearchInProgress);
        }
        self.board = Board::from_fen(fen, self.board.zobrist())?;
        Ok(())
    }

    /// Play a move given in long algebraic notation, eg `e2e4`
    pub fn make_move_str(&mut self, s: &str) -> Result<(), EngineError> {
        if self.pending.is_some() {
            return Err(EngineError::SearchInProgress);
        }
        for m in MoveList::legal(&self.board) {
            if BitMove::pretty_move(m) == s {
                self.board.make_move(m);
                return Ok(());
            }
        }
        Err(EngineError::UnknownMove(s.to_owned()))
    }

    /// Kick off a search on the worker thread. Fails while a previous
    /// search has not been collected with [`Engine::wait`].
    pub fn start_search(&mut self, limits: SearchLimits) -> Result<(), EngineError> {
        if self.pending.is_some() {
            return Err(EngineError::SearchInProgress);
        }
        let Some(table) = self.table.take() else {
            return Err(EngineError::SearchInProgress);
        };

        self.abort.store(false, Ordering::Relaxed);

        let (tx, rx) = bounded(1);
        let board = self.board.clone();
        let abort = Arc::clone(&self.abort);
        let rng_seed = self.rng_seed;

        let handle = thread::spawn(move || {
            let mut searcher = Searcher::new(board, table, abort, rng_seed);
            let result = searcher.iterate(limits);
            let _ = tx.send((result, searcher.into_table()));
        });

        self.pending = Some(Pending { rx, handle });
        Ok(())
    }

    /// Ask the running search to stop at the next abort poll. The
    /// result, the best answer so far, still has to be collected with
    /// [`Engine::wait`].
    pub fn cancel(&mut self) {
        if self.pending.is_some() {
            self.abort.store(true, Ordering::Relaxed);
        }
    }

    /// Block until the running search finishes and hand out its result.
    pub fn wait(&mut self) -> Result<SearchResult, EngineError> {
        let pending = self.pending.take().ok_or(EngineError::NoSearchRunning)?;
        let received = pending.rx.recv();
        let _ = pending.handle.join();

        match received {
            Ok((result, table)) => {
                self.table = Some(table);
                Ok(result)
            }
            Err(_) => {
                // The worker died with the table, start over with a
                // fresh one
                self.table = Some(TranspositionTable::with_entries(self.table_entries));
                Err(EngineError::WorkerFailed)
            }
        }
    }

    pub fn search_sync(&mut self, limits: SearchLimits) -> Result<SearchResult, EngineError> {
        self.start_search(limits)?;
        self.wait()
    }

    /// Reset to the starting position and wipe the table.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        if self.pending.is_some() {
            return Err(EngineError::SearchInProgress);
        }
        if let Some(table) = &mut self.table {
            table.clear();
        }
        self.board = Board::start_pos(self.board.zobrist());
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}
