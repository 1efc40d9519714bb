use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 fields, got {0}")]
    FieldCount(usize),
    #[error("invalid piece placement character '{0}'")]
    Placement(char),
    #[error("piece placement does not describe 8 ranks of 8 squares")]
    Ranks,
    #[error("each side needs exactly one king")]
    Kings,
    #[error("side to move must be 'w' or 'b'")]
    SideToMove,
    #[error("invalid castling rights character '{0}'")]
    CastlingRights(char),
    #[error("invalid en passant square")]
    EnPassant,
    #[error("invalid halfmove clock")]
    HalfmoveClock,
    #[error("invalid fullmove number")]
    FullmoveNumber,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("a search is already running")]
    SearchInProgress,
    #[error("no search is running")]
    NoSearchRunning,
    #[error("search worker terminated without a result")]
    WorkerFailed,
    #[error("move '{0}' is not legal in the current position")]
    UnknownMove(String),
    #[error(transparent)]
    Fen(#[from] FenError),
}
