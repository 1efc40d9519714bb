//! Line-based shell around the engine, loosely modeled on UCI.

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use reynaert::{
    bitmove::BitMove,
    defs::FEN_START_STRING,
    engine::{Engine, EngineConfig},
    error::EngineError,
    eval,
    movelist::MoveList,
    perft,
    search::SearchLimits,
};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut engine = Engine::new(EngineConfig::default());
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, rest)) = args.split_first() else {
            continue;
        };

        match cmd {
            "quit" => break,
            "d" => println!("{}", engine.board()),
            "position" => {
                if let Err(e) = handle_position(&mut engine, rest) {
                    eprintln!("{e}");
                }
            }
            "go" => {
                let mut limits = SearchLimits::default();
                if let Some(idx) = rest.iter().position(|&t| t == "depth") {
                    if let Some(depth) = rest.get(idx + 1).and_then(|s| s.parse().ok()) {
                        limits.depth = depth;
                    }
                }
                match engine.search_sync(limits) {
                    Ok(result) => {
                        println!(
                            "info depth {} score {} nodes {}",
                            result.depth, result.score, result.nodes
                        );
                        println!("bestmove {}", BitMove::pretty_move(result.best_move));
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            "perft" => {
                let depth = rest.first().and_then(|s| s.parse().ok()).unwrap_or(5);
                let mut board = engine.board().clone();
                perft::divide(&mut board, depth);
            }
            "eval" => println!("{}", eval::evaluate(engine.board())),
            "moves" => {
                let pretty: Vec<String> = MoveList::legal(engine.board())
                    .map(BitMove::pretty_move)
                    .collect();
                println!("{}", pretty.join(" "));
            }
            "ucinewgame" => {
                if let Err(e) = engine.new_game() {
                    eprintln!("{e}");
                }
            }
            _ => eprintln!("unknown command: {cmd}"),
        }
    }

    Ok(())
}

fn handle_position(engine: &mut Engine, args: &[&str]) -> Result<(), EngineError> {
    let empty: &[&str] = &[];
    let (fen, moves) = match args.first() {
        Some(&"startpos") => {
            let moves = if args.get(1) == Some(&"moves") {
                &args[2..]
            } else {
                empty
            };
            (FEN_START_STRING.to_owned(), moves)
        }
        Some(&"fen") => {
            let rest = &args[1..];
            let split = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
            let moves = if split < rest.len() {
                &rest[split + 1..]
            } else {
                empty
            };
            (rest[..split].join(" "), moves)
        }
        _ => {
            eprintln!("usage: position (startpos | fen <fen>) [moves ...]");
            return Ok(());
        }
    };

    engine.set_position(&fen)?;
    for m in moves {
        engine.make_move_str(m)?;
    }
    Ok(())
}
