use crate::{bitmove::BitMove, board::Board, movelist::MoveList};

/// Count the leaf nodes of the legal move tree to `depth`.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let list = MoveList::legal(board);
    if depth == 1 {
        return list.size() as u64;
    }

    let mut nodes = 0;
    for m in list {
        board.make_move(m);
        nodes += perft(board, depth - 1);
        board.unmake_move();
    }
    nodes
}

/// Like [`perft`], but prints the subtree count under each root move.
pub fn divide(board: &mut Board, depth: u8) -> u64 {
    let mut total = 0;
    for m in MoveList::legal(board) {
        board.make_move(m);
        let nodes = perft(board, depth.saturating_sub(1));
        board.unmake_move();

        println!("{}: {nodes}", BitMove::pretty_move(m));
        total += nodes;
    }
    println!("total: {total}");
    total
}
