use chess_core::{Board, Color};
use chess_engine::Engine;

const SEARCH_DEPTH: u8 = 3;

fn main() {
    let mut board = Board::standard();

    println!("Initial board:");
    println!("{board}");
    println!("Evaluation: {}", board.evaluate(Color::White));

    let engine = Engine::new(SEARCH_DEPTH);
    match engine.best_move(&mut board) {
        Some(mv) => {
            println!("\nBest move: {mv}");
            board.apply_move(mv);
            println!("{board}");
            println!("Evaluation: {}", board.evaluate(Color::White));
        }
        None => println!("No moves available."),
    }
}
