use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, Difficulty, GameState, GameStatus, Mark, SessionRng, select_move};

fn bench_search_empty_board() {
    let board = Board::new();
    let mut rng = SessionRng::new(1);
    select_move(&board, Difficulty::VeryHigh, &mut rng);
}

fn bench_search_mid_game() {
    let mut board = Board::new();
    for (cell, mark) in [(0, Mark::X), (4, Mark::O), (8, Mark::X)] {
        board.set(cell, mark);
    }
    let mut rng = SessionRng::new(1);
    select_move(&board, Difficulty::VeryHigh, &mut rng);
}

// Random X against the searching O, driven through the session layer.
fn bench_full_game_random_vs_search() {
    let mut state = GameState::new();
    let mut rng = SessionRng::new(1);

    while state.status == GameStatus::InProgress {
        let tier = if state.current_mark == Mark::X {
            Difficulty::Easy
        } else {
            Difficulty::VeryHigh
        };
        let cell = match select_move(&state.board, tier, &mut rng) {
            Some(cell) => cell,
            None => break,
        };
        state.place_mark(cell).unwrap();
    }
}

fn bot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot");

    group.bench_function("search_empty_board", |b| b.iter(bench_search_empty_board));

    group.bench_function("search_mid_game", |b| b.iter(bench_search_mid_game));

    group.bench_function("full_game_random_vs_search", |b| {
        b.iter(bench_full_game_random_vs_search)
    });

    group.finish();
}

criterion_group!(benches, bot_bench);
criterion_main!(benches);
