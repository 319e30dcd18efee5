use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::{
    Difficulty, GameState, GameStatus, Mark, ScoreBoard, SessionRng, log, select_move,
};

/// Extra random wait added to the configured bot delay, so the "thinking"
/// pause does not feel mechanical.
const BOT_DELAY_JITTER_MS: u64 = 500;

pub fn run_vs_cpu(
    difficulty: Difficulty,
    bot_delay_ms: u64,
    scores: &mut ScoreBoard,
    rng: &mut SessionRng,
) {
    log!("Starting game vs CPU ({})", difficulty.label());
    println!("You are X, the computer is O.");

    loop {
        let mut state = GameState::new();

        while state.status == GameStatus::InProgress {
            if state.current_mark == Mark::X {
                render_board(&state);
                let cell = prompt_cell(&state);
                // Cell was validated against the live board, cannot fail.
                state.place_mark(cell).unwrap();
            } else {
                bot_turn(&mut state, difficulty, bot_delay_ms, rng);
            }
        }

        finish_game(&state, scores);

        if !prompt_yes_no("Play again? (y/n): ") {
            break;
        }
    }
}

pub fn run_pass_and_play(scores: &mut ScoreBoard) {
    log!("Starting pass-and-play game");

    loop {
        let mut state = GameState::new();

        while state.status == GameStatus::InProgress {
            render_board(&state);
            println!("Player {}, your move.", state.current_mark.symbol());
            let cell = prompt_cell(&state);
            state.place_mark(cell).unwrap();
        }

        finish_game(&state, scores);

        if !prompt_yes_no("Rematch? (y/n): ") {
            break;
        }
    }
}

fn bot_turn(state: &mut GameState, difficulty: Difficulty, bot_delay_ms: u64, rng: &mut SessionRng) {
    println!("Computer is thinking...");
    let jitter = rng.random_range(0..=BOT_DELAY_JITTER_MS);
    thread::sleep(Duration::from_millis(bot_delay_ms + jitter));

    if let Some(cell) = select_move(&state.board, difficulty, rng) {
        state.place_mark(cell).unwrap();
        log!("Computer played cell {}", cell + 1);
    }
}

fn finish_game(state: &GameState, scores: &mut ScoreBoard) {
    render_board(state);
    scores.record(state.status);

    match state.winner() {
        Some(mark) => {
            let line = state.winning_line.expect("winner always has a line");
            log!(
                "{} wins on cells {}-{}-{}",
                mark.symbol(),
                line[0] + 1,
                line[1] + 1,
                line[2] + 1
            );
        }
        None => log!("Draw game"),
    }

    println!(
        "Score so far: X {} / O {} / draws {}",
        scores.x_wins, scores.o_wins, scores.draws
    );
}

/// Prints the grid with cell numbers 1-9 standing in for empty cells.
fn render_board(state: &GameState) {
    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let cell = row * 3 + col;
                match state.board.get(cell) {
                    Mark::Empty => (cell + 1).to_string(),
                    mark => mark.symbol().to_string(),
                }
            })
            .collect();
        println!(" {} | {} | {}", cells[0], cells[1], cells[2]);
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn prompt_cell(state: &GameState) -> usize {
    loop {
        let input = prompt_line("Cell (1-9): ");
        match input.parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => {
                let cell = n - 1;
                if state.board.get(cell) == Mark::Empty {
                    return cell;
                }
                println!("Cell {} is already taken.", n);
            }
            _ => println!("Enter a number from 1 to 9."),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).to_lowercase().as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Please answer y or n."),
        }
    }
}

pub fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        // Closed stdin means nobody is playing anymore.
        Ok(0) | Err(_) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
    }
}
