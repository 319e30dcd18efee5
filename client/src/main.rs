mod config;
mod game_loop;
mod scanner;

use clap::Parser;
use config::Config;
use game_loop::{prompt_line, run_pass_and_play, run_vs_cpu};
use tictactoe_engine::{Difficulty, ScoreBoard, SessionRng, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Fixed RNG seed, for reproducible bot behaviour.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = Config::load()?;
    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let mut scores = ScoreBoard::default();

    loop {
        println!();
        println!("=== TIC-TAC-TOE ===");
        println!("1) Play vs CPU");
        println!("2) Pass and play");
        println!("3) Nearby connect");
        println!("4) Statistics");
        println!("5) Quit");

        match prompt_line("> ").as_str() {
            "1" => {
                let difficulty = prompt_difficulty(config.difficulty);
                if difficulty != config.difficulty {
                    config.difficulty = difficulty;
                    if let Err(e) = config.save() {
                        log!("Could not save config: {}", e);
                    }
                }
                run_vs_cpu(difficulty, config.bot_delay_ms, &mut scores, &mut rng);
            }
            "2" => run_pass_and_play(&mut scores),
            "3" => {
                scanner::run_scan();
                run_pass_and_play(&mut scores);
            }
            "4" => print_statistics(&scores),
            "5" | "q" => break,
            other => println!("Unknown option: {}", other),
        }
    }

    log!("Goodbye");
    Ok(())
}

fn prompt_difficulty(current: Difficulty) -> Difficulty {
    println!("Difficulty (current: {}):", current.label());
    println!("1) Easy  2) Normal  3) High  4) Very High");

    loop {
        match prompt_line("> ").as_str() {
            "" => return current,
            "1" => return Difficulty::Easy,
            "2" => return Difficulty::Normal,
            "3" => return Difficulty::High,
            "4" => return Difficulty::VeryHigh,
            _ => println!("Pick 1-4, or press Enter to keep the current tier."),
        }
    }
}

fn print_statistics(scores: &ScoreBoard) {
    println!();
    println!("=== STATISTICS (this session) ===");
    println!("Games played: {}", scores.games_played());
    println!("X wins:       {}", scores.x_wins);
    println!("O wins:       {}", scores.o_wins);
    println!("Draws:        {}", scores.draws);
}
