use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use fourline_ai::{
    board::Side,
    config::{AppConfig, Strategy},
    game::{Game, GameState},
    policy::{MoveSelector, Reason},
};

mod console;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play against the computer
    Ai,
    /// Two humans share the board
    TwoPlayer,
    /// The computer plays both sides
    Watch,
}

/// Four in a row on a square grid against a search-based AI.
#[derive(Parser)]
#[command(name = "fourline", about = "Four in a row on a square grid")]
struct Cli {
    /// Game mode
    #[arg(long, value_enum, default_value_t = Mode::Ai)]
    mode: Mode,

    /// Path to TOML configuration file
    #[arg(long, default_value = "fourline.toml")]
    config: PathBuf,

    /// Override the AI strategy: heuristic, minimax or alphabeta
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Override the search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Override the blocking bonus of the heuristic
    #[arg(long)]
    blocking: Option<bool>,

    /// Override the board size
    #[arg(long)]
    size: Option<usize>,

    /// Let the AI make the first move
    #[arg(long)]
    ai_first: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(strategy) = cli.strategy {
        config.ai.strategy = strategy;
    }
    if let Some(depth) = cli.depth {
        config.ai.depth = depth;
    }
    if let Some(blocking) = cli.blocking {
        config.ai.blocking = blocking;
    }
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    config.validate()?;

    // which sides the AI controls, (player one, player two)
    let ai_players = match cli.mode {
        Mode::Ai if cli.ai_first => (true, false),
        Mode::Ai => (false, true),
        Mode::TwoPlayer => (false, false),
        Mode::Watch => (true, true),
    };
    let controlled = |side: Side| match side {
        Side::PlayerOne => ai_players.0,
        Side::PlayerTwo => ai_players.1,
    };
    let name = |side: Side| {
        let number = if side == Side::PlayerOne { 1 } else { 2 };
        if ai_players == (false, false) || ai_players == (true, true) {
            format!("Player {}", number)
        } else if controlled(side) {
            "AI".to_string()
        } else {
            "Player".to_string()
        }
    };

    log::info!(
        "starting {:?} game on a {}x{} board with {:?}",
        cli.mode,
        config.board_size,
        config.board_size,
        config.ai
    );

    let stdin = stdin();
    let mut game = Game::new(config.board_size);
    let mut selector = MoveSelector::new(config.ai);

    println!("Welcome to Four in a Row\n");

    // game loop
    loop {
        console::display(game.board())?;

        match game.state() {
            GameState::Playing => {
                let side = game.to_move();
                let (row, col) =
                    // AI player
                    if controlled(side) {
                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let spinner = ProgressBar::new_spinner();
                        spinner.set_message(&format!("{} is thinking...", name(side)));
                        spinner.enable_steady_tick(100);
                        let choice = selector.choose(game.board_mut(), side, side.other());
                        spinner.finish_and_clear();

                        let choice = match choice {
                            Some(choice) => choice,
                            None => bail!("no legal move left on a board still in play"),
                        };
                        let (row, col) = choice.cell;
                        match choice.reason {
                            Reason::Win => println!("{} completes a line at {} {}", name(side), row, col),
                            Reason::Block => println!("{} blocks at {} {}", name(side), row, col),
                            Reason::Score(score) => {
                                println!("{} plays {} {} (score {})", name(side), row, col, score)
                            }
                        }
                        (row, col)

                    // human player
                    } else {
                        print!("{} ({}) move, row col > ", name(side), side.symbol());
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            // end of input
                            break;
                        }

                        match console::parse_move(&input_str, game.board().size()) {
                            Err(err) => {
                                println!("{}", err);
                                continue;
                            }
                            Ok(coords) => coords,
                        }
                    };

                if let Err(err) = game.play_checked(row, col) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            state => {
                match state {
                    GameState::Won(side) => println!("{} wins!", name(side)),
                    _ => println!("It's a tie!"),
                }
                log::info!(
                    "game over after {} moves, {} search nodes so far",
                    game.num_moves(),
                    selector.node_count
                );

                print!("Press 'R' to play again, anything else to quit: ");
                stdout().flush()?;
                let mut buffer = String::new();
                stdin.read_line(&mut buffer)?;
                match buffer.trim().to_lowercase().chars().next() {
                    Some('r') => game.reset(),
                    _ => break,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_ai() {
        let cli = Cli::try_parse_from(["fourline"]).unwrap();
        assert_eq!(cli.mode, Mode::Ai);
        assert!(!cli.ai_first);
    }

    #[test]
    fn test_mode_values() {
        let cli = Cli::try_parse_from(["fourline", "--mode", "two-player"]).unwrap();
        assert_eq!(cli.mode, Mode::TwoPlayer);
        let cli = Cli::try_parse_from(["fourline", "--mode", "watch"]).unwrap();
        assert_eq!(cli.mode, Mode::Watch);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["fourline", "--mode", "online"]).is_err());
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::try_parse_from([
            "fourline",
            "--strategy",
            "minimax",
            "--depth",
            "2",
            "--blocking",
            "true",
        ])
        .unwrap();
        assert_eq!(cli.strategy, Some(Strategy::Minimax));
        assert_eq!(cli.depth, Some(2));
        assert_eq!(cli.blocking, Some(true));
        assert!(Cli::try_parse_from(["fourline", "--strategy", "greedy"]).is_err());
    }
}
