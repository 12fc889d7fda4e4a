use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_n::ai::{Agent, HumanAgent, MinimaxAgent};
use connect_n::config::AppConfig;
use connect_n::error::MoveError;
use connect_n::game::{GameState, Outcome};

/// Play Connect-N against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-n", about = "Play Connect-N against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override the winning line length
    #[arg(long)]
    connect: Option<usize>,

    /// Seed the opponent's tie-breaking for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(rows) = cli.rows {
        config.game.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.game.cols = cols;
    }
    if let Some(connect) = cli.connect {
        config.game.connect_length = connect;
    }
    config.validate().context("invalid configuration")?;

    let mut game = GameState::new(&config.game);
    let mut computer = match cli.seed {
        Some(seed) => MinimaxAgent::seeded(seed),
        None => MinimaxAgent::new(),
    };
    let mut human = HumanAgent::new();

    println!("Let's play connect {}!", config.game.connect_length);

    loop {
        let outcome = if yes_no_input("Would you like to play first?")? {
            run_game(&mut game, &mut human, &mut computer)?
        } else {
            run_game(&mut game, &mut computer, &mut human)?
        };
        announce(outcome);

        if !yes_no_input("Would you like to play again?")? {
            return Ok(());
        }
        game.reset();
    }
}

/// Alternate the two providers until the game ends, returning the final
/// move's outcome.
fn run_game(
    game: &mut GameState,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
) -> Result<Outcome> {
    println!("\n{}\n", game.board());
    loop {
        let outcome = play_turn(game, first)?;
        if outcome.terminal {
            return Ok(outcome);
        }
        let outcome = play_turn(game, second)?;
        if outcome.terminal {
            return Ok(outcome);
        }
    }
}

/// Let one provider move, re-requesting until the game accepts the column.
fn play_turn(game: &mut GameState, provider: &mut dyn Agent) -> Result<Outcome> {
    println!("{} ({}) to move.", game.current_player().name(), provider.name());
    loop {
        let column = provider.select_action(game)?;
        match game.act(column) {
            Ok(outcome) => {
                println!("\n{}\n", game.board());
                return Ok(outcome);
            }
            Err(err @ (MoveError::InvalidColumn(_) | MoveError::ColumnFull(_))) => {
                println!("Invalid column. ({err})");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Report the result; rewards are signed from player two's perspective.
fn announce(outcome: Outcome) {
    if outcome.reward > 0.0 {
        println!("Player two wins!");
    } else if outcome.reward < 0.0 {
        println!("Player one wins!");
    } else {
        println!("It's a draw.");
    }
}

fn yes_no_input(text: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{text} (y/n)");
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input stream closed");
        }

        match line.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                println!("Please enter y for yes or n for no.");
                println!("{text} (y/n)");
            }
        }
    }
}
