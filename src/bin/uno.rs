//! Terminal UNO against automated players.
//!
//! Run with: `cargo run --bin uno -- --name alice --bots 2`

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uno_engine::{Color, EffectMode, FirstPlayable, GameRng, Identity, Table, TableEvent, UnoConfig};

/// Play UNO in the terminal
#[derive(Parser)]
#[command(name = "uno")]
#[command(about = "Play UNO against automated players", long_about = None)]
#[command(version)]
struct Cli {
    /// Your name at the table
    #[arg(long, default_value = "player")]
    name: String,

    /// Number of automated players (random 1-3 when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    bots: Option<u8>,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Apply Skip, Reverse, Draw2 and WildDraw4 effects
    #[arg(long)]
    standard_effects: bool,

    /// Cards dealt to each player
    #[arg(long, default_value_t = 7)]
    hand_size: usize,
}

const HELP: &str = "\
Commands:
  hand               show your cards
  play <n> [color]   play card number n (wilds need a color)
  draw               draw a card and end your turn
  pass               end your turn
  status             show the table
  help               show this message
  quit               leave the game";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let bots = match cli.bots {
        Some(n) => usize::from(n),
        None => rng.gen_range_usize(1..4),
    };

    let me = Identity::human(cli.name);
    let mut players = vec![me.clone()];
    players.extend((1..=bots).map(|n| Identity::automated(format!("UNO Bot {n}"))));

    let effects = if cli.standard_effects {
        EffectMode::Standard
    } else {
        EffectMode::ColorOnly
    };
    let config = UnoConfig::default()
        .with_hand_size(cli.hand_size)
        .with_effects(effects);

    let seed = rng.seed();
    let mut table = Table::new(players, config, rng).context("could not start the game")?;
    tracing::info!(seed, bots, "game started");

    println!("UNO with {bots} automated player(s). Type `help` for commands.\n");
    println!("{}\n", table.status());
    if let Some(hand) = table.hand_listing(&me) {
        println!("Your hand:\n{hand}\n");
    }

    announce(table.run_automated(&FirstPlayable));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if let Some(winner) = table.winner() {
            println!("\nGame over. {winner} won.");
            break;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut words = line.split_whitespace();

        let result = match words.next() {
            None => continue,
            Some("hand") => {
                if let Some(hand) = table.hand_listing(&me) {
                    println!("{hand}");
                }
                continue;
            }
            Some("status") => {
                println!("{}", table.status());
                continue;
            }
            Some("help") => {
                println!("{HELP}");
                continue;
            }
            Some("quit") => break,
            Some("draw") => table.draw(&me),
            Some("pass") => table.pass(&me),
            Some("play") => match parse_play(words.next(), words.next()) {
                Ok((index, color)) => table.play(&me, index, color),
                Err(msg) => {
                    println!("{msg}");
                    continue;
                }
            },
            Some(other) => {
                println!("Unknown command `{other}`. Type `help` for commands.");
                continue;
            }
        };

        match result {
            Ok(event) => {
                println!("{event}");
                announce(table.run_automated(&FirstPlayable));
                if table.winner().is_none() {
                    println!("\n{}", table.status());
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Card number (1-based) and optional color from `play` arguments.
fn parse_play(number: Option<&str>, color: Option<&str>) -> Result<(usize, Option<Color>), String> {
    let number: usize = number
        .ok_or("usage: play <n> [color]")?
        .parse()
        .map_err(|_| "card number must be a positive integer".to_string())?;
    let index = number.checked_sub(1).ok_or("cards are numbered from 1")?;
    let color = color
        .map(str::parse::<Color>)
        .transpose()
        .map_err(|err| err.to_string())?;
    Ok((index, color))
}

fn announce(events: Vec<TableEvent>) {
    for event in events {
        println!("{event}");
    }
}
