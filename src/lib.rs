//! A console Klondike (patience) game.
//!
//! The engine lives in `card`, `pile`, `tableau`, `foundation`, `stock`,
//! `game`, and `moves`; `display` and the `run` loop here are the thin
//! console glue on top of it.

pub mod card;
pub mod pile;
pub mod tableau;
pub mod foundation;
pub mod stock;
pub mod game;
pub mod moves;
pub mod display;
pub mod stats;

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::display::print_board;
use crate::game::GameState;
use crate::moves::{Command, execute};
use crate::stats::Stats;

const PROMPT_HELP: &str = "\nWhat move would you like to make?\n\n\
To move between columns, type \"M\" followed by the two column numbers (i.e. \"M35\").\n\
To move a column's top card to its home pile, enter the column number (1-7).\n\
To advance the spares pile, press \"S\".\n\
To move the top spare card to a column, press \"S\" followed by the column number (i.e. \"S4\").\n\
To move the top spare card to its home pile, type \"SE\".\n\
Give up? Type \"NEW\" to start a new game.";

/// Entry point for the `console_klondike` binary.
///
/// Parses a very small command-line surface:
///   * `--seed=<u64>`  → deal a specific, reproducible first hand
/// then runs the prompt loop until the hand is won or input ends.
///
/// Example:
///   cargo run -- --seed=12345
pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    // Very small hand-rolled argument parser.
    let mut seed: Option<u64> = None;
    for arg in env::args().skip(1) {
        if let Some(rest) = arg.strip_prefix("--seed=") {
            match rest.parse::<u64>() {
                Ok(v) => seed = Some(v),
                Err(_) => eprintln!(
                    "Warning: could not parse seed from '{rest}'; dealing randomly"
                ),
            }
        } else {
            eprintln!("Warning: unrecognized argument '{arg}'; supported: --seed=<u64>");
        }
    }

    println!("Welcome to Solitaire!");

    let mut stats = Stats::default();
    let mut state = deal(seed);
    stats.record_deal();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n{}\n", "- ".repeat(50).trim_end());
        print_board(&state);

        if state.has_won() {
            println!("Congratulations, you have won!");
            stats.record_win();
            break;
        }

        println!("{PROMPT_HELP}");
        print!("-> ");
        io::stdout().flush().context("flushing the prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading a command")?;
        if read == 0 {
            // End of input: the player is done for the day.
            println!();
            break;
        }

        let Some(command) = Command::parse(&line) else {
            println!("Oops, I don't understand that command - please try again!");
            continue;
        };

        if command == Command::NewHand {
            stats.record_abandon();
            stats.record_deal();
        }

        if let Err(rejection) = execute(&mut state, command) {
            println!("Hmm, that move isn't allowed ({rejection})");
        }
    }

    println!("{}", stats.summary());
    Ok(())
}

fn deal(seed: Option<u64>) -> GameState {
    match seed {
        Some(seed) => GameState::deal_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => GameState::deal_new_hand(),
    }
}
