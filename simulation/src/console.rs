use std::io::{BufRead, Write};

use types::{
    game_state::{MAX_PLAYERS, MIN_PLAYERS},
    Card, GameStatus,
};

use crate::error::SimulationError;

fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<String, SimulationError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(SimulationError::InputClosed);
    }
    Ok(buf.trim().to_string())
}

/// Asks until a count in range is given; anything that isn't an integer is fatal.
pub fn prompt_player_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize, SimulationError> {
    loop {
        writeln!(
            output,
            "Enter the number of players ({MIN_PLAYERS}-{MAX_PLAYERS}):"
        )?;
        output.flush()?;
        let line = read_trimmed_line(input)?;
        let count = line
            .parse::<i64>()
            .map_err(|_| SimulationError::MalformedInput(line.clone()))?;
        match usize::try_from(count) {
            Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => return Ok(count),
            _ => {
                log::error!("Player count out of range: {count}");
                writeln!(
                    output,
                    "Please enter a number between {MIN_PLAYERS} and {MAX_PLAYERS}."
                )?;
            }
        }
    }
}

/// One name per player; only the first word of each answer is kept.
pub fn prompt_player_names<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    count: usize,
) -> Result<Vec<String>, SimulationError> {
    let mut names = Vec::with_capacity(count);
    for idx in 1..=count {
        let name = loop {
            writeln!(output, "Enter the name of player {idx}:")?;
            output.flush()?;
            let line = read_trimmed_line(input)?;
            if let Some(name) = line.split_whitespace().next() {
                break name.to_string();
            }
        };
        names.push(name);
    }
    Ok(names)
}

pub fn announce_start<W: Write>(output: &mut W, top_card: Card) -> std::io::Result<()> {
    writeln!(output, "===== Card Game =====")?;
    writeln!(output, "Game has started!")?;
    writeln!(output, "Top card on discard pile: {top_card}")?;
    writeln!(output, "Let's begin!")
}

pub fn announce_outcome<W: Write>(output: &mut W, status: &GameStatus) -> std::io::Result<()> {
    match status {
        GameStatus::Won { name, .. } => writeln!(output, "Player {name} wins!")?,
        GameStatus::Drawn => writeln!(
            output,
            "The draw pile is empty! The game ends in a draw."
        )?,
        GameStatus::InProgress => {}
    }
    writeln!(output, "Game Over!")
}
