use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use fourline_ai::board::{Board, Cell, Side};

/// Draws the board with row and column indices
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (0..board.size()).map(|col| format!("{:>3}", col)).collect();
    stdout.queue(PrintStyledContent(style(format!("\n   {}\n", header))))?;

    for row in 0..board.size() {
        stdout.queue(PrintStyledContent(style(format!("{:>3}", row))))?;
        for col in 0..board.size() {
            let (symbol, colour) = match board.cell(row, col) {
                Cell::Taken(Side::PlayerOne) => ("  X", Color::Blue),
                Cell::Taken(Side::PlayerTwo) => ("  O", Color::Red),
                Cell::Empty => ("  -", Color::DarkGrey),
            };
            stdout.queue(PrintStyledContent(
                style(symbol).attribute(Attribute::Bold).with(colour),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Parses "row col" (whitespace or comma separated) into in-range coordinates
pub fn parse_move(input: &str, size: usize) -> Result<(usize, usize)> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(anyhow!(
            "Invalid input '{}', expected a row and a column",
            input.trim()
        ));
    }

    let mut coords = [0usize; 2];
    for (coord, part) in coords.iter_mut().zip(parts.iter()) {
        *coord = part
            .parse::<usize>()
            .map_err(|_| anyhow!("Invalid number: {}", part))?;
        if *coord >= size {
            return Err(anyhow!(
                "Invalid move, {} out of range. Rows and columns must be between 0 and {}",
                coord,
                size - 1
            ));
        }
    }
    Ok((coords[0], coords[1]))
}
