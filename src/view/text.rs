// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text board rendering.

use std::io::{self, Write};

use super::{BoardView, GridSnapshot};
use crate::state::SquareState;

/// Marks an empty square on the attack lines of the queen under the cursor.
const EMPHASIS: char = '*';
/// Marks an empty square attacked by any placed queen.
const ATTACKED: char = '+';

/// Writes boards as text to any [`Write`] sink.
///
/// Each square is three characters wide; the cursor square is bracketed:
///
/// ```text
///  Q  *  *  *
///  *  * [*] +
///  *  +  *  +
///  *  +  +  *
/// ```
#[derive(Debug)]
pub struct TextView<W: Write> {
    out: W,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn square_char(snapshot: &GridSnapshot, x: i32, y: i32) -> char {
        match snapshot.state(x, y) {
            SquareState::Empty if snapshot.is_emphasized(x, y) => EMPHASIS,
            SquareState::Empty if snapshot.territory_count(x, y) > 0 => ATTACKED,
            state => state.symbol(),
        }
    }
}

impl<W: Write> BoardView for TextView<W> {
    fn render(&mut self, snapshot: &GridSnapshot) -> io::Result<()> {
        let size = snapshot.size() as i32;
        for y in 0..size {
            let mut line = String::with_capacity(3 * size as usize);
            for x in 0..size {
                let c = Self::square_char(snapshot, x, y);
                if snapshot.is_cursor(x, y) {
                    line.push('[');
                    line.push(c);
                    line.push(']');
                } else {
                    line.push(' ');
                    line.push(c);
                    line.push(' ');
                }
            }
            writeln!(self.out, "{}", line.trim_end())?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn report_solution(&mut self, snapshot: &GridSnapshot, count: usize) -> io::Result<()> {
        writeln!(self.out, "<{}>", count)?;
        let size = snapshot.size() as i32;
        for y in 0..size {
            let line: String = (0..size)
                .map(|x| if snapshot.is_queen(x, y) { 'Q' } else { '.' })
                .collect();
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn report_count(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "results: {}", count)?;
        self.out.flush()
    }
}
