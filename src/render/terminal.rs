//! In-place frame output on a terminal-like sink

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveToColumn, MoveToNextLine, MoveUp, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use super::DisplaySnapshot;

/// Lines occupied by one frame
pub const FRAME_LINES: u16 = 3;

/// Output sink that redraws a three-line frame over itself
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Blank spacer line before the first frame of a run
    pub fn begin(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\n"), Hide)?;
        self.out.flush()
    }

    /// Write a frame, leaving the cursor on the line below it
    pub fn draw(&mut self, snapshot: &DisplaySnapshot) -> io::Result<()> {
        for line in snapshot.lines() {
            queue!(
                self.out,
                MoveToColumn(0),
                Print(line),
                Clear(ClearType::UntilNewLine),
                Print("\n")
            )?;
        }
        Ok(())
    }

    /// Move back to the first line of the frame just drawn and flush
    pub fn rewind(&mut self) -> io::Result<()> {
        queue!(self.out, MoveUp(FRAME_LINES))?;
        self.out.flush()
    }

    /// Leave the final frame on screen
    pub fn finish(&mut self) -> io::Result<()> {
        queue!(self.out, Show)?;
        self.out.flush()
    }
}

/// Put the cursor below an interrupted frame and make it visible again
pub fn restore<W: Write>(out: &mut W, frame_on_screen: bool) -> io::Result<()> {
    if frame_on_screen {
        queue!(out, MoveToNextLine(FRAME_LINES))?;
    }
    queue!(out, Show, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    fn text(terminal: &Terminal<Vec<u8>>) -> String {
        String::from_utf8_lossy(terminal.get_ref()).into_owned()
    }

    #[test]
    fn draw_writes_three_lines() {
        let mut terminal = Terminal::new(Vec::new());
        terminal.draw(&render(65, 65)).unwrap();

        let out = text(&terminal);
        assert_eq!(out.matches('\n').count(), 3);
        assert!(out.contains("Time Remaining: 01:05"));
        assert!(out.contains("Minutes: \u{25AE}"));
        assert!(out.contains("Seconds: \u{25AF}     "));
    }

    #[test]
    fn rewind_moves_up_one_frame() {
        let mut terminal = Terminal::new(Vec::new());
        terminal.draw(&render(10, 10)).unwrap();
        terminal.rewind().unwrap();

        assert!(text(&terminal).ends_with("\x1b[3A"));
    }

    #[test]
    fn restore_skips_past_frame_only_when_drawn() {
        let mut idle = Vec::new();
        restore(&mut idle, false).unwrap();
        assert!(!String::from_utf8_lossy(&idle).contains("\x1b[3E"));

        let mut running = Vec::new();
        restore(&mut running, true).unwrap();
        assert!(String::from_utf8_lossy(&running).contains("\x1b[3E"));
    }
}
