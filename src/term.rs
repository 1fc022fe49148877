use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
    }

    /// Waits up to `wait` for input, then drains any further pending events
    /// without blocking.
    pub fn poll_key_events(&self, wait: Duration) -> crossterm::Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = wait;

        while poll(wait)? {
            wait = Duration::from_millis(0);
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Redraws the whole frame in place. Every cell is written on every
    /// tick, so no clearing is needed between frames.
    pub fn draw_frame(&mut self, frame: &str) -> crossterm::Result<()> {
        for (row, line) in frame.lines().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16), style::Print(line))?;
        }
        self.stdout.flush()?;

        Ok(())
    }
}
