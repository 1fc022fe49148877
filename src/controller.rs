use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{GameState, Step};
use crate::snake::Direction::{self, *};
use crate::term::TermManager;

const POLL_INTERVAL: Duration = Duration::from_millis(10);
const INITIAL_REFRESH_MS: u64 = 500;
const MIN_REFRESH_MS: u64 = 100;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Key {
    Quit,
    Dir(Direction),
}

impl Key {
    fn decode(ev: &KeyEvent) -> Option<Key> {
        if is_ctrl_c(ev) {
            return Some(Key::Quit);
        }

        match ev.code {
            KeyCode::Char('q') => Some(Key::Quit),
            KeyCode::Char('w') | KeyCode::Up => Some(Key::Dir(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Key::Dir(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Key::Dir(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Key::Dir(Right)),
            _ => None,
        }
    }

    fn direction(self) -> Option<Direction> {
        match self {
            Key::Dir(dir) => Some(dir),
            Key::Quit => None,
        }
    }
}

pub enum Outcome {
    Died { score: u32 },
    Quit,
}

pub struct IoController {
    game: GameState,
    term: TermManager,
    latest_key: Option<Key>,
}

impl IoController {
    pub fn new() -> Self {
        IoController { game: GameState::new(), term: TermManager::new(), latest_key: None }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        self.term.setup()?;
        let outcome = self.play();
        self.term.restore()?;
        outcome
    }

    // Input polling and the game tick interleave on a single thread: each
    // pass waits up to POLL_INTERVAL for key events, and the tick fires
    // whenever its deadline has passed. Keys are not queued; the slot only
    // keeps the most recent one.
    fn play(&mut self) -> Result<Outcome> {
        let mut next_tick = Instant::now();

        loop {
            for ev in self.term.poll_key_events(POLL_INTERVAL)? {
                if let Some(key) = Key::decode(&ev) {
                    self.latest_key = Some(key);
                }
            }

            if self.latest_key == Some(Key::Quit) {
                return Ok(Outcome::Quit);
            }

            if Instant::now() < next_tick {
                continue;
            }

            match self.game.update(self.latest_key.and_then(Key::direction)) {
                Step::GameOver => return Ok(Outcome::Died { score: self.game.score() }),
                Step::Continue => self.term.draw_frame(&self.game.render())?,
            }

            next_tick = Instant::now() + refresh_interval(self.game.score());
        }
    }
}

// Speed up as the score climbs, but never past the floor.
fn refresh_interval(score: u32) -> Duration {
    let ms = INITIAL_REFRESH_MS.saturating_sub(score as u64 * 1000 / 30);
    Duration::from_millis(ms.max(MIN_REFRESH_MS))
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
