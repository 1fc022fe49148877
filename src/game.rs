use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::snake::{Direction, Snake};
use crate::{Coords, GridInt};

pub const GRID_WIDTH: GridInt = 40;
pub const GRID_HEIGHT: GridInt = 20;
const START_SIZE: usize = 3;

const EMPTY_CHAR: char = '-';
const WALL_CHAR: char = 'X';
const HEAD_CHAR: char = 'O';
const SEGMENT_CHAR: char = 'o';
const FOOD_CHAR: char = '@';

const TITLE: &str = "SNAKE\n\n(press \"q\" to quit)";

pub enum Step {
    Continue,
    GameOver,
}

pub struct GameState {
    snake: Snake,
    food: Coords,
    dimensions: Coords,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        let head = (GRID_WIDTH / 2, GRID_HEIGHT / 2);
        let snake = Snake::new(head, START_SIZE, Direction::Left);
        let food = (head.0 - 6, head.1);

        GameState { snake, food, dimensions: (GRID_WIDTH, GRID_HEIGHT), rng }
    }

    /// Advances the game by one tick. `key` is the latest direction input,
    /// or `None` to keep moving in the current facing direction.
    pub fn update(&mut self, key: Option<Direction>) -> Step {
        let vacated_tail = match key {
            Some(dir) => self.snake.steer(dir),
            None => self.snake.advance(self.snake.facing()),
        };

        if self.snake.head() == self.food {
            self.snake.grow(vacated_tail);
            self.spawn_food();
        }

        if self.snake.segments().contains(&self.snake.head()) {
            return Step::GameOver;
        }

        let (width, height) = self.dimensions;
        let (x, y) = self.snake.head();
        if x < 0 || x >= width || y < 0 || y >= height {
            return Step::GameOver;
        }

        Step::Continue
    }

    /// Builds the full frame for the current state: title banner, then the
    /// grid bordered by walls on all four sides.
    pub fn render(&self) -> String {
        let (width, height) = self.dimensions;
        let mut rows = vec![vec![EMPTY_CHAR; width as usize]; height as usize];

        let (x, y) = self.snake.head();
        rows[y as usize][x as usize] = HEAD_CHAR;
        for &(x, y) in self.snake.segments() {
            rows[y as usize][x as usize] = SEGMENT_CHAR;
        }
        let (x, y) = self.food;
        rows[y as usize][x as usize] = FOOD_CHAR;

        let wall: String = WALL_CHAR.to_string().repeat(width as usize + 2);
        let mut frame = format!("{}\n\n{}\n", TITLE, wall);
        for row in rows {
            frame.push(WALL_CHAR);
            frame.extend(row);
            frame.push(WALL_CHAR);
            frame.push('\n');
        }
        frame.push_str(&wall);

        frame
    }

    pub fn score(&self) -> u32 {
        (self.snake.len() - START_SIZE) as u32
    }

    fn spawn_food(&mut self) {
        let (width, height) = self.dimensions;

        while self.snake.occupies(self.food) {
            self.food = (self.rng.gen_range(0..width), self.rng.gen_range(0..height));
        }

        debug!("food respawned at {:?}", self.food);
    }

    #[cfg(test)]
    fn with_parts(snake: Snake, food: Coords, rng: StdRng) -> Self {
        GameState { snake, food, dimensions: (GRID_WIDTH, GRID_HEIGHT), rng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    const RNG_SEED: u64 = 0xDEAD_BEEF;

    fn game() -> GameState {
        GameState::with_rng(StdRng::seed_from_u64(RNG_SEED))
    }

    #[test]
    fn score_starts_at_zero() {
        assert_eq!(game().score(), 0);
    }

    #[test]
    fn turning_down_from_the_starting_position() {
        let mut game = game();
        assert!(matches!(game.update(Some(Down)), Step::Continue));

        assert_eq!(game.snake.head(), (20, 11));
        assert_eq!(game.snake.segments(), &[(20, 10), (21, 10)]);
        assert_eq!(game.snake.facing(), Down);
    }

    #[test]
    fn eating_food_grows_and_respawns_it() {
        let mut game = game();

        // The food starts six cells left of the head; walking straight
        // reaches it on the sixth tick.
        for _ in 0..6 {
            assert!(matches!(game.update(None), Step::Continue));
        }

        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.score(), 1);
        assert!(!game.snake.occupies(game.food));
    }

    #[test]
    fn leaving_the_grid_is_game_over() {
        let mut game = game();

        // Head starts at x = 20 moving left; the 21st step crosses x = 0.
        for _ in 0..20 {
            assert!(matches!(game.update(None), Step::Continue));
        }
        assert!(matches!(game.update(None), Step::GameOver));
    }

    #[test]
    fn biting_own_body_is_game_over() {
        // Head about to turn left into its own body.
        let snake = Snake::from_parts(
            (10, 10),
            vec![(10, 9), (9, 9), (9, 10), (9, 11)],
            Down,
        );
        let mut game = GameState::with_parts(snake, (0, 0), StdRng::seed_from_u64(RNG_SEED));

        assert!(matches!(game.update(Some(Left)), Step::GameOver));
    }

    #[test]
    fn render_places_the_markers() {
        let game = game();
        let frame = game.render();
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[0], "SNAKE");
        assert_eq!(lines[2], "(press \"q\" to quit)");

        let wall = "X".repeat(GRID_WIDTH as usize + 2);
        assert_eq!(lines[4], wall);
        assert_eq!(lines[lines.len() - 1], wall);
        assert_eq!(lines.len(), 5 + GRID_HEIGHT as usize + 1);

        // Grid rows start after the banner and top wall; each is shifted one
        // column right by the left border.
        let row = |y: i16| lines[5 + y as usize].as_bytes();
        assert_eq!(row(10)[20 + 1], b'O');
        assert_eq!(row(10)[21 + 1], b'o');
        assert_eq!(row(10)[22 + 1], b'o');
        assert_eq!(row(10)[14 + 1], b'@');
        assert_eq!(row(0)[1], b'-');
    }
}
