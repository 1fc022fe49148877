mod controller;
mod game;
mod snake;
mod term;

pub type GridInt = i16;
pub type Coords = (i16, i16);

use std::fs::File;
use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use controller::{IoController, Outcome};

const EXIT_DELAY: Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create("snake.log")?)?;
    info!("starting a new game");

    let mut controller = IoController::new();
    let outcome = controller.run()?;

    println!();
    match outcome {
        Outcome::Died { score } => {
            info!("game over, final score {}", score);
            println!("You died! Your score is {} point(s).\n", score);
        }
        Outcome::Quit => info!("quit by player"),
    }
    println!("Thanks for playing!");

    sleep(EXIT_DELAY);
    Ok(())
}
