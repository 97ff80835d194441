use clap::Parser;

pub const BOARD_WIDTH: i32 = 40;
pub const BOARD_HEIGHT: i32 = 20;
pub const MAX_SNAKE_LENGTH: usize = 100;
pub const TICK_INTERVAL_MS: u64 = 500;
pub const INTRO_POLL_MS: u64 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    pub no_reverse: bool,
    pub safe_food: bool,
}

#[derive(Parser, Debug)]
#[command(name = "sneik", about = "Snake in the terminal. WASD to move, space to quit.")]
pub struct Args {
    /// Ignore turns that point straight back into the snake
    #[arg(long)]
    pub no_reverse: bool,

    /// Never spawn food on top of the snake
    #[arg(long)]
    pub safe_food: bool,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn rules(&self) -> Rules {
        Rules { no_reverse: self.no_reverse, safe_food: self.safe_food }
    }
}
