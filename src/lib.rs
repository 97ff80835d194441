pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

pub use config::{Args, Rules};
pub use game::{Flow, Round, SnakeGame};
pub use snake::{Direction, Game, Point, Step};
