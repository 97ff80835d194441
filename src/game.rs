use std::io::{stdout, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::{thread::sleep, time::Duration};

use anyhow::Result;
use rand::Rng;
use tracing::info;

use crate::config::{Rules, INTRO_POLL_MS, TICK_INTERVAL_MS};
use crate::input::{map_key, Command};
use crate::render::Renderer;
use crate::snake::Game;
use crate::term::{wait_for_key, TermManager};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    GameOver,
    Quit,
}

pub struct Round<R, W: Write> {
    game: Game<R>,
    renderer: Renderer<W>,
}

impl<R: Rng, W: Write> Round<R, W> {
    pub fn new(game: Game<R>, renderer: Renderer<W>) -> Self {
        Round { game, renderer }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }

    pub fn start(&mut self) -> Result<()> {
        self.renderer.clear()?;
        self.renderer.draw_walls()?;
        self.renderer.draw_snake(self.game.body())?;
        self.renderer.draw_food(self.game.food())?;
        self.renderer.draw_footer(self.game.score(), self.game.is_over())
    }

    pub fn tick(&mut self, command: Option<Command>) -> Result<Flow> {
        if let Some(Command::Turn(direction)) = command {
            self.game.turn(direction);
        }

        // The frame that reads the quit key still moves the snake and draws
        let step = self.game.advance();
        self.renderer.draw_step(&step)?;
        self.renderer.draw_footer(self.game.score(), self.game.is_over())?;

        if self.game.is_over() {
            Ok(Flow::GameOver)
        } else if command == Some(Command::Quit) {
            Ok(Flow::Quit)
        } else {
            Ok(Flow::Continue)
        }
    }

    pub fn renderer(&mut self) -> &mut Renderer<W> {
        &mut self.renderer
    }
}

pub struct SnakeGame<R> {
    term: TermManager,
    round: Round<R, Stdout>,
    stop: Arc<AtomicBool>,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(rng: R, rules: Rules, stop: Arc<AtomicBool>) -> Result<Self> {
        let term = TermManager::new()?;
        let round = Round::new(Game::new(rng, rules), Renderer::new(stdout()));
        Ok(SnakeGame { term, round, stop })
    }

    pub fn show_intro(&mut self) -> Result<bool> {
        self.round.renderer().draw_welcome()?;
        let term = &self.term;
        let key = wait_for_key(&self.stop, || term.poll_key(Duration::from_millis(INTRO_POLL_MS)));

        match key {
            Some(key) => Ok(map_key(&key) != Some(Command::Quit)),
            None => {
                info!("termination signal received on the welcome screen");
                Ok(false)
            }
        }
    }

    pub fn play(&mut self) -> Result<()> {
        self.round.start()?;
        info!("game started");

        loop {
            if self.stop.load(Ordering::SeqCst) {
                info!("termination signal received, stopping");
                break;
            }

            let command = self.term.poll_key(Duration::from_millis(0)).as_ref().and_then(map_key);
            let flow = self.round.tick(command)?;

            match flow {
                Flow::Quit => {
                    info!(score = self.round.game().score(), "player quit");
                    break;
                }
                Flow::GameOver => {
                    info!(score = self.round.game().score(), "game over");
                    break;
                }
                Flow::Continue => sleep(Duration::from_millis(TICK_INTERVAL_MS)),
            }
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.round.renderer().move_below_footer()?;
        self.term.restore()
    }
}
