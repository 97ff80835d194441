use std::io::Write;

use anyhow::{Context, Result};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::snake::{Point, Step};

const WALL_CORNER_CHAR: char = '+';
const WALL_HORIZONTAL_CHAR: char = '-';
const WALL_VERTICAL_CHAR: char = '|';
const SNAKE_COLOR: Color = Color::DarkGreen;
const FOOD_COLOR: Color = Color::DarkYellow;

const WELCOME_LINES: &[&str] = &[
    "Welcome to SNEIK! Let's play!",
    "Commands:",
    "     W: GO UP",
    "     A: GO LEFT",
    "     S: GO DOWN",
    "     D: GO RIGHT",
    "     SPACE: QUIT",
    "",
    "Press any key to start...",
];

pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Renderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn clear(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0)).context("Error clearing")?;
        self.flush()
    }

    pub fn draw_welcome(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All)).context("Error clearing")?;
        for (row, line) in WELCOME_LINES.iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16), Print(line)).context("Error drawing welcome")?;
        }
        self.flush()
    }

    pub fn draw_walls(&mut self) -> Result<()> {
        for x in 1..=BOARD_WIDTH {
            let ch = if x == 1 || x == BOARD_WIDTH { WALL_CORNER_CHAR } else { WALL_HORIZONTAL_CHAR };
            self.print_at(Point::new(x, 1), ch)?;
            self.print_at(Point::new(x, BOARD_HEIGHT), ch)?;
        }

        for y in 2..BOARD_HEIGHT {
            self.print_at(Point::new(1, y), WALL_VERTICAL_CHAR)?;
            self.print_at(Point::new(BOARD_WIDTH, y), WALL_VERTICAL_CHAR)?;
        }

        self.flush()
    }

    pub fn draw_snake_segment(&mut self, pos: Point) -> Result<()> {
        self.draw_cell(pos, ' ', Some(SNAKE_COLOR))?;
        self.flush()
    }

    pub fn draw_food(&mut self, pos: Point) -> Result<()> {
        self.draw_cell(pos, ' ', Some(FOOD_COLOR))?;
        self.flush()
    }

    pub fn erase(&mut self, pos: Point) -> Result<()> {
        self.print_at(pos, ' ')?;
        self.flush()
    }

    pub fn draw_snake(&mut self, body: &[Point]) -> Result<()> {
        for pos in body {
            self.draw_snake_segment(*pos)?;
        }
        Ok(())
    }

    // Only the cells the step touched get repainted
    pub fn draw_step(&mut self, step: &Step) -> Result<()> {
        if let Step::Moved { new_head, vacated, new_food } = step {
            if let Some(tail) = vacated {
                self.erase(*tail)?;
            }
            self.draw_snake_segment(*new_head)?;
            if let Some(food) = new_food {
                self.draw_food(*food)?;
            }
        }
        Ok(())
    }

    pub fn draw_footer(&mut self, score: u32, game_over: bool) -> Result<()> {
        let top = BOARD_HEIGHT as u16;
        let score_line = format!("Score: {}", score);
        let mut lines = vec![score_line.as_str(), "Space to exit..."];
        if game_over {
            lines.push("Game Over!");
        }

        for (i, line) in lines.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, top + i as u16),
                terminal::Clear(ClearType::UntilNewLine),
                Print(line)
            )
            .context("Error drawing footer")?;
        }

        self.flush()
    }

    pub fn move_below_footer(&mut self) -> Result<()> {
        queue!(self.out, cursor::MoveTo(0, BOARD_HEIGHT as u16 + 3)).context("Error moving cursor")?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn move_cursor(&mut self, pos: Point) -> Result<()> {
        let col = (pos.x - 1).max(0) as u16;
        let row = (pos.y - 1).max(0) as u16;
        queue!(self.out, cursor::MoveTo(col, row)).context("Error moving cursor")
    }

    fn print_at(&mut self, pos: Point, ch: char) -> Result<()> {
        self.draw_cell(pos, ch, None)
    }

    fn draw_cell(&mut self, pos: Point, ch: char, background: Option<Color>) -> Result<()> {
        self.move_cursor(pos)?;
        match background {
            Some(color) => queue!(self.out, SetBackgroundColor(color), Print(ch), ResetColor),
            None => queue!(self.out, Print(ch)),
        }
        .context("Error drawing cell")
    }
}
