use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

pub const QUIT_KEY: char = ' ';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

pub fn map_key(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') => Some(Command::Turn(Up)),
        KeyCode::Char('a') => Some(Command::Turn(Left)),
        KeyCode::Char('s') => Some(Command::Turn(Down)),
        KeyCode::Char('d') => Some(Command::Turn(Right)),
        KeyCode::Char(QUIT_KEY) => Some(Command::Quit),
        _ => None,
    }
}

// Raw mode turns Ctrl+C into an ordinary key press instead of SIGINT
pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
