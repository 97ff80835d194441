use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::{cursor, execute, terminal};
use tracing::{debug, warn};

// Raw mode and a hidden cursor for as long as this lives
pub struct TermManager {
    active: bool,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("Error setting raw mode")?;

        // From here on `Drop` takes care of switching raw mode off again
        let term = TermManager { active: true };
        let mut out = stdout();
        execute!(out, cursor::Hide).context("Error setting cursor visibility")?;

        Ok(term)
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let raw = terminal::disable_raw_mode().context("Error unsetting raw mode");
        let mut out = stdout();
        execute!(out, cursor::Show).context("Error setting cursor visibility")?;
        out.flush().context("Error flushing")?;
        raw
    }

    pub fn poll_key(&self, timeout: Duration) -> Option<KeyEvent> {
        match poll(timeout) {
            Ok(true) => match read() {
                Ok(Event::Key(ev)) => Some(ev),
                Ok(_) => None,
                Err(e) => {
                    debug!("ignoring input error: {}", e);
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                debug!("ignoring input error: {}", e);
                None
            }
        }
    }
}

// Keeps asking `next_key` until it yields a key. Gives up with `None` once `stop` is raised.
pub fn wait_for_key<F>(stop: &AtomicBool, mut next_key: F) -> Option<KeyEvent>
where
    F: FnMut() -> Option<KeyEvent>,
{
    loop {
        if stop.load(Ordering::SeqCst) {
            return None;
        }
        if let Some(ev) = next_key() {
            return Some(ev);
        }
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Error restoring terminal: {:#}", e);
        }
    }
}
