use std::io::{stdout, Write};

use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use tracing::{debug, warn};

use crate::arena::Arena;
use crate::{Result, SnakeError};

/// Size of the controlling terminal as `(columns, rows)`.
pub fn terminal_size() -> Result<(u16, u16)> {
    Ok(terminal::size()?)
}

/// Fails with `TerminalTooSmall` unless the board fits in `(cols, rows)`.
pub fn ensure_min_size(cols: u16, rows: u16) -> Result<()> {
    let (min_cols, min_rows) = Arena::min_terminal_size();
    if cols < min_cols || rows < min_rows {
        return Err(SnakeError::TerminalTooSmall { cols, rows, min_cols, min_rows });
    }
    Ok(())
}

/// Puts the terminal in raw mode with a hidden cursor for as long as it lives.
///
/// Dropping the guard restores cooked mode and the cursor, so every way out of
/// a session (game over, quit, an error bubbling up, a panic) leaves the shell
/// usable.
pub struct RawModeGuard {
    _priv: (),
}

impl RawModeGuard {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, Drop undoes raw mode even if the rest fails.
        let guard = RawModeGuard { _priv: () };

        let mut out = stdout();
        execute!(out, terminal::Clear(ClearType::All), cursor::Hide, cursor::DisableBlinking)?;
        debug!("terminal in raw mode");
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        if let Err(err) = execute!(out, cursor::Show, cursor::EnableBlinking) {
            warn!(%err, "failed to show cursor");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(%err, "failed to leave raw mode");
        }
        let _ = out.flush();
        debug!("terminal restored");
    }
}
