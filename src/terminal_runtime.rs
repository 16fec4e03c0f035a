use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Terminal handle used by the game loop.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode guard for one game session.
///
/// Construction claims the terminal (raw mode, alternate screen, hidden
/// cursor); dropping the guard hands it back. Every exit route — normal
/// drop, failed setup, panic — funnels through the same
/// [`restore_terminal`] sequence, so a crash mid-frame never strands the
/// shell in raw mode.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Claims the terminal and builds the ratatui handle on top of it.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
            .map(|terminal| Self { terminal })
            .inspect_err(|_| restore_terminal())
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Routes panics through the session's restore path before the default
/// hook prints the message.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

/// Best-effort restore: each step runs even when an earlier one fails.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::install_panic_hook;

    #[test]
    fn panic_hook_installs_without_panicking() {
        install_panic_hook();
    }
}
