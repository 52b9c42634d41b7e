use std::io;
use std::panic;
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use crate::error::AppError;

/// Concrete terminal type the game draws into.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

static RESTORE_HOOK: Once = Once::new();

/// Raw-mode, alternate-screen terminal owned for one game run.
///
/// Entering also installs a panic hook that puts the screen back before the
/// panic message prints. Call [`TerminalSession::restore`] to surface
/// restore failures; dropping restores best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self, AppError> {
        install_restore_hook();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(error) => {
                let _ = leave_game_screen();
                return Err(error.into());
            }
        };

        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Leaves the alternate screen and raw mode, reporting any failure.
    pub fn restore(mut self) -> Result<(), AppError> {
        self.active = false;
        leave_game_screen()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        if let Err(error) = leave_game_screen() {
            warn!(%error, "terminal restore failed");
        }
    }
}

/// Chains a screen restore in front of the current panic hook.
///
/// Returns true only for the call that actually installed it.
fn install_restore_hook() -> bool {
    let mut installed = false;

    RESTORE_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = leave_game_screen();
            previous(panic_info);
        }));
        installed = true;
    });

    installed
}

fn leave_game_screen() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    raw_mode
}
