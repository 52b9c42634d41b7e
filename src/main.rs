use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{FRAME_POLL_INTERVAL, ThemeName};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, poll_input};
use grid_snake::logging::init_file_logging;
use grid_snake::renderer::{self, FramePresenter};
use grid_snake::session::{FrameQueue, Session};
use grid_snake::terminal_runtime::{AppTerminal, TerminalSession};
use grid_snake::ui::hud::HudInfo;
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Classic Snake on a fixed 20x20 board")]
struct Cli {
    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Colour theme.
    #[arg(long, value_enum, default_value_t = ThemeName::Classic)]
    theme: ThemeName,

    /// Append diagnostic logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }
    info!(seed = ?cli.seed, theme = ?cli.theme, "starting");

    let mut terminal = TerminalSession::enter()?;
    let result = run(terminal.terminal_mut(), &cli);
    let restored = terminal.restore();

    info!("exiting");
    result.and(restored)
}

fn run(terminal: &mut AppTerminal, cli: &Cli) -> Result<(), AppError> {
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::from_entropy(),
    };
    let mut session = Session::with_state(state, FrameQueue::new(), FramePresenter::new());

    let theme = cli.theme.theme();

    loop {
        if let Some(snapshot) = session.presenter().latest() {
            let info = HudInfo {
                best_score: session.presenter().best_score(),
                theme,
            };
            terminal.draw(|frame| renderer::render(frame, snapshot, &info))?;
        }

        match poll_input(FRAME_POLL_INTERVAL)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Key(key)) => session.handle_key(key),
            None => {}
        }

        if let Some(frame) = session.scheduler_mut().take_pending() {
            session.on_frame(frame, Instant::now());
        }
    }

    session.stop();
    Ok(())
}
