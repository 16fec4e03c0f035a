use std::io;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use retro_snake::clock::TickClock;
use retro_snake::config::{GameConfig, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS};
use retro_snake::game::GameState;
use retro_snake::input::{GameInput, InputHandler};
use retro_snake::renderer;
use retro_snake::terminal_runtime::{install_panic_hook, TerminalSession};

/// Frame cadence for rendering and input polling, independent of the
/// gameplay tick interval.
const FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Retro grid-based snake game for the terminal")]
struct Cli {
    /// Number of cells along each axis of the square grid.
    #[arg(long = "grid-size", default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Gameplay tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = GameConfig {
        grid_size: cli.grid_size,
        tick_interval: Duration::from_millis(cli.tick_ms),
    };

    // Fail fast on malformed configuration, before touching the terminal.
    let state = match GameState::new(config) {
        Ok(state) => state,
        Err(error) => {
            eprintln!("retro-snake: {error}");
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook();

    if let Err(error) = run(state, config) {
        eprintln!("retro-snake: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(mut state: GameState, config: GameConfig) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut clock = TickClock::new(config.tick_interval);

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state))?;

        if let Some(game_input) = input.poll_input()? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => state.set_direction(direction),
            }
        }

        if clock.event_triggered() {
            state.tick();
        }

        thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}
