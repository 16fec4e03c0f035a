//! Retro grid-based snake: a fixed-size discrete grid, a segmented snake,
//! food that never spawns on the body, and a tick-based update protocol.
//!
//! The core state machine lives in [`game`], [`snake`], and [`food`].
//! Everything else is a collaborator: [`renderer`] consumes read-only
//! snapshots, [`input`] translates key events into directional intents, and
//! [`clock`] gates ticks on a fixed wall-time interval.

pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
