#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
mod player;
pub mod rules;
pub mod sim;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use sim::{simulate_round, simulate_rounds, SimulationSummary};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
