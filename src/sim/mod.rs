//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by elapsed-time deltas and the latched blink input
//! - Every mutated quantity clamped to its bounds after update
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Config, Phase, SimState};
pub use tick::tick;
