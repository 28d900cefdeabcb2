//! Potentiometer sweeps.
//!
//! A sweep moves the wiper of a private copy of the circuit's potentiometer
//! across its full travel and records every derived quantity at each step,
//! producing aligned columns ready for plotting:
//!
//! ```text
//! position:  0   100/n   200/n   ...   100 - 100/n
//! current:   I0  I1      I2      ...   I(n-1)
//! ...
//! ```
//!
//! The live potentiometer is never moved.

mod chart;
mod config;
mod sampler;

pub use chart::{Chart, Series};
pub use config::{steps_for_max_resistance, SweepConfig};
pub use sampler::{sweep, SweepResult, SweepSample};

use crate::components::Ohms;

/// Resistance added to a sample that would carry infinite current.
pub const DEFAULT_SHORT_CIRCUIT_NUDGE: Ohms = 1e-6;

/// `(max resistance upper bound, steps)` pairs, checked in order.
pub const STEP_TIERS: [(Ohms, usize); 3] = [(1_000.0, 1_000), (5_000.0, 5_000), (10_000.0, 20_000)];

/// Steps for potentiometers at or above the last tier.
pub const STEPS_ABOVE_TIERS: usize = 40_000;
