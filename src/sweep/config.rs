//! Sweep configuration.

use crate::components::{Ohms, Potentiometer};
use crate::error::{OhmError, Result};

use super::{DEFAULT_SHORT_CIRCUIT_NUDGE, STEP_TIERS, STEPS_ABOVE_TIERS};

/// Number of samples for a potentiometer of the given full-travel resistance.
///
/// Larger potentiometers get finer sampling:
/// below 1 kΩ 1000 steps, below 5 kΩ 5000, below 10 kΩ 20000, else 40000.
pub fn steps_for_max_resistance(max_resistance: Ohms) -> usize {
    STEP_TIERS
        .iter()
        .find(|(limit, _)| max_resistance < *limit)
        .map(|&(_, steps)| steps)
        .unwrap_or(STEPS_ABOVE_TIERS)
}

/// Configuration for a potentiometer sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Fixed number of samples; `None` picks it from the potentiometer size.
    pub steps: Option<usize>,
    /// Resistance added to a sample that would otherwise carry infinite current.
    pub short_circuit_nudge: Ohms,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            steps: None,
            short_circuit_nudge: DEFAULT_SHORT_CIRCUIT_NUDGE,
        }
    }
}

impl SweepConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use exactly `steps` samples instead of the size-based default.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set the resistance nudge applied to dead-short samples (in ohms).
    pub fn with_short_circuit_nudge(mut self, nudge: Ohms) -> Self {
        self.short_circuit_nudge = nudge;
        self
    }

    /// Check the configuration before a sweep.
    pub fn validate(&self) -> Result<()> {
        if self.steps == Some(0) {
            return Err(OhmError::invalid_sweep("step count must be at least 1"));
        }
        if !(self.short_circuit_nudge.is_finite() && self.short_circuit_nudge > 0.0) {
            return Err(OhmError::invalid_sweep(format!(
                "short-circuit nudge must be a positive finite resistance, got {}",
                self.short_circuit_nudge
            )));
        }
        Ok(())
    }

    /// Step count to use for `potentiometer`.
    pub fn steps_for(&self, potentiometer: &Potentiometer) -> usize {
        self.steps
            .unwrap_or_else(|| steps_for_max_resistance(potentiometer.max_resistance()))
    }
}
