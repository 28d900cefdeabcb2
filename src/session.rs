//! Interactive session state.
//!
//! A [`Session`] is what a front end (desktop window, web page, CLI) owns
//! while a user plays with the circuit: the supply and the potentiometer
//! built from three text fields, plus the operations the controls map to.
//! Every user-supplied value goes through parse-then-validate; a rejected
//! value leaves the session exactly as it was, so the caller can restore
//! the previous field contents.

use tracing::{info, warn};

use crate::circuit::{Circuit, Readings};
use crate::components::{Ohms, Percent, Potentiometer, PowerSupply, Resistor, Volts};
use crate::error::{OhmError, Result};
use crate::sweep::{sweep, SweepConfig, SweepResult};

/// Field names used in input errors.
pub const EMF_FIELD: &str = "emf";
pub const INTERNAL_RESISTANCE_FIELD: &str = "internal resistance";
pub const MAX_RESISTANCE_FIELD: &str = "max resistance";
pub const EXTERNAL_RESISTANCE_FIELD: &str = "external resistance";

/// Parse one numeric text field.
///
/// Surrounding whitespace is ignored and a decimal comma is accepted.
pub fn parse_number(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| OhmError::invalid_number(field, trimmed))
}

/// Raw text of the three start-up fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInput {
    pub emf: String,
    pub internal_resistance: String,
    pub max_resistance: String,
}

impl SessionInput {
    pub fn new(
        emf: impl Into<String>,
        internal_resistance: impl Into<String>,
        max_resistance: impl Into<String>,
    ) -> Self {
        Self {
            emf: emf.into(),
            internal_resistance: internal_resistance.into(),
            max_resistance: max_resistance.into(),
        }
    }
}

/// A running simulation: one supply driving one potentiometer.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    supply: PowerSupply,
    potentiometer: Potentiometer,
}

impl Session {
    /// Build a session from already-parsed values.
    pub fn new(emf: Volts, internal_resistance: Ohms, max_resistance: Ohms) -> Result<Self> {
        let supply = PowerSupply::with_internal_resistance(emf, internal_resistance)?;
        let potentiometer = Potentiometer::new(max_resistance)?;
        info!(
            "Session started: emf={} V, r={} Ω, max={} Ω",
            emf, internal_resistance, max_resistance
        );
        Ok(Self {
            supply,
            potentiometer,
        })
    }

    /// Parse and validate the start-up fields.
    pub fn start(input: &SessionInput) -> Result<Self> {
        let parsed = parse_number(EMF_FIELD, &input.emf).and_then(|emf| {
            let internal = parse_number(INTERNAL_RESISTANCE_FIELD, &input.internal_resistance)?;
            let max = parse_number(MAX_RESISTANCE_FIELD, &input.max_resistance)?;
            Self::new(emf, internal, max)
        });

        if let Err(ref e) = parsed {
            warn!("Rejected session input: {}", e);
        }
        parsed
    }

    pub fn power_supply(&self) -> &PowerSupply {
        &self.supply
    }

    pub fn potentiometer(&self) -> &Potentiometer {
        &self.potentiometer
    }

    /// The circuit formed by the supply and the potentiometer right now.
    pub fn circuit(&self) -> Circuit<'_, Potentiometer> {
        Circuit::new(&self.supply, &self.potentiometer)
    }

    /// Slider moved. Returns the new external resistance.
    pub fn set_position(&mut self, percent: Percent) -> Result<Ohms> {
        self.potentiometer.set_position(percent).map_err(|e| {
            warn!("Rejected position {}: {}", percent, e);
            e
        })
    }

    /// Resistance typed into the external-resistance field.
    ///
    /// Returns the new resistance; the slider should follow
    /// [`Session::position`].
    pub fn enter_resistance(&mut self, text: &str) -> Result<Ohms> {
        let entered = parse_number(EXTERNAL_RESISTANCE_FIELD, text)
            .and_then(|value| self.potentiometer.set_resistance(value));

        if let Err(ref e) = entered {
            warn!("Rejected external resistance '{}': {}", text.trim(), e);
        }
        entered
    }

    /// Wiper position matching the present resistance.
    pub fn position(&self) -> Percent {
        self.potentiometer.position()
    }

    pub fn external_resistance(&self) -> Ohms {
        self.potentiometer.resistance()
    }

    /// Every derived quantity for the present position.
    pub fn readings(&self) -> Readings {
        self.circuit().readings()
    }

    /// Sweep the whole potentiometer travel without moving the live wiper.
    pub fn sweep(&self, config: &SweepConfig) -> Result<SweepResult> {
        sweep(&self.circuit(), config)
    }
}
