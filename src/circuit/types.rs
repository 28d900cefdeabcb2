//! Value types describing a solved circuit.

use std::fmt;

use crate::components::{Amps, Ohms, Volts, Watts};

/// Snapshot of every derived quantity of a supply circuit at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// Resistance of the external element.
    pub external_resistance: Ohms,
    /// Resistance inside the supply.
    pub internal_resistance: Ohms,
    /// Loop current.
    pub current: Amps,
    /// Voltage across the external element (terminal voltage).
    pub external_voltage: Volts,
    /// Voltage dropped inside the supply.
    pub internal_voltage: Volts,
    /// Power produced by the EMF.
    pub full_power: Watts,
    /// Power delivered to the external element.
    pub external_power: Watts,
    /// Power dissipated in the internal resistance.
    pub power_loss: Watts,
    /// External element is a dead short.
    pub short_circuit: bool,
}

impl Readings {
    /// Named values in display order, for tabular output.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("external_resistance", self.external_resistance),
            ("internal_resistance", self.internal_resistance),
            ("current", self.current),
            ("external_voltage", self.external_voltage),
            ("internal_voltage", self.internal_voltage),
            ("full_power", self.full_power),
            ("external_power", self.external_power),
            ("power_loss", self.power_loss),
        ]
    }
}

impl fmt::Display for Readings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "I={:.6} A, Uext={:.6} V, Uint={:.6} V, Pfull={:.6} W, Pext={:.6} W, Ploss={:.6} W",
            self.current,
            self.external_voltage,
            self.internal_voltage,
            self.full_power,
            self.external_power,
            self.power_loss
        )?;
        if self.short_circuit {
            write!(f, " (short circuit)")?;
        }
        Ok(())
    }
}
