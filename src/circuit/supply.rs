//! A power supply driving one external resistor.

use std::fmt;

use super::connect_in_series;
use super::types::Readings;
use crate::components::{Amps, FixedResistor, PowerSupply, Resistor, Volts, Watts};

/// A power supply and an external resistor connected in series.
///
/// ```text
///   +--(EMF)--[R_internal]--+
///   |                       |
///   +------[R_external]-----+
/// ```
///
/// The circuit only borrows its parts and keeps no state of its own: every
/// quantity is recomputed from the present resistances on each call, so a
/// potentiometer moved between two reads is always reflected.
pub struct Circuit<'a, E: ?Sized, R = FixedResistor> {
    supply: &'a PowerSupply<R>,
    external: &'a E,
}

impl<'a, E: ?Sized, R> Circuit<'a, E, R> {
    /// Connect `external` across the terminals of `supply`.
    pub fn new(supply: &'a PowerSupply<R>, external: &'a E) -> Self {
        Self { supply, external }
    }

    /// The connected power supply.
    pub fn power_supply(&self) -> &'a PowerSupply<R> {
        self.supply
    }

    /// The connected external resistor.
    pub fn external_resistor(&self) -> &'a E {
        self.external
    }
}

impl<E: ?Sized, R> Clone for Circuit<'_, E, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized, R> Copy for Circuit<'_, E, R> {}

impl<E: fmt::Debug + ?Sized, R: fmt::Debug> fmt::Debug for Circuit<'_, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circuit")
            .field("supply", self.supply)
            .field("external", &self.external)
            .finish()
    }
}

impl<E, R> Circuit<'_, E, R>
where
    E: Resistor + ?Sized,
    R: Resistor,
{
    /// Loop current.
    ///
    /// Infinite when the total series resistance is exactly zero.
    pub fn current(&self) -> Amps {
        let loop_elements: [&dyn Resistor; 2] = [self.supply.internal_resistor(), &self.external];
        let total = connect_in_series(loop_elements).resistance();
        if total == 0.0 {
            return f64::INFINITY;
        }

        self.supply.emf() / total
    }

    /// Voltage across the external resistor.
    pub fn external_voltage(&self) -> Volts {
        self.external.voltage_given_current(self.current())
    }

    /// Voltage dropped on the internal resistor.
    pub fn internal_voltage(&self) -> Volts {
        self.supply
            .internal_resistor()
            .voltage_given_current(self.current())
    }

    /// True when the external resistance is exactly zero.
    pub fn is_short_circuit(&self) -> bool {
        self.external.resistance() == 0.0
    }

    /// Power produced by the EMF.
    pub fn full_power(&self) -> Watts {
        self.supply.emf() * self.current()
    }

    /// Power dissipated in the internal resistor.
    pub fn power_loss(&self) -> Watts {
        let current = self.current();
        current * current * self.supply.internal_resistance()
    }

    /// Power delivered to the external resistor.
    pub fn external_power(&self) -> Watts {
        self.current() * self.external_voltage()
    }

    /// All derived quantities at once.
    pub fn readings(&self) -> Readings {
        Readings {
            external_resistance: self.external.resistance(),
            internal_resistance: self.supply.internal_resistance(),
            current: self.current(),
            external_voltage: self.external_voltage(),
            internal_voltage: self.internal_voltage(),
            full_power: self.full_power(),
            external_power: self.external_power(),
            power_loss: self.power_loss(),
            short_circuit: self.is_short_circuit(),
        }
    }
}
