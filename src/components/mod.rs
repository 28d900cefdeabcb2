//! Circuit element models.
//!
//! This module provides the elements of the supply circuit:
//! - Resistive: [`FixedResistor`], [`Potentiometer`]
//! - Sources: [`PowerSupply`] (ideal EMF with a series internal resistor)
//!
//! Every resistive element implements the [`Resistor`] capability.

mod controls;
mod linear;
mod sources;

use std::fmt;

pub use controls::Potentiometer;
pub use linear::FixedResistor;
pub use sources::PowerSupply;

/// Resistance in ohms.
pub type Ohms = f64;
/// Potential difference in volts.
pub type Volts = f64;
/// Current in amperes.
pub type Amps = f64;
/// Power in watts.
pub type Watts = f64;
/// Potentiometer position, 0 to 100.
pub type Percent = f64;

/// Any element with a resistance that obeys Ohm's law.
///
/// Implementors only report [`Resistor::resistance`]; the current and voltage
/// responses are derived from it so all element kinds share one formula.
pub trait Resistor: fmt::Debug {
    /// Present resistance of the element.
    fn resistance(&self) -> Ohms;

    /// Current through the element for a voltage applied across it.
    ///
    /// A zero resistance with a nonzero voltage gives an infinite current
    /// carrying the sign of the voltage. Zero volts always gives zero amps,
    /// including on a zero resistance.
    fn current_given_voltage(&self, voltage: Volts) -> Amps {
        let resistance = self.resistance();
        if voltage == 0.0 {
            return 0.0;
        }
        if resistance == 0.0 {
            return voltage.signum() * f64::INFINITY;
        }
        voltage / resistance
    }

    /// Voltage that develops across the element for a forced current.
    fn voltage_given_current(&self, current: Amps) -> Volts {
        current * self.resistance()
    }

    /// Conductance (1/R). Infinite for a zero resistance.
    fn conductance(&self) -> f64 {
        let resistance = self.resistance();
        if resistance == 0.0 {
            f64::INFINITY
        } else {
            1.0 / resistance
        }
    }
}

impl<R: Resistor + ?Sized> Resistor for &R {
    fn resistance(&self) -> Ohms {
        (**self).resistance()
    }
}

impl<R: Resistor + ?Sized> Resistor for Box<R> {
    fn resistance(&self) -> Ohms {
        (**self).resistance()
    }
}

/// Reject negative and NaN resistances.
pub(crate) fn check_resistance(param: &str, value: Ohms) -> crate::Result<Ohms> {
    if value.is_nan() {
        return Err(crate::OhmError::invalid_parameter(
            param,
            "Resistance value is not a number",
        ));
    }
    if value < 0.0 {
        return Err(crate::OhmError::invalid_parameter(
            param,
            "Resistance value lower than zero",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Bare(f64);

    impl Resistor for Bare {
        fn resistance(&self) -> Ohms {
            self.0
        }
    }

    #[test]
    fn test_default_ohms_law() {
        let r = Bare(4.0);
        assert_eq!(r.current_given_voltage(8.0), 2.0);
        assert_eq!(r.voltage_given_current(0.5), 2.0);
        assert_eq!(r.conductance(), 0.25);
    }

    #[test]
    fn test_zero_resistance_gives_signed_infinity() {
        let r = Bare(0.0);
        assert_eq!(r.current_given_voltage(3.0), f64::INFINITY);
        assert_eq!(r.current_given_voltage(-3.0), f64::NEG_INFINITY);
        assert_eq!(r.conductance(), f64::INFINITY);
    }

    #[test]
    fn test_zero_voltage_is_zero_current() {
        assert_eq!(Bare(0.0).current_given_voltage(0.0), 0.0);
        assert_eq!(Bare(100.0).current_given_voltage(0.0), 0.0);
    }

    fn owned_resistance<R: Resistor>(r: R) -> Ohms {
        r.resistance()
    }

    #[test]
    fn test_references_forward() {
        let r = Bare(10.0);
        let boxed: Box<dyn Resistor> = Box::new(Bare(20.0));
        assert_eq!(owned_resistance(&r), 10.0);
        assert_eq!(boxed.resistance(), 20.0);
        assert_eq!(boxed.current_given_voltage(10.0), 0.5);
    }

    #[test]
    fn test_check_resistance() {
        assert!(check_resistance("r", 0.0).is_ok());
        assert!(check_resistance("r", f64::INFINITY).is_ok());
        assert!(check_resistance("r", -1e-9).is_err());
        assert!(check_resistance("r", f64::NAN).is_err());
    }
}
