//! DC power supply.

use super::{FixedResistor, Ohms, Resistor, Volts};
use crate::error::{OhmError, Result};

/// An ideal EMF source with a series internal resistor.
///
///   (+) ---(EMF)---[R_internal]--- (terminal)
///
/// The internal resistor is owned by the supply and is usually a
/// [`FixedResistor`].
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSupply<R = FixedResistor> {
    emf: Volts,
    internal_resistor: R,
}

impl<R: Resistor> PowerSupply<R> {
    /// Create a new power supply.
    ///
    /// Fails with `InvalidParameter` if `emf` is negative or NaN.
    pub fn new(emf: Volts, internal_resistor: R) -> Result<Self> {
        if emf.is_nan() {
            return Err(OhmError::invalid_parameter("emf", "EMF is not a number"));
        }
        if emf < 0.0 {
            return Err(OhmError::invalid_parameter("emf", "EMF is lesser than zero"));
        }

        Ok(Self {
            emf,
            internal_resistor,
        })
    }

    /// Electromotive force.
    pub fn emf(&self) -> Volts {
        self.emf
    }

    /// The internal series resistor.
    pub fn internal_resistor(&self) -> &R {
        &self.internal_resistor
    }

    /// Shorthand for the internal resistor's resistance.
    pub fn internal_resistance(&self) -> Ohms {
        self.internal_resistor.resistance()
    }
}

impl PowerSupply<FixedResistor> {
    /// Create a supply whose internal resistor is a [`FixedResistor`].
    pub fn with_internal_resistance(emf: Volts, internal_resistance: Ohms) -> Result<Self> {
        Self::new(emf, FixedResistor::new(internal_resistance)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Potentiometer;

    #[test]
    fn test_new_power_supply() {
        let r = FixedResistor::new(2.0).unwrap();
        let supply = PowerSupply::new(12.0, r).unwrap();
        assert_eq!(supply.emf(), 12.0);
        assert_eq!(supply.internal_resistor().resistance(), 2.0);
        assert_eq!(supply.internal_resistance(), 2.0);
    }

    #[test]
    fn test_zero_emf_allowed() {
        assert!(PowerSupply::with_internal_resistance(0.0, 1.0).is_ok());
    }

    #[test]
    fn test_negative_emf_rejected() {
        let err = PowerSupply::with_internal_resistance(-0.1, 1.0).unwrap_err();
        assert!(matches!(err, OhmError::InvalidParameter { ref param, .. } if param == "emf"));
        assert!(PowerSupply::with_internal_resistance(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_invalid_internal_resistance_rejected() {
        assert!(PowerSupply::with_internal_resistance(5.0, -2.0).is_err());
    }

    #[test]
    fn test_any_resistor_as_internal() {
        let supply = PowerSupply::new(9.0, Potentiometer::new(10.0).unwrap()).unwrap();
        assert_eq!(supply.internal_resistance(), 5.0);
    }
}
