//! Control components: Potentiometer.

use super::{check_resistance, Ohms, Percent, Resistor};
use crate::error::{OhmError, Result};

/// A variable resistor.
///
/// Modeled as a two-terminal resistance between one end and the wiper:
///   end ----[R]---- wiper
///
/// where R = position / 100 * max_resistance.
///
/// A new potentiometer starts at mid travel (R = max / 2).
#[derive(Debug, Clone, PartialEq)]
pub struct Potentiometer {
    max_resistance: Ohms,
    resistance: Ohms,
}

impl Potentiometer {
    /// Lowest accepted wiper position.
    pub const MIN_POSITION: Percent = 0.0;
    /// Highest accepted wiper position.
    pub const MAX_POSITION: Percent = 100.0;

    /// Create a new potentiometer.
    ///
    /// Fails with `InvalidParameter` if `max_resistance` is negative, NaN
    /// or infinite.
    pub fn new(max_resistance: Ohms) -> Result<Self> {
        let max_resistance = check_resistance("max_resistance", max_resistance)?;
        if max_resistance.is_infinite() {
            return Err(OhmError::invalid_parameter(
                "max_resistance",
                "Resistance value is not finite",
            ));
        }

        Ok(Self {
            max_resistance,
            resistance: max_resistance / 2.0,
        })
    }

    /// Full-travel resistance.
    pub fn max_resistance(&self) -> Ohms {
        self.max_resistance
    }

    /// Move the wiper to `percent` of full travel.
    ///
    /// Returns the new resistance. Fails if `percent` is outside `[0, 100]`
    /// (NaN included); the resistance is then left unchanged.
    pub fn set_position(&mut self, percent: Percent) -> Result<Ohms> {
        if !(Self::MIN_POSITION..=Self::MAX_POSITION).contains(&percent) {
            return Err(OhmError::invalid_parameter(
                "position",
                format!("Position coefficient {percent} is not in range 0..100"),
            ));
        }

        self.resistance = self.max_resistance * percent / 100.0;
        Ok(self.resistance)
    }

    /// Set the resistance directly, as typed by a user.
    ///
    /// Applies the same bound as [`Potentiometer::set_position`]: the value
    /// must lie in `[0, max_resistance]`.
    pub fn set_resistance(&mut self, resistance: Ohms) -> Result<Ohms> {
        let resistance = check_resistance("resistance", resistance)?;
        if resistance > self.max_resistance {
            return Err(OhmError::invalid_parameter(
                "resistance",
                format!(
                    "Resistance {resistance} exceeds potentiometer maximum {}",
                    self.max_resistance
                ),
            ));
        }

        self.resistance = resistance;
        Ok(self.resistance)
    }

    /// Raise the resistance without the travel bound check.
    ///
    /// Only used to step a sampled potentiometer off a dead short.
    pub(crate) fn nudge_resistance(&mut self, delta: Ohms) {
        self.resistance += delta;
    }

    /// Wiper position in percent of full travel, derived from the resistance.
    ///
    /// A zero-ohm potentiometer always reports position 0.
    pub fn position(&self) -> Percent {
        if self.max_resistance == 0.0 {
            0.0
        } else {
            self.resistance / self.max_resistance * 100.0
        }
    }

    /// A fresh potentiometer with the same maximum, at mid travel.
    pub fn fresh_copy(&self) -> Self {
        Self {
            max_resistance: self.max_resistance,
            resistance: self.max_resistance / 2.0,
        }
    }
}

impl Resistor for Potentiometer {
    fn resistance(&self) -> Ohms {
        self.resistance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_at_mid_travel() {
        let pot = Potentiometer::new(1000.0).unwrap();
        assert_eq!(pot.resistance(), 500.0);
        assert_eq!(pot.max_resistance(), 1000.0);
        assert_eq!(pot.position(), 50.0);
    }

    #[test]
    fn test_invalid_max_resistance() {
        assert!(Potentiometer::new(-1.0).is_err());
        assert!(Potentiometer::new(f64::NAN).is_err());
        assert!(Potentiometer::new(f64::INFINITY).is_err());
        assert!(Potentiometer::new(0.0).is_ok());
    }

    #[test]
    fn test_position_endpoints() {
        let mut pot = Potentiometer::new(1000.0).unwrap();
        assert_eq!(pot.set_position(0.0).unwrap(), 0.0);
        assert_eq!(pot.resistance(), 0.0);
        assert_eq!(pot.set_position(100.0).unwrap(), 1000.0);
        assert_eq!(pot.resistance(), 1000.0);
    }

    #[test]
    fn test_position_out_of_range_keeps_state() {
        let mut pot = Potentiometer::new(1000.0).unwrap();
        pot.set_position(25.0).unwrap();

        for bad in [-1.0, 101.0, f64::NAN, f64::INFINITY] {
            let err = pot.set_position(bad).unwrap_err();
            assert!(matches!(err, OhmError::InvalidParameter { .. }));
            assert_eq!(pot.resistance(), 250.0);
        }
    }

    #[test]
    fn test_position_round_trip() {
        let mut pot = Potentiometer::new(4700.0).unwrap();
        for p in [0.0, 0.1, 12.5, 33.3, 50.0, 99.99, 100.0] {
            let r = pot.set_position(p).unwrap();
            assert_relative_eq!(r / pot.max_resistance() * 100.0, p, epsilon = 1e-9);
            assert_relative_eq!(pot.position(), p, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ohms_law_uses_stored_resistance() {
        let mut pot = Potentiometer::new(200.0).unwrap();
        pot.set_position(50.0).unwrap();
        assert_relative_eq!(pot.current_given_voltage(10.0), 0.1);
        assert_relative_eq!(pot.voltage_given_current(0.5), 50.0);

        pot.set_position(0.0).unwrap();
        assert_eq!(pot.current_given_voltage(10.0), f64::INFINITY);
        assert_eq!(pot.current_given_voltage(0.0), 0.0);
    }

    #[test]
    fn test_set_resistance_bounds() {
        let mut pot = Potentiometer::new(100.0).unwrap();
        assert_eq!(pot.set_resistance(42.0).unwrap(), 42.0);
        assert_eq!(pot.set_resistance(100.0).unwrap(), 100.0);
        assert_eq!(pot.set_resistance(0.0).unwrap(), 0.0);

        assert!(pot.set_resistance(100.5).is_err());
        assert!(pot.set_resistance(-0.5).is_err());
        assert!(pot.set_resistance(f64::NAN).is_err());
        assert_eq!(pot.resistance(), 0.0);
    }

    #[test]
    fn test_zero_ohm_pot_position() {
        let mut pot = Potentiometer::new(0.0).unwrap();
        pot.set_position(80.0).unwrap();
        assert_eq!(pot.resistance(), 0.0);
        assert_eq!(pot.position(), 0.0);
    }

    #[test]
    fn test_nudge_bypasses_bound() {
        let mut pot = Potentiometer::new(0.0).unwrap();
        pot.nudge_resistance(1e-6);
        assert_eq!(pot.resistance(), 1e-6);
    }

    #[test]
    fn test_fresh_copy_is_independent() {
        let mut pot = Potentiometer::new(300.0).unwrap();
        pot.set_position(10.0).unwrap();
        let mut copy = pot.fresh_copy();
        assert_eq!(copy.resistance(), 150.0);
        copy.set_position(90.0).unwrap();
        assert_relative_eq!(pot.resistance(), 30.0);
    }
}
