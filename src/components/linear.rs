//! Fixed resistor.

use super::{check_resistance, Ohms, Resistor};
use crate::error::Result;

/// A resistor with a constant resistance.
///
/// The resistance is validated on construction and never changes. An
/// infinite resistance is accepted and models an open branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedResistor {
    resistance: Ohms,
}

impl FixedResistor {
    /// Create a new fixed resistor.
    ///
    /// Fails with `InvalidParameter` if `resistance` is negative or NaN.
    pub fn new(resistance: Ohms) -> Result<Self> {
        let resistance = check_resistance("resistance", resistance)?;
        Ok(Self { resistance })
    }

    /// Build a resistor from a value already known to be valid, such as the
    /// equivalent of a series or parallel connection.
    pub(crate) fn from_equivalent(resistance: Ohms) -> Self {
        Self { resistance }
    }
}

impl Resistor for FixedResistor {
    fn resistance(&self) -> Ohms {
        self.resistance
    }
}
