//! Series and parallel composition of resistive elements.

use crate::components::{FixedResistor, Ohms, Resistor};

/// Equivalent resistor of elements connected in series.
///
/// R_eq = R_1 + R_2 + ... + R_n. No elements yields 0 Ω.
pub fn connect_in_series<I>(resistors: I) -> FixedResistor
where
    I: IntoIterator,
    I::Item: Resistor,
{
    let sum: Ohms = resistors.into_iter().map(|r| r.resistance()).sum();
    FixedResistor::from_equivalent(sum)
}

/// Equivalent resistor of elements connected in parallel.
///
/// 1/R_eq = 1/R_1 + 1/R_2 + ... + 1/R_n
///
/// Any zero-ohm branch shorts the whole group to 0 Ω. When the reciprocal
/// sum is zero (every branch open, or no branches at all) the result is an
/// infinite resistance.
pub fn connect_in_parallel<I>(resistors: I) -> FixedResistor
where
    I: IntoIterator,
    I::Item: Resistor,
{
    let mut inverted_sum = 0.0;

    for resistor in resistors {
        let resistance = resistor.resistance();
        if resistance == 0.0 {
            return FixedResistor::from_equivalent(0.0);
        }
        inverted_sum += 1.0 / resistance;
    }

    let resistance = if inverted_sum == 0.0 {
        f64::INFINITY
    } else {
        1.0 / inverted_sum
    };
    FixedResistor::from_equivalent(resistance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Potentiometer;
    use approx::assert_relative_eq;

    fn fixed(r: f64) -> FixedResistor {
        FixedResistor::new(r).unwrap()
    }

    #[test]
    fn test_series_empty_is_zero() {
        let none: [FixedResistor; 0] = [];
        assert_eq!(connect_in_series(none).resistance(), 0.0);
    }

    #[test]
    fn test_series_sum() {
        let r = connect_in_series([fixed(100.0), fixed(220.0)]);
        assert_eq!(r.resistance(), 320.0);

        let r = connect_in_series(&[fixed(1.0), fixed(2.0), fixed(3.5)]);
        assert_eq!(r.resistance(), 6.5);
    }

    #[test]
    fn test_series_mixed_kinds() {
        let pot = Potentiometer::new(1000.0).unwrap();
        let r = fixed(50.0);
        let parts: [&dyn Resistor; 2] = [&r, &pot];
        assert_eq!(connect_in_series(parts).resistance(), 550.0);
    }

    #[test]
    fn test_parallel_equal_pair_halves() {
        for r in [0.5, 10.0, 4.7e3, 1e6] {
            let eq = connect_in_parallel([fixed(r), fixed(r)]);
            assert_relative_eq!(eq.resistance(), r / 2.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_parallel_zero_dominates() {
        let eq = connect_in_parallel([fixed(100.0), fixed(0.0), fixed(5.0)]);
        assert_eq!(eq.resistance(), 0.0);

        let eq = connect_in_parallel([fixed(0.0), fixed(f64::INFINITY)]);
        assert_eq!(eq.resistance(), 0.0);
    }

    #[test]
    fn test_parallel_general() {
        let eq = connect_in_parallel([fixed(2.0), fixed(3.0), fixed(6.0)]);
        assert_relative_eq!(eq.resistance(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_parallel_open_branches() {
        let eq = connect_in_parallel([fixed(f64::INFINITY), fixed(f64::INFINITY)]);
        assert_eq!(eq.resistance(), f64::INFINITY);

        let eq = connect_in_parallel([fixed(f64::INFINITY), fixed(8.0)]);
        assert_eq!(eq.resistance(), 8.0);

        let none: [FixedResistor; 0] = [];
        assert_eq!(connect_in_parallel(none).resistance(), f64::INFINITY);
    }
}
