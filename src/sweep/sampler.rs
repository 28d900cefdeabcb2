//! Sampling a circuit across the potentiometer travel.

use tracing::debug;

use super::{Chart, Series, SweepConfig};
use crate::circuit::Circuit;
use crate::components::{Amps, Ohms, Percent, Potentiometer, PowerSupply, Resistor, Volts, Watts};
use crate::error::Result;

/// Every derived quantity at one wiper position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    pub position: Percent,
    pub resistance: Ohms,
    pub current: Amps,
    pub u_external: Volts,
    pub u_internal: Volts,
    pub p_full: Watts,
    pub p_external: Watts,
    pub p_loss: Watts,
}

/// Samples of a sweep, ordered by increasing position.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    max_resistance: Ohms,
    samples: Vec<SweepSample>,
}

impl SweepResult {
    /// Full-travel resistance of the swept potentiometer.
    pub fn max_resistance(&self) -> Ohms {
        self.max_resistance
    }

    pub fn samples(&self) -> &[SweepSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn column(&self, field: impl Fn(&SweepSample) -> f64) -> Vec<f64> {
        self.samples.iter().map(field).collect()
    }

    /// Position axis, in percent.
    pub fn positions(&self) -> Vec<Percent> {
        self.column(|s| s.position)
    }

    pub fn resistances(&self) -> Vec<Ohms> {
        self.column(|s| s.resistance)
    }

    pub fn currents(&self) -> Vec<Amps> {
        self.column(|s| s.current)
    }

    pub fn external_voltages(&self) -> Vec<Volts> {
        self.column(|s| s.u_external)
    }

    pub fn internal_voltages(&self) -> Vec<Volts> {
        self.column(|s| s.u_internal)
    }

    pub fn full_powers(&self) -> Vec<Watts> {
        self.column(|s| s.p_full)
    }

    pub fn external_powers(&self) -> Vec<Watts> {
        self.column(|s| s.p_external)
    }

    pub fn power_losses(&self) -> Vec<Watts> {
        self.column(|s| s.p_loss)
    }

    /// Terminal and internal voltage against current, "U(I)".
    pub fn voltage_chart(&self) -> Chart {
        Chart {
            title: "U(I)".to_string(),
            x_label: "I, A".to_string(),
            y_label: "U, V".to_string(),
            x: self.currents(),
            series: vec![
                Series::new("Uexternal", self.external_voltages()),
                Series::new("Uinternal", self.internal_voltages()),
            ],
        }
    }

    /// Delivered, lost and produced power against current, "P(I)".
    pub fn power_chart(&self) -> Chart {
        Chart {
            title: "P(I)".to_string(),
            x_label: "I, A".to_string(),
            y_label: "P, Watt".to_string(),
            x: self.currents(),
            series: vec![
                Series::new("Pexternal", self.external_powers()),
                Series::new("Ploss", self.power_losses()),
                Series::new("Pfull", self.full_powers()),
            ],
        }
    }
}

/// Wiper position of step `index` out of `steps`.
fn position_at(index: usize, steps: usize) -> Percent {
    index as f64 / steps as f64 * 100.0
}

/// Move `potentiometer` to `position` and read the circuit it forms with `supply`.
fn sample_step<R: Resistor>(
    supply: &PowerSupply<R>,
    potentiometer: &mut Potentiometer,
    position: Percent,
    nudge: Ohms,
) -> Result<SweepSample> {
    potentiometer.set_position(position)?;

    if Circuit::new(supply, &*potentiometer).current() == f64::INFINITY {
        debug!(
            "Dead short at position {:.4}%, raising resistance by {:e} Ω",
            position, nudge
        );
        potentiometer.nudge_resistance(nudge);
    }

    let circuit = Circuit::new(supply, &*potentiometer);
    Ok(SweepSample {
        position,
        resistance: potentiometer.resistance(),
        current: circuit.current(),
        u_external: circuit.external_voltage(),
        u_internal: circuit.internal_voltage(),
        p_full: circuit.full_power(),
        p_external: circuit.external_power(),
        p_loss: circuit.power_loss(),
    })
}

#[cfg(not(feature = "parallel"))]
fn collect_samples<R: Resistor>(
    supply: &PowerSupply<R>,
    template: &Potentiometer,
    steps: usize,
    nudge: Ohms,
) -> Result<Vec<SweepSample>> {
    let mut potentiometer = template.fresh_copy();
    (0..steps)
        .map(|i| sample_step(supply, &mut potentiometer, position_at(i, steps), nudge))
        .collect()
}

#[cfg(feature = "parallel")]
fn collect_samples<R: Resistor + Sync>(
    supply: &PowerSupply<R>,
    template: &Potentiometer,
    steps: usize,
    nudge: Ohms,
) -> Result<Vec<SweepSample>> {
    use rayon::prelude::*;

    (0..steps)
        .into_par_iter()
        .map_init(
            || template.fresh_copy(),
            |potentiometer, i| sample_step(supply, potentiometer, position_at(i, steps), nudge),
        )
        .collect()
}

/// Sweep the circuit's potentiometer across its full travel.
///
/// Sampling happens on a fresh potentiometer with the same maximum, so the
/// potentiometer inside `circuit` keeps its position. Step `i` of `n` sits at
/// `i / n * 100` percent; the last sample is just below full travel.
///
/// A sample whose current would be infinite (external and internal
/// resistance both zero) has its resistance raised by
/// [`SweepConfig::short_circuit_nudge`] first, so the dataset stays finite.
pub fn sweep<R: Resistor + Sync>(
    circuit: &Circuit<'_, Potentiometer, R>,
    config: &SweepConfig,
) -> Result<SweepResult> {
    config.validate()?;

    let template = circuit.external_resistor();
    let steps = config.steps_for(template);
    debug!(
        "Sweeping potentiometer: max={:.3} Ω, steps={}",
        template.max_resistance(),
        steps
    );

    let samples = collect_samples(
        circuit.power_supply(),
        template,
        steps,
        config.short_circuit_nudge,
    )?;

    debug!("Sweep finished: {} samples", samples.len());
    Ok(SweepResult {
        max_resistance: template.max_resistance(),
        samples,
    })
}
