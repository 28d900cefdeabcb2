//! # Ohm Core
//!
//! A model of the simplest DC circuit: a power supply with internal
//! resistance driving a potentiometer.
//!
//! This library provides:
//! - Resistive elements (fixed resistors, potentiometers) behind one
//!   [`Resistor`] capability
//! - Series and parallel equivalents of resistor groups
//! - The supply circuit model deriving current, voltages and powers
//! - Potentiometer sweeps producing plot-ready datasets
//! - A session type holding the interactive state a front end owns
//!
//! ## Architecture
//!
//! - [`components`] - Resistors and the power supply
//! - [`circuit`] - Series/parallel composition and the supply circuit
//! - [`sweep`] - Sampling the circuit across the potentiometer travel
//! - [`session`] - Parse-then-validate user input and live readings
//! - [`report`] - CSV output (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! ohm readings --emf 10 --internal 5 --max 10 --position 50
//! ohm sweep --emf 10 --internal 5 --max 500 --table power > p_of_i.csv
//! ```
//!
//! ### Library
//!
//! ```
//! use ohm_core::{Circuit, FixedResistor, PowerSupply};
//!
//! let supply = PowerSupply::new(10.0, FixedResistor::new(5.0)?)?;
//! let load = FixedResistor::new(5.0)?;
//! let circuit = Circuit::new(&supply, &load);
//! assert_eq!(circuit.current(), 1.0);
//! assert_eq!(circuit.external_power(), 5.0);
//! # Ok::<(), ohm_core::OhmError>(())
//! ```
//!
//! ## Special values
//!
//! Results are plain `f64`. A loop with zero total resistance carries
//! `f64::INFINITY` amps; quantities that multiply that infinity by a zero
//! resistance are NaN. Neither is reported as an error.

pub mod circuit;
pub mod components;
pub mod error;
pub mod session;
pub mod sweep;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use circuit::{connect_in_parallel, connect_in_series, Circuit, Readings};
pub use components::{FixedResistor, Potentiometer, PowerSupply, Resistor};
pub use error::{OhmError, Result};
pub use session::{Session, SessionInput};
pub use sweep::{sweep, SweepConfig, SweepResult};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmOhmSession;
