//! Circuit composition and the supply circuit model.
//!
//! This module provides the series/parallel equivalents of resistive
//! elements and the [`Circuit`] struct, which connects a
//! [`PowerSupply`](crate::components::PowerSupply) to one external resistor
//! in series and derives current, voltages and powers from it.

mod connection;
mod supply;
mod types;

pub use connection::{connect_in_parallel, connect_in_series};
pub use supply::Circuit;
pub use types::Readings;
