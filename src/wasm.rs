//! WASM bindings for Ohm Core.
//!
//! This module provides JavaScript-friendly bindings so a web page can play
//! the role of the control panel: text fields for the circuit parameters, a
//! slider for the potentiometer and charts fed from a sweep.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmOhmSession } from 'ohm_core';
//!
//! await init();
//!
//! const session = new WasmOhmSession(emfField.value, rField.value, maxField.value);
//!
//! slider.oninput = () => {
//!   session.set_position(slider.value);
//!   currentField.value = session.current;
//! };
//!
//! session.sweep();
//! plot(session.sweep_currents(), session.sweep_external_voltages());
//! ```

use wasm_bindgen::prelude::*;

use crate::error::OhmError;
use crate::session::{Session, SessionInput};
use crate::sweep::{SweepConfig, SweepResult};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(e: OhmError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible circuit session.
///
/// Wraps the native [`Session`] and keeps the last sweep so its columns can
/// be fetched one by one.
#[wasm_bindgen]
pub struct WasmOhmSession {
    session: Session,
    last_sweep: Option<SweepResult>,
}

#[wasm_bindgen]
impl WasmOhmSession {
    /// Start a session from the three text fields.
    ///
    /// # Returns
    /// A new `WasmOhmSession` or an error message if any field is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(
        emf: &str,
        internal_resistance: &str,
        max_resistance: &str,
    ) -> Result<WasmOhmSession, JsValue> {
        let input = SessionInput::new(emf, internal_resistance, max_resistance);
        let session = Session::start(&input).map_err(js_error)?;
        Ok(WasmOhmSession {
            session,
            last_sweep: None,
        })
    }

    /// Move the slider. Returns the new external resistance.
    #[wasm_bindgen]
    pub fn set_position(&mut self, percent: f64) -> Result<f64, JsValue> {
        self.session.set_position(percent).map_err(js_error)
    }

    /// Type an external resistance. Returns the accepted value.
    #[wasm_bindgen]
    pub fn enter_resistance(&mut self, text: &str) -> Result<f64, JsValue> {
        self.session.enter_resistance(text).map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn position(&self) -> f64 {
        self.session.position()
    }

    #[wasm_bindgen(getter)]
    pub fn external_resistance(&self) -> f64 {
        self.session.external_resistance()
    }

    #[wasm_bindgen(getter)]
    pub fn current(&self) -> f64 {
        self.session.readings().current
    }

    #[wasm_bindgen(getter)]
    pub fn external_voltage(&self) -> f64 {
        self.session.readings().external_voltage
    }

    #[wasm_bindgen(getter)]
    pub fn internal_voltage(&self) -> f64 {
        self.session.readings().internal_voltage
    }

    #[wasm_bindgen(getter)]
    pub fn full_power(&self) -> f64 {
        self.session.readings().full_power
    }

    #[wasm_bindgen(getter)]
    pub fn external_power(&self) -> f64 {
        self.session.readings().external_power
    }

    #[wasm_bindgen(getter)]
    pub fn power_loss(&self) -> f64 {
        self.session.readings().power_loss
    }

    #[wasm_bindgen(getter)]
    pub fn short_circuit(&self) -> bool {
        self.session.readings().short_circuit
    }

    /// Sweep the potentiometer with the default configuration.
    ///
    /// Returns the number of samples; fetch the columns with the
    /// `sweep_*` methods.
    #[wasm_bindgen]
    pub fn sweep(&mut self) -> Result<usize, JsValue> {
        let result = self
            .session
            .sweep(&SweepConfig::default())
            .map_err(js_error)?;
        let len = result.len();
        self.last_sweep = Some(result);
        Ok(len)
    }

    #[wasm_bindgen]
    pub fn sweep_positions(&self) -> Vec<f64> {
        self.sweep_column(SweepResult::positions)
    }

    #[wasm_bindgen]
    pub fn sweep_currents(&self) -> Vec<f64> {
        self.sweep_column(SweepResult::currents)
    }

    #[wasm_bindgen]
    pub fn sweep_external_voltages(&self) -> Vec<f64> {
        self.sweep_column(SweepResult::external_voltages)
    }

    #[wasm_bindgen]
    pub fn sweep_internal_voltages(&self) -> Vec<f64> {
        self.sweep_column(SweepResult::internal_voltages)
    }

    #[wasm_bindgen]
    pub fn sweep_full_powers(&self) -> Vec<f64> {
        self.sweep_column(SweepResult::full_powers)
    }

    #[wasm_bindgen]
    pub fn sweep_external_powers(&self) -> Vec<f64> {
        self.sweep_column(SweepResult::external_powers)
    }

    #[wasm_bindgen]
    pub fn sweep_power_losses(&self) -> Vec<f64> {
        self.sweep_column(SweepResult::power_losses)
    }
}

impl WasmOhmSession {
    fn sweep_column(&self, column: fn(&SweepResult) -> Vec<f64>) -> Vec<f64> {
        self.last_sweep.as_ref().map(column).unwrap_or_default()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
