//! WASM bindings for the `bitset` library.
//!
//! A configuration is described in JSON, either as a list of digit names or as
//! an object mapping digit names to display specs (see `bitset::serde`):
//!
//! ```text
//! // Pseudo TypeScript example
//! //
//! // const permissions = new WasmConfiguration('{"read": "r", "write": "w", "execute": "x"}');
//! // const mode = permissions.bitSet(["read", "execute"]);
//! // mode.toI();            // 5n
//! // mode.toS("long");      // "r-x"
//! // mode.invert().toS("short"); // "w"
//! ```
//!
//! Errors are converted to `JsValue` strings carrying the library's error message.

mod convert;

use bitset::{BitSet, Configuration, Format, serde::ConfigurationDef};
use wasm_bindgen::prelude::*;

/// Digit schema that bit sets are created from.
#[wasm_bindgen]
pub struct WasmConfiguration {
    configuration: Configuration,
}

#[wasm_bindgen]
impl WasmConfiguration {
    /// Creates a configuration from a JSON definition.
    #[wasm_bindgen(constructor)]
    pub fn new(configuration_json: &str) -> Result<WasmConfiguration, JsValue> {
        let def: ConfigurationDef =
            serde_json::from_str(configuration_json).map_err(convert::error_to_js)?;
        let configuration = Configuration::try_from(def).map_err(convert::error_to_js)?;
        Ok(WasmConfiguration { configuration })
    }

    /// Digit names in declaration order.
    pub fn digits(&self) -> Result<JsValue, JsValue> {
        convert::digits_to_js(self.configuration.digits().collect())
    }

    pub fn max(&self) -> u64 {
        self.configuration.max()
    }

    #[wasm_bindgen(js_name = uniqueCharacters)]
    pub fn unique_characters(&self) -> bool {
        self.configuration.unique_characters()
    }

    /// Creates a bit set from a `BigInt`, a safe integer number or an array of digit names.
    #[wasm_bindgen(js_name = bitSet)]
    pub fn bit_set(&self, state: JsValue) -> Result<WasmBitSet, JsValue> {
        let state = convert::state_from_js(state)?;
        let bit_set = self
            .configuration
            .bit_set(state)
            .map_err(convert::error_to_js)?;
        Ok(WasmBitSet { bit_set })
    }
}

/// Immutable bit set; every operation returns a new one.
#[wasm_bindgen]
pub struct WasmBitSet {
    bit_set: BitSet,
}

#[wasm_bindgen]
impl WasmBitSet {
    #[wasm_bindgen(js_name = toI)]
    pub fn to_i(&self) -> u64 {
        self.bit_set.to_i()
    }

    /// Renders as `"long"` (default) or `"short"`.
    #[wasm_bindgen(js_name = toS)]
    pub fn to_s(&self, format: Option<String>) -> Result<String, JsValue> {
        let format = match format {
            Some(format) => format.parse::<Format>().map_err(convert::error_to_js)?,
            None => Format::default(),
        };

        self.bit_set.to_s(format).map_err(convert::error_to_js)
    }

    /// Object of digit name to on/off state.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        convert::state_to_js(&self.bit_set)
    }

    /// State of a digit by name.
    pub fn get(&self, digit: &str) -> Result<bool, JsValue> {
        self.bit_set.get(digit).map_err(convert::error_to_js)
    }

    #[wasm_bindgen(js_name = getIndex)]
    pub fn get_index(&self, index: usize) -> Result<bool, JsValue> {
        self.bit_set.get(index).map_err(convert::error_to_js)
    }

    #[wasm_bindgen(js_name = enabledDigits)]
    pub fn enabled_digits(&self) -> Result<JsValue, JsValue> {
        convert::digits_to_js(self.bit_set.enabled_digits())
    }

    #[wasm_bindgen(js_name = disabledDigits)]
    pub fn disabled_digits(&self) -> Result<JsValue, JsValue> {
        convert::digits_to_js(self.bit_set.disabled_digits())
    }

    pub fn invert(&self) -> WasmBitSet {
        WasmBitSet {
            bit_set: self.bit_set.invert(),
        }
    }

    pub fn union(&self, other: &WasmBitSet) -> Result<WasmBitSet, JsValue> {
        Self::wrap(self.bit_set.union(&other.bit_set))
    }

    pub fn intersection(&self, other: &WasmBitSet) -> Result<WasmBitSet, JsValue> {
        Self::wrap(self.bit_set.intersection(&other.bit_set))
    }

    #[wasm_bindgen(js_name = symmetricDifference)]
    pub fn symmetric_difference(&self, other: &WasmBitSet) -> Result<WasmBitSet, JsValue> {
        Self::wrap(self.bit_set.symmetric_difference(&other.bit_set))
    }

    /// Switches on the digits of `other`.
    #[wasm_bindgen(js_name = addDigits)]
    pub fn add_digits(&self, other: &WasmBitSet) -> Result<WasmBitSet, JsValue> {
        Self::wrap(self.bit_set.add_digits(&other.bit_set))
    }

    /// Switches off the digits of `other`.
    #[wasm_bindgen(js_name = removeDigits)]
    pub fn remove_digits(&self, other: &WasmBitSet) -> WasmBitSet {
        WasmBitSet {
            bit_set: self.bit_set.remove_digits(&other.bit_set),
        }
    }

    pub fn equals(&self, other: &WasmBitSet) -> bool {
        self.bit_set == other.bit_set
    }

    /// -1, 0 or 1; `undefined` if the configurations differ.
    pub fn compare(&self, other: &WasmBitSet) -> Option<i32> {
        self.bit_set
            .partial_cmp(&other.bit_set)
            .map(|ordering| ordering as i32)
    }
}

impl WasmBitSet {
    fn wrap<E: std::fmt::Display>(result: Result<BitSet, E>) -> Result<WasmBitSet, JsValue> {
        result
            .map(|bit_set| WasmBitSet { bit_set })
            .map_err(convert::error_to_js)
    }
}
