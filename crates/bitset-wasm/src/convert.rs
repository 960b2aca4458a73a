use bitset::{BitSet, State};
use serde::{Serialize, Serializer, ser::SerializeMap};
use wasm_bindgen::JsValue;

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn error_to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Reads a bit set state from JS.
///
/// A `BigInt` or a safe integer number is the integer state, an array holds digit names.
pub fn state_from_js(value: JsValue) -> Result<State, JsValue> {
    if value.is_bigint() {
        let integer = i128::try_from(value)
            .map_err(|value| JsValue::from_str(&format!("Invalid state ({:?})", value)))?;
        return Ok(State::Integer(integer));
    }

    if let Some(number) = value.as_f64() {
        return integer_from_number(number)
            .map(State::Integer)
            .map_err(|err| JsValue::from_str(&err));
    }

    let digits: Vec<String> = serde_wasm_bindgen::from_value(value).map_err(error_to_js)?;
    Ok(State::Digits(digits))
}

/// Accepts a JS number as an integer state only when it is exact.
fn integer_from_number(number: f64) -> Result<i128, String> {
    if number.fract() != 0.0 || number.abs() > MAX_SAFE_INTEGER {
        return Err(format!("Invalid state ({})", number));
    }

    Ok(number as i128)
}

/// Digit states keyed by name, serialized in declaration order.
struct DigitStates<'a>(Vec<(&'a str, bool)>);

impl Serialize for DigitStates<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (digit, enabled) in &self.0 {
            map.serialize_entry(digit, enabled)?;
        }
        map.end()
    }
}

/// Converts a bit set's digit states into a plain JS object keyed by digit name.
pub fn state_to_js(bit_set: &BitSet) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);

    DigitStates(bit_set.state())
        .serialize(&serializer)
        .map_err(error_to_js)
}

pub fn digits_to_js(digits: Vec<&str>) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&digits).map_err(error_to_js)
}
