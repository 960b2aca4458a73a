//! JSON‑deserializable configuration description.
//!
//! A configuration is written either as a list of digit names or as an object
//! mapping each digit name to its display spec:
//!
//! ```json
//! ["read", "write", "execute"]
//! {"red": "r", "yellow": null, "blink": ["b", "_"]}
//! ```
//!
//! Object keys keep their order, since declaration order decides bit weights.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
};

use crate::{
    configuration::{Configuration, IntoConfiguration},
    digit::DisplaySpec,
    errors::ConfigurationError,
};

/// Display spec of a single digit: `"c"` or `["c", "d"]`. `null` is represented by `None`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum DisplayDef {
    /// Enabled character; the disabled one defaults to `-`.
    Enabled(String),
    /// Enabled and disabled character.
    Pair(String, String),
}

impl From<DisplayDef> for DisplaySpec {
    fn from(value: DisplayDef) -> Self {
        match value {
            DisplayDef::Enabled(enabled) => DisplaySpec::Enabled(enabled),
            DisplayDef::Pair(enabled, disabled) => DisplaySpec::Pair(enabled, disabled),
        }
    }
}

/// Top‑level configuration definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationDef {
    /// Digit names only; every digit renders as `1`/`0`.
    Digits(Vec<String>),
    /// Digit names with their display specs, in declaration order.
    Display(Vec<(String, Option<DisplayDef>)>),
}

impl TryFrom<ConfigurationDef> for Configuration {
    type Error = ConfigurationError;

    fn try_from(value: ConfigurationDef) -> Result<Self, Self::Error> {
        match value {
            ConfigurationDef::Digits(digits) => Configuration::from_digits(digits),
            ConfigurationDef::Display(entries) => Configuration::from_display(entries),
        }
    }
}

impl IntoConfiguration for ConfigurationDef {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        self.try_into()
    }
}

impl From<&Configuration> for ConfigurationDef {
    fn from(value: &Configuration) -> Self {
        ConfigurationDef::Display(
            value
                .iter()
                .map(|digit| {
                    (
                        digit.name.clone(),
                        Some(DisplayDef::Pair(
                            digit.enabled.to_string(),
                            digit.disabled.to_string(),
                        )),
                    )
                })
                .collect(),
        )
    }
}

impl Serialize for ConfigurationDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigurationDef::Digits(digits) => digits.serialize(serializer),
            ConfigurationDef::Display(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (name, display) in entries {
                    map.serialize_entry(name, display)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ConfigurationDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConfigurationDefVisitor)
    }
}

struct ConfigurationDefVisitor;

impl<'de> Visitor<'de> for ConfigurationDefVisitor {
    type Value = ConfigurationDef;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of digit names or a map of digit names to display specs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut digits = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(digit) = seq.next_element::<String>()? {
            digits.push(digit);
        }

        Ok(ConfigurationDef::Digits(digits))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, Option<DisplayDef>>()? {
            entries.push(entry);
        }

        Ok(ConfigurationDef::Display(entries))
    }
}
