//! iCalendar property type (RFC 5545 §3.1, §3.8).

use super::{Parameter, PropertyName, Value};

/// A property attached to a component.
///
/// Keeps the original raw value next to the resolved one so that callers
/// reporting on a property can show exactly what was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property label.
    pub name: PropertyName,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Resolved value.
    pub value: Value,
    /// Original raw value string.
    pub raw_value: String,
}

impl Property {
    /// Creates a property with an unresolved value.
    #[must_use]
    pub fn new(name: PropertyName, raw_value: impl Into<String>) -> Self {
        let raw_value = raw_value.into();
        Self {
            name,
            params: Vec::new(),
            value: Value::Unknown(raw_value.clone()),
            raw_value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: PropertyName, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self {
            name,
            params: Vec::new(),
            value: Value::Text(value_str.clone()),
            raw_value: value_str,
        }
    }

    /// Creates a property with an integer value.
    #[must_use]
    pub fn integer(name: PropertyName, value: i32) -> Self {
        Self {
            name,
            params: Vec::new(),
            value: Value::Integer(value),
            raw_value: value.to_string(),
        }
    }

    /// Adds a parameter, returning the property.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the value as an integer if it is, or reads as, one.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        self.value.as_integer()
    }
}
