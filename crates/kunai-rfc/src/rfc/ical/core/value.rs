//! Property values, as far as validation needs to see them.

/// A property value.
///
/// Only the shapes the rule tables consult are typed; everything else is
/// carried as the unparsed string handed over by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// TEXT value (already unescaped).
    Text(String),
    /// INTEGER value.
    Integer(i32),
    /// Value whose type was not resolved.
    Unknown(String),
}

impl Value {
    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer.
    ///
    /// Unresolved values are parsed leniently so that a `SEQUENCE` the parser
    /// left untyped still reads as a number.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Unknown(raw) => raw.trim().parse().ok(),
            Self::Text(_) => None,
        }
    }
}
