//! iCalendar core models (RFC 5545).
//!
//! These types carry exactly what the validation engine needs: component
//! kinds, property labels, and the raw shape of property values. Value
//! syntax (dates, durations, recurrence rules) is validated upstream.

mod component;
mod method;
mod name;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind};
pub use method::{Method, UnknownMethod};
pub use name::PropertyName;
pub use parameter::Parameter;
pub use property::Property;
pub use value::Value;
