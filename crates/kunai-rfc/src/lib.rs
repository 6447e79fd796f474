//! iCalendar model and `iTIP` property-cardinality validation.

pub mod error;
pub mod rfc;
