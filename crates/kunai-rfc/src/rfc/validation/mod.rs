//! Property-cardinality validation for `iTIP` exchanges (RFC 2446, RFC 5546).
//!
//! A component is checked against the rule table registered for its kind and
//! the method it is exchanged under. Tables are plain data built once at
//! startup; the engine that runs them is [`Validator`].

pub mod cardinality;
pub mod dispatcher;
pub mod registry;
pub mod strictness;
pub mod table;
pub mod tables;
pub mod violation;

#[cfg(test)]
mod tests;

pub use cardinality::Cardinality;
pub use dispatcher::Validator;
pub use registry::RuleRegistry;
pub use strictness::Strictness;
pub use table::{Condition, CrossConstraint, RuleTable, RuleTableBuilder, SubComponentRule};
pub use violation::{ConstraintKind, ValidationError, ValidationResult, Violation, ViolationRecord};
