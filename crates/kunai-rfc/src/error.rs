use thiserror::Error;

use crate::rfc::ical::core::{ComponentKind, Method, PropertyName};

/// RFC model and rule registration errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Rule table error: {0}")]
    RuleTable(#[from] RuleTableError),
}

/// ## Summary
/// A rule table that contradicts itself or the component model.
///
/// Raised while tables are built and registered, never during validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleTableError {
    #[error("{kind}/{method}: {property} is constrained more than once")]
    DuplicateProperty {
        kind: ComponentKind,
        method: Method,
        property: PropertyName,
    },

    #[error("{kind}/{method}: constraint references unconstrained property {property}")]
    UncoveredProperty {
        kind: ComponentKind,
        method: Method,
        property: PropertyName,
    },

    #[error("{kind}/{method}: {child} cannot be nested in {kind}")]
    UnreachableChild {
        kind: ComponentKind,
        method: Method,
        child: ComponentKind,
    },

    #[error("{kind}/{method}: {child} has more than one sub-component rule")]
    DuplicateChild {
        kind: ComponentKind,
        method: Method,
        child: ComponentKind,
    },

    #[error("{kind}/{method}: no rule table registered for {child}/{child_method}")]
    UnregisteredChildTable {
        kind: ComponentKind,
        method: Method,
        child: ComponentKind,
        child_method: Method,
    },

    #[error("a rule table for {kind}/{method} is already registered")]
    DuplicateTable { kind: ComponentKind, method: Method },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
