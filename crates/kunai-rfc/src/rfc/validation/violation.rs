//! ## Summary
//! Validation outcomes.
//!
//! A [`Violation`] is a data-shape problem in the component being checked.
//! [`ValidationError::UnsupportedCombination`] is a registry problem: nothing
//! is known about the requested component kind and method, so nothing was
//! checked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rfc::ical::core::{ComponentKind, Method, PropertyName};

/// Category of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintKind {
    /// A property (or sub-component) occurred the wrong number of times.
    Cardinality,
    /// Two properties that must not appear together both appeared.
    MutualExclusion,
    /// A property made mandatory by another property's presence or value is missing.
    ConditionalRequirement,
    /// No rule table exists for the component kind and method.
    UnsupportedCombination,
}

impl ConstraintKind {
    /// Returns the kebab-case name used in violation records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardinality => "cardinality",
            Self::MutualExclusion => "mutual-exclusion",
            Self::ConditionalRequirement => "conditional-requirement",
            Self::UnsupportedCombination => "unsupported-combination",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Kind of the component the failing rule table belongs to.
    pub component: ComponentKind,
    /// Property whose count was checked; `None` for mutual exclusion and
    /// sub-component checks.
    pub property: Option<PropertyName>,
    /// What kind of check failed.
    pub constraint: ConstraintKind,
    /// Expected occurrence, e.g. `=1` or `DURATION=0 when DUE present`.
    pub expected: String,
    /// Observed occurrence.
    pub actual: String,
    /// Other properties the failed check involves.
    pub related: Vec<PropertyName>,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} violation", self.component, self.constraint)?;
        if let Some(property) = self.property {
            write!(f, " on {property}")?;
        }
        write!(f, ": expected {}, found {}", self.expected, self.actual)
    }
}

impl std::error::Error for Violation {}

/// Errors returned by [`super::Validator::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Violation(#[from] Violation),

    #[error("no rule table registered for {kind} under METHOD:{method}")]
    UnsupportedCombination { kind: ComponentKind, method: Method },
}

impl ValidationError {
    /// Returns the violation, unless this is a registry error.
    #[must_use]
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation(v) => Some(v),
            Self::UnsupportedCombination { .. } => None,
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn constraint_kind(&self) -> ConstraintKind {
        match self {
            Self::Violation(v) => v.constraint,
            Self::UnsupportedCombination { .. } => ConstraintKind::UnsupportedCombination,
        }
    }

    /// Returns the kind of component this error is attributed to.
    #[must_use]
    pub fn component_kind(&self) -> ComponentKind {
        match self {
            Self::Violation(v) => v.component,
            Self::UnsupportedCombination { kind, .. } => *kind,
        }
    }

    /// Flattens this error into the record shape used for error reporting.
    #[must_use]
    pub fn record(&self) -> ViolationRecord {
        match self {
            Self::Violation(v) => ViolationRecord {
                component_kind: v.component,
                property_label: v.property,
                constraint_kind: v.constraint,
                expected: v.expected.clone(),
                actual: v.actual.clone(),
            },
            Self::UnsupportedCombination { kind, method } => ViolationRecord {
                component_kind: *kind,
                property_label: None,
                constraint_kind: ConstraintKind::UnsupportedCombination,
                expected: format!("rule table for {kind} under METHOD:{method}"),
                actual: "none registered".to_string(),
            },
        }
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// ## Summary
/// Flat, serializable description of a validation failure.
///
/// Field names and values are stable so downstream error reporting can match
/// on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub component_kind: ComponentKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub property_label: Option<PropertyName>,
    pub constraint_kind: ConstraintKind,
    pub expected: String,
    pub actual: String,
}
