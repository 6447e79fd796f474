//! ## Summary
//! Runs the validator over an input tree and collects one outcome per
//! validated component.

use kunai_rfc::rfc::ical::core::{Component, ComponentKind, Method};
use kunai_rfc::rfc::validation::{
    ConstraintKind, Strictness, ValidationError, ValidationResult, Validator, ViolationRecord,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::input;

/// Result of validating one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub component_kind: ComponentKind,
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<ViolationRecord>,
}

impl Outcome {
    fn new(component: &Component, method: Method, result: ValidationResult<()>) -> Self {
        Self {
            component_kind: component.kind,
            method,
            uid: component.uid().map(str::to_string),
            valid: result.is_ok(),
            violation: result.err().as_ref().map(ValidationError::record),
        }
    }

    /// Returns whether no rule table existed for this component and method.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        self.violation.as_ref().is_some_and(|v| {
            v.constraint_kind == ConstraintKind::UnsupportedCombination
        })
    }
}

/// Process exit status summarising a set of outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Valid,
    Invalid,
    /// Unsupported combination, or a run that could not validate at all.
    Failed,
}

impl Status {
    #[must_use]
    pub fn of(outcomes: &[Outcome]) -> Self {
        if outcomes.iter().any(Outcome::is_unsupported) {
            Self::Failed
        } else if outcomes.iter().all(|o| o.valid) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    /// Status of a whole run. Anything that stopped validation from
    /// running, such as bad configuration or unreadable input, is `Failed`.
    #[must_use]
    pub fn of_run<E>(result: &Result<Vec<Outcome>, E>) -> Self {
        match result {
            Ok(outcomes) => Self::of(outcomes),
            Err(_) => Self::Failed,
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
            Self::Failed => 2,
        }
    }
}

/// ## Summary
/// Validates every target selected from `root`.
///
/// ## Errors
/// Fails if no method can be determined for a calendar root.
#[tracing::instrument(skip(validator, root), fields(root = %root.kind))]
pub fn run(
    validator: &Validator,
    root: &Component,
    method: Option<Method>,
    strictness: Strictness,
) -> AppResult<Vec<Outcome>> {
    let outcomes: Vec<Outcome> = input::targets(root, method)?
        .into_iter()
        .map(|(component, method)| {
            let result = validator.validate(component, method, strictness);
            Outcome::new(component, method, result)
        })
        .collect();

    tracing::info!(
        validated = outcomes.len(),
        failed = outcomes.iter().filter(|o| !o.valid).count(),
        "Validation finished"
    );
    Ok(outcomes)
}
