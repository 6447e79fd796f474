//! ## Summary
//! Validation entry point.
//!
//! Resolves the rule table for a component's kind and the requested method,
//! runs it, then walks the declared sub-components depth-first. Reporting is
//! fail-fast: the first violation in check order is returned and
//! nothing after it is checked, including later sibling sub-components.

use crate::error::RfcResult;
use crate::rfc::ical::core::{Component, Method};

use super::registry::RuleRegistry;
use super::strictness::Strictness;
use super::table::SubComponentRule;
use super::tables;
use super::violation::{ConstraintKind, ValidationError, ValidationResult, Violation};

/// Validates components against a [`RuleRegistry`].
///
/// Holds no mutable state; one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    #[must_use]
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Creates a validator over the RFC 2446 presence tables.
    ///
    /// ## Errors
    /// Fails if the built-in tables are inconsistent.
    pub fn standard() -> RfcResult<Self> {
        Ok(Self::new(tables::standard_registry()?))
    }

    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// ## Summary
    /// Validates `component` as exchanged under `method`.
    ///
    /// Nested components are validated under the method their parent's
    /// table declares for them, with the same `strictness`.
    ///
    /// ## Errors
    /// - `UnsupportedCombination` if no table is registered for the
    ///   component's kind and `method`.
    /// - `Violation` for the first failed check, attributed to the component
    ///   (or sub-component) whose table it belongs to.
    #[tracing::instrument(
        skip(self, component),
        fields(kind = %component.kind, method = %method, strictness = %strictness)
    )]
    pub fn validate(
        &self,
        component: &Component,
        method: Method,
        strictness: Strictness,
    ) -> ValidationResult<()> {
        let Some(table) = self.registry.get(component.kind, method) else {
            tracing::warn!("No rule table registered");
            return Err(ValidationError::UnsupportedCombination {
                kind: component.kind,
                method,
            });
        };

        tracing::debug!(
            properties = component.properties.len(),
            children = component.children.len(),
            "Resolved rule table"
        );

        table
            .check_properties(component, strictness)
            .inspect_err(|violation| tracing::debug!(%violation, "Validation failed"))?;

        for rule in table.children() {
            match *rule {
                SubComponentRule::Validate {
                    kind,
                    method: child_method,
                } => {
                    for child in component.children_of_kind(kind) {
                        tracing::debug!(child = %kind, method = %child_method, "Validating sub-component");
                        self.validate(child, child_method, strictness)?;
                    }
                }
                SubComponentRule::Forbid(kind) => {
                    let found = component.children_of_kind(kind).count();
                    if found > 0 {
                        let violation = Violation {
                            component: component.kind,
                            property: None,
                            constraint: ConstraintKind::Cardinality,
                            expected: format!("{kind}=0"),
                            actual: format!("{kind}={found}"),
                            related: Vec::new(),
                        };
                        tracing::debug!(%violation, "Validation failed");
                        return Err(violation.into());
                    }
                }
            }
        }

        Ok(())
    }
}
