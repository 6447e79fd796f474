//! ## Summary
//! Declarative rule tables.
//!
//! A [`RuleTable`] is the presence table for one component kind under one
//! `iTIP` method: a cardinality per property label, cross-property
//! constraints, and what to do with nested sub-components. Tables are built
//! once through [`RuleTableBuilder`], which rejects tables that contradict
//! themselves, and are read-only afterwards.
//!
//! Checks run in a fixed order: mutual exclusions, then property rules, then
//! conditional requirements, then sub-component rules. Within each group the
//! declaration order holds. The first failure wins, so a pair of exclusive
//! properties is reported as such even where the table also forbids both.

use std::collections::HashSet;

use crate::error::RuleTableError;
use crate::rfc::ical::core::{Component, ComponentKind, Method, Property, PropertyName};

use super::cardinality::{Cardinality, count};
use super::strictness::Strictness;
use super::violation::{ConstraintKind, Violation};

/// Cardinality of one property label, per strictness mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRule {
    pub property: PropertyName,
    pub strict: Cardinality,
    pub relaxed: Cardinality,
}

impl PropertyRule {
    /// Returns the cardinality in force under `strictness`.
    #[must_use]
    pub const fn cardinality(self, strictness: Strictness) -> Cardinality {
        if strictness.is_relaxed() {
            self.relaxed
        } else {
            self.strict
        }
    }
}

/// Predicate over a trigger property of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The trigger is attached to the component.
    Present,
    /// The trigger's effective integer value is greater than the bound.
    ///
    /// The effective value may come from an inherited property, so this can
    /// hold while the trigger itself is absent.
    GreaterThan(i32),
}

impl Condition {
    /// Evaluates this condition for `trigger` on `component`.
    #[must_use]
    pub fn holds(self, trigger: PropertyName, component: &Component) -> bool {
        match self {
            Self::Present => component.get_property(trigger).is_some(),
            Self::GreaterThan(bound) => component
                .effective_value(trigger)
                .and_then(Property::as_integer)
                .is_some_and(|value| value > bound),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => f.write_str("present"),
            Self::GreaterThan(bound) => write!(f, "> {bound}"),
        }
    }
}

/// Constraint spanning more than one property occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossConstraint {
    /// If the first property is present, the second must be absent.
    MutuallyExclusive(PropertyName, PropertyName),
    /// When `condition` holds for `trigger`, `required` must be present.
    RequiredWhen {
        trigger: PropertyName,
        condition: Condition,
        required: PropertyName,
    },
}

impl CrossConstraint {
    fn properties(self) -> [PropertyName; 2] {
        match self {
            Self::MutuallyExclusive(a, b) => [a, b],
            Self::RequiredWhen {
                trigger, required, ..
            } => [trigger, required],
        }
    }

    /// Checks this constraint against `component`.
    ///
    /// ## Errors
    /// Returns the violation if the constraint does not hold.
    pub fn check(self, component: &Component) -> Result<(), Violation> {
        match self {
            Self::MutuallyExclusive(present, excluded) => {
                let excluded_count = count(excluded, &component.properties);
                if component.get_property(present).is_none() || excluded_count == 0 {
                    return Ok(());
                }
                Err(Violation {
                    component: component.kind,
                    property: None,
                    constraint: ConstraintKind::MutualExclusion,
                    expected: format!("{excluded}=0 when {present} present"),
                    actual: format!("{excluded}={excluded_count}"),
                    related: vec![present, excluded],
                })
            }
            Self::RequiredWhen {
                trigger,
                condition,
                required,
            } => {
                if !condition.holds(trigger, component)
                    || count(required, &component.properties) > 0
                {
                    return Ok(());
                }
                Err(Violation {
                    component: component.kind,
                    property: Some(required),
                    constraint: ConstraintKind::ConditionalRequirement,
                    expected: format!(">=1 when {trigger} {condition}"),
                    actual: "0".to_string(),
                    related: vec![trigger],
                })
            }
        }
    }
}

/// What to do with nested components of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubComponentRule {
    /// Validate each child of `kind` under `method`.
    Validate { kind: ComponentKind, method: Method },
    /// Children of this kind must not occur.
    Forbid(ComponentKind),
}

impl SubComponentRule {
    /// Returns the child kind this rule governs.
    #[must_use]
    pub const fn kind(self) -> ComponentKind {
        match self {
            Self::Validate { kind, .. } | Self::Forbid(kind) => kind,
        }
    }
}

/// Presence table for one (component kind, method) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    kind: ComponentKind,
    method: Method,
    properties: Vec<PropertyRule>,
    constraints: Vec<CrossConstraint>,
    children: Vec<SubComponentRule>,
}

impl RuleTable {
    /// Starts a table for `kind` under `method`.
    #[must_use]
    pub fn builder(kind: ComponentKind, method: Method) -> RuleTableBuilder {
        RuleTableBuilder {
            table: Self {
                kind,
                method,
                properties: Vec::new(),
                constraints: Vec::new(),
                children: Vec::new(),
            },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn properties(&self) -> &[PropertyRule] {
        &self.properties
    }

    #[must_use]
    pub fn constraints(&self) -> &[CrossConstraint] {
        &self.constraints
    }

    #[must_use]
    pub fn children(&self) -> &[SubComponentRule] {
        &self.children
    }

    /// Runs the property rules and cross-property constraints against
    /// `component`. Sub-component rules are left to the dispatcher.
    ///
    /// ## Errors
    /// Returns the first violation: mutual exclusions are checked first,
    /// then property rules, then conditional requirements.
    pub fn check_properties(
        &self,
        component: &Component,
        strictness: Strictness,
    ) -> Result<(), Violation> {
        let (exclusions, requirements): (Vec<&CrossConstraint>, Vec<&CrossConstraint>) = self
            .constraints
            .iter()
            .partition(|c| matches!(c, CrossConstraint::MutuallyExclusive(..)));

        for constraint in exclusions {
            tracing::trace!(?constraint, "Checking mutual exclusion");
            constraint.check(component)?;
        }

        for rule in &self.properties {
            let cardinality = rule.cardinality(strictness);
            tracing::trace!(
                property = %rule.property,
                expected = cardinality.expected(),
                "Checking cardinality"
            );
            cardinality
                .check(rule.property, &component.properties)
                .map_err(|mismatch| mismatch.in_component(component.kind))?;
        }

        for constraint in requirements {
            tracing::trace!(?constraint, "Checking conditional requirement");
            constraint.check(component)?;
        }

        Ok(())
    }
}

/// Builder for [`RuleTable`].
///
/// Each method appends rules in call order, which is also the order they are
/// checked in.
#[derive(Debug, Clone)]
pub struct RuleTableBuilder {
    table: RuleTable,
}

impl RuleTableBuilder {
    /// Constrains each property with separate strict and relaxed cardinalities.
    #[must_use]
    pub fn rule(
        mut self,
        properties: &[PropertyName],
        strict: Cardinality,
        relaxed: Cardinality,
    ) -> Self {
        self.table
            .properties
            .extend(properties.iter().map(|&property| PropertyRule {
                property,
                strict,
                relaxed,
            }));
        self
    }

    /// Each property must occur exactly once.
    #[must_use]
    pub fn exactly_one(self, properties: &[PropertyName]) -> Self {
        self.rule(properties, Cardinality::ExactlyOne, Cardinality::ExactlyOne)
    }

    /// Each property must occur exactly once, except in relaxed mode where
    /// it is not checked at all.
    #[must_use]
    pub fn exactly_one_strict(self, properties: &[PropertyName]) -> Self {
        self.rule(properties, Cardinality::ExactlyOne, Cardinality::ZeroOrMore)
    }

    /// Each property may occur at most once.
    #[must_use]
    pub fn zero_or_one(self, properties: &[PropertyName]) -> Self {
        self.rule(properties, Cardinality::ZeroOrOne, Cardinality::ZeroOrOne)
    }

    /// Each property must occur at least once.
    #[must_use]
    pub fn one_or_more(self, properties: &[PropertyName]) -> Self {
        self.rule(properties, Cardinality::OneOrMore, Cardinality::OneOrMore)
    }

    /// Each property may occur any number of times.
    ///
    /// Only needed when a cross-property constraint refers to the property.
    #[must_use]
    pub fn zero_or_more(self, properties: &[PropertyName]) -> Self {
        self.rule(properties, Cardinality::ZeroOrMore, Cardinality::ZeroOrMore)
    }

    /// Each property must not occur.
    #[must_use]
    pub fn none(self, properties: &[PropertyName]) -> Self {
        self.rule(properties, Cardinality::None, Cardinality::None)
    }

    /// If `present` occurs, `excluded` must not.
    #[must_use]
    pub fn mutually_exclusive(mut self, present: PropertyName, excluded: PropertyName) -> Self {
        self.table
            .constraints
            .push(CrossConstraint::MutuallyExclusive(present, excluded));
        self
    }

    /// `required` must occur whenever `condition` holds for `trigger`.
    #[must_use]
    pub fn required_when(
        mut self,
        trigger: PropertyName,
        condition: Condition,
        required: PropertyName,
    ) -> Self {
        self.table.constraints.push(CrossConstraint::RequiredWhen {
            trigger,
            condition,
            required,
        });
        self
    }

    /// Validates every child of `kind` under `method`.
    #[must_use]
    pub fn validate_children(mut self, kind: ComponentKind, method: Method) -> Self {
        self.table
            .children
            .push(SubComponentRule::Validate { kind, method });
        self
    }

    /// Children of `kind` must not occur.
    #[must_use]
    pub fn forbid_children(mut self, kind: ComponentKind) -> Self {
        self.table.children.push(SubComponentRule::Forbid(kind));
        self
    }

    /// Finishes the table.
    ///
    /// ## Errors
    /// Fails if a property is constrained twice, a cross-property constraint
    /// names a property the table does not constrain, or a sub-component
    /// rule names a kind that cannot be nested in this component (or names
    /// it twice).
    pub fn build(self) -> Result<RuleTable, RuleTableError> {
        let table = self.table;
        let (kind, method) = (table.kind, table.method);

        let mut constrained = HashSet::new();
        for rule in &table.properties {
            if !constrained.insert(rule.property) {
                return Err(RuleTableError::DuplicateProperty {
                    kind,
                    method,
                    property: rule.property,
                });
            }
        }

        for constraint in &table.constraints {
            if let Some(property) = constraint
                .properties()
                .into_iter()
                .find(|p| !constrained.contains(p))
            {
                return Err(RuleTableError::UncoveredProperty {
                    kind,
                    method,
                    property,
                });
            }
        }

        let mut governed = HashSet::new();
        for rule in &table.children {
            let child = rule.kind();
            if !kind.can_contain(child) {
                return Err(RuleTableError::UnreachableChild {
                    kind,
                    method,
                    child,
                });
            }
            if !governed.insert(child) {
                return Err(RuleTableError::DuplicateChild {
                    kind,
                    method,
                    child,
                });
            }
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use PropertyName::{Due, Duration, Organizer, Repeat, Sequence, Summary, Uid};

    #[test]
    fn strict_only_rule_waived_when_relaxed() {
        let table = RuleTable::builder(ComponentKind::Todo, Method::Publish)
            .exactly_one_strict(&[Organizer])
            .build()
            .expect("valid table");
        let rule = table.properties()[0];
        assert_eq!(rule.property, Organizer);

        assert_eq!(rule.cardinality(Strictness::Strict), Cardinality::ExactlyOne);
        assert_eq!(rule.cardinality(Strictness::Relaxed), Cardinality::ZeroOrMore);
        assert!(
            table
                .check_properties(&Component::todo(), Strictness::Relaxed)
                .is_ok()
        );
        assert!(
            table
                .check_properties(&Component::todo(), Strictness::Strict)
                .is_err()
        );
    }

    #[test]
    fn checks_run_in_declaration_order() {
        let table = RuleTable::builder(ComponentKind::Todo, Method::Publish)
            .exactly_one(&[Summary, Uid])
            .build()
            .expect("valid table");

        let err = table
            .check_properties(&Component::todo(), Strictness::Strict)
            .expect_err("both missing");
        assert_eq!(err.property, Some(Summary));
    }

    #[test]
    fn mutual_exclusion() {
        let constraint = CrossConstraint::MutuallyExclusive(Due, Duration);
        let due_only = Component::todo().with_property(Property::text(Due, "20260101"));
        let both = due_only
            .clone()
            .with_property(Property::text(Duration, "PT1H"));
        let duration_only = Component::todo().with_property(Property::text(Duration, "PT1H"));

        assert!(constraint.check(&due_only).is_ok());
        assert!(constraint.check(&duration_only).is_ok());

        let err = constraint.check(&both).expect_err("both present");
        assert_eq!(err.constraint, ConstraintKind::MutualExclusion);
        assert_eq!(err.property, None);
        assert_eq!(err.related, vec![Due, Duration]);
        assert_eq!(err.expected, "DURATION=0 when DUE present");
        assert_eq!(err.actual, "DURATION=1");
    }

    #[test]
    fn exclusion_is_reported_before_forbidden_labels() {
        let table = RuleTable::builder(ComponentKind::Todo, Method::Refresh)
            .none(&[Due, Duration])
            .mutually_exclusive(Due, Duration)
            .build()
            .expect("valid table");
        let both = Component::todo()
            .with_property(Property::text(Due, "20260101"))
            .with_property(Property::text(Duration, "PT1H"));

        let err = table
            .check_properties(&both, Strictness::Strict)
            .expect_err("both present");
        assert_eq!(err.constraint, ConstraintKind::MutualExclusion);
        assert_eq!(err.property, None);

        let due_only = Component::todo().with_property(Property::text(Due, "20260101"));
        let err = table
            .check_properties(&due_only, Strictness::Strict)
            .expect_err("DUE forbidden");
        assert_eq!(err.constraint, ConstraintKind::Cardinality);
        assert_eq!(err.property, Some(Due));
    }

    #[test]
    fn required_when_present() {
        let constraint = CrossConstraint::RequiredWhen {
            trigger: Duration,
            condition: Condition::Present,
            required: Repeat,
        };
        let alarm = Component::alarm().with_property(Property::text(Duration, "PT5M"));

        let err = constraint.check(&alarm).expect_err("REPEAT missing");
        assert_eq!(err.property, Some(Repeat));
        assert_eq!(err.constraint, ConstraintKind::ConditionalRequirement);
        assert_eq!(err.expected, ">=1 when DURATION present");

        let alarm = alarm.with_property(Property::integer(Repeat, 2));
        assert!(constraint.check(&alarm).is_ok());
        assert!(constraint.check(&Component::alarm()).is_ok());
    }

    #[test]
    fn required_when_greater_than_uses_effective_value() {
        let constraint = CrossConstraint::RequiredWhen {
            trigger: Sequence,
            condition: Condition::GreaterThan(0),
            required: Sequence,
        };

        let mut revised = Component::todo();
        revised.add_inherited(Property::integer(Sequence, 3));
        let err = constraint.check(&revised).expect_err("SEQUENCE must be attached");
        assert_eq!(err.expected, ">=1 when SEQUENCE > 0");

        let mut original = Component::todo();
        original.add_inherited(Property::integer(Sequence, 0));
        assert!(constraint.check(&original).is_ok());
        assert!(constraint.check(&Component::todo()).is_ok());
    }

    #[test]
    fn build_rejects_duplicate_property() {
        let err = RuleTable::builder(ComponentKind::Todo, Method::Publish)
            .exactly_one(&[Uid])
            .zero_or_one(&[Summary, Uid])
            .build()
            .expect_err("UID twice");

        assert_eq!(
            err,
            RuleTableError::DuplicateProperty {
                kind: ComponentKind::Todo,
                method: Method::Publish,
                property: Uid,
            }
        );
    }

    #[test]
    fn build_rejects_uncovered_constraint() {
        let err = RuleTable::builder(ComponentKind::Todo, Method::Publish)
            .zero_or_one(&[Due])
            .mutually_exclusive(Due, Duration)
            .build()
            .expect_err("DURATION unconstrained");

        assert!(matches!(
            err,
            RuleTableError::UncoveredProperty {
                property: Duration,
                ..
            }
        ));
    }

    #[test]
    fn build_rejects_unreachable_child() {
        let err = RuleTable::builder(ComponentKind::Journal, Method::Publish)
            .validate_children(ComponentKind::Alarm, Method::Publish)
            .build()
            .expect_err("journals hold no alarms");

        assert!(matches!(
            err,
            RuleTableError::UnreachableChild {
                child: ComponentKind::Alarm,
                ..
            }
        ));
    }

    #[test]
    fn build_rejects_duplicate_child_rule() {
        let err = RuleTable::builder(ComponentKind::Todo, Method::Reply)
            .validate_children(ComponentKind::Alarm, Method::Reply)
            .forbid_children(ComponentKind::Alarm)
            .build()
            .expect_err("VALARM twice");

        assert!(matches!(err, RuleTableError::DuplicateChild { .. }));
    }
}
