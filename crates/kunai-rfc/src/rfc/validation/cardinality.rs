//! ## Summary
//! Property occurrence checks.
//!
//! Each primitive counts the properties carrying one label and compares the
//! count against a bound. They are pure functions of the label and the
//! property sequence; the caller attaches the component kind.

use crate::rfc::ical::core::{ComponentKind, Property, PropertyName};

use super::violation::{ConstraintKind, Violation};

/// Allowed occurrence count of a property label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// `1`
    ExactlyOne,
    /// `0 or 1`
    ZeroOrOne,
    /// `0+`, unconstrained.
    ZeroOrMore,
    /// `1+`
    OneOrMore,
    /// `0`
    None,
}

impl Cardinality {
    /// Returns the bound in the notation used by violation records.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::ExactlyOne => "=1",
            Self::ZeroOrOne => "<=1",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => ">=1",
            Self::None => "=0",
        }
    }

    /// Checks `properties` against this bound for `name`.
    ///
    /// ## Errors
    /// Returns the offending count if it is outside the bound.
    pub fn check(self, name: PropertyName, properties: &[Property]) -> Result<(), CountMismatch> {
        match self {
            Self::ExactlyOne => assert_exactly_one(name, properties),
            Self::ZeroOrOne => assert_at_most_one(name, properties),
            Self::ZeroOrMore => Ok(()),
            Self::OneOrMore => assert_at_least_one(name, properties),
            Self::None => assert_none(name, properties),
        }
    }
}

/// A property count outside its allowed bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    pub property: PropertyName,
    pub expected: Cardinality,
    pub actual: usize,
}

impl CountMismatch {
    /// Attributes this mismatch to a component.
    #[must_use]
    pub fn in_component(self, component: ComponentKind) -> Violation {
        Violation {
            component,
            property: Some(self.property),
            constraint: ConstraintKind::Cardinality,
            expected: self.expected.expected().to_string(),
            actual: self.actual.to_string(),
            related: Vec::new(),
        }
    }
}

/// Counts the properties labelled `name`.
#[must_use]
pub fn count(name: PropertyName, properties: &[Property]) -> usize {
    properties.iter().filter(|p| p.name == name).count()
}

fn bounded(
    name: PropertyName,
    properties: &[Property],
    expected: Cardinality,
    allowed: impl Fn(usize) -> bool,
) -> Result<(), CountMismatch> {
    let actual = count(name, properties);
    if allowed(actual) {
        Ok(())
    } else {
        Err(CountMismatch {
            property: name,
            expected,
            actual,
        })
    }
}

/// ## Errors
/// Fails unless exactly one property is labelled `name`.
pub fn assert_exactly_one(name: PropertyName, properties: &[Property]) -> Result<(), CountMismatch> {
    bounded(name, properties, Cardinality::ExactlyOne, |n| n == 1)
}

/// ## Errors
/// Fails if more than one property is labelled `name`.
pub fn assert_at_most_one(name: PropertyName, properties: &[Property]) -> Result<(), CountMismatch> {
    bounded(name, properties, Cardinality::ZeroOrOne, |n| n <= 1)
}

/// ## Errors
/// Fails if any property is labelled `name`.
pub fn assert_none(name: PropertyName, properties: &[Property]) -> Result<(), CountMismatch> {
    bounded(name, properties, Cardinality::None, |n| n == 0)
}

/// ## Errors
/// Fails unless at least one property is labelled `name`.
pub fn assert_at_least_one(
    name: PropertyName,
    properties: &[Property],
) -> Result<(), CountMismatch> {
    bounded(name, properties, Cardinality::OneOrMore, |n| n >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(names: &[PropertyName]) -> Vec<Property> {
        names
            .iter()
            .map(|name| Property::text(*name, "x"))
            .collect()
    }

    #[test]
    fn exactly_one() {
        use PropertyName::{Summary, Uid};

        assert!(assert_exactly_one(Uid, &props(&[Summary, Uid])).is_ok());
        assert_eq!(
            assert_exactly_one(Uid, &props(&[Summary])),
            Err(CountMismatch {
                property: Uid,
                expected: Cardinality::ExactlyOne,
                actual: 0,
            })
        );
        assert_eq!(
            assert_exactly_one(Uid, &props(&[Uid, Uid])).map_err(|m| m.actual),
            Err(2)
        );
    }

    #[test]
    fn at_most_one() {
        use PropertyName::Due;

        assert!(assert_at_most_one(Due, &[]).is_ok());
        assert!(assert_at_most_one(Due, &props(&[Due])).is_ok());
        assert_eq!(
            assert_at_most_one(Due, &props(&[Due, Due])).map_err(|m| (m.expected, m.actual)),
            Err((Cardinality::ZeroOrOne, 2))
        );
    }

    #[test]
    fn none() {
        use PropertyName::{Attendee, Uid};

        assert!(assert_none(Attendee, &props(&[Uid])).is_ok());
        assert_eq!(
            assert_none(Attendee, &props(&[Attendee])).map_err(|m| m.expected.expected()),
            Err("=0")
        );
    }

    #[test]
    fn at_least_one() {
        use PropertyName::Attendee;

        assert!(assert_at_least_one(Attendee, &props(&[Attendee, Attendee])).is_ok());
        assert_eq!(
            assert_at_least_one(Attendee, &[]).map_err(|m| m.expected.expected()),
            Err(">=1")
        );
    }

    #[test]
    fn labels_compare_exactly() {
        // Only the label matters, never the value.
        let properties = vec![
            Property::text(PropertyName::Summary, "UID"),
            Property::integer(PropertyName::Sequence, 1),
        ];
        assert_eq!(count(PropertyName::Uid, &properties), 0);
        assert_eq!(count(PropertyName::Summary, &properties), 1);
    }

    #[test]
    fn zero_or_more_never_fails() {
        let properties = props(&[PropertyName::Attach; 5]);
        assert!(
            Cardinality::ZeroOrMore
                .check(PropertyName::Attach, &properties)
                .is_ok()
        );
    }

    #[test]
    fn mismatch_in_component() {
        let violation = CountMismatch {
            property: PropertyName::Attendee,
            expected: Cardinality::None,
            actual: 1,
        }
        .in_component(ComponentKind::Todo);

        assert_eq!(violation.component, ComponentKind::Todo);
        assert_eq!(violation.property, Some(PropertyName::Attendee));
        assert_eq!(violation.constraint, ConstraintKind::Cardinality);
        assert_eq!(violation.expected, "=0");
        assert_eq!(violation.actual, "1");
    }
}
