//! Sub-component validation.

use super::fixtures::*;
use crate::rfc::ical::core::{Component, ComponentKind, Method, Property, PropertyName};
use crate::rfc::validation::{
    ConstraintKind, RuleRegistry, RuleTable, Strictness, ValidationError, Validator,
};

#[test_log::test]
fn valid_alarm_is_accepted() {
    let todo = publishable_todo().with_child(display_alarm());
    assert_eq!(
        validator().validate(&todo, Method::Publish, Strictness::Strict),
        Ok(())
    );
}

#[test_log::test]
fn invalid_alarm_is_attributed_to_the_alarm() {
    let todo = publishable_todo().with_child(without(display_alarm(), PropertyName::Trigger));
    let err = validator()
        .validate(&todo, Method::Publish, Strictness::Strict)
        .expect_err("alarm without TRIGGER");
    let v = err.violation().expect("a violation");

    assert_eq!(v.component, ComponentKind::Alarm);
    assert_eq!(v.property, Some(PropertyName::Trigger));
    assert_eq!(err.record().component_kind, ComponentKind::Alarm);
}

#[test]
fn parent_violations_come_before_children() {
    let todo = without(publishable_todo(), PropertyName::Uid)
        .with_child(without(display_alarm(), PropertyName::Action));
    let err = validator()
        .validate(&todo, Method::Publish, Strictness::Strict)
        .expect_err("two violations");

    assert_eq!(err.component_kind(), ComponentKind::Todo);
}

#[test]
fn first_failing_sibling_wins() {
    let todo = publishable_todo()
        .with_child(display_alarm())
        .with_child(without(display_alarm(), PropertyName::Action))
        .with_child(without(display_alarm(), PropertyName::Trigger));
    let err = validator()
        .validate(&todo, Method::Publish, Strictness::Strict)
        .expect_err("two bad alarms");

    assert_eq!(
        err.violation().and_then(|v| v.property),
        Some(PropertyName::Action)
    );
}

#[test]
fn alarm_duration_requires_repeat() {
    let alarm = display_alarm().with_property(prop(PropertyName::Duration));
    let todo = minimal_todo(Method::Request).with_child(alarm.clone());
    let err = validator()
        .validate(&todo, Method::Request, Strictness::Strict)
        .expect_err("DURATION without REPEAT");
    let v = err.violation().expect("a violation");

    assert_eq!(v.component, ComponentKind::Alarm);
    assert_eq!(v.constraint, ConstraintKind::ConditionalRequirement);
    assert_eq!(v.property, Some(PropertyName::Repeat));
    assert_eq!(v.related, vec![PropertyName::Duration]);

    let todo = minimal_todo(Method::Request)
        .with_child(alarm.with_property(Property::integer(PropertyName::Repeat, 4)));
    assert_eq!(
        validator().validate(&todo, Method::Request, Strictness::Strict),
        Ok(())
    );
}

#[test]
fn alarm_repeat_requires_duration() {
    let alarm = display_alarm().with_property(prop(PropertyName::Repeat));
    let todo = minimal_todo(Method::Add).with_child(alarm);
    let err = validator()
        .validate(&todo, Method::Add, Strictness::Strict)
        .expect_err("REPEAT without DURATION");

    assert_eq!(
        err.violation().and_then(|v| v.property),
        Some(PropertyName::Duration)
    );
}

#[test]
fn reply_forbids_alarms() {
    let todo = minimal_todo(Method::Reply).with_child(display_alarm());
    let err = validator()
        .validate(&todo, Method::Reply, Strictness::Strict)
        .expect_err("VALARM in REPLY");
    let v = err.violation().expect("a violation");

    assert_eq!(v.component, ComponentKind::Todo);
    assert_eq!(v.constraint, ConstraintKind::Cardinality);
    assert_eq!(v.property, None);
    assert_eq!(v.expected, "VALARM=0");
    assert_eq!(v.actual, "VALARM=1");
}

#[test]
fn undeclared_children_are_ignored() {
    let todo = publishable_todo().with_child(Component::named("X-WIDGET"));
    assert_eq!(
        validator().validate(&todo, Method::Publish, Strictness::Strict),
        Ok(())
    );
}

#[test]
fn strictness_applies_to_the_whole_tree() {
    let table_for = |method| {
        RuleTable::builder(ComponentKind::Alarm, method)
            .exactly_one_strict(&[PropertyName::Description])
            .build()
            .expect("valid table")
    };
    let todo = RuleTable::builder(ComponentKind::Todo, Method::Publish)
        .validate_children(ComponentKind::Alarm, Method::Publish)
        .build()
        .expect("valid table");
    let validator = Validator::new(
        RuleRegistry::from_tables([todo, table_for(Method::Publish)]).expect("valid registry"),
    );
    let component = Component::todo().with_child(Component::alarm());

    assert_eq!(
        validator.validate(&component, Method::Publish, Strictness::Relaxed),
        Ok(())
    );
    assert!(
        validator
            .validate(&component, Method::Publish, Strictness::Strict)
            .is_err()
    );
}

#[test]
fn child_method_comes_from_the_parent_table() {
    // The to-do is published, but its alarms are checked as if requested.
    let todo = RuleTable::builder(ComponentKind::Todo, Method::Publish)
        .validate_children(ComponentKind::Alarm, Method::Request)
        .build()
        .expect("valid table");
    let alarm = RuleTable::builder(ComponentKind::Alarm, Method::Request)
        .none(&[PropertyName::Attendee])
        .build()
        .expect("valid table");
    let validator =
        Validator::new(RuleRegistry::from_tables([todo, alarm]).expect("valid registry"));

    let component = Component::todo()
        .with_child(Component::alarm().with_property(prop(PropertyName::Attendee)));
    let err = validator
        .validate(&component, Method::Publish, Strictness::Strict)
        .expect_err("ATTENDEE in alarm");

    assert_eq!(err.component_kind(), ComponentKind::Alarm);
}

#[test]
fn missing_child_table_surfaces_as_unsupported() {
    let mut registry = RuleRegistry::new();
    registry
        .register(
            RuleTable::builder(ComponentKind::Todo, Method::Publish)
                .validate_children(ComponentKind::Alarm, Method::Publish)
                .build()
                .expect("valid table"),
        )
        .expect("registered");
    let validator = Validator::new(registry);

    assert_eq!(
        validator.validate(&Component::todo(), Method::Publish, Strictness::Strict),
        Ok(())
    );
    assert_eq!(
        validator.validate(
            &Component::todo().with_child(Component::alarm()),
            Method::Publish,
            Strictness::Strict
        ),
        Err(ValidationError::UnsupportedCombination {
            kind: ComponentKind::Alarm,
            method: Method::Publish,
        })
    );
}
