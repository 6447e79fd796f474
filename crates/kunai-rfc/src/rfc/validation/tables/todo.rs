//! VTODO presence tables (RFC 2446 §3.4).

use crate::error::RuleTableError;
use crate::rfc::ical::core::PropertyName::{
    Attach, Attendee, Categories, Class, Contact, Created, Description, DtStamp, DtStart, Due,
    Duration, ExDate, ExRule, Geo, LastModified, Location, Organizer, PercentComplete, Priority,
    RDate, RRule, RecurrenceId, RelatedTo, RequestStatus, Resources, Sequence, Status, Summary,
    Uid, Url,
};
use crate::rfc::ical::core::{ComponentKind, Method};
use crate::rfc::validation::table::{Condition, RuleTable, RuleTableBuilder};

pub(super) fn tables() -> Result<Vec<RuleTable>, RuleTableError> {
    Ok(vec![
        publish()?,
        request()?,
        reply()?,
        add()?,
        cancel()?,
        refresh()?,
        counter()?,
        decline_counter()?,
    ])
}

fn todo(method: Method) -> RuleTableBuilder {
    RuleTable::builder(ComponentKind::Todo, method)
}

/// ## Summary
/// VTODO under PUBLISH (§3.4.1).
///
/// `ORGANIZER` and `PRIORITY` are waived in relaxed mode. `DTSTART` is only
/// bounded at one: RFC 2446 requires it but RFC 2445 lets a to-do omit it.
fn publish() -> Result<RuleTable, RuleTableError> {
    todo(Method::Publish)
        .exactly_one(&[DtStamp])
        .exactly_one_strict(&[Organizer, Priority])
        .exactly_one(&[Summary, Uid])
        .zero_or_one(&[
            DtStart,
            Sequence,
            Categories,
            Class,
            Created,
            Description,
            Due,
            Duration,
            Geo,
            LastModified,
            Location,
            PercentComplete,
            RecurrenceId,
            Resources,
            Status,
            Url,
        ])
        .none(&[Attendee, RequestStatus])
        .mutually_exclusive(Due, Duration)
        .required_when(Sequence, Condition::GreaterThan(0), Sequence)
        .validate_children(ComponentKind::Alarm, Method::Publish)
        .build()
}

/// VTODO under REQUEST (§3.4.2).
fn request() -> Result<RuleTable, RuleTableError> {
    todo(Method::Request)
        .one_or_more(&[Attendee])
        .exactly_one(&[DtStamp, DtStart, Organizer, Priority, Summary, Uid])
        .zero_or_one(&[
            Sequence,
            Categories,
            Class,
            Created,
            Description,
            Due,
            Duration,
            Geo,
            LastModified,
            Location,
            PercentComplete,
            RecurrenceId,
            Resources,
            Status,
            Url,
        ])
        .none(&[RequestStatus])
        .mutually_exclusive(Due, Duration)
        .required_when(Sequence, Condition::GreaterThan(0), Sequence)
        .validate_children(ComponentKind::Alarm, Method::Request)
        .build()
}

/// VTODO under REPLY (§3.4.3).
fn reply() -> Result<RuleTable, RuleTableError> {
    todo(Method::Reply)
        .exactly_one(&[Attendee, DtStamp, Organizer, Uid])
        .zero_or_one(&[
            Sequence,
            Class,
            Created,
            Description,
            DtStart,
            Due,
            Duration,
            Geo,
            LastModified,
            Location,
            PercentComplete,
            Priority,
            RecurrenceId,
            Resources,
            Status,
            Summary,
            Url,
        ])
        .mutually_exclusive(Due, Duration)
        .required_when(Sequence, Condition::GreaterThan(0), Sequence)
        .forbid_children(ComponentKind::Alarm)
        .build()
}

/// VTODO under ADD (§3.4.4).
fn add() -> Result<RuleTable, RuleTableError> {
    todo(Method::Add)
        .exactly_one(&[DtStamp, Organizer, Priority, Sequence, Summary, Uid])
        .zero_or_one(&[
            Categories,
            Class,
            Created,
            Description,
            DtStart,
            Due,
            Duration,
            Geo,
            LastModified,
            Location,
            PercentComplete,
            Resources,
            Status,
            Url,
        ])
        .none(&[RecurrenceId, RequestStatus])
        .mutually_exclusive(Due, Duration)
        .validate_children(ComponentKind::Alarm, Method::Add)
        .build()
}

/// VTODO under CANCEL (§3.4.5).
fn cancel() -> Result<RuleTable, RuleTableError> {
    todo(Method::Cancel)
        .exactly_one(&[DtStamp, Organizer, Sequence, Uid])
        .zero_or_one(&[
            Categories,
            Class,
            Created,
            Description,
            DtStart,
            Due,
            Duration,
            Geo,
            LastModified,
            Location,
            PercentComplete,
            Priority,
            RecurrenceId,
            Resources,
            Status,
            Summary,
            Url,
        ])
        .none(&[RequestStatus])
        .mutually_exclusive(Due, Duration)
        .forbid_children(ComponentKind::Alarm)
        .build()
}

/// VTODO under REFRESH (§3.4.6). `DUE` and `DURATION` are both forbidden,
/// but sending them together is still reported as an exclusion.
fn refresh() -> Result<RuleTable, RuleTableError> {
    todo(Method::Refresh)
        .exactly_one(&[Attendee, DtStamp, Uid])
        .zero_or_one(&[RecurrenceId])
        .none(&[
            Attach,
            Categories,
            Class,
            Contact,
            Created,
            Description,
            DtStart,
            Due,
            Duration,
            ExDate,
            ExRule,
            Geo,
            LastModified,
            Location,
            PercentComplete,
            Priority,
            RDate,
            RelatedTo,
            RequestStatus,
            Resources,
            RRule,
            Sequence,
            Status,
            Url,
        ])
        .mutually_exclusive(Due, Duration)
        .forbid_children(ComponentKind::Alarm)
        .build()
}

/// VTODO under COUNTER (§3.4.7).
fn counter() -> Result<RuleTable, RuleTableError> {
    todo(Method::Counter)
        .one_or_more(&[Attendee])
        .exactly_one(&[DtStamp, Organizer, Priority, Sequence, Summary, Uid])
        .zero_or_one(&[
            Categories,
            Class,
            Created,
            Description,
            DtStart,
            Due,
            Duration,
            Geo,
            LastModified,
            Location,
            PercentComplete,
            RecurrenceId,
            Resources,
            Status,
            Url,
        ])
        .mutually_exclusive(Due, Duration)
        .validate_children(ComponentKind::Alarm, Method::Counter)
        .build()
}

/// VTODO under DECLINECOUNTER (§3.4.8).
fn decline_counter() -> Result<RuleTable, RuleTableError> {
    todo(Method::DeclineCounter)
        .one_or_more(&[Attendee])
        .exactly_one(&[DtStamp, Organizer, Sequence, Uid])
        .zero_or_one(&[RecurrenceId])
        .none(&[
            Attach,
            Categories,
            Class,
            Contact,
            Created,
            Description,
            DtStart,
            Due,
            Duration,
            ExDate,
            ExRule,
            Geo,
            LastModified,
            Location,
            PercentComplete,
            Priority,
            RDate,
            RelatedTo,
            Resources,
            RRule,
            Status,
            Url,
        ])
        .mutually_exclusive(Due, Duration)
        .forbid_children(ComponentKind::Alarm)
        .build()
}
