//! VEVENT presence tables (RFC 2446 §3.2).

use crate::error::RuleTableError;
use crate::rfc::ical::core::PropertyName::{
    Attach, Attendee, Categories, Class, Contact, Created, Description, DtEnd, DtStamp, DtStart,
    Duration, ExDate, ExRule, Geo, LastModified, Location, Organizer, Priority, RDate, RRule,
    RecurrenceId, RelatedTo, RequestStatus, Resources, Sequence, Status, Summary, Transp, Uid,
    Url,
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

fn event(method: Method) -> RuleTableBuilder {
    RuleTable::builder(ComponentKind::Event, method)
}

/// VEVENT under PUBLISH (§3.2.1). `ORGANIZER` and `SUMMARY` are waived in
/// relaxed mode.
fn publish() -> Result<RuleTable, RuleTableError> {
    event(Method::Publish)
        .exactly_one(&[DtStamp, DtStart])
        .exactly_one_strict(&[Organizer, Summary])
        .exactly_one(&[Uid])
        .zero_or_one(&[
            RecurrenceId,
            Sequence,
            Categories,
            Class,
            Created,
            Description,
            DtEnd,
            Duration,
            Geo,
            LastModified,
            Location,
            Priority,
            Resources,
            Status,
            Transp,
            Url,
        ])
        .none(&[Attendee, RequestStatus])
        .mutually_exclusive(DtEnd, Duration)
        .required_when(Sequence, Condition::GreaterThan(0), Sequence)
        .validate_children(ComponentKind::Alarm, Method::Publish)
        .build()
}

/// VEVENT under REQUEST (§3.2.2).
fn request() -> Result<RuleTable, RuleTableError> {
    event(Method::Request)
        .one_or_more(&[Attendee])
        .exactly_one(&[DtStamp, DtStart, Organizer, Summary, Uid])
        .zero_or_one(&[
            Sequence,
            Categories,
            Class,
            Created,
            Description,
            DtEnd,
            Duration,
            Geo,
            LastModified,
            Location,
            Priority,
            RecurrenceId,
            Resources,
            Status,
            Transp,
            Url,
        ])
        .none(&[RequestStatus])
        .mutually_exclusive(DtEnd, Duration)
        .required_when(Sequence, Condition::GreaterThan(0), Sequence)
        .validate_children(ComponentKind::Alarm, Method::Request)
        .build()
}

/// VEVENT under REPLY (§3.2.3).
fn reply() -> Result<RuleTable, RuleTableError> {
    event(Method::Reply)
        .exactly_one(&[Attendee, DtStamp, Organizer, Uid])
        .zero_or_one(&[
            RecurrenceId,
            Sequence,
            Class,
            Created,
            Description,
            DtEnd,
            DtStart,
            Duration,
            Geo,
            LastModified,
            Location,
            Priority,
            Resources,
            Status,
            Summary,
            Transp,
            Url,
        ])
        .mutually_exclusive(DtEnd, Duration)
        .required_when(Sequence, Condition::GreaterThan(0), Sequence)
        .forbid_children(ComponentKind::Alarm)
        .build()
}

/// VEVENT under ADD (§3.2.4).
fn add() -> Result<RuleTable, RuleTableError> {
    event(Method::Add)
        .exactly_one(&[DtStamp, DtStart, Organizer, Sequence, Summary, Uid])
        .zero_or_one(&[
            Categories,
            Class,
            Created,
            Description,
            DtEnd,
            Duration,
            Geo,
            LastModified,
            Location,
            Priority,
            Resources,
            Status,
            Transp,
            Url,
        ])
        .none(&[RecurrenceId, RequestStatus])
        .mutually_exclusive(DtEnd, Duration)
        .validate_children(ComponentKind::Alarm, Method::Add)
        .build()
}

/// VEVENT under CANCEL (§3.2.5).
fn cancel() -> Result<RuleTable, RuleTableError> {
    event(Method::Cancel)
        .exactly_one(&[DtStamp, Organizer, Sequence, Uid])
        .zero_or_one(&[
            Categories,
            Class,
            Created,
            Description,
            DtEnd,
            DtStart,
            Duration,
            Geo,
            LastModified,
            Location,
            Priority,
            RecurrenceId,
            Resources,
            Status,
            Summary,
            Transp,
            Url,
        ])
        .none(&[RequestStatus])
        .mutually_exclusive(DtEnd, Duration)
        .forbid_children(ComponentKind::Alarm)
        .build()
}

/// VEVENT under REFRESH (§3.2.6).
fn refresh() -> Result<RuleTable, RuleTableError> {
    event(Method::Refresh)
        .exactly_one(&[Attendee, DtStamp, Organizer, Uid])
        .zero_or_one(&[RecurrenceId])
        .none(&[
            Attach,
            Categories,
            Class,
            Contact,
            Created,
            Description,
            DtEnd,
            DtStart,
            Duration,
            ExDate,
            ExRule,
            Geo,
            LastModified,
            Location,
            Priority,
            RDate,
            RelatedTo,
            RequestStatus,
            Resources,
            RRule,
            Sequence,
            Status,
            Summary,
            Transp,
            Url,
        ])
        .mutually_exclusive(DtEnd, Duration)
        .forbid_children(ComponentKind::Alarm)
        .build()
}

/// VEVENT under COUNTER (§3.2.7).
fn counter() -> Result<RuleTable, RuleTableError> {
    event(Method::Counter)
        .exactly_one(&[DtStamp, DtStart, Organizer, Sequence, Summary, Uid])
        .zero_or_one(&[
            Categories,
            Class,
            Created,
            Description,
            DtEnd,
            Duration,
            Geo,
            LastModified,
            Location,
            Priority,
            RecurrenceId,
            Resources,
            Status,
            Transp,
            Url,
        ])
        .mutually_exclusive(DtEnd, Duration)
        .validate_children(ComponentKind::Alarm, Method::Counter)
        .build()
}

/// VEVENT under DECLINECOUNTER (§3.2.8).
fn decline_counter() -> Result<RuleTable, RuleTableError> {
    event(Method::DeclineCounter)
        .exactly_one(&[DtStamp, Organizer, Uid])
        .zero_or_one(&[RecurrenceId, Sequence])
        .none(&[
            Attach,
            Attendee,
            Categories,
            Class,
            Contact,
            Created,
            Description,
            DtEnd,
            DtStart,
            Duration,
            ExDate,
            ExRule,
            Geo,
            LastModified,
            Location,
            Priority,
            RDate,
            RelatedTo,
            Resources,
            RRule,
            Status,
            Summary,
            Transp,
            Url,
        ])
        .mutually_exclusive(DtEnd, Duration)
        .forbid_children(ComponentKind::Alarm)
        .build()
}
