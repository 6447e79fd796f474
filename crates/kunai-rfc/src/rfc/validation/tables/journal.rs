//! VJOURNAL presence tables (RFC 2446 §3.5).

use crate::error::RuleTableError;
use crate::rfc::ical::core::PropertyName::{
    Attendee, Categories, Class, Created, Description, DtStamp, DtStart, LastModified, Organizer,
    RecurrenceId, RequestStatus, Sequence, Status, Summary, Uid, Url,
};
use crate::rfc::ical::core::{ComponentKind, Method};
use crate::rfc::validation::table::{Condition, RuleTable};

pub(super) fn tables() -> Result<Vec<RuleTable>, RuleTableError> {
    Ok(vec![publish()?, add()?, cancel()?])
}

/// VJOURNAL under PUBLISH (§3.5.1).
fn publish() -> Result<RuleTable, RuleTableError> {
    RuleTable::builder(ComponentKind::Journal, Method::Publish)
        .exactly_one(&[Description, DtStamp, DtStart, Organizer, Uid])
        .zero_or_one(&[
            Categories,
            Class,
            Created,
            LastModified,
            RecurrenceId,
            Sequence,
            Status,
            Summary,
            Url,
        ])
        .none(&[Attendee, RequestStatus])
        .required_when(Sequence, Condition::GreaterThan(0), Sequence)
        .build()
}

/// VJOURNAL under ADD (§3.5.2).
fn add() -> Result<RuleTable, RuleTableError> {
    RuleTable::builder(ComponentKind::Journal, Method::Add)
        .exactly_one(&[Description, DtStamp, DtStart, Organizer, Sequence, Uid])
        .zero_or_one(&[Categories, Class, Created, LastModified, Status, Summary, Url])
        .none(&[RecurrenceId, RequestStatus])
        .build()
}

/// VJOURNAL under CANCEL (§3.5.3).
fn cancel() -> Result<RuleTable, RuleTableError> {
    RuleTable::builder(ComponentKind::Journal, Method::Cancel)
        .exactly_one(&[DtStamp, Organizer, Sequence, Uid])
        .zero_or_one(&[
            Categories,
            Class,
            Created,
            Description,
            DtStart,
            LastModified,
            RecurrenceId,
            Status,
            Summary,
            Url,
        ])
        .none(&[RequestStatus])
        .build()
}
