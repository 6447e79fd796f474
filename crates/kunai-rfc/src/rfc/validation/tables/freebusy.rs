//! VFREEBUSY presence tables (RFC 2446 §3.3).

use crate::error::RuleTableError;
use crate::rfc::ical::core::PropertyName::{
    Attendee, DtEnd, DtStamp, DtStart, Duration, FreeBusy, Organizer, RequestStatus, Sequence,
    Uid, Url,
};
use crate::rfc::ical::core::{ComponentKind, Method};
use crate::rfc::validation::table::RuleTable;

pub(super) fn tables() -> Result<Vec<RuleTable>, RuleTableError> {
    Ok(vec![publish()?, request()?, reply()?])
}

/// VFREEBUSY under PUBLISH (§3.3.1).
fn publish() -> Result<RuleTable, RuleTableError> {
    RuleTable::builder(ComponentKind::FreeBusy, Method::Publish)
        .exactly_one(&[DtStamp, DtStart, DtEnd, Organizer])
        .one_or_more(&[FreeBusy])
        .zero_or_one(&[Url])
        .none(&[Attendee, Duration, RequestStatus, Uid])
        .build()
}

/// VFREEBUSY under REQUEST (§3.3.2).
fn request() -> Result<RuleTable, RuleTableError> {
    RuleTable::builder(ComponentKind::FreeBusy, Method::Request)
        .one_or_more(&[Attendee])
        .exactly_one(&[DtEnd, DtStamp, DtStart, Organizer, Uid])
        .none(&[FreeBusy, Duration, RequestStatus, Url])
        .build()
}

/// VFREEBUSY under REPLY (§3.3.3).
fn reply() -> Result<RuleTable, RuleTableError> {
    RuleTable::builder(ComponentKind::FreeBusy, Method::Reply)
        .exactly_one(&[Attendee, DtStamp, DtEnd, DtStart, Organizer, Uid])
        .zero_or_one(&[Url])
        .none(&[Duration, Sequence])
        .build()
}
