//! VALARM presence tables.
//!
//! RFC 2446 gives alarms one table, applied under every method whose parent
//! table admits them.

use crate::error::RuleTableError;
use crate::rfc::ical::core::PropertyName::{Action, Description, Duration, Repeat, Summary, Trigger};
use crate::rfc::ical::core::{ComponentKind, Method};
use crate::rfc::validation::table::{Condition, RuleTable};

/// Methods under which a parent table recurses into its alarms.
const METHODS: [Method; 4] = [Method::Publish, Method::Request, Method::Add, Method::Counter];

pub(super) fn tables() -> Result<Vec<RuleTable>, RuleTableError> {
    METHODS.into_iter().map(table).collect()
}

/// `DURATION` and `REPEAT` must occur together or not at all.
fn table(method: Method) -> Result<RuleTable, RuleTableError> {
    RuleTable::builder(ComponentKind::Alarm, method)
        .exactly_one(&[Action, Trigger])
        .zero_or_one(&[Description, Duration, Repeat, Summary])
        .required_when(Duration, Condition::Present, Repeat)
        .required_when(Repeat, Condition::Present, Duration)
        .build()
}
