//! iCalendar object model (RFC 5545) and scheduling methods (RFC 5546).
//!
//! Parsing and serialization live outside this crate; components arrive
//! here already built and are treated as read-only.

pub mod core;
