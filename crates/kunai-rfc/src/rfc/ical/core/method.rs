//! `iTIP` scheduling methods (RFC 5546 §1.4, RFC 2446 §1.3).

use std::str::FromStr;

use thiserror::Error;

/// The `iTIP` method under which a component is exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Post an object to one or more recipients without expecting replies.
    Publish,
    /// Schedule an object with attendees or request free/busy time.
    Request,
    /// Reply to a `REQUEST` with an attendee's status.
    Reply,
    /// Add instances to an existing recurring object.
    Add,
    /// Cancel one or more instances of an object.
    Cancel,
    /// Ask the organizer for the latest version of an object.
    Refresh,
    /// Propose changes to an object as an attendee.
    Counter,
    /// Decline a `COUNTER` proposal as the organizer.
    DeclineCounter,
}

impl Method {
    /// Every method, in RFC order.
    pub const ALL: [Self; 8] = [
        Self::Publish,
        Self::Request,
        Self::Reply,
        Self::Add,
        Self::Cancel,
        Self::Refresh,
        Self::Counter,
        Self::DeclineCounter,
    ];

    /// Returns the value of the `METHOD` property for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "PUBLISH",
            Self::Request => "REQUEST",
            Self::Reply => "REPLY",
            Self::Add => "ADD",
            Self::Cancel => "CANCEL",
            Self::Refresh => "REFRESH",
            Self::Counter => "COUNTER",
            Self::DeclineCounter => "DECLINECOUNTER",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `METHOD` value outside the `iTIP` vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown iTIP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Parses a method name (case-insensitive). `DECLINE-COUNTER` is accepted
    /// as an alias because RFC 2446 prose spells it that way.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PUBLISH" => Ok(Self::Publish),
            "REQUEST" => Ok(Self::Request),
            "REPLY" => Ok(Self::Reply),
            "ADD" => Ok(Self::Add),
            "CANCEL" => Ok(Self::Cancel),
            "REFRESH" => Ok(Self::Refresh),
            "COUNTER" => Ok(Self::Counter),
            "DECLINECOUNTER" | "DECLINE-COUNTER" => Ok(Self::DeclineCounter),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

impl serde::Serialize for Method {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
