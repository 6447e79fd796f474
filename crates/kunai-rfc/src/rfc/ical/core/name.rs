//! Property labels (RFC 5545 §3.7-3.8, RFC 2445 `EXRULE`).

/// Declares the closed property vocabulary along with its wire names.
macro_rules! property_names {
    ($($(#[$meta:meta])* $variant:ident => $wire:literal,)+) => {
        /// A property label from the closed iCalendar vocabulary.
        ///
        /// Labels compare exactly; normalizing case and folding aliases is the
        /// parser's responsibility.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PropertyName {
            $($(#[$meta])* $variant,)+
        }

        impl PropertyName {
            /// Returns the wire name for this label.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Parses a wire name. Matching is exact: `summary` is not `SUMMARY`.
            #[must_use]
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

property_names! {
    // Calendar properties
    CalScale => "CALSCALE",
    Method => "METHOD",
    ProdId => "PRODID",
    Version => "VERSION",

    // Descriptive properties
    Attach => "ATTACH",
    Categories => "CATEGORIES",
    Class => "CLASS",
    Comment => "COMMENT",
    Description => "DESCRIPTION",
    Geo => "GEO",
    Location => "LOCATION",
    PercentComplete => "PERCENT-COMPLETE",
    Priority => "PRIORITY",
    Resources => "RESOURCES",
    Status => "STATUS",
    Summary => "SUMMARY",

    // Date and time properties
    Completed => "COMPLETED",
    DtEnd => "DTEND",
    Due => "DUE",
    DtStart => "DTSTART",
    Duration => "DURATION",
    FreeBusy => "FREEBUSY",
    Transp => "TRANSP",

    // Timezone properties
    TzId => "TZID",
    TzName => "TZNAME",
    TzOffsetFrom => "TZOFFSETFROM",
    TzOffsetTo => "TZOFFSETTO",
    TzUrl => "TZURL",

    // Relationship properties
    Attendee => "ATTENDEE",
    Contact => "CONTACT",
    Organizer => "ORGANIZER",
    RecurrenceId => "RECURRENCE-ID",
    RelatedTo => "RELATED-TO",
    Url => "URL",
    Uid => "UID",

    // Recurrence properties
    ExDate => "EXDATE",
    /// Deprecated by RFC 5545 but still constrained by RFC 2446 tables.
    ExRule => "EXRULE",
    RDate => "RDATE",
    RRule => "RRULE",

    // Alarm properties
    Action => "ACTION",
    Repeat => "REPEAT",
    Trigger => "TRIGGER",

    // Change management properties
    Created => "CREATED",
    DtStamp => "DTSTAMP",
    LastModified => "LAST-MODIFIED",
    Sequence => "SEQUENCE",

    // Miscellaneous
    RequestStatus => "REQUEST-STATUS",
}

impl std::fmt::Display for PropertyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for PropertyName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for PropertyName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown property name: {name}")))
    }
}
