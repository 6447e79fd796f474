//! iCalendar component types (RFC 5545 §3.4-3.6).

use super::{Property, PropertyName};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// Unknown/X-component.
    Unknown,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a component kind from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VJOURNAL" => Self::Journal,
            "VFREEBUSY" => Self::FreeBusy,
            "VTIMEZONE" => Self::Timezone,
            "VALARM" => Self::Alarm,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            _ => Self::Unknown,
        }
    }

    /// Returns whether this component can contain other components.
    #[must_use]
    pub const fn can_have_children(self) -> bool {
        matches!(
            self,
            Self::Calendar | Self::Event | Self::Todo | Self::Timezone
        )
    }

    /// Returns whether a `child` component may be nested directly in this one.
    ///
    /// X-components are accepted wherever nesting is allowed at all.
    #[must_use]
    pub const fn can_contain(self, child: Self) -> bool {
        match (self, child) {
            (
                Self::Calendar,
                Self::Event | Self::Todo | Self::Journal | Self::FreeBusy | Self::Timezone,
            )
            | (Self::Event | Self::Todo, Self::Alarm)
            | (Self::Timezone, Self::Standard | Self::Daylight) => true,
            (parent, Self::Unknown) => parent.can_have_children(),
            _ => false,
        }
    }

    /// Returns whether this is a schedulable component (VEVENT, VTODO, VJOURNAL).
    #[must_use]
    pub const fn is_schedulable(self) -> bool {
        matches!(self, Self::Event | Self::Todo | Self::Journal)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ComponentKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ComponentKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// An iCalendar component.
///
/// Components hold properties and nested sub-components. For example, a
/// VTODO may contain VALARMs.
///
/// `inherited` carries properties that apply to the component without being
/// attached to it, such as the `SEQUENCE` of the stored master that an
/// overridden instance belongs to. They never count towards cardinality;
/// they only supply [`Component::effective_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Component type.
    pub kind: ComponentKind,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Properties known to apply but not attached.
    pub inherited: Vec<Property>,
    /// Nested sub-components.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            inherited: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a component from its name. Unrecognized names, including
    /// X-components, become [`ComponentKind::Unknown`].
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::new(ComponentKind::parse(name))
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates a VTODO component.
    #[must_use]
    pub fn todo() -> Self {
        Self::new(ComponentKind::Todo)
    }

    /// Creates a VJOURNAL component.
    #[must_use]
    pub fn journal() -> Self {
        Self::new(ComponentKind::Journal)
    }

    /// Creates a VALARM component.
    #[must_use]
    pub fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a property, returning the component.
    #[must_use]
    pub fn with_property(mut self, prop: Property) -> Self {
        self.properties.push(prop);
        self
    }

    /// Records a property that applies to this component without attaching it.
    pub fn add_inherited(&mut self, prop: Property) {
        self.inherited.push(prop);
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Adds a child component, returning the component.
    #[must_use]
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the first attached property with the given name.
    #[must_use]
    pub fn get_property(&self, name: PropertyName) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the value in force for `name`: the attached property if any,
    /// otherwise an inherited one.
    #[must_use]
    pub fn effective_value(&self, name: PropertyName) -> Option<&Property> {
        self.get_property(name)
            .or_else(|| self.inherited.iter().find(|p| p.name == name))
    }

    /// Returns the raw UID value if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(PropertyName::Uid)
            .map(|p| p.raw_value.as_str())
    }

    /// Returns children of a specific kind.
    pub fn children_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.children.iter().filter(move |c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kind_parse() {
        assert_eq!(ComponentKind::parse("VEVENT"), ComponentKind::Event);
        assert_eq!(ComponentKind::parse("vtodo"), ComponentKind::Todo);
        assert_eq!(ComponentKind::parse("X-CUSTOM"), ComponentKind::Unknown);
    }

    #[test]
    fn containment_model() {
        assert!(ComponentKind::Todo.can_contain(ComponentKind::Alarm));
        assert!(ComponentKind::Event.can_contain(ComponentKind::Alarm));
        assert!(ComponentKind::Calendar.can_contain(ComponentKind::Todo));
        assert!(ComponentKind::Timezone.can_contain(ComponentKind::Daylight));
        assert!(ComponentKind::Todo.can_contain(ComponentKind::Unknown));

        assert!(!ComponentKind::Journal.can_contain(ComponentKind::Alarm));
        assert!(!ComponentKind::FreeBusy.can_contain(ComponentKind::Alarm));
        assert!(!ComponentKind::Alarm.can_contain(ComponentKind::Unknown));
        assert!(!ComponentKind::Todo.can_contain(ComponentKind::Event));
    }

    #[test]
    fn component_properties() {
        let todo = Component::todo()
            .with_property(Property::text(PropertyName::Uid, "test-uid-123"))
            .with_property(Property::new(PropertyName::Categories, "A"))
            .with_property(Property::text(PropertyName::Categories, "B"));

        assert_eq!(todo.uid(), Some("test-uid-123"));
        assert_eq!(
            todo.get_property(PropertyName::Categories)
                .map(|p| p.raw_value.as_str()),
            Some("A")
        );
        assert!(todo.get_property(PropertyName::Due).is_none());
    }

    #[test]
    fn effective_value_prefers_attached() {
        let mut todo =
            Component::todo().with_property(Property::integer(PropertyName::Sequence, 1));
        todo.add_inherited(Property::integer(PropertyName::Sequence, 4));
        todo.add_inherited(Property::integer(PropertyName::Priority, 2));

        assert_eq!(
            todo.effective_value(PropertyName::Sequence)
                .and_then(Property::as_integer),
            Some(1)
        );
        assert_eq!(
            todo.effective_value(PropertyName::Priority)
                .and_then(Property::as_integer),
            Some(2)
        );
        assert!(todo.get_property(PropertyName::Priority).is_none());
    }

    #[test]
    fn children_by_kind() {
        let todo = Component::todo()
            .with_child(Component::alarm())
            .with_child(Component::named("X-WIDGET"))
            .with_child(Component::alarm());

        assert_eq!(todo.children_of_kind(ComponentKind::Alarm).count(), 2);
        assert_eq!(todo.children_of_kind(ComponentKind::Unknown).count(), 1);
        assert_eq!(todo.children[1].kind, ComponentKind::Unknown);
    }
}
