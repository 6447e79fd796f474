//! JSON component documents.
//!
//! The binary does not parse iCalendar text; it accepts a component tree
//! already broken into properties, shaped like:
//!
//! ```json
//! {
//!   "kind": "VTODO",
//!   "properties": [
//!     { "name": "UID", "value": "todo-1@example.com" },
//!     { "name": "SEQUENCE", "value": 2 }
//!   ],
//!   "components": [{ "kind": "VALARM", "properties": [] }]
//! }
//! ```

use std::io::Read;
use std::path::Path;

use kunai_rfc::rfc::ical::core::{Component, ComponentKind, Method, Parameter, Property, PropertyName};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentDocument {
    pub kind: String,
    #[serde(default)]
    pub properties: Vec<PropertyDocument>,
    /// Properties that apply without being attached, e.g. a stored `SEQUENCE`.
    #[serde(default)]
    pub inherited: Vec<PropertyDocument>,
    #[serde(default)]
    pub components: Vec<ComponentDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDocument {
    pub name: String,
    pub value: ValueDocument,
    #[serde(default)]
    pub params: Vec<ParameterDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueDocument {
    Integer(i32),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDocument {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl TryFrom<PropertyDocument> for Property {
    type Error = AppError;

    fn try_from(doc: PropertyDocument) -> AppResult<Self> {
        let name =
            PropertyName::parse(&doc.name).ok_or_else(|| AppError::UnknownProperty(doc.name))?;
        let property = match doc.value {
            ValueDocument::Integer(i) => Property::integer(name, i),
            ValueDocument::Text(raw) => Property::new(name, raw),
        };
        Ok(doc.params.into_iter().fold(property, |property, param| {
            property.with_param(Parameter::multi(param.name, param.values))
        }))
    }
}

impl TryFrom<ComponentDocument> for Component {
    type Error = AppError;

    fn try_from(doc: ComponentDocument) -> AppResult<Self> {
        let mut component = Component::named(&doc.kind);
        for property in doc.properties {
            component.add_property(property.try_into()?);
        }
        for property in doc.inherited {
            component.add_inherited(property.try_into()?);
        }
        for child in doc.components {
            component.add_child(child.try_into()?);
        }
        Ok(component)
    }
}

/// ## Summary
/// Reads a component document from `path`, or from stdin when `None`.
///
/// ## Errors
/// Fails if the input cannot be read, is not a valid document, or names an
/// unknown property.
pub fn read_component(path: Option<&Path>) -> AppResult<Component> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    tracing::debug!(bytes = text.len(), "Read component document");
    parse_component(&text)
}

/// ## Errors
/// Fails if `text` is not a valid document or names an unknown property.
pub fn parse_component(text: &str) -> AppResult<Component> {
    let doc: ComponentDocument = serde_json::from_str(text)?;
    doc.try_into()
}

/// ## Summary
/// Selects the components to validate and the method for each.
///
/// A VCALENDAR root contributes its scheduling and free/busy children; the
/// method defaults to the calendar's `METHOD` property. Any other root is
/// validated on its own and needs an explicit method.
///
/// ## Errors
/// Fails if no method is given and none can be read from the calendar.
pub fn targets(root: &Component, method: Option<Method>) -> AppResult<Vec<(&Component, Method)>> {
    if root.kind != ComponentKind::Calendar {
        let method = method.ok_or(AppError::MissingMethod)?;
        return Ok(vec![(root, method)]);
    }

    let method = match method {
        Some(method) => method,
        None => root
            .get_property(PropertyName::Method)
            .ok_or(AppError::MissingMethod)?
            .raw_value
            .parse()?,
    };

    Ok(root
        .children
        .iter()
        .filter(|c| c.kind.is_schedulable() || c.kind == ComponentKind::FreeBusy)
        .map(|c| (c, method))
        .collect())
}
