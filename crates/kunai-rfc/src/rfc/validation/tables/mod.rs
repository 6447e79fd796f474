//! ## Summary
//! Built-in presence tables from RFC 2446.
//!
//! Each submodule holds the tables for one component kind, one builder
//! expression per method.

mod alarm;
mod event;
mod freebusy;
mod journal;
mod todo;

use crate::error::{RfcResult, RuleTableError};

use super::registry::RuleRegistry;
use super::table::RuleTable;

/// Builds every built-in table.
///
/// ## Errors
/// Fails if any table contradicts itself.
pub fn standard_tables() -> Result<Vec<RuleTable>, RuleTableError> {
    let mut tables = todo::tables()?;
    tables.extend(event::tables()?);
    tables.extend(journal::tables()?);
    tables.extend(freebusy::tables()?);
    tables.extend(alarm::tables()?);
    Ok(tables)
}

/// Builds and verifies a registry holding every built-in table.
///
/// ## Errors
/// Fails if any table contradicts itself or the registry is not closed
/// under sub-component recursion.
pub fn standard_registry() -> RfcResult<RuleRegistry> {
    let registry = RuleRegistry::from_tables(standard_tables()?)?;
    tracing::debug!(tables = registry.len(), "Built standard rule registry");
    Ok(registry)
}
