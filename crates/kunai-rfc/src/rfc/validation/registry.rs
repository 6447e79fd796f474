//! ## Summary
//! Lookup of rule tables by (component kind, method).
//!
//! The registry is assembled once at startup and only read afterwards, so
//! it can be shared between threads without locking.

use std::collections::HashMap;

use crate::error::RuleTableError;
use crate::rfc::ical::core::{ComponentKind, Method};

use super::table::{RuleTable, SubComponentRule};

/// Registered rule tables.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    tables: HashMap<(ComponentKind, Method), RuleTable>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `tables` and verifies it with [`Self::verify`].
    ///
    /// ## Errors
    /// Fails on a duplicate (kind, method) pair or a dangling sub-component rule.
    pub fn from_tables(tables: impl IntoIterator<Item = RuleTable>) -> Result<Self, RuleTableError> {
        let mut registry = Self::new();
        for table in tables {
            registry.register(table)?;
        }
        registry.verify()?;
        Ok(registry)
    }

    /// Registers `table` under its kind and method.
    ///
    /// ## Errors
    /// Fails if a table is already registered for the same pair.
    pub fn register(&mut self, table: RuleTable) -> Result<(), RuleTableError> {
        let key = (table.kind(), table.method());
        if self.tables.contains_key(&key) {
            return Err(RuleTableError::DuplicateTable {
                kind: key.0,
                method: key.1,
            });
        }
        tracing::trace!(kind = %key.0, method = %key.1, "Registered rule table");
        self.tables.insert(key, table);
        Ok(())
    }

    /// Checks that every sub-component rule that recurses points at a
    /// registered table.
    ///
    /// ## Errors
    /// Returns the first dangling rule found.
    pub fn verify(&self) -> Result<(), RuleTableError> {
        for table in self.tables.values() {
            for rule in table.children() {
                if let SubComponentRule::Validate { kind, method } = *rule
                    && !self.supports(kind, method)
                {
                    return Err(RuleTableError::UnregisteredChildTable {
                        kind: table.kind(),
                        method: table.method(),
                        child: kind,
                        child_method: method,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the table for `kind` under `method`.
    #[must_use]
    pub fn get(&self, kind: ComponentKind, method: Method) -> Option<&RuleTable> {
        self.tables.get(&(kind, method))
    }

    /// Returns whether a table is registered for `kind` under `method`.
    #[must_use]
    pub fn supports(&self, kind: ComponentKind, method: Method) -> bool {
        self.tables.contains_key(&(kind, method))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
