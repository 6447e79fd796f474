//! ## Summary
//! Strict versus relaxed interpretation of the presence tables.
//!
//! Some producers omit properties the RFCs require (most often `ORGANIZER`
//! on published objects). Relaxed mode waives exactly those requirements a
//! rule table marks as strict-only; every other rule is unaffected.
//!
//! The mode is an explicit value handed to each validation call. Being
//! `Copy`, the value observed at the top of a call is the value used for the
//! whole component tree.

use kunai_core::config::ValidationConfig;

/// Strictness mode for one validation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Enforce every rule as written.
    #[default]
    Strict,
    /// Waive strict-only requirements for interoperability.
    Relaxed,
}

impl Strictness {
    /// Returns whether strict-only requirements are waived.
    #[must_use]
    pub const fn is_relaxed(self) -> bool {
        matches!(self, Self::Relaxed)
    }

    /// Returns the mode matching a relaxed flag.
    #[must_use]
    pub const fn from_relaxed(relaxed: bool) -> Self {
        if relaxed { Self::Relaxed } else { Self::Strict }
    }
}

impl From<&ValidationConfig> for Strictness {
    fn from(config: &ValidationConfig) -> Self {
        Self::from_relaxed(config.relaxed)
    }
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
        })
    }
}
