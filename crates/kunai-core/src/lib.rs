//! Shared configuration for the kunai workspace.

pub mod config;
