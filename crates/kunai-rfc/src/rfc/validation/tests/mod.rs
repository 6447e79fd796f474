//! Scenario tests for the validation engine against the built-in tables.

mod recursion;
