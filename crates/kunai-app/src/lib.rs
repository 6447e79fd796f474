pub mod cli;
pub mod error;
pub mod input;
pub mod report;
