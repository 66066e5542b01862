//! Command-line front end helpers

pub mod prompt;
pub mod render;
