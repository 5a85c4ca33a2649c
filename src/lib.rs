//! pullrule library
//!
//! Core functionality for pulling bundled Cursor rule files into a project's
//! `.cursor/rules` directory.

pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod prompt;
pub mod rules;
