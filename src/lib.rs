//! Locates the Closure build tooling and project directories of an XTK checkout.
//!
//! Every path is derived lexically from the location of the invoking program, see
//! [`paths::BuildPaths`].

pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod paths;
pub mod scan;
pub mod ui;
