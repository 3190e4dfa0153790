//! Command implementations for the dupe-check CLI

pub mod config;
pub mod scan;
