//! CLI command implementations

pub mod import;

pub use import::ImportArgs;
