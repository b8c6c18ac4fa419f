//! Configuration loading and management for the leave ledger.
//!
//! This module loads the institution's settings from YAML files: its name
//! and UTC offset, batch records with semester start overrides, and the
//! declared exception days.
//!
//! # Example
//!
//! ```no_run
//! use leave_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/institution").unwrap();
//! println!("Loaded institution: {}", config.institution().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BatchesConfig, ExceptionDaysConfig, InstitutionConfig, InstitutionMetadata};
