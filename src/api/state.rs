//! Application state for the leave ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded institution configuration and the clock requests use
/// to default their `as_of` date.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a state reading the system wall clock in the configured offset.
    pub fn new(config: ConfigLoader) -> Self {
        let clock = config.system_clock();
        Self::with_clock(config, clock)
    }

    /// Creates a state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: impl Clock + 'static) -> Self {
        Self {
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the request clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
