//! Application state for the salary simulator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::Simulator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the simulator, and through it the immutable rate dataset, shared
/// across all request handlers.
#[derive(Clone)]
pub struct AppState {
    simulator: Arc<Simulator>,
}

impl AppState {
    /// Creates a new application state around a simulator.
    pub fn new(simulator: Simulator) -> Self {
        Self {
            simulator: Arc::new(simulator),
        }
    }

    /// Creates a state whose simulator uses the loader's dataset.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::new(Simulator::with_dataset(loader.into_dataset()))
    }

    /// Returns a reference to the simulator.
    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Returns an owned handle to the simulator, for moving into blocking tasks.
    pub fn shared_simulator(&self) -> Arc<Simulator> {
        Arc::clone(&self.simulator)
    }
}
