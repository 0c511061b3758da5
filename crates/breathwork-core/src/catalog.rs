//! The ordered catalog of states for one session.

use std::path::Path;

use tracing::warn;

use crate::error::CatalogError;
use crate::state::State;

/// Ordered, immutable sequence of states plus the derived breathe duration.
///
/// Always bookended as `[initial] ++ loaded ++ [default]`, so the catalog
/// is never empty and playback still runs when the data file is missing.
/// The order is the playback order.
#[derive(Debug, Clone)]
pub struct StateCatalog {
    states: Vec<State>,
    breathe_duration: f64,
}

impl StateCatalog {
    /// Build a catalog from externally decoded states.
    pub fn from_states(decoded: Vec<State>) -> Self {
        let mut states = Vec::with_capacity(decoded.len() + 2);
        states.push(State::initial_state());
        states.extend(decoded);
        states.push(State::default_state());
        let breathe_duration = states
            .iter()
            .filter(|s| s.kind.is_breathe())
            .map(|s| s.duration)
            .sum();
        Self {
            states,
            breathe_duration,
        }
    }

    /// Load a catalog from a JSON data file.
    ///
    /// A read or decode failure is logged and treated as "no additional
    /// states": the returned catalog holds only the two bookends.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load state data, playing bookends only");
                Self::from_states(Vec::new())
            }
        }
    }

    /// Strict variant of [`load`](Self::load): propagates the failure.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Decode a catalog from a JSON array of state records.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let decoded: Vec<State> =
            serde_json::from_str(data).map_err(CatalogError::DecodeFailed)?;
        Ok(Self::from_states(decoded))
    }

    /// States in playback order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true: the bookends are always present.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Total seconds across the Inhale/Exhale/Hold states.
    pub fn breathe_duration(&self) -> f64 {
        self.breathe_duration
    }
}
