//! Shared application state.
//!
//! One questionnaire per app instance, behind `RwLock`: widget mutations
//! take the write path, dashboard reads the read path. State is created at
//! startup with all-clear defaults and discarded when the window closes —
//! nothing is persisted.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::symptom::SymptomState;

/// Shared state managed by the Tauri builder, wrapped in `Arc` at startup.
pub struct CoreState {
    questionnaire: RwLock<SymptomState>,
}

impl CoreState {
    /// Fresh state with an all-clear questionnaire.
    pub fn new() -> Self {
        Self {
            questionnaire: RwLock::new(SymptomState::new()),
        }
    }

    /// Acquire a read lock on the questionnaire.
    pub fn read_questionnaire(
        &self,
    ) -> Result<RwLockReadGuard<'_, SymptomState>, CoreError> {
        self.questionnaire.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the questionnaire.
    pub fn write_questionnaire(
        &self,
    ) -> Result<RwLockWriteGuard<'_, SymptomState>, CoreError> {
        self.questionnaire.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Owned copy of the current questionnaire state.
    pub fn snapshot(&self) -> Result<SymptomState, CoreError> {
        Ok(self.read_questionnaire()?.clone())
    }

    /// Reset the questionnaire to session defaults.
    pub fn reset_questionnaire(&self) -> Result<(), CoreError> {
        let mut guard = self.write_questionnaire()?;
        *guard = SymptomState::new();
        Ok(())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
}
