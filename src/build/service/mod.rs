// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Background build runner.
//!
//! ```text
//! caller                         blocking worker
//!   start(project)
//!     validate ----x---> Err(Invalid)
//!     running? ----x---> Err(AlreadyRunning)
//!     spawn_blocking ------> pipeline::run ---- Status/Progress ---> events
//!   <- BuildHandle                 |
//!                                  +- Ok  -> append record -> Completed(path)
//!                                  +- Err ---------------------> Failed(msg)
//!   handle.wait().await  <---------'
//! ```
//!
//! At most one build runs per service. The flag is released before the
//! terminal event is sent, so a caller reacting to `Completed` can start the
//! next build straight away.

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use flume::Receiver;
use tokio::task::JoinHandle;

use super::pipeline::{self, BuildEvent, BuildOutcome};
use super::validate::validate;
use crate::config::types::BuildSettings;
use crate::error::BuildError;
use crate::project::ModProject;
use crate::record::BuildRecord;
use crate::record::store::BuildRecordStore;

/// Runs builds off the caller's thread and records successful ones.
pub struct BuildService {
    settings: BuildSettings,
    store: Arc<BuildRecordStore>,
    running: Arc<AtomicBool>,
}

impl BuildService {
    /// Service writing records next to the configured cache directory.
    #[must_use]
    pub fn new(settings: BuildSettings) -> Self {
        let store = Arc::new(BuildRecordStore::new(settings.record_file()));
        Self::with_store(settings, store)
    }

    /// Service sharing an existing record store.
    #[must_use]
    pub fn with_store(settings: BuildSettings, store: Arc<BuildRecordStore>) -> Self {
        Self {
            settings,
            store,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    #[must_use]
    pub const fn store(&self) -> &Arc<BuildRecordStore> {
        &self.store
    }

    /// Whether a build is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Validates `project` and starts building it on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Invalid` when the project fails pre-flight checks
    /// and `BuildError::AlreadyRunning` while another build is in flight.
    /// Neither case touches the filesystem.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn start(&self, project: ModProject) -> Result<BuildHandle, BuildError> {
        validate(&project)?;

        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BuildError::AlreadyRunning);
        }
        let guard = RunningGuard(Arc::clone(&self.running));

        let (tx, rx) = flume::unbounded();
        let settings = self.settings.clone();
        let store = Arc::clone(&self.store);

        let task = tokio::task::spawn_blocking(move || {
            let result = pipeline::run(&project, &settings, &tx);

            if let Ok(outcome) = &result {
                let record = BuildRecord::from_build(&project, outcome);
                match store.append(&record) {
                    Ok(count) => tracing::debug!(count, "build record saved"),
                    Err(e) => tracing::warn!(error = %e, "failed to save build record"),
                }
            }

            drop(guard);
            match &result {
                Ok(outcome) => {
                    let _ = tx.send(BuildEvent::Completed(outcome.output_path.clone()));
                }
                Err(e) => {
                    tracing::error!(error = %e, "build failed");
                    let _ = tx.send(BuildEvent::Failed(e.to_string()));
                }
            }
            result
        });

        Ok(BuildHandle { events: rx, task })
    }
}

/// Clears the single-flight flag, also when the worker panics.
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A build in flight.
pub struct BuildHandle {
    events: Receiver<BuildEvent>,
    task: JoinHandle<Result<BuildOutcome, BuildError>>,
}

impl BuildHandle {
    /// Progress and status notifications, ending with `Completed` or `Failed`.
    #[must_use]
    pub const fn events(&self) -> &Receiver<BuildEvent> {
        &self.events
    }

    /// Waits for the worker to finish.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error, or `BuildError::WorkerLost` if the worker
    /// panicked.
    pub async fn wait(self) -> Result<BuildOutcome, BuildError> {
        self.task.await.map_err(|e| {
            tracing::error!(error = %e, "build worker stopped unexpectedly");
            BuildError::WorkerLost
        })?
    }
}
