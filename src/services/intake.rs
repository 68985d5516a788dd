use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{IntakeSnapshot, UploadMode};

/// Errors that can occur when submitting files
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("An upload is already in progress")]
    Busy,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File name must not be empty")]
    EmptyFileName,

    #[error("Single upload mode accepts one file, got {0}")]
    TooManyFiles(usize),

    #[error("Batch of {count} files exceeds the limit of {max}")]
    BatchTooLarge { count: usize, max: usize },
}

/// Tunables for the intake
#[derive(Debug, Clone)]
pub struct IntakeOptions {
    pub delay: Duration,
    /// Lowercase extensions without the leading dot
    pub allowed_extensions: Vec<String>,
    pub max_batch_files: usize,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            allowed_extensions: vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()],
            max_batch_files: 50,
        }
    }
}

#[derive(Debug, Default)]
struct IntakeState {
    busy: bool,
    uploaded: Vec<String>,
}

/// Simulated resume intake
///
/// Accepts file names, stays busy for a fixed delay, then records the names as
/// uploaded. No file contents are read. At most one submission is in flight;
/// a second one while busy is rejected.
#[derive(Debug, Clone)]
pub struct FileIntake {
    state: Arc<Mutex<IntakeState>>,
    options: Arc<IntakeOptions>,
}

impl FileIntake {
    pub fn new(mut options: IntakeOptions) -> Self {
        options.allowed_extensions = options
            .allowed_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect();

        Self {
            state: Arc::new(Mutex::new(IntakeState::default())),
            options: Arc::new(options),
        }
    }

    pub fn options(&self) -> &IntakeOptions {
        &self.options
    }

    pub fn snapshot(&self) -> IntakeSnapshot {
        let state = self.lock();
        IntakeSnapshot {
            busy: state.busy,
            uploaded: state.uploaded.clone(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    /// Validate a submission and move to the busy state
    ///
    /// Returns `Ok(None)` for an empty submission, which changes nothing. The
    /// returned [`PendingIntake`] must be driven with
    /// [`PendingIntake::complete`]; dropping it cancels the submission.
    pub fn begin(
        &self,
        files: Vec<String>,
        mode: UploadMode,
    ) -> Result<Option<PendingIntake>, IntakeError> {
        if files.is_empty() {
            return Ok(None);
        }

        self.validate(&files, mode)?;

        {
            let mut state = self.lock();
            if state.busy {
                return Err(IntakeError::Busy);
            }
            state.busy = true;
        }

        let pending = PendingIntake {
            id: Uuid::new_v4(),
            intake: self.clone(),
            files,
            finished: false,
        };

        tracing::info!(
            "Intake {} started with {} file(s)",
            pending.id,
            pending.files.len()
        );

        Ok(Some(pending))
    }

    /// Submit files and wait for the simulated upload to finish
    pub async fn submit(
        &self,
        files: Vec<String>,
        mode: UploadMode,
    ) -> Result<IntakeSnapshot, IntakeError> {
        match self.begin(files, mode)? {
            Some(pending) => Ok(pending.complete().await),
            None => Ok(self.snapshot()),
        }
    }

    fn validate(&self, files: &[String], mode: UploadMode) -> Result<(), IntakeError> {
        match mode {
            UploadMode::Single if files.len() > 1 => {
                return Err(IntakeError::TooManyFiles(files.len()));
            }
            UploadMode::Batch if files.len() > self.options.max_batch_files => {
                return Err(IntakeError::BatchTooLarge {
                    count: files.len(),
                    max: self.options.max_batch_files,
                });
            }
            _ => {}
        }

        for name in files {
            if name.trim().is_empty() {
                return Err(IntakeError::EmptyFileName);
            }
            if !self.is_allowed(name) {
                return Err(IntakeError::UnsupportedFileType(name.clone()));
            }
        }

        Ok(())
    }

    fn is_allowed(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.options.allowed_extensions.iter().any(|allowed| *allowed == ext)
            })
            .unwrap_or(false)
    }

    fn lock(&self) -> MutexGuard<'_, IntakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FileIntake {
    fn default() -> Self {
        Self::new(IntakeOptions::default())
    }
}

/// A submission waiting for its delay to elapse
#[derive(Debug)]
pub struct PendingIntake {
    id: Uuid,
    intake: FileIntake,
    files: Vec<String>,
    finished: bool,
}

impl PendingIntake {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Wait out the delay, then record the files and leave the busy state
    pub async fn complete(mut self) -> IntakeSnapshot {
        tokio::time::sleep(self.intake.options.delay).await;

        let mut state = self.intake.lock();
        state.uploaded.extend(std::mem::take(&mut self.files));
        state.busy = false;
        self.finished = true;

        tracing::info!(
            "Intake {} finished, {} file(s) uploaded in total",
            self.id,
            state.uploaded.len()
        );

        IntakeSnapshot {
            busy: state.busy,
            uploaded: state.uploaded.clone(),
        }
    }
}

impl Drop for PendingIntake {
    fn drop(&mut self) {
        if !self.finished {
            self.intake.lock().busy = false;
            tracing::warn!("Intake {} cancelled before completion", self.id);
        }
    }
}
