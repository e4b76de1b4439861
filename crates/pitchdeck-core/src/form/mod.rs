//! Upload form state: selected deck, busy flag, last result or error.
//!
//! Submission is split in two so the request can run off the caller's
//! thread: [`UploadForm::begin_submit`] validates and marks the form busy,
//! [`UploadForm::complete`] applies the outcome. While busy, further
//! submissions are refused, so at most one request is outstanding.

mod error;
mod file;

use crate::analysis::AnalysisResult;
use crate::client::{Analyzer, RequestError};

pub use error::ValidationError;
pub use file::{SelectedFile, ACCEPTED_EXTENSION};

pub const CHOOSE_FILE_LABEL: &str = "Choose a file";
pub const SUBMIT_LABEL: &str = "Analyze Pitch Deck";
pub const BUSY_LABEL: &str = "Analyzing...";

/// Coarse view of the form for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Busy,
    Success,
    Error,
}

/// Why [`UploadForm::begin_submit`] did not start a request.
#[derive(Debug)]
pub enum SubmitRefused {
    /// Nothing selected; the form now shows the validation message.
    Invalid(ValidationError),
    /// A request is already outstanding.
    Busy,
}

/// Handed out by [`UploadForm::begin_submit`] and returned with the outcome.
#[derive(Debug)]
pub struct SubmitTicket {
    generation: u64,
    file: SelectedFile,
}

impl SubmitTicket {
    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct UploadForm {
    file: Option<SelectedFile>,
    busy: bool,
    result: Option<AnalysisResult>,
    error: Option<String>,
    /// Bumped on every submission and reset; completions carrying an older
    /// value are dropped.
    generation: u64,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected deck and clear any displayed error.
    pub fn select_file(&mut self, file: SelectedFile) {
        tracing::debug!("file selected: {}", file.name());
        self.file = Some(file);
        self.error = None;
    }

    /// Validate and mark the form busy. No request is made here.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRefused> {
        if self.busy {
            tracing::debug!("submit ignored: request already in flight");
            return Err(SubmitRefused::Busy);
        }
        let Some(file) = self.file.clone() else {
            let err = ValidationError::NoFileSelected;
            self.error = Some(err.to_string());
            return Err(SubmitRefused::Invalid(err));
        };
        self.generation += 1;
        self.busy = true;
        self.error = None;
        Ok(SubmitTicket {
            generation: self.generation,
            file,
        })
    }

    /// Apply a request outcome. Returns false if the ticket is stale (the
    /// form was reset or resubmitted since) and the outcome was dropped.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<AnalysisResult, RequestError>,
    ) -> bool {
        if !self.busy || ticket.generation != self.generation {
            tracing::debug!(
                "dropping stale completion (ticket {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.busy = false;
        match outcome {
            Ok(result) => {
                tracing::info!(
                    "analysis received for {}: total_score={}",
                    ticket.file.name(),
                    result.total_score
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                tracing::error!(
                    error = ?err,
                    "analysis of {} failed: {}",
                    ticket.file.name(),
                    err
                );
                self.error = Some(err.user_message().to_string());
                self.result = None;
            }
        }
        true
    }

    /// Run one submission to completion on the current thread.
    pub fn submit(&mut self, analyzer: &dyn Analyzer) -> UiState {
        if let Ok(ticket) = self.begin_submit() {
            let outcome = analyzer.analyze(ticket.file());
            self.complete(ticket, outcome);
        }
        self.state()
    }

    /// Drop all state, as a page reload would. Outstanding tickets go stale.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    pub fn state(&self) -> UiState {
        if self.busy {
            UiState::Busy
        } else if self.error.is_some() {
            UiState::Error
        } else if self.result.is_some() {
            UiState::Success
        } else {
            UiState::Idle
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit is offered only with a file selected and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.busy
    }

    pub fn file_label(&self) -> &str {
        self.file.as_ref().map_or(CHOOSE_FILE_LABEL, |f| f.name())
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
