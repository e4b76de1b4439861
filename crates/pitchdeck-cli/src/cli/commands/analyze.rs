//! `pitchdeck analyze [path]` – upload a deck and show the evaluation.

use anyhow::{Context, Result};
use pitchdeck_core::analysis::AnalysisResult;
use pitchdeck_core::client::{Analyzer, HttpAnalyzer, RequestError};
use pitchdeck_core::config::PitchdeckConfig;
use pitchdeck_core::form::{SelectedFile, SubmitRefused, UiState, UploadForm};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::output;

#[derive(Debug, Default)]
pub struct AnalyzeOptions {
    pub json: bool,
    pub save: Option<PathBuf>,
}

pub async fn run_analyze(
    cfg: &PitchdeckConfig,
    path: Option<&Path>,
    opts: &AnalyzeOptions,
) -> Result<()> {
    let analyzer: Arc<dyn Analyzer> = Arc::new(HttpAnalyzer::from_config(cfg)?);
    let mut form = UploadForm::new();
    if let Some(path) = path {
        form.select_file(SelectedFile::from_path(path)?);
    }

    tracing::debug!(
        "form: file={} submit_enabled={}",
        form.file_label(),
        form.can_submit()
    );
    submit(&mut form, analyzer).await;

    match form.state() {
        UiState::Success => {
            let result = form.result().context("success without result")?;
            if let Some(save) = &opts.save {
                save_result(save, result)?;
            }
            output::print_result(result, opts.json)
        }
        _ => anyhow::bail!(
            "{}",
            form.error()
                .unwrap_or(pitchdeck_core::client::GENERIC_FAILURE_MESSAGE)
        ),
    }
}

/// One submission: the blocking upload runs on the blocking pool while the
/// form stays busy.
async fn submit(form: &mut UploadForm, analyzer: Arc<dyn Analyzer>) {
    let ticket = match form.begin_submit() {
        Ok(ticket) => ticket,
        Err(SubmitRefused::Invalid(err)) => {
            tracing::info!("submit refused: {}", err);
            return;
        }
        Err(SubmitRefused::Busy) => return,
    };
    output::print_status(form.button_label(), form.file_label());

    let file = ticket.file().clone();
    let outcome = tokio::task::spawn_blocking(move || analyzer.analyze(&file))
        .await
        .unwrap_or_else(|e| Err(RequestError::Interrupted(e.to_string())));
    form.complete(ticket, outcome);
}

fn save_result(path: &Path, result: &AnalysisResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("saved analysis to {}", path.display());
    Ok(())
}
