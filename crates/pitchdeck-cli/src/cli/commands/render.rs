//! `pitchdeck render <file>` – show a saved analysis.

use anyhow::{Context, Result};
use pitchdeck_core::analysis::AnalysisResult;
use std::fs;
use std::path::Path;

use crate::cli::output;

pub fn run_render(path: &Path, json: bool) -> Result<()> {
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let result = AnalysisResult::from_json_slice(&data)
        .with_context(|| format!("{} is not a valid analysis", path.display()))?;
    output::print_result(&result, json)
}
