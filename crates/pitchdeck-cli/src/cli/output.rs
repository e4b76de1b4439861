//! Terminal rendering of the evaluation cards.

use anyhow::Result;
use colored::Colorize;
use pitchdeck_core::analysis::AnalysisResult;
use pitchdeck_core::render::{
    self, EvaluationView, SectionView, BRAND_HEADING, TAGLINE, TOTAL_SCORE_LABEL,
};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Banner plus progress line while the request is in flight (goes to stderr).
pub fn print_status(button_label: &str, file_label: &str) {
    eprintln!("{}", BRAND_HEADING.bright_magenta().bold());
    eprintln!("{}", TAGLINE);
    eprintln!("{} {}", button_label.bright_magenta(), file_label);
}

/// Print a result as cards or as pretty JSON.
pub fn print_result(result: &AnalysisResult, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, json)?;
    out.flush()?;
    Ok(())
}

/// Write a result as cards or as pretty JSON.
pub fn write_result<W: Write>(w: &mut W, result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *w, result)?;
        writeln!(w)?;
    } else {
        write_evaluation(w, &render::project(result))?;
    }
    Ok(())
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn write_section<W: Write>(w: &mut W, section: &SectionView) -> io::Result<()> {
    writeln!(w, "{}", rule().blue())?;
    writeln!(w, "{}", section.title.bright_white().bold())?;
    for entry in &section.entries {
        let pad = RULE_WIDTH.saturating_sub(entry.label.chars().count() + entry.score.len());
        writeln!(
            w,
            "  {}{}{}",
            entry.label.bright_black(),
            " ".repeat(pad.saturating_sub(2).max(1)),
            entry.score.white().bold()
        )?;
        writeln!(w, "    {}", entry.rationale)?;
    }
    writeln!(w)
}

/// Write the full evaluation layout.
pub fn write_evaluation<W: Write>(w: &mut W, view: &EvaluationView) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", view.heading.bright_magenta().bold())?;
    writeln!(w, "{}", view.summary)?;
    writeln!(w)?;
    for tile in &view.tiles {
        writeln!(w, "  {:<10} {}", tile.label.bold(), tile.value.white().bold())?;
    }
    writeln!(w)?;
    writeln!(w, "{}", TOTAL_SCORE_LABEL.bright_black())?;
    writeln!(w, "  {}", view.total.magenta().bold())?;
    writeln!(w)?;
    for section in &view.sections {
        write_section(w, section)?;
    }
    Ok(())
}
