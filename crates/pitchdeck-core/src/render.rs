//! Projection of an [`AnalysisResult`] into display cards.
//!
//! Pure: no I/O, no mutation. The CLI decides how to draw the view.

use crate::analysis::{AnalysisResult, Category, ScoreMap, CRITERION_SCORE_MAX, TOTAL_SCORE_MAX};

pub const EVALUATION_HEADING: &str = "Evaluation";
pub const TOTAL_SCORE_LABEL: &str = "Total Score";
pub const BRAND_HEADING: &str = "Contrarian Ventures";
pub const TAGLINE: &str = "Pitch Deck Analyzer. Upload your pitch deck for analysis.";

/// One labelled attribute (geography, industry, stage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub label: &'static str,
    pub value: String,
}

/// One criterion inside a category card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// Criterion name with underscores replaced by spaces.
    pub label: String,
    /// e.g. `0.8 / 1.0`.
    pub score: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: &'static str,
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationView {
    pub heading: &'static str,
    pub summary: String,
    pub tiles: [Tile; 3],
    /// e.g. `8.0 / 10.0`.
    pub total: String,
    pub sections: Vec<SectionView>,
}

/// Human-readable criterion label: `market_fit` -> `market fit`.
pub fn criterion_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Total score with exactly one decimal place: `7` -> `7.0`, `7.96` -> `8.0`.
///
/// Exact ties round away from zero (`7.25` -> `7.3`). `{:.1}` alone would
/// round them to even.
pub fn format_total_score(total: f64) -> String {
    // A binary f64 sits exactly halfway between two tenths only when it is
    // an odd multiple of 0.25, i.e. `x * 4` (an exact product) is odd.
    let quarters = total.abs() * 4.0;
    let is_tie = quarters.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 == 1.0;
    if !is_tie {
        return format!("{:.1}", total);
    }
    let tenths = (total.abs() * 10.0 + 0.5).floor();
    let sign = if total.is_sign_negative() { "-" } else { "" };
    format!("{}{:.1}", sign, tenths / 10.0)
}

/// Criterion score in its shortest form against the 1.0 scale.
///
/// Uses Rust's float `Display`, which never switches to exponent notation:
/// `1e-7` prints as `0.0000001`.
pub fn format_criterion_score(score: f64) -> String {
    format!("{} / {:.1}", score, CRITERION_SCORE_MAX)
}

fn project_section(title: &'static str, scores: &ScoreMap) -> SectionView {
    SectionView {
        title,
        entries: scores
            .iter()
            .map(|(key, detail)| EntryView {
                label: criterion_label(key),
                score: format_criterion_score(detail.score),
                rationale: detail.rationale.clone(),
            })
            .collect(),
    }
}

/// Build the full evaluation view.
pub fn project(result: &AnalysisResult) -> EvaluationView {
    EvaluationView {
        heading: EVALUATION_HEADING,
        summary: result.summary.clone(),
        tiles: [
            Tile {
                label: "Geography",
                value: result.geography.clone(),
            },
            Tile {
                label: "Industry",
                value: result.industry.clone(),
            },
            Tile {
                label: "Stage",
                value: result.stage.clone(),
            },
        ],
        total: format!(
            "{} / {:.1}",
            format_total_score(result.total_score),
            TOTAL_SCORE_MAX
        ),
        sections: Category::ALL
            .iter()
            .map(|&c| project_section(c.title(), result.scores(c)))
            .collect(),
    }
}
