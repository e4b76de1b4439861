//! Range checks applied after decoding.

use thiserror::Error;

use super::{AnalysisResult, Category, CRITERION_SCORE_MAX, TOTAL_SCORE_MAX};

/// A decoded result whose numbers fall outside the contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("{field} is not a finite number")]
    NotFinite { field: String },
    #[error("{field} = {value} is outside [0, {max}]")]
    OutOfRange { field: String, value: f64, max: f64 },
}

fn check(field: impl FnOnce() -> String, value: f64, max: f64) -> Result<(), SchemaError> {
    if !value.is_finite() {
        return Err(SchemaError::NotFinite { field: field() });
    }
    if !(0.0..=max).contains(&value) {
        return Err(SchemaError::OutOfRange {
            field: field(),
            value,
            max,
        });
    }
    Ok(())
}

impl AnalysisResult {
    /// Check `total_score` and every criterion score against their ranges.
    pub fn validate(&self) -> Result<(), SchemaError> {
        check(|| "total_score".to_string(), self.total_score, TOTAL_SCORE_MAX)?;
        for category in Category::ALL {
            for (criterion, detail) in self.scores(category).iter() {
                check(
                    || format!("{}.{}.score", category.field(), criterion),
                    detail.score,
                    CRITERION_SCORE_MAX,
                )?;
            }
        }
        Ok(())
    }
}
