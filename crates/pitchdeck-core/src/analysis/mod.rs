//! Analysis Result returned by the remote analysis service.
//!
//! The JSON body is decoded into [`AnalysisResult`] and then checked with
//! [`AnalysisResult::validate`]; the server's shape is never trusted blindly.

mod schema;
mod score_map;

use serde::{Deserialize, Serialize};

pub use schema::SchemaError;
pub use score_map::ScoreMap;

/// Upper bound of `total_score`.
pub const TOTAL_SCORE_MAX: f64 = 10.0;
/// Upper bound of a single criterion score.
pub const CRITERION_SCORE_MAX: f64 = 1.0;

/// Score and rationale for one evaluation criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    /// In `[0, 1]`.
    pub score: f64,
    pub rationale: String,
}

/// Structured evaluation of one pitch deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub geography: String,
    pub industry: String,
    pub stage: String,
    /// In `[0, 10]`.
    pub total_score: f64,
    pub team_score: ScoreMap,
    pub business_model_score: ScoreMap,
    pub traction_score: ScoreMap,
}

/// The three score categories, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Team,
    BusinessModel,
    Traction,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Team, Category::BusinessModel, Category::Traction];

    /// JSON field name of the category's score map.
    pub fn field(self) -> &'static str {
        match self {
            Category::Team => "team_score",
            Category::BusinessModel => "business_model_score",
            Category::Traction => "traction_score",
        }
    }

    /// Card title shown above the category's entries.
    pub fn title(self) -> &'static str {
        match self {
            Category::Team => "Team Assessment",
            Category::BusinessModel => "Business Model Assessment",
            Category::Traction => "Traction Assessment",
        }
    }
}

impl AnalysisResult {
    /// Decode a response body and enforce the schema.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, crate::client::RequestError> {
        let result: AnalysisResult = serde_json::from_slice(body)?;
        result.validate()?;
        Ok(result)
    }

    pub fn scores(&self, category: Category) -> &ScoreMap {
        match category {
            Category::Team => &self.team_score,
            Category::BusinessModel => &self.business_model_score,
            Category::Traction => &self.traction_score,
        }
    }
}
