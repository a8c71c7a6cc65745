use std::collections::BTreeMap;

use rostrum_chunking::CitedMoment;

/// A rubric score as authored by the model: numeric on the 1-5 scale, or a
/// marker like `"NA"` for rubrics that don't apply to the speech role.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RubricScore {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RubricScores {
    pub scores: BTreeMap<String, RubricScore>,
    pub justifications: BTreeMap<String, String>,
    pub average_score: f64,
    pub total_scored_rubrics: u32,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StrategicOverview {
    pub hook_and_signposting: String,
    pub strategic_assessment: String,
    pub missing_arguments: String,
}

/// The complete JSON shape the model must return. A response that fails to
/// parse into this (missing field, wrong type, not JSON at all) fails the
/// pass; there is no degraded result.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ModelFeedback {
    pub rubric_scores: RubricScores,
    pub strategic_overview: StrategicOverview,
    pub playable_moments: Vec<CitedMoment>,
}
