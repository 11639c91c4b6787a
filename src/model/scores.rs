use serde::Serialize;

/// Raw ratings aligned with catalog order. A score of zero means the
/// category was not rated.
#[derive(Debug, Clone)]
pub struct RatingSet {
    pub scores: Vec<f32>,
    pub rated: Vec<bool>,
}

impl RatingSet {
    pub fn from_scores(scores: Vec<f32>) -> Self {
        let rated = scores.iter().map(|&v| v > 0.0).collect();
        Self { scores, rated }
    }

    pub fn rated_count(&self) -> usize {
        self.rated.iter().filter(|&&r| r).count()
    }

    /// Fraction of categories the user actually rated.
    pub fn coverage(&self) -> f32 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.rated_count() as f32 / self.scores.len() as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Given,
    Imputed,
}

/// Scores after completion, with provenance per category.
#[derive(Debug, Clone)]
pub struct CompletedScores {
    pub scores: Vec<f32>,
    pub sources: Vec<ScoreSource>,
}

pub fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}
