use std::path::PathBuf;

use serde::Serialize;

use crate::input::Silhouette;
use crate::model::outfit::Outfit;
use crate::model::scores::ScoreSource;
use crate::pipeline::stage2_complete::CompletionStrategy;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: f32,
    pub source: ScoreSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryNote {
    pub genre: String,
    pub items: usize,
    pub overlaid: bool,
}

/// Everything the text and JSON renderers need.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub seed: u64,
    pub completion: CompletionStrategy,
    pub silhouette: Silhouette,
    pub wear_outer: bool,

    pub genre_scores: Vec<CategoryScore>,
    pub color_scores: Vec<CategoryScore>,
    pub genre_coverage: f32,
    pub color_coverage: f32,

    pub top_genres: Vec<String>,
    pub top_colors: Vec<String>,

    pub library: Vec<LibraryNote>,
    pub outfits: Vec<Outfit>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn format_f32_2(v: f32) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_f32_2() {
        assert_eq!(format_f32_2(0.8333), "0.83");
        assert_eq!(format_f32_2(5.0), "5.00");
    }
}
