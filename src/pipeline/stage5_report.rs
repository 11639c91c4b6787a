use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::catalog::Catalog;
use crate::input::Silhouette;
use crate::model::outfit::Outfit;
use crate::model::scores::{CompletedScores, RatingSet};
use crate::pipeline::stage2_complete::CompletionStrategy;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{CategoryScore, LibraryNote, RecommendationSummary, ReportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    Text,
    Json,
    Both,
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub catalog: &'a Catalog,
    pub genre_ratings: &'a RatingSet,
    pub color_ratings: &'a RatingSet,
    pub genres: &'a CompletedScores,
    pub colors: &'a CompletedScores,
    pub top_genres: &'a [usize],
    pub top_colors: &'a [usize],
    pub outfits: &'a [Outfit],
    pub silhouette: Silhouette,
    pub wear_outer: bool,
    pub completion: CompletionStrategy,
    pub seed: u64,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn build_summary(input: &Stage5Input<'_>) -> RecommendationSummary {
    let genre_scores = category_scores(input.genres, &input.catalog.genre_names());
    let color_scores = category_scores(input.colors, &input.catalog.color_names());

    RecommendationSummary {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        seed: input.seed,
        completion: input.completion,
        silhouette: input.silhouette,
        wear_outer: input.wear_outer,
        genre_scores,
        color_scores,
        genre_coverage: input.genre_ratings.coverage(),
        color_coverage: input.color_ratings.coverage(),
        top_genres: input
            .top_genres
            .iter()
            .map(|&i| input.catalog.genres[i].name.to_string())
            .collect(),
        top_colors: input
            .top_colors
            .iter()
            .map(|&i| input.catalog.colors[i].name.to_string())
            .collect(),
        library: input
            .catalog
            .audits
            .iter()
            .map(|a| LibraryNote {
                genre: a.genre_id.clone(),
                items: a.items_defined,
                overlaid: a.overlaid,
            })
            .collect(),
        outfits: input.outfits.to_vec(),
    }
}

pub fn write_reports(
    input: &Stage5Input<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<(), ReportError> {
    let summary = build_summary(input);

    std::fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    if matches!(mode, ReportMode::Text | ReportMode::Both) {
        let path = out_dir.join("report.txt");
        std::fs::write(&path, render_report_text(&summary))
            .map_err(|source| ReportError::Io { path: path.clone(), source })?;
        info!(path = %path.display(), "wrote text report");
    }

    if matches!(mode, ReportMode::Json | ReportMode::Both) {
        let path = out_dir.join("outfits.json");
        std::fs::write(&path, render_summary_json(&summary)?)
            .map_err(|source| ReportError::Io { path: path.clone(), source })?;
        info!(path = %path.display(), "wrote JSON report");
    }

    Ok(())
}

fn category_scores(completed: &CompletedScores, names: &[&'static str]) -> Vec<CategoryScore> {
    completed
        .scores
        .iter()
        .zip(&completed.sources)
        .zip(names)
        .map(|((&score, &source), &name)| CategoryScore {
            name: name.to_string(),
            score,
            source,
        })
        .collect()
}
