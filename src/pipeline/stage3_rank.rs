use tracing::info;

use crate::catalog::Catalog;
use crate::model::scores::CompletedScores;

#[derive(Debug)]
pub struct Stage3Output {
    pub top_genres: Vec<usize>,
    pub top_colors: Vec<usize>,
}

/// Rank categories by completed score, descending. Ties keep catalog
/// order (stable sort), so a fully unrated profile yields the catalog
/// head rather than an arbitrary permutation.
pub fn run_stage3(
    genres: &CompletedScores,
    colors: &CompletedScores,
    catalog: &Catalog,
    top_n: usize,
) -> Stage3Output {
    let top_genres = top_n_indices(&genres.scores, top_n);
    let top_colors = top_n_indices(&colors.scores, top_n);

    info!(
        top_genres = ?top_genres
            .iter()
            .map(|&i| catalog.genres[i].name)
            .collect::<Vec<_>>(),
        top_colors = ?top_colors
            .iter()
            .map(|&i| catalog.colors[i].name)
            .collect::<Vec<_>>(),
        "ranked preferences"
    );

    Stage3Output {
        top_genres,
        top_colors,
    }
}

fn top_n_indices(scores: &[f32], n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices.truncate(n);
    indices
}
