use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::model::scores::{round2, CompletedScores, RatingSet, ScoreSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStrategy {
    /// Fill every unrated category with the mean over all categories
    /// (zeros included), rounded to two decimals.
    Flat,
    /// Fill each unrated category with the similarity-weighted mean of
    /// its rated neighbors; 0.0 when no neighbor is rated.
    Similarity,
}

#[derive(Debug)]
pub struct Stage2Output {
    pub genres: CompletedScores,
    pub colors: CompletedScores,
}

pub fn run_stage2(
    genre_ratings: &RatingSet,
    color_ratings: &RatingSet,
    catalog: &Catalog,
    strategy: CompletionStrategy,
) -> Stage2Output {
    let out = match strategy {
        CompletionStrategy::Flat => Stage2Output {
            genres: complete_flat(genre_ratings),
            colors: complete_flat(color_ratings),
        },
        CompletionStrategy::Similarity => {
            let genre_neighbors: Vec<&[(usize, f32)]> = catalog
                .genres
                .iter()
                .map(|g| g.similar.as_slice())
                .collect();
            let color_neighbors: Vec<&[(usize, f32)]> = catalog
                .colors
                .iter()
                .map(|c| c.similar.as_slice())
                .collect();
            Stage2Output {
                genres: complete_similarity(genre_ratings, &genre_neighbors),
                colors: complete_similarity(color_ratings, &color_neighbors),
            }
        }
    };

    debug!(
        imputed_genres = count_imputed(&out.genres),
        imputed_colors = count_imputed(&out.colors),
        "score completion done"
    );
    out
}

fn count_imputed(scores: &CompletedScores) -> usize {
    scores
        .sources
        .iter()
        .filter(|&&s| s == ScoreSource::Imputed)
        .count()
}

fn complete_flat(ratings: &RatingSet) -> CompletedScores {
    let n = ratings.scores.len();
    let avg = if n == 0 {
        0.0
    } else {
        round2(ratings.scores.iter().sum::<f32>() / n as f32)
    };

    let mut scores = Vec::with_capacity(n);
    let mut sources = Vec::with_capacity(n);
    for i in 0..n {
        if ratings.rated[i] {
            scores.push(ratings.scores[i]);
            sources.push(ScoreSource::Given);
        } else {
            scores.push(avg);
            sources.push(ScoreSource::Imputed);
        }
    }
    CompletedScores { scores, sources }
}

fn complete_similarity(ratings: &RatingSet, neighbors: &[&[(usize, f32)]]) -> CompletedScores {
    let n = ratings.scores.len();
    let mut scores = Vec::with_capacity(n);
    let mut sources = Vec::with_capacity(n);

    for i in 0..n {
        if ratings.rated[i] {
            scores.push(ratings.scores[i]);
            sources.push(ScoreSource::Given);
            continue;
        }

        let mut weighted_sum = 0.0f32;
        let mut weight_total = 0.0f32;
        for &(j, w) in neighbors[i] {
            if j < n && ratings.rated[j] {
                weighted_sum += w * ratings.scores[j];
                weight_total += w;
            }
        }

        // Zero-denominator guard: nothing similar was rated.
        let imputed = if weight_total > 0.0 {
            round2(weighted_sum / weight_total)
        } else {
            0.0
        };
        scores.push(imputed);
        sources.push(ScoreSource::Imputed);
    }

    CompletedScores { scores, sources }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_average_includes_zeros() {
        // One rating of 5 across six categories: avg = 5/6 = 0.83.
        let ratings = RatingSet::from_scores(vec![5.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let out = complete_flat(&ratings);
        assert_eq!(out.scores[0], 5.0);
        assert_eq!(out.sources[0], ScoreSource::Given);
        for i in 1..6 {
            assert_eq!(out.scores[i], 0.83);
            assert_eq!(out.sources[i], ScoreSource::Imputed);
        }
    }

    #[test]
    fn test_flat_all_zero_profile() {
        let ratings = RatingSet::from_scores(vec![0.0, 0.0, 0.0]);
        let out = complete_flat(&ratings);
        assert!(out.scores.iter().all(|&v| v == 0.0));
        assert!(out.sources.iter().all(|&s| s == ScoreSource::Imputed));
    }

    #[test]
    fn test_similarity_weighted_mean() {
        // Category 2 unrated, neighbors 0 (w=0.6) and 1 (w=0.2):
        // (0.6*5 + 0.2*1) / 0.8 = 4.0.
        let ratings = RatingSet::from_scores(vec![5.0, 1.0, 0.0]);
        let neighbors: Vec<&[(usize, f32)]> = vec![&[], &[], &[(0, 0.6), (1, 0.2)]];
        let out = complete_similarity(&ratings, &neighbors);
        assert_eq!(out.scores[2], 4.0);
        assert_eq!(out.sources[2], ScoreSource::Imputed);
    }

    #[test]
    fn test_similarity_ignores_unrated_neighbors() {
        let ratings = RatingSet::from_scores(vec![4.0, 0.0, 0.0]);
        let neighbors: Vec<&[(usize, f32)]> = vec![&[], &[(0, 0.5), (2, 0.9)], &[]];
        let out = complete_similarity(&ratings, &neighbors);
        // Only the rated neighbor contributes: 0.5*4 / 0.5 = 4.0.
        assert_eq!(out.scores[1], 4.0);
    }

    #[test]
    fn test_similarity_fallback_zero() {
        let ratings = RatingSet::from_scores(vec![0.0, 3.0]);
        let neighbors: Vec<&[(usize, f32)]> = vec![&[], &[]];
        let out = complete_similarity(&ratings, &neighbors);
        assert_eq!(out.scores[0], 0.0);
        assert_eq!(out.scores[1], 3.0);
    }

    #[test]
    fn test_given_scores_never_touched() {
        let ratings = RatingSet::from_scores(vec![2.0, 5.0, 0.0]);
        let neighbors: Vec<&[(usize, f32)]> = vec![&[(1, 1.0)], &[(0, 1.0)], &[(0, 1.0)]];
        let out = complete_similarity(&ratings, &neighbors);
        assert_eq!(out.scores[0], 2.0);
        assert_eq!(out.scores[1], 5.0);
        assert_eq!(out.sources[0], ScoreSource::Given);
    }
}
