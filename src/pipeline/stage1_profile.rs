use tracing::info;

use crate::catalog::Catalog;
use crate::input::Profile;
use crate::model::scores::RatingSet;

#[derive(Debug)]
pub struct Stage1Output {
    pub genre_ratings: RatingSet,
    pub color_ratings: RatingSet,
}

/// Map the sparse profile ratings onto dense vectors in catalog order.
/// Unrated categories land at 0.0 and are excluded from the rated mask.
pub fn run_stage1(profile: &Profile, catalog: &Catalog) -> Stage1Output {
    let genre_ratings = densify(&profile.genre_ratings, catalog.genres.len());
    let color_ratings = densify(&profile.color_ratings, catalog.colors.len());

    info!(
        genre_coverage = genre_ratings.coverage() as f64,
        color_coverage = color_ratings.coverage() as f64,
        "profile mapped onto catalog"
    );

    Stage1Output {
        genre_ratings,
        color_ratings,
    }
}

fn densify(ratings: &std::collections::BTreeMap<usize, u8>, len: usize) -> RatingSet {
    let mut scores = vec![0.0f32; len];
    for (&idx, &value) in ratings {
        if idx < len {
            scores[idx] = value as f32;
        }
    }
    RatingSet::from_scores(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::load_catalog;
    use crate::input::profile::parse_profile;

    #[test]
    fn test_densify_in_catalog_order() {
        let catalog = load_catalog(None).unwrap();
        let profile = parse_profile("[genres]\nMinimal = 4\nFormal = 2\n", &catalog).unwrap();
        let out = run_stage1(&profile, &catalog);

        let minimal = catalog.genre_index("Minimal").unwrap();
        let formal = catalog.genre_index("Formal").unwrap();
        assert_eq!(out.genre_ratings.scores[minimal], 4.0);
        assert_eq!(out.genre_ratings.scores[formal], 2.0);
        assert_eq!(out.genre_ratings.rated_count(), 2);
        assert_eq!(out.color_ratings.rated_count(), 0);
        assert_eq!(out.color_ratings.scores.len(), catalog.colors.len());
    }

    #[test]
    fn test_explicit_zero_is_unrated() {
        let catalog = load_catalog(None).unwrap();
        let profile = parse_profile("[genres]\nCasual = 0\n", &catalog).unwrap();
        let out = run_stage1(&profile, &catalog);
        assert_eq!(out.genre_ratings.rated_count(), 0);
    }
}
