use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::input::ProfileError;

/// Body silhouette option. Flared enables the skirt slot during
/// assembly (with probability 0.5 per outfit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Silhouette {
    Straight,
    Flared,
}

impl Default for Silhouette {
    fn default() -> Self {
        Silhouette::Straight
    }
}

/// Validated preference profile. Ratings are keyed by catalog index.
#[derive(Debug, Clone)]
pub struct Profile {
    pub silhouette: Silhouette,
    pub wear_outer: bool,
    pub genre_ratings: BTreeMap<usize, u8>,
    pub color_ratings: BTreeMap<usize, u8>,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    options: OptionsSection,
    #[serde(default)]
    genres: BTreeMap<String, i64>,
    #[serde(default)]
    colors: BTreeMap<String, i64>,
}

#[derive(Debug, Deserialize)]
struct OptionsSection {
    #[serde(default)]
    silhouette: Silhouette,
    #[serde(default = "default_wear_outer")]
    wear_outer: bool,
}

impl Default for OptionsSection {
    fn default() -> Self {
        Self {
            silhouette: Silhouette::default(),
            wear_outer: default_wear_outer(),
        }
    }
}

fn default_wear_outer() -> bool {
    true
}

pub fn load_profile(path: &Path, catalog: &Catalog) -> Result<Profile, ProfileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = parse_profile(&content, catalog)?;
    info!(
        profile = %path.display(),
        genres_rated = profile.genre_ratings.len(),
        colors_rated = profile.color_ratings.len(),
        "loaded preference profile"
    );
    Ok(profile)
}

pub fn parse_profile(content: &str, catalog: &Catalog) -> Result<Profile, ProfileError> {
    let file: ProfileFile = toml::from_str(content)?;

    let mut genre_ratings = BTreeMap::new();
    for (name, value) in &file.genres {
        let idx = catalog
            .genre_index(name)
            .ok_or_else(|| ProfileError::UnknownGenre(name.clone()))?;
        genre_ratings.insert(idx, check_rating(name, *value)?);
    }

    let mut color_ratings = BTreeMap::new();
    for (name, value) in &file.colors {
        let idx = catalog
            .color_index(name)
            .ok_or_else(|| ProfileError::UnknownColor(name.clone()))?;
        color_ratings.insert(idx, check_rating(name, *value)?);
    }

    Ok(Profile {
        silhouette: file.options.silhouette,
        wear_outer: file.options.wear_outer,
        genre_ratings,
        color_ratings,
    })
}

fn check_rating(name: &str, value: i64) -> Result<u8, ProfileError> {
    if !(0..=5).contains(&value) {
        return Err(ProfileError::RatingOutOfRange {
            name: name.to_string(),
            value,
        });
    }
    Ok(value as u8)
}
