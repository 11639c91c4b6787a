use std::path::PathBuf;

pub mod profile;

pub use profile::{load_profile, Profile, Silhouette};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("IO error reading profile {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("profile parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown genre {0:?} in profile")]
    UnknownGenre(String),
    #[error("unknown color {0:?} in profile")]
    UnknownColor(String),
    #[error("rating for {name:?} is {value}, expected 0..=5")]
    RatingOutOfRange { name: String, value: i64 },
}
