use std::path::PathBuf;

pub mod defs;
pub mod loader;

use crate::model::palette::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarmentSlot {
    Inner,
    Outer,
    Bottom,
    Skirt,
}

impl GarmentSlot {
    pub fn label(self) -> &'static str {
        match self {
            GarmentSlot::Inner => "inner",
            GarmentSlot::Outer => "outer",
            GarmentSlot::Bottom => "bottom",
            GarmentSlot::Skirt => "skirt",
        }
    }
}

/// Item lists per garment slot for one genre.
#[derive(Debug, Clone)]
pub struct SlotItems {
    pub inner: Vec<String>,
    pub outer: Vec<String>,
    pub bottom: Vec<String>,
    pub skirt: Vec<String>,
}

impl SlotItems {
    pub fn for_slot(&self, slot: GarmentSlot) -> &[String] {
        match slot {
            GarmentSlot::Inner => &self.inner,
            GarmentSlot::Outer => &self.outer,
            GarmentSlot::Bottom => &self.bottom,
            GarmentSlot::Skirt => &self.skirt,
        }
    }

    pub fn total_items(&self) -> usize {
        self.inner.len() + self.outer.len() + self.bottom.len() + self.skirt.len()
    }

    fn empty_slot(&self) -> Option<GarmentSlot> {
        for slot in [
            GarmentSlot::Inner,
            GarmentSlot::Outer,
            GarmentSlot::Bottom,
            GarmentSlot::Skirt,
        ] {
            if self.for_slot(slot).is_empty() {
                return Some(slot);
            }
        }
        None
    }
}

/// Resolved genre: similarity targets are indices into the catalog's
/// genre vector.
#[derive(Debug, Clone)]
pub struct Genre {
    pub id: &'static str,
    pub name: &'static str,
    pub items: SlotItems,
    pub similar: Vec<(usize, f32)>,
}

#[derive(Debug, Clone)]
pub struct Color {
    pub name: &'static str,
    pub rgb: Rgb,
    pub similar: Vec<(usize, f32)>,
}

/// Which genres were overlaid by a custom library file, and how many
/// items they ended up with.
#[derive(Debug, Clone)]
pub struct LibraryAudit {
    pub genre_id: String,
    pub items_defined: usize,
    pub overlaid: bool,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub genres: Vec<Genre>,
    pub colors: Vec<Color>,
    pub audits: Vec<LibraryAudit>,
}

impl Catalog {
    pub fn genre_index(&self, name: &str) -> Option<usize> {
        let lower = name.to_ascii_lowercase();
        self.genres.iter().position(|g| g.id == lower)
    }

    pub fn color_index(&self, name: &str) -> Option<usize> {
        self.colors
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn genre_names(&self) -> Vec<&'static str> {
        self.genres.iter().map(|g| g.name).collect()
    }

    pub fn color_names(&self) -> Vec<&'static str> {
        self.colors.iter().map(|c| c.name).collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading library {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("library parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("library overlay names unknown genre {0:?}")]
    UnknownGenre(String),
    #[error("genre {genre:?} has no {slot} items after overlay")]
    EmptySlot { genre: String, slot: &'static str },
}
