use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::catalog::defs::{builtin_colors, builtin_genres};
use crate::catalog::{Catalog, CatalogError, Color, Genre, LibraryAudit, SlotItems};

/// Optional user-supplied library file. Each entry replaces the item
/// lists it names; omitted slots keep the builtin items.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryOverlay {
    #[serde(flatten)]
    pub genres: BTreeMap<String, OverlayEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverlayEntry {
    pub inner: Option<Vec<String>>,
    pub outer: Option<Vec<String>>,
    pub bottom: Option<Vec<String>>,
    pub skirt: Option<Vec<String>>,
}

pub fn load_catalog(custom_library: Option<&Path>) -> Result<Catalog, CatalogError> {
    let mut catalog = builtin_catalog();

    if let Some(path) = custom_library {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overlay: LibraryOverlay = serde_json::from_str(&content)?;
        apply_overlay(&mut catalog, &overlay)?;
        info!(
            library = %path.display(),
            genres = overlay.genres.len(),
            "applied custom outfit library"
        );
    }

    catalog.audits = audit_library(&catalog);
    Ok(catalog)
}

fn builtin_catalog() -> Catalog {
    let defs = builtin_genres();
    let genres = defs
        .iter()
        .map(|def| Genre {
            id: def.id,
            name: def.name,
            items: SlotItems {
                inner: owned(def.inner),
                outer: owned(def.outer),
                bottom: owned(def.bottom),
                skirt: owned(def.skirt),
            },
            similar: resolve_similar(def.similar, |id| defs.iter().position(|g| g.id == id)),
        })
        .collect();

    let color_defs = builtin_colors();
    let colors = color_defs
        .iter()
        .map(|def| Color {
            name: def.name,
            rgb: def.rgb,
            similar: resolve_similar(def.similar, |name| {
                color_defs.iter().position(|c| c.name == name)
            }),
        })
        .collect();

    Catalog {
        genres,
        colors,
        audits: Vec::new(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resolve_similar(
    table: &[(&str, f32)],
    lookup: impl Fn(&str) -> Option<usize>,
) -> Vec<(usize, f32)> {
    // Unresolved names are dropped; the builtin tables are test-checked.
    table
        .iter()
        .filter_map(|&(name, w)| lookup(name).map(|idx| (idx, w)))
        .collect()
}

fn apply_overlay(catalog: &mut Catalog, overlay: &LibraryOverlay) -> Result<(), CatalogError> {
    for (name, entry) in &overlay.genres {
        let idx = catalog
            .genre_index(name)
            .ok_or_else(|| CatalogError::UnknownGenre(name.clone()))?;
        let genre = &mut catalog.genres[idx];

        if let Some(items) = &entry.inner {
            genre.items.inner = items.clone();
        }
        if let Some(items) = &entry.outer {
            genre.items.outer = items.clone();
        }
        if let Some(items) = &entry.bottom {
            genre.items.bottom = items.clone();
        }
        if let Some(items) = &entry.skirt {
            genre.items.skirt = items.clone();
        }

        if let Some(slot) = genre.items.empty_slot() {
            return Err(CatalogError::EmptySlot {
                genre: genre.id.to_string(),
                slot: slot.label(),
            });
        }
    }
    Ok(())
}

fn audit_library(catalog: &Catalog) -> Vec<LibraryAudit> {
    let builtin = builtin_genres();
    catalog
        .genres
        .iter()
        .map(|genre| LibraryAudit {
            genre_id: genre.id.to_string(),
            items_defined: genre.items.total_items(),
            overlaid: !matches_builtin(genre, builtin),
        })
        .collect()
}

fn matches_builtin(genre: &Genre, builtin: &[crate::catalog::defs::GenreDef]) -> bool {
    let Some(def) = builtin.iter().find(|d| d.id == genre.id) else {
        return false;
    };
    genre.items.inner == owned(def.inner)
        && genre.items.outer == owned(def.outer)
        && genre.items.bottom == owned(def.bottom)
        && genre.items.skirt == owned(def.skirt)
}
