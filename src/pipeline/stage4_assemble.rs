use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::catalog::{Catalog, GarmentSlot};
use crate::input::Silhouette;
use crate::model::outfit::{BottomKind, Outfit};
use crate::model::palette::scheme_for;

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub catalog: &'a Catalog,
    pub top_genres: &'a [usize],
    pub top_colors: &'a [usize],
    pub silhouette: Silhouette,
    pub wear_outer: bool,
}

/// Assemble one outfit per top genre. Colors are drawn from the top
/// colors, preferring ones no earlier outfit used; item picks come from
/// the genre's slot lists. All randomness flows through `rng`.
pub fn run_stage4(inputs: &Stage4Inputs<'_>, rng: &mut StdRng) -> Vec<Outfit> {
    let mut outfits = Vec::with_capacity(inputs.top_genres.len());
    let mut used_colors: Vec<usize> = Vec::new();

    for &genre_idx in inputs.top_genres {
        if inputs.top_colors.is_empty() {
            break;
        }
        let color_idx = pick_color(inputs.top_colors, &used_colors, rng);
        used_colors.push(color_idx);

        outfits.push(assemble_outfit(inputs, genre_idx, color_idx, rng));
    }

    info!(outfits = outfits.len(), "assembled recommendations");
    outfits
}

fn pick_color(top_colors: &[usize], used: &[usize], rng: &mut StdRng) -> usize {
    let fresh: Vec<usize> = top_colors
        .iter()
        .copied()
        .filter(|c| !used.contains(c))
        .collect();
    let pool = if fresh.is_empty() {
        top_colors
    } else {
        fresh.as_slice()
    };
    pool[rng.gen_range(0..pool.len())]
}

fn assemble_outfit(
    inputs: &Stage4Inputs<'_>,
    genre_idx: usize,
    color_idx: usize,
    rng: &mut StdRng,
) -> Outfit {
    let genre = &inputs.catalog.genres[genre_idx];
    let color = &inputs.catalog.colors[color_idx];

    let use_skirt = inputs.silhouette == Silhouette::Flared && rng.gen_bool(0.5);
    let (bottom_slot, bottom_kind) = if use_skirt {
        (GarmentSlot::Skirt, BottomKind::Skirt)
    } else {
        (GarmentSlot::Bottom, BottomKind::Pants)
    };

    let inner = pick_item(genre.items.for_slot(GarmentSlot::Inner), rng);
    let outer = inputs
        .wear_outer
        .then(|| pick_item(genre.items.for_slot(GarmentSlot::Outer), rng));
    let bottom = pick_item(genre.items.for_slot(bottom_slot), rng);

    Outfit {
        genre: genre.name.to_string(),
        color: color.name.to_string(),
        inner: format!("{} {}", color.name, inner),
        outer: outer.map(|item| format!("{} {}", color.name, item)),
        bottom: format!("{} {}", color.name, bottom),
        bottom_kind,
        scheme: scheme_for(color.rgb),
    }
}

fn pick_item<'a>(items: &'a [String], rng: &mut StdRng) -> &'a str {
    // Catalog loading guarantees non-empty slots.
    &items[rng.gen_range(0..items.len())]
}
