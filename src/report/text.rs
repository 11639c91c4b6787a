use crate::input::Silhouette;
use crate::model::scores::ScoreSource;
use crate::report::{format_f32_2, CategoryScore, RecommendationSummary};

pub fn render_report_text(summary: &RecommendationSummary) -> String {
    let mut out = String::new();

    out.push_str("Outfit Recommendation Report\n");
    out.push_str("============================\n\n");

    out.push_str("1. Profile\n");
    out.push_str(&format!(
        "Silhouette: {}\n",
        match summary.silhouette {
            Silhouette::Straight => "straight",
            Silhouette::Flared => "flared",
        }
    ));
    out.push_str(&format!("Wear outer: {}\n", summary.wear_outer));
    out.push_str(&format!("Completion strategy: {:?}\n", summary.completion));
    out.push_str(&format!("Seed: {}\n\n", summary.seed));

    out.push_str("2. Preference scores\n");
    out.push_str(&format!(
        "Genres (rated {} of {}):\n",
        rated_count(&summary.genre_scores),
        summary.genre_scores.len()
    ));
    push_score_table(&mut out, &summary.genre_scores);
    out.push_str(&format!(
        "Colors (rated {} of {}):\n",
        rated_count(&summary.color_scores),
        summary.color_scores.len()
    ));
    push_score_table(&mut out, &summary.color_scores);
    out.push('\n');

    out.push_str("3. Top picks\n");
    out.push_str(&format!("Genres: {}\n", summary.top_genres.join(", ")));
    out.push_str(&format!("Colors: {}\n\n", summary.top_colors.join(", ")));

    out.push_str("4. Outfits\n");
    if summary.outfits.is_empty() {
        out.push_str("No outfits assembled.\n");
    }
    for (i, outfit) in summary.outfits.iter().enumerate() {
        out.push_str(&format!(
            "Outfit {} — {} / {}\n",
            i + 1,
            outfit.genre,
            outfit.color
        ));
        out.push_str(&format!("  Inner:  {}\n", outfit.inner));
        if let Some(outer) = &outfit.outer {
            out.push_str(&format!("  Outer:  {}\n", outer));
        }
        out.push_str(&format!("  Bottom: {}\n", outfit.bottom));
        out.push_str(&format!(
            "  Shades: base #{:02x}{:02x}{:02x}, inner #{:02x}{:02x}{:02x}, bottom #{:02x}{:02x}{:02x}\n",
            outfit.scheme.base.r,
            outfit.scheme.base.g,
            outfit.scheme.base.b,
            outfit.scheme.inner.r,
            outfit.scheme.inner.g,
            outfit.scheme.inner.b,
            outfit.scheme.bottom.r,
            outfit.scheme.bottom.g,
            outfit.scheme.bottom.b,
        ));
    }
    out.push('\n');

    out.push_str("5. Library\n");
    for note in &summary.library {
        out.push_str(&format!(
            "{}: {} items{}\n",
            note.genre,
            note.items,
            if note.overlaid { " (custom)" } else { "" }
        ));
    }

    out
}

fn rated_count(scores: &[CategoryScore]) -> usize {
    scores
        .iter()
        .filter(|s| s.source == ScoreSource::Given)
        .count()
}

fn push_score_table(out: &mut String, scores: &[CategoryScore]) {
    for entry in scores {
        out.push_str(&format!(
            "  {:<12} {}{}\n",
            entry.name,
            format_f32_2(entry.score),
            match entry.source {
                ScoreSource::Given => "",
                ScoreSource::Imputed => " (imputed)",
            }
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::outfit::{BottomKind, Outfit};
    use crate::model::palette::{scheme_for, Rgb};
    use crate::pipeline::stage2_complete::CompletionStrategy;
    use crate::report::LibraryNote;

    fn summary() -> RecommendationSummary {
        RecommendationSummary {
            tool_name: "fitpick".to_string(),
            tool_version: "0.0.0".to_string(),
            seed: 7,
            completion: CompletionStrategy::Flat,
            silhouette: Silhouette::Straight,
            wear_outer: false,
            genre_scores: vec![
                CategoryScore {
                    name: "Casual".to_string(),
                    score: 4.0,
                    source: ScoreSource::Given,
                },
                CategoryScore {
                    name: "Formal".to_string(),
                    score: 0.67,
                    source: ScoreSource::Imputed,
                },
            ],
            color_scores: Vec::new(),
            genre_coverage: 0.5,
            color_coverage: 0.0,
            top_genres: vec!["Casual".to_string()],
            top_colors: vec!["Black".to_string()],
            library: vec![LibraryNote {
                genre: "casual".to_string(),
                items: 8,
                overlaid: true,
            }],
            outfits: vec![Outfit {
                genre: "Casual".to_string(),
                color: "Black".to_string(),
                inner: "Black Knit".to_string(),
                outer: None,
                bottom: "Black Denim".to_string(),
                bottom_kind: BottomKind::Pants,
                scheme: scheme_for(Rgb::new(30, 30, 30)),
            }],
        }
    }

    #[test]
    fn test_report_sections_present() {
        let text = render_report_text(&summary());
        assert!(text.contains("1. Profile"));
        assert!(text.contains("2. Preference scores"));
        assert!(text.contains("3. Top picks"));
        assert!(text.contains("4. Outfits"));
        assert!(text.contains("5. Library"));
    }

    #[test]
    fn test_imputed_marker_and_outer_omitted() {
        let text = render_report_text(&summary());
        assert!(text.contains("Formal"));
        assert!(text.contains("(imputed)"));
        assert!(!text.contains("Outer:"));
        assert!(text.contains("casual: 8 items (custom)"));
    }

    #[test]
    fn test_empty_outfits_note() {
        let mut s = summary();
        s.outfits.clear();
        let text = render_report_text(&s);
        assert!(text.contains("No outfits assembled."));
    }
}
