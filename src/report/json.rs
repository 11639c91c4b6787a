use crate::report::RecommendationSummary;

pub fn render_summary_json(summary: &RecommendationSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Silhouette;
    use crate::model::outfit::{BottomKind, Outfit};
    use crate::model::palette::{scheme_for, Rgb};
    use crate::model::scores::ScoreSource;
    use crate::pipeline::stage2_complete::CompletionStrategy;
    use crate::report::{CategoryScore, LibraryNote};

    fn dummy_summary() -> RecommendationSummary {
        RecommendationSummary {
            tool_name: "fitpick".to_string(),
            tool_version: "0.0.0".to_string(),
            seed: 42,
            completion: CompletionStrategy::Similarity,
            silhouette: Silhouette::Flared,
            wear_outer: true,
            genre_scores: vec![CategoryScore {
                name: "Streetwear".to_string(),
                score: 5.0,
                source: ScoreSource::Given,
            }],
            color_scores: vec![CategoryScore {
                name: "Navy".to_string(),
                score: 2.5,
                source: ScoreSource::Imputed,
            }],
            genre_coverage: 0.17,
            color_coverage: 0.0,
            top_genres: vec!["Streetwear".to_string()],
            top_colors: vec!["Navy".to_string()],
            library: vec![LibraryNote {
                genre: "streetwear".to_string(),
                items: 8,
                overlaid: false,
            }],
            outfits: vec![Outfit {
                genre: "Streetwear".to_string(),
                color: "Navy".to_string(),
                inner: "Navy Graphic Tee".to_string(),
                outer: Some("Navy Hoodie".to_string()),
                bottom: "Navy Cargo Pants".to_string(),
                bottom_kind: BottomKind::Pants,
                scheme: scheme_for(Rgb::new(40, 60, 100)),
            }],
        }
    }

    #[test]
    fn test_json_structure() {
        let rendered = render_summary_json(&dummy_summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["tool_name"], "fitpick");
        assert_eq!(value["seed"], 42);
        assert_eq!(value["completion"], "similarity");
        assert_eq!(value["silhouette"], "flared");
        assert_eq!(value["genre_scores"][0]["source"], "given");
        assert_eq!(value["outfits"][0]["bottom_kind"], "pants");
        assert_eq!(value["outfits"][0]["scheme"]["inner"]["r"], 75);
    }

    #[test]
    fn test_json_null_outer() {
        let mut summary = dummy_summary();
        summary.outfits[0].outer = None;
        let rendered = render_summary_json(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value["outfits"][0]["outer"].is_null());
    }
}
