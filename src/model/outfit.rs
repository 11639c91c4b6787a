use serde::Serialize;

use crate::model::palette::ColorScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BottomKind {
    Pants,
    Skirt,
}

/// One assembled recommendation. Item strings carry the color theme
/// prefix, e.g. "Navy Graphic Tee".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outfit {
    pub genre: String,
    pub color: String,
    pub inner: String,
    pub outer: Option<String>,
    pub bottom: String,
    pub bottom_kind: BottomKind,
    pub scheme: ColorScheme,
}
