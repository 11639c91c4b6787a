use crate::model::palette::Rgb;

/// Builtin genre definition: item lists per garment slot plus a
/// hand-authored similarity table (weights in [0, 1]).
#[derive(Debug, Clone, Copy)]
pub struct GenreDef {
    pub id: &'static str,
    pub name: &'static str,
    pub inner: &'static [&'static str],
    pub outer: &'static [&'static str],
    pub bottom: &'static [&'static str],
    pub skirt: &'static [&'static str],
    pub similar: &'static [(&'static str, f32)],
}

#[derive(Debug, Clone, Copy)]
pub struct ColorDef {
    pub name: &'static str,
    pub rgb: Rgb,
    pub similar: &'static [(&'static str, f32)],
}

const BUILTIN_GENRES: &[GenreDef] = &[
    GenreDef {
        id: "streetwear",
        name: "Streetwear",
        inner: &["Graphic Tee", "Long Sleeve Tee"],
        outer: &["Hoodie", "Zip Hoodie"],
        bottom: &["Wide Pants", "Cargo Pants"],
        skirt: &["Mini Skirt", "Pleated Skirt"],
        similar: &[("casual", 0.6), ("techwear", 0.5), ("vintage", 0.3)],
    },
    GenreDef {
        id: "casual",
        name: "Casual",
        inner: &["Plain T-Shirt", "Knit"],
        outer: &["Cardigan", "Light Jacket"],
        bottom: &["Denim", "Chinos"],
        skirt: &["Flare Skirt", "Long Skirt"],
        similar: &[("streetwear", 0.6), ("minimal", 0.5), ("vintage", 0.4)],
    },
    GenreDef {
        id: "minimal",
        name: "Minimal",
        inner: &["Plain Tee"],
        outer: &["Tailored Jacket"],
        bottom: &["Slim Slacks"],
        skirt: &["Straight Skirt"],
        similar: &[("formal", 0.6), ("casual", 0.5), ("techwear", 0.3)],
    },
    GenreDef {
        id: "techwear",
        name: "Techwear",
        inner: &["Functional Tee"],
        outer: &["Shell Jacket"],
        bottom: &["Tech Pants"],
        skirt: &["Tech Skirt"],
        similar: &[("streetwear", 0.5), ("minimal", 0.3)],
    },
    GenreDef {
        id: "vintage",
        name: "Vintage",
        inner: &["Retro Tee"],
        outer: &["Denim Jacket"],
        bottom: &["Straight Jeans"],
        skirt: &["Retro Skirt"],
        similar: &[("casual", 0.4), ("streetwear", 0.3), ("formal", 0.2)],
    },
    GenreDef {
        id: "formal",
        name: "Formal",
        inner: &["Dress Shirt"],
        outer: &["Blazer"],
        bottom: &["Slacks"],
        skirt: &["Tight Skirt"],
        similar: &[("minimal", 0.6), ("vintage", 0.2)],
    },
];

const BUILTIN_COLORS: &[ColorDef] = &[
    ColorDef {
        name: "Black",
        rgb: Rgb::new(30, 30, 30),
        similar: &[("Gray", 0.7), ("Navy", 0.5), ("White", 0.2)],
    },
    ColorDef {
        name: "White",
        rgb: Rgb::new(240, 240, 240),
        similar: &[("Beige", 0.6), ("Gray", 0.5), ("Black", 0.2)],
    },
    ColorDef {
        name: "Gray",
        rgb: Rgb::new(160, 160, 160),
        similar: &[("Black", 0.7), ("White", 0.5), ("Navy", 0.4)],
    },
    ColorDef {
        name: "Navy",
        rgb: Rgb::new(40, 60, 100),
        similar: &[("Black", 0.5), ("Gray", 0.4), ("Green", 0.3)],
    },
    ColorDef {
        name: "Brown",
        rgb: Rgb::new(120, 80, 50),
        similar: &[("Beige", 0.7), ("Red", 0.3), ("Green", 0.2)],
    },
    ColorDef {
        name: "Beige",
        rgb: Rgb::new(210, 200, 170),
        similar: &[("Brown", 0.7), ("White", 0.6)],
    },
    ColorDef {
        name: "Green",
        rgb: Rgb::new(60, 120, 80),
        similar: &[("Navy", 0.3), ("Brown", 0.2)],
    },
    ColorDef {
        name: "Red",
        rgb: Rgb::new(160, 50, 50),
        similar: &[("Brown", 0.3)],
    },
];

pub fn builtin_genres() -> &'static [GenreDef] {
    BUILTIN_GENRES
}

pub fn builtin_colors() -> &'static [ColorDef] {
    BUILTIN_COLORS
}
