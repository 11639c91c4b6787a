use serde::Serialize;

/// 8-bit RGB triple used for color themes and derived garment shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lighten every component by `delta`, clamped at 255.
    pub fn tint(self, delta: u8) -> Self {
        Self {
            r: self.r.saturating_add(delta),
            g: self.g.saturating_add(delta),
            b: self.b.saturating_add(delta),
        }
    }

    /// Darken every component by `delta`, clamped at 0.
    pub fn shade(self, delta: u8) -> Self {
        Self {
            r: self.r.saturating_sub(delta),
            g: self.g.saturating_sub(delta),
            b: self.b.saturating_sub(delta),
        }
    }
}

/// Per-outfit shades: the theme color, a lighter inner layer and a
/// darker bottom layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub base: Rgb,
    pub inner: Rgb,
    pub bottom: Rgb,
}

pub const INNER_TINT: u8 = 35;
pub const BOTTOM_SHADE: u8 = 50;

pub fn scheme_for(base: Rgb) -> ColorScheme {
    ColorScheme {
        base,
        inner: base.tint(INNER_TINT),
        bottom: base.shade(BOTTOM_SHADE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_clamps_at_255() {
        let c = Rgb::new(240, 240, 240).tint(35);
        assert_eq!(c, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_shade_clamps_at_zero() {
        let c = Rgb::new(30, 30, 30).shade(50);
        assert_eq!(c, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_scheme_shifts_both_directions() {
        let scheme = scheme_for(Rgb::new(120, 80, 50));
        assert_eq!(scheme.inner, Rgb::new(155, 115, 85));
        assert_eq!(scheme.bottom, Rgb::new(70, 30, 0));
    }
}
