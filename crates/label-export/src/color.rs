//! Fixed color-name lookup
//!
//! Label materials are named by color ("white on black"). Each name maps to
//! an RGB value for print output and an AutoCAD color index for DXF layers.

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0`
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// A color from the lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: Rgb,
    /// AutoCAD color index
    pub aci: u8,
}

#[rustfmt::skip]
const TABLE: &[NamedColor] = &[
    NamedColor { name: "black", rgb: BLACK, aci: 250 },
    NamedColor { name: "white", rgb: WHITE, aci: 7 },
    NamedColor { name: "red", rgb: Rgb::new(255, 0, 0), aci: 1 },
    NamedColor { name: "yellow", rgb: Rgb::new(255, 255, 0), aci: 2 },
    NamedColor { name: "green", rgb: Rgb::new(0, 128, 0), aci: 3 },
    NamedColor { name: "cyan", rgb: Rgb::new(0, 255, 255), aci: 4 },
    NamedColor { name: "blue", rgb: Rgb::new(0, 0, 255), aci: 5 },
    NamedColor { name: "magenta", rgb: Rgb::new(255, 0, 255), aci: 6 },
    NamedColor { name: "gray", rgb: Rgb::new(128, 128, 128), aci: 8 },
    NamedColor { name: "grey", rgb: Rgb::new(128, 128, 128), aci: 8 },
    NamedColor { name: "silver", rgb: Rgb::new(192, 192, 192), aci: 9 },
    NamedColor { name: "orange", rgb: Rgb::new(255, 165, 0), aci: 30 },
    NamedColor { name: "gold", rgb: Rgb::new(212, 175, 55), aci: 40 },
    NamedColor { name: "brown", rgb: Rgb::new(139, 69, 19), aci: 34 },
];

/// Look a color up by name, ignoring case and surrounding whitespace
pub fn lookup(name: &str) -> Option<NamedColor> {
    let name = name.trim();
    TABLE
        .iter()
        .find(|color| color.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Look a color up, falling back to `fallback` for unknown names
pub fn resolve(name: &str, fallback: NamedColor) -> NamedColor {
    lookup(name).unwrap_or_else(|| {
        log::warn!("Unknown color '{}', using {}", name, fallback.name);
        fallback
    })
}

pub fn black() -> NamedColor {
    TABLE[0]
}

pub fn white() -> NamedColor {
    TABLE[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup(" Red ").map(|c| c.rgb), Some(Rgb::new(255, 0, 0)));
        assert_eq!(lookup("GREY").map(|c| c.aci), Some(8));
        assert!(lookup("octarine").is_none());
    }

    #[test]
    fn test_resolve_fallback() {
        assert_eq!(resolve("octarine", white()).name, "white");
        assert_eq!(resolve("black", white()).name, "black");
    }

    #[test]
    fn test_unit_channels() {
        assert_eq!(WHITE.to_unit(), (1.0, 1.0, 1.0));
        assert_eq!(BLACK.to_unit(), (0.0, 0.0, 0.0));
    }
}
