use crate::color::Hsba;
use crate::error::ColorError;

/// Hex source for a palette, kept as text so custom palettes can come from
/// configuration.
#[derive(Clone, Copy, Debug)]
pub struct PaletteHex {
    pub background: &'static str,
    pub primary: &'static str,
    pub accent1: &'static str,
    pub accent2: &'static str,
}

// Black ground with violet particles and a cream highlight
pub const VIOLET_HEX: PaletteHex = PaletteHex {
    background: "#000000",
    primary: "#CA8BFF",
    accent1: "#FDFD96",
    accent2: "#9266B6",
};

// Blue-black ground with steel blues and dark slate
pub const STEEL_HEX: PaletteHex = PaletteHex {
    background: "#080810",
    primary: "#4682B4",
    accent1: "#B0C4DE",
    accent2: "#2F4F4F",
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Hsba,
    pub primary: Hsba,
    pub accent1: Hsba,
    pub accent2: Hsba,
}

impl Palette {
    pub fn parse(hex: &PaletteHex) -> Result<Self, ColorError> {
        Ok(Self {
            background: Hsba::from_hex(hex.background)?,
            primary: Hsba::from_hex(hex.primary)?,
            accent1: Hsba::from_hex(hex.accent1)?,
            accent2: Hsba::from_hex(hex.accent2)?,
        })
    }
}

/// Which of the two palettes is active. A press flips between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteKind {
    #[default]
    Violet,
    Steel,
}

impl PaletteKind {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            PaletteKind::Violet => PaletteKind::Steel,
            PaletteKind::Steel => PaletteKind::Violet,
        }
    }
}

/// Both parsed palettes, indexed by [`PaletteKind`].
#[derive(Clone, Debug)]
pub struct PaletteSet {
    violet: Palette,
    steel: Palette,
}

impl PaletteSet {
    pub fn new(violet: &PaletteHex, steel: &PaletteHex) -> Result<Self, ColorError> {
        Ok(Self {
            violet: Palette::parse(violet)?,
            steel: Palette::parse(steel)?,
        })
    }

    #[inline]
    pub fn get(&self, kind: PaletteKind) -> &Palette {
        match kind {
            PaletteKind::Violet => &self.violet,
            PaletteKind::Steel => &self.steel,
        }
    }
}
