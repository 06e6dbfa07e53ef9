//! HSB + alpha color model.
//!
//! The whole simulation works in hue/saturation/brightness space with the
//! channel ranges hue `[0, 360)`, saturation and brightness `[0, 100]` and
//! alpha `[0, 1]`. Hosts convert to RGBA only at the point of drawing via
//! [`Hsba::to_rgba`].

use crate::error::ColorError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsba {
    pub const WHITE: Hsba = Hsba::new(0.0, 0.0, 100.0, 1.0);
    pub const BLACK: Hsba = Hsba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    /// Opaque color from 8-bit RGB channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let r = r as f32 / 255.0;
        let g = g as f32 / 255.0;
        let b = b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;
        if chroma == 0.0 {
            return Self::new(0.0, 0.0, max * 100.0, 1.0);
        }
        let sector = if r == max {
            (g - b) / chroma
        } else if g == max {
            2.0 + (b - r) / chroma
        } else {
            4.0 + (r - g) / chroma
        };
        let sector = if sector < 0.0 { sector + 6.0 } else { sector };
        Self::new(sector * 60.0, chroma / max * 100.0, max * 100.0, 1.0)
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        let nibble = |c: char| c.to_digit(16).ok_or_else(|| ColorError::Digit(hex.to_string()));
        let chars: Vec<char> = digits.chars().collect();
        let rgb = match chars.len() {
            3 => {
                let mut out = [0u8; 3];
                for (o, c) in out.iter_mut().zip(&chars) {
                    let n = nibble(*c)? as u8;
                    *o = n << 4 | n;
                }
                out
            }
            6 => {
                let mut out = [0u8; 3];
                for (o, pair) in out.iter_mut().zip(chars.chunks(2)) {
                    *o = (nibble(pair[0])? << 4 | nibble(pair[1])?) as u8;
                }
                out
            }
            _ => return Err(ColorError::Length(hex.to_string())),
        };
        Ok(Self::from_rgb8(rgb[0], rgb[1], rgb[2]))
    }

    #[inline]
    pub fn hue(&self) -> f32 {
        self.h
    }
    #[inline]
    pub fn saturation(&self) -> f32 {
        self.s
    }
    #[inline]
    pub fn brightness(&self) -> f32 {
        self.b
    }
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.a
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Channel-wise linear blend toward `other`. Hue is interpolated
    /// numerically (no shortest-arc wrap) and nothing is clamped.
    pub fn lerp(&self, other: &Hsba, t: f32) -> Hsba {
        let mix = |x: f32, y: f32| x + (y - x) * t;
        Hsba::new(
            mix(self.h, other.h),
            mix(self.s, other.s),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Convert to straight (non-premultiplied) RGBA in `[0, 1]`.
    pub fn to_rgba(&self) -> [f32; 4] {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.b / 100.0).clamp(0.0, 1.0);
        let a = self.a.clamp(0.0, 1.0);
        let h = self.h.rem_euclid(360.0) / 60.0;
        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        [r + m, g + m, b + m, a]
    }
}
