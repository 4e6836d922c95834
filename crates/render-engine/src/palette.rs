//! Gesture colour cycling.

use image::Rgb;
use touchmap_common::error::{TouchmapError, TouchmapResult};

/// Ordered colours, picked by gesture index modulo the palette length.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    /// Build from `#RRGGBB` strings.
    pub fn from_hex<I, S>(entries: I) -> TouchmapResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = entries
            .into_iter()
            .map(|entry| parse_hex_color(entry.as_ref()))
            .collect::<TouchmapResult<Vec<_>>>()?;
        if colors.is_empty() {
            return Err(TouchmapError::config("palette must contain at least one colour"));
        }
        Ok(Self { colors })
    }

    pub fn color_for(&self, gesture_index: usize) -> Rgb<u8> {
        self.colors[gesture_index % self.colors.len()]
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex_color(raw: &str) -> TouchmapResult<Rgb<u8>> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TouchmapError::config(format!(
            "invalid palette colour {raw:?}, expected #RRGGBB"
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| TouchmapError::config(format!("invalid palette colour {raw:?}")))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Composite `color` over `background` at the given opacity.
pub fn blend(color: Rgb<u8>, background: Rgb<u8>, alpha: f64) -> Rgb<u8> {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| (fg as f64 * a + bg as f64 * (1.0 - a)).round() as u8;
    Rgb([
        mix(color[0], background[0]),
        mix(color[1], background[1]),
        mix(color[2], background[2]),
    ])
}
