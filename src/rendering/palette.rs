//! Brightness-to-glyph mapping

/// Glyph ramp ordered from darkest to brightest. A brightness of 0.0 is the
/// blank background; 1.0 is the densest glyph.
const GLYPH_RAMP: &str = " .`-_':,;^=+/\"|)\\<>)iv%xclrs{*}I?!][1taeo7zjLunT#JCwfy325Fp6mqSghVd4EgXPGZbYkOA&8U$@KHDBWNMR0Q";

/// Maps a normalized brightness value to a printable character.
///
/// The glyph-doubling aspect-ratio fix is not applied here; it belongs to
/// buffer serialization.
#[derive(Debug, Clone)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            glyphs: GLYPH_RAMP.chars().collect(),
        }
    }
}

impl Palette {
    /// Number of glyphs in the ramp.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Select the glyph for a brightness value.
    ///
    /// Brightness outside [0, 1] is clamped, never an error; non-finite
    /// values fall back to the darkest glyph. Index is the ceiling of
    /// `(len - 1) * brightness`, so any brightness above zero already moves
    /// off the background glyph.
    pub fn char_for(&self, brightness: f64) -> char {
        let b = if brightness.is_finite() {
            brightness.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let top = (self.glyphs.len() - 1) as f64;
        let idx = ((top * b).ceil() as usize).min(self.glyphs.len() - 1);
        self.glyphs[idx]
    }
}
