// Rust guideline compliant 2026-10-16

//! Spinner glyph sets.

/// A cycle of frames drawn by the spinner, one per tick.
pub type GlyphSet = &'static [&'static str];

/// ASCII line spinner; the default.
pub const LINE: GlyphSet = &["|", "/", "-", "\\"];
/// Braille dots circling a cell.
pub const DOTS: GlyphSet = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// An arrow turning clockwise.
pub const ARROWS: GlyphSet = &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"];
/// A bar rising and falling.
pub const BLOCKS: GlyphSet = &["▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃"];
/// A half-filled circle rotating.
pub const QUADRANTS: GlyphSet = &["◐", "◓", "◑", "◒"];
/// A single braille dot bouncing vertically.
pub const BOUNCE: GlyphSet = &["⠁", "⠂", "⠄", "⠂"];

const NAMED: [(&str, GlyphSet); 6] = [
    ("line", LINE),
    ("dots", DOTS),
    ("arrows", ARROWS),
    ("blocks", BLOCKS),
    ("quadrants", QUADRANTS),
    ("bounce", BOUNCE),
];

/// Looks up a glyph set by its configuration name.
pub fn by_name(name: &str) -> Option<GlyphSet> {
    NAMED
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, set)| *set)
}

/// Names accepted by [`by_name`].
pub fn names() -> Vec<&'static str> {
    NAMED.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_set_resolves() {
        for name in names() {
            let set = by_name(name).expect("named set");
            assert!(!set.is_empty());
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(by_name("sparkles").is_none());
    }
}
