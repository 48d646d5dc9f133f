//! Fixed color palettes and the name hash that picks from them.
//!
//! A card without a cover image gets a color (or gradient) derived from its
//! note name. The assignment must stay stable across runs, processes and
//! releases: the tables below are versioned constants, and reordering or
//! editing them recolors every existing card. Bump [`PALETTE_VERSION`] when
//! that is intended.

use serde::Serialize;

/// Version of the [`SOLID_COLORS`] and [`GRADIENTS`] tables.
pub const PALETTE_VERSION: u32 = 1;

/// Solid cover colors.
pub const SOLID_COLORS: [&str; 16] = [
    "#FF6B6B", // coral red
    "#4ECDC4", // teal
    "#45B7D1", // sky blue
    "#96CEB4", // sage green
    "#FFEAA7", // soft yellow
    "#DDA0DD", // plum
    "#98D8C8", // mint
    "#F7DC6F", // mustard
    "#BB8FCE", // lavender
    "#85C1E9", // light blue
    "#F8B500", // golden
    "#82E0AA", // light green
    "#F1948A", // salmon
    "#AED6F1", // powder blue
    "#D7BDE2", // light purple
    "#A3E4D7", // aquamarine
];

/// Two-stop gradient covers.
pub const GRADIENTS: [Gradient; 16] = [
    Gradient::new("#667eea", "#764ba2"), // purple dream
    Gradient::new("#f093fb", "#f5576c"), // pink sunset
    Gradient::new("#4facfe", "#00f2fe"), // ocean blue
    Gradient::new("#43e97b", "#38f9d7"), // fresh mint
    Gradient::new("#fa709a", "#fee140"), // summer peach
    Gradient::new("#a8edea", "#fed6e3"), // soft pink teal
    Gradient::new("#d299c2", "#fef9d7"), // romantic
    Gradient::new("#89f7fe", "#66a6ff"), // cool sky
    Gradient::new("#cd9cf2", "#f6f3ff"), // lavender mist
    Gradient::new("#fddb92", "#d1fdff"), // sunrise
    Gradient::new("#96fbc4", "#f9f586"), // lime glow
    Gradient::new("#c1dfc4", "#deecdd"), // sage mist
    Gradient::new("#ffecd2", "#fcb69f"), // peach cream
    Gradient::new("#a1c4fd", "#c2e9fb"), // winter sky
    Gradient::new("#d4fc79", "#96e6a1"), // spring green
    Gradient::new("#84fab0", "#8fd3f4"), // teal breeze
];

/// A pair of hex colors, from the start of a gradient to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}

/// Hashes a name to a non-negative 32-bit integer.
///
/// `h = h * 31 + unit` over the UTF-16 code units of `name`, wrapping at 32
/// signed bits after every step, then the absolute value. The wrapping and
/// the UTF-16 walk are both part of the contract: existing color
/// assignments depend on them.
pub fn hash_name(name: &str) -> u32 {
    name.encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}

fn index_for(name: &str, len: usize) -> usize {
    hash_name(name) as usize % len
}

/// The solid color assigned to `name`.
pub fn color_for(name: &str) -> &'static str {
    SOLID_COLORS[index_for(name, SOLID_COLORS.len())]
}

/// The gradient assigned to `name`.
pub fn gradient_for(name: &str) -> Gradient {
    GRADIENTS[index_for(name, GRADIENTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex6(color: &str) -> bool {
        color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_hash_fixtures() {
        assert_eq!(hash_name(""), 0);
        assert_eq!(hash_name("a"), 97);
        assert_eq!(hash_name("test"), 3_556_498);
        assert_eq!(hash_name("hello"), 99_162_322);
        assert_eq!(hash_name("note1"), 105_008_767);
        assert_eq!(hash_name("note2"), 105_008_768);
        assert_eq!(hash_name("my-note"), 1_462_726_515);
    }

    #[test]
    fn test_hash_wraps_at_32_bits() {
        // Accumulates to exactly i32::MIN; its absolute value only fits unsigned.
        assert_eq!(hash_name("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn test_hash_walks_utf16_code_units() {
        assert_eq!(hash_name("日本語のノート"), 307_229_821);
        // Astral characters contribute both surrogate halves.
        assert_eq!(hash_name("😀"), 1_772_899);
    }

    #[test]
    fn test_color_fixtures() {
        assert_eq!(color_for(""), "#FF6B6B");
        assert_eq!(color_for("test"), "#45B7D1");
        assert_eq!(color_for("my-note"), "#96CEB4");
        assert_eq!(color_for("note1"), "#A3E4D7");
        assert_eq!(color_for("note2"), "#FF6B6B");
        assert_eq!(color_for("Project Alpha"), "#85C1E9");
    }

    #[test]
    fn test_gradient_fixtures() {
        assert_eq!(gradient_for("test"), Gradient::new("#4facfe", "#00f2fe"));
        assert_eq!(gradient_for("note1"), Gradient::new("#84fab0", "#8fd3f4"));
        assert_eq!(gradient_for("Project Alpha"), Gradient::new("#fddb92", "#d1fdff"));
        assert_eq!(gradient_for("polygenelubricants"), GRADIENTS[0]);
    }

    #[test]
    fn test_selection_is_stable_and_in_palette() {
        for name in ["", "a", "note-with-special-chars!@#$%", "日本語のノート", "Weekly Review"] {
            let color = color_for(name);
            assert_eq!(color, color_for(name));
            assert!(SOLID_COLORS.contains(&color));

            let gradient = gradient_for(name);
            assert_eq!(gradient, gradient_for(name));
            assert!(GRADIENTS.contains(&gradient));
        }
    }

    #[test]
    fn test_names_spread_across_palette() {
        let colors: std::collections::HashSet<_> =
            (0..SOLID_COLORS.len() * 2).map(|i| color_for(&format!("note-{}", i))).collect();
        assert!(colors.len() >= SOLID_COLORS.len() / 2);

        let gradients: std::collections::HashSet<_> =
            (0..GRADIENTS.len() * 2).map(|i| gradient_for(&format!("note-{}", i))).collect();
        assert!(gradients.len() >= GRADIENTS.len() / 2);
    }

    #[test]
    fn test_palette_tables_are_hex_colors() {
        assert!(SOLID_COLORS.iter().all(|c| is_hex6(c)));
        assert!(GRADIENTS.iter().all(|g| is_hex6(g.from) && is_hex6(g.to)));
    }
}
