//! Multiplier tables for length-bearing tokens.
//!
//! Every scaled token is `multiplier * base_unit`. The tables are part of the
//! public token contract: changing a multiplier changes what `"m3"` means in
//! every application.

/// Margin and padding: `m1..m5`, `p1..p5` (index 0 is `*1`).
pub const SPACING: [f64; 6] = [0.25, 0.5, 1.0, 2.0, 4.0, 8.0];

/// Heights and widths, including min/max variants.
pub const DIMENSION: [f64; 6] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];

/// Absolute offsets: `tp1`, `tp2` and friends.
pub const POSITION: [f64; 2] = [1.0, 2.0];

/// Border radii `br1..br5`.
pub const BORDER_RADIUS: [f64; 5] = [0.125, 0.25, 0.5, 1.0, 2.0];

/// Font sizes `fs1..fs8`.
pub const FONT_SIZE: [f64; 8] = [0.875, 1.0, 1.25, 1.5, 2.125, 2.75, 5.0, 6.0];

/// Scales a multiplier table by the base unit.
pub(crate) fn scaled<const N: usize>(table: [f64; N], base_unit: f64) -> [f64; N] {
    table.map(|m| m * base_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_default_spacing() {
        assert_eq!(scaled(SPACING, 16.0), [4.0, 8.0, 16.0, 32.0, 64.0, 128.0]);
    }

    #[test]
    fn test_scaled_font_sizes() {
        let fs = scaled(FONT_SIZE, 16.0);
        assert_eq!(fs[0], 14.0);
        assert_eq!(fs[4], 34.0);
        assert_eq!(fs[7], 96.0);
    }
}
