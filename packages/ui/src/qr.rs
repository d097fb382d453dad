//! Decorative QR-style tag rendering.
//!
//! The pattern is derived deterministically from the alias (chained SHA-1
//! expanded to fill a 21x21 grid) with finder squares in three corners so
//! it reads as a QR code at a glance. It encodes nothing; no scanner will
//! decode it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha1::{Digest, Sha1};

/// Modules per side.
pub const GRID: usize = 21;

const FINDER: usize = 7;
const MODULE_PX: usize = 8;
const QUIET_PX: usize = 16;

/// A rendered tag pattern. Same alias, same pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct QrPattern {
    modules: Vec<bool>,
    pub alias: String,
}

impl QrPattern {
    pub fn derive(alias: &str) -> Self {
        // Chain SHA-1 until there are enough bits for the full grid.
        let mut bits = Vec::with_capacity(GRID * GRID);
        let mut block: Vec<u8> = alias.as_bytes().to_vec();
        while bits.len() < GRID * GRID {
            let digest = Sha1::digest(&block);
            for byte in digest {
                for shift in 0..8 {
                    bits.push((byte >> shift) & 1 == 1);
                }
            }
            block = digest.to_vec();
        }
        bits.truncate(GRID * GRID);

        let mut pattern = Self {
            modules: bits,
            alias: alias.to_string(),
        };
        pattern.stamp_finder(0, 0);
        pattern.stamp_finder(GRID - FINDER, 0);
        pattern.stamp_finder(0, GRID - FINDER);
        pattern
    }

    pub fn module(&self, x: usize, y: usize) -> bool {
        self.modules[y * GRID + x]
    }

    /// Draw a finder square with its top-left corner at (x0, y0): dark
    /// ring, light separator, dark 3x3 core.
    fn stamp_finder(&mut self, x0: usize, y0: usize) {
        for dy in 0..FINDER {
            for dx in 0..FINDER {
                let ring = dx == 0 || dx == FINDER - 1 || dy == 0 || dy == FINDER - 1;
                let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                self.modules[(y0 + dy) * GRID + (x0 + dx)] = ring || core;
            }
        }
    }
}

/// Standalone SVG document for the pattern, quiet zone included.
pub fn pattern_svg(pattern: &QrPattern) -> String {
    let size = GRID * MODULE_PX + 2 * QUIET_PX;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\
         <rect width=\"{size}\" height=\"{size}\" fill=\"#ffffff\"/>"
    );
    for y in 0..GRID {
        for x in 0..GRID {
            if pattern.module(x, y) {
                let px = QUIET_PX + x * MODULE_PX;
                let py = QUIET_PX + y * MODULE_PX;
                svg.push_str(&format!(
                    "<rect x=\"{px}\" y=\"{py}\" width=\"{MODULE_PX}\" height=\"{MODULE_PX}\" fill=\"#111111\"/>"
                ));
            }
        }
    }
    svg.push_str("</svg>");
    svg
}

/// Base64 data URI for displaying and downloading the tag.
pub fn pattern_data_uri(pattern: &QrPattern) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(pattern_svg(pattern))
    )
}

/// Filename the downloaded tag is saved under.
pub fn download_filename(alias: &str) -> String {
    format!("CarConnect-{alias}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_deterministic() {
        let a = QrPattern::derive("ROADTRIP");
        let b = QrPattern::derive("ROADTRIP");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_aliases_differ() {
        let a = QrPattern::derive("CAR42");
        let b = QrPattern::derive("CAR43");
        assert_ne!(a.modules, b.modules);
    }

    #[test]
    fn test_finder_corners() {
        let pattern = QrPattern::derive("CAR42");
        // Ring corners of all three finder squares are dark.
        assert!(pattern.module(0, 0));
        assert!(pattern.module(GRID - 1, 0));
        assert!(pattern.module(0, GRID - 1));
        // Separator just inside the ring is light.
        assert!(!pattern.module(1, 1));
        // Core centers are dark.
        assert!(pattern.module(3, 3));
        assert!(pattern.module(GRID - 4, 3));
        assert!(pattern.module(3, GRID - 4));
    }

    #[test]
    fn test_data_uri_and_filename() {
        let pattern = QrPattern::derive("CAR42");
        assert!(pattern_data_uri(&pattern).starts_with("data:image/svg+xml;base64,"));
        assert_eq!(download_filename("CAR42"), "CarConnect-CAR42.svg");
    }
}
