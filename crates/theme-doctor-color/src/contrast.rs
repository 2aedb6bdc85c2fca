//! WCAG 2.0 relative luminance and contrast ratios.

use crate::color::Rgb;

/// Minimum contrast ratio for normal text under WCAG AA.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum contrast ratio for large text under WCAG AA.
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// Minimum contrast ratio for UI components under WCAG AA.
pub const WCAG_AA_UI_COMPONENT: f64 = 3.0;

/// Linearize one sRGB channel value in [0, 1].
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.0, in [0, 1].
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG 2.0 contrast ratio between two colors, from 1.0 to 21.0.
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Check the WCAG AA normal-text threshold (4.5:1).
#[must_use]
pub fn meets_wcag_aa(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

/// Check the WCAG AA large-text threshold (3.0:1).
#[must_use]
pub fn meets_wcag_aa_large_text(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_LARGE_TEXT
}

#[cfg(test)]
mod tests {
    use super::{
        WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT, WCAG_AA_UI_COMPONENT, contrast_ratio,
        meets_wcag_aa, meets_wcag_aa_large_text, relative_luminance,
    };
    use crate::color::Rgb;

    #[test]
    fn luminance_endpoints_are_exact() {
        assert!(relative_luminance(Rgb::BLACK).abs() < 1e-12);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_green_is_brightest_channel() {
        let green = relative_luminance(Rgb::new(0, 128, 0));
        let red = relative_luminance(Rgb::new(128, 0, 0));
        let blue = relative_luminance(Rgb::new(0, 0, 128));
        assert!(green > red);
        assert!(red > blue);
    }

    #[test]
    fn contrast_ratio_black_on_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 1e-2);
    }

    #[test]
    fn contrast_ratio_same_color_is_one() {
        for color in [Rgb::BLACK, Rgb::WHITE, Rgb::new(0x77, 0x77, 0x77)] {
            assert!((contrast_ratio(color, color) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let red = Rgb::new(255, 0, 0);
        assert!((contrast_ratio(red, Rgb::WHITE) - contrast_ratio(Rgb::WHITE, red)).abs() < 1e-12);
    }

    #[test]
    fn contrast_ratio_matches_published_values() {
        // Reference ratios from colord.
        let gray_on_white = contrast_ratio(Rgb::new(0x76, 0x76, 0x76), Rgb::WHITE);
        assert!((gray_on_white - 4.54).abs() < 0.1);

        let red_on_white = contrast_ratio(Rgb::new(255, 0, 0), Rgb::WHITE);
        assert!((red_on_white - 3.99).abs() < 0.1);

        let zinc_on_zinc = contrast_ratio(Rgb::new(0xa1, 0xa1, 0xaa), Rgb::new(0x09, 0x09, 0x0b));
        assert!((zinc_on_zinc - 7.76).abs() < 0.1);
    }

    #[test]
    fn wcag_aa_thresholds() {
        assert!(meets_wcag_aa(Rgb::BLACK, Rgb::WHITE));
        assert!(!meets_wcag_aa(Rgb::new(255, 0, 0), Rgb::WHITE));
        assert!(meets_wcag_aa_large_text(Rgb::new(255, 0, 0), Rgb::WHITE));
        assert!((WCAG_AA_NORMAL_TEXT - 4.5).abs() < f64::EPSILON);
        assert!((WCAG_AA_LARGE_TEXT - WCAG_AA_UI_COMPONENT).abs() < f64::EPSILON);
    }
}
