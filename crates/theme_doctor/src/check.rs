//! Single contrast checks and their categories.

use serde::Serialize;

use theme_doctor_color::{Rgb, contrast_ratio};

/// Where a check sits in the fix-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CheckCategory {
    /// Foreground text on the main or selection background.
    Primary,
    /// Cursor and other interface furniture.
    UiComponent,
    /// One of the 16 ANSI console colors.
    ConsoleColor,
}

impl CheckCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::UiComponent => "UI Component",
            Self::ConsoleColor => "Console Color",
        }
    }
}

/// One foreground/background pair measured against a WCAG AA requirement.
///
/// The ratio and verdict are fixed at construction; a check is never
/// re-evaluated afterward. Identical inputs always produce identical checks.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastCheck {
    pub description: String,
    pub foreground: Rgb,
    pub background: Rgb,
    pub requirement: f64,
    pub category: CheckCategory,
    pub ratio: f64,
    pub passes: bool,
}

impl ContrastCheck {
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        foreground: Rgb,
        background: Rgb,
        requirement: f64,
        category: CheckCategory,
    ) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            description: description.into(),
            foreground,
            background,
            requirement,
            category,
            ratio,
            passes: ratio >= requirement,
        }
    }

    /// How far below the requirement this check landed.
    ///
    /// Only meaningful for failing checks; passing checks report a
    /// non-positive deficit.
    #[must_use]
    pub fn deficit(&self) -> f64 {
        self.requirement - self.ratio
    }
}

#[cfg(test)]
mod tests {
    use theme_doctor_color::{Rgb, WCAG_AA_NORMAL_TEXT, contrast_ratio};

    use super::{CheckCategory, ContrastCheck};

    #[test]
    fn category_display_strings() {
        assert_eq!(CheckCategory::Primary.as_str(), "Primary");
        assert_eq!(CheckCategory::UiComponent.as_str(), "UI Component");
        assert_eq!(CheckCategory::ConsoleColor.as_str(), "Console Color");
    }

    #[test]
    fn check_computes_ratio_and_verdict_eagerly() {
        let check = ContrastCheck::new(
            "Primary text (foreground on background)",
            Rgb::WHITE,
            Rgb::BLACK,
            WCAG_AA_NORMAL_TEXT,
            CheckCategory::Primary,
        );
        assert!((check.ratio - 21.0).abs() < 1e-2);
        assert!(check.passes);
        assert!(check.deficit() < 0.0);
    }

    #[test]
    fn requirement_boundary_is_inclusive() {
        let foreground = Rgb::new(0x76, 0x76, 0x76);
        let ratio = contrast_ratio(foreground, Rgb::WHITE);
        let check = ContrastCheck::new(
            "boundary",
            foreground,
            Rgb::WHITE,
            ratio,
            CheckCategory::Primary,
        );
        assert!(check.passes);
        assert!(check.deficit().abs() < 1e-12);
    }

    #[test]
    fn failing_check_has_positive_deficit() {
        let check = ContrastCheck::new(
            "Primary text (foreground on background)",
            Rgb::new(0xfe, 0xfe, 0xfe),
            Rgb::WHITE,
            WCAG_AA_NORMAL_TEXT,
            CheckCategory::Primary,
        );
        assert!(!check.passes);
        assert!(check.ratio < 1.1);
        assert!(check.deficit() > 3.0);
    }

    #[test]
    fn identical_inputs_produce_identical_checks() {
        let build = || {
            ContrastCheck::new(
                "Console red on background",
                Rgb::new(0xcd, 0x31, 0x31),
                Rgb::new(0x0c, 0x0c, 0x0c),
                WCAG_AA_NORMAL_TEXT,
                CheckCategory::ConsoleColor,
            )
        };
        let first = build();
        let second = build();
        assert_eq!(first.ratio.to_bits(), second.ratio.to_bits());
        assert_eq!(first.passes, second.passes);
    }
}
