//! Bounded search for a foreground replacement that restores contrast.

use serde::Serialize;

use theme_doctor_color::{Rgb, contrast_ratio, relative_luminance};

/// Number of candidate steps the search evaluates at most.
const MAX_STEPS: u32 = 20;
/// Fraction per step; step `i` tests `0.05 * i` of the available range.
const STEP_FRACTION: f64 = 0.05;

/// Which way the search moves the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdjustmentDirection {
    Lightened,
    Darkened,
}

impl AdjustmentDirection {
    /// Decided once from the background alone: light text on a dark
    /// background, dark text on a light one. The direction never changes
    /// mid-search.
    #[must_use]
    pub fn for_background(background: Rgb) -> Self {
        if relative_luminance(background) < 0.5 {
            Self::Lightened
        } else {
            Self::Darkened
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lightened => "Lightened",
            Self::Darkened => "Darkened",
        }
    }

    fn apply(self, color: Rgb, fraction: f64) -> Rgb {
        match self {
            Self::Lightened => color.lighten(fraction),
            Self::Darkened => color.darken(fraction),
        }
    }
}

/// A replacement foreground that strictly improved on the original ratio.
///
/// The suggested ratio may still fall short of the target; callers compare
/// it against the requirement before presenting the color as a compliant
/// fix.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdjustmentSuggestion {
    pub color: Rgb,
    pub ratio: f64,
    pub direction: AdjustmentDirection,
}

/// Search for a foreground adjustment that meets `target_ratio` against
/// `background`.
///
/// Evaluates at most [`MAX_STEPS`] candidates, each derived from the
/// original foreground (steps do not compound), stopping early once a
/// candidate meets the target. Returns `None` when the pair already meets
/// the target, and when no candidate strictly improved the original ratio.
#[must_use]
pub fn suggest_adjustment(
    foreground: Rgb,
    background: Rgb,
    target_ratio: f64,
) -> Option<AdjustmentSuggestion> {
    let current = contrast_ratio(foreground, background);
    if current >= target_ratio {
        return None;
    }

    let direction = AdjustmentDirection::for_background(background);

    let mut best = foreground;
    let mut best_ratio = current;
    for step in 1..=MAX_STEPS {
        let candidate = direction.apply(foreground, STEP_FRACTION * f64::from(step));
        let ratio = contrast_ratio(candidate, background);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
        if ratio >= target_ratio {
            break;
        }
    }

    (best_ratio > current).then_some(AdjustmentSuggestion {
        color: best,
        ratio: best_ratio,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use theme_doctor_color::{Rgb, WCAG_AA_NORMAL_TEXT, contrast_ratio};

    use super::{AdjustmentDirection, MAX_STEPS, STEP_FRACTION, suggest_adjustment};

    #[test]
    fn passing_pairs_need_no_suggestion() {
        assert!(suggest_adjustment(Rgb::WHITE, Rgb::BLACK, WCAG_AA_NORMAL_TEXT).is_none());
    }

    #[test]
    fn dark_background_lightens_the_foreground() {
        let foreground = Rgb::new(0x77, 0x77, 0x77);
        let suggestion = suggest_adjustment(foreground, Rgb::BLACK, WCAG_AA_NORMAL_TEXT)
            .expect("gray on black is fixable");

        assert_eq!(suggestion.direction, AdjustmentDirection::Lightened);
        assert!(suggestion.color.r >= foreground.r);
        assert!(suggestion.color.g >= foreground.g);
        assert!(suggestion.color.b >= foreground.b);
        assert!(suggestion.ratio >= WCAG_AA_NORMAL_TEXT);
    }

    #[test]
    fn light_background_darkens_the_foreground() {
        let foreground = Rgb::new(0xaa, 0xaa, 0xaa);
        let suggestion = suggest_adjustment(foreground, Rgb::WHITE, WCAG_AA_NORMAL_TEXT)
            .expect("gray on white is fixable");

        assert_eq!(suggestion.direction, AdjustmentDirection::Darkened);
        assert!(suggestion.color.r <= foreground.r);
    }

    #[test]
    fn suggestion_never_regresses_the_original_ratio() {
        let foreground = Rgb::new(0x77, 0x77, 0x77);
        let original = contrast_ratio(foreground, Rgb::BLACK);
        let suggestion = suggest_adjustment(foreground, Rgb::BLACK, WCAG_AA_NORMAL_TEXT)
            .expect("gray on black is fixable");
        assert!(suggestion.ratio > original);
    }

    #[test]
    fn unimprovable_pairs_return_none() {
        // Mid-gray reads as dark, so the search lightens, but the foreground
        // is already pure white: no candidate can strictly improve.
        let suggestion = suggest_adjustment(Rgb::WHITE, Rgb::new(0x80, 0x80, 0x80), 10.0);
        assert!(suggestion.is_none());
    }

    #[test]
    fn best_candidate_is_returned_even_when_target_is_missed() {
        // Nothing on near-black reaches 21:1, but full lightening still
        // improves; the caller sees the shortfall in the returned ratio.
        let foreground = Rgb::new(0x01, 0x01, 0x01);
        let suggestion =
            suggest_adjustment(foreground, Rgb::BLACK, 21.0).expect("lightening improves");
        assert_eq!(suggestion.color, Rgb::WHITE);
        assert!(suggestion.ratio < 21.0);
        assert!(suggestion.ratio > contrast_ratio(foreground, Rgb::BLACK));
    }

    #[test]
    fn steps_restart_from_the_original_foreground() {
        let foreground = Rgb::new(0x77, 0x77, 0x77);
        let suggestion = suggest_adjustment(foreground, Rgb::BLACK, WCAG_AA_NORMAL_TEXT)
            .expect("gray on black is fixable");

        let reachable = (1..=MAX_STEPS)
            .map(|step| foreground.lighten(STEP_FRACTION * f64::from(step)))
            .any(|candidate| candidate == suggestion.color);
        assert!(reachable, "suggestion must be a single-step transform of the original");
    }

    #[test]
    fn step_table_spans_the_full_range() {
        assert_eq!(MAX_STEPS, 20);
        assert!((STEP_FRACTION * f64::from(MAX_STEPS) - 1.0).abs() < 1e-12);
    }
}
