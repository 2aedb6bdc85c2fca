#![forbid(unsafe_code)]

//! Color primitives and WCAG 2.0 contrast math for theme-doctor.
//!
//! # Role in theme-doctor
//! `theme-doctor-color` is the shared vocabulary for colors and contrast. The
//! audit binary uses these types to measure theme color pairs and to derive
//! replacement candidates, without dragging in any I/O or CLI dependencies.
//!
//! # This crate provides
//! - [`Rgb`] with lossless 6-digit hex conversion and channel transforms.
//! - The WCAG relative-luminance and contrast-ratio formulas.
//! - The WCAG AA threshold constants and convenience predicates.

/// RGB color type, hex conversion, and channel transforms.
pub mod color;
/// WCAG 2.0 relative luminance and contrast ratios.
pub mod contrast;

pub use color::{MalformedColor, Rgb};
pub use contrast::{
    // WCAG constants
    WCAG_AA_LARGE_TEXT,
    WCAG_AA_NORMAL_TEXT,
    WCAG_AA_UI_COMPONENT,
    // WCAG contrast utilities
    contrast_ratio,
    meets_wcag_aa,
    meets_wcag_aa_large_text,
    relative_luminance,
    srgb_to_linear,
};
