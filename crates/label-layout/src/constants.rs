//! Shared constants for label layout
//!
//! Defaults that seed the option structs. None of these are read directly
//! by the algorithms; they always go through an explicit configuration value.

// =============================================================================
// Sheet
// =============================================================================

/// Default material sheet width (mm)
pub const DEFAULT_SHEET_WIDTH_MM: f64 = 600.0;

/// Default material sheet height (mm)
pub const DEFAULT_SHEET_HEIGHT_MM: f64 = 300.0;

// =============================================================================
// Text Fitting
// =============================================================================

/// Average glyph advance as a fraction of the text height.
/// Approximation for a sans-serif engraving font, not real font metrics.
pub const DEFAULT_GLYPH_ASPECT: f64 = 0.55;

/// Smallest text height the fitter will shrink to (mm)
pub const MIN_TEXT_HEIGHT_MM: f64 = 0.5;

/// Vertical gap between stacked text lines (mm)
pub const LINE_GAP_MM: f64 = 1.0;

/// Horizontal padding kept free on each side of a text line (mm)
pub const DEFAULT_TEXT_PADDING_MM: f64 = 1.0;

// =============================================================================
// Perforations
// =============================================================================

/// Side length used for square holes when neither size nor overrides are set
pub const DEFAULT_SQUARE_HOLE_MM: f64 = 3.0;

// =============================================================================
// Naming
// =============================================================================

/// Filename suffix marking sheets of non-adhesive material
pub const NON_ADHESIVE_SUFFIX: &str = " NA";
