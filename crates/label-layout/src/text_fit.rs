//! Text size fitting
//!
//! Widths are estimated from the character count only, there is no font
//! shaping. Good enough to keep engraved text inside a label outline.

use crate::geometry::Point;
use crate::options::TextFitConfig;
use crate::types::TextLine;

/// A text line with its resolved height and position inside a label
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLine {
    pub content: String,
    pub height_mm: f64,
    /// Estimated rendered width at `height_mm`
    pub width_mm: f64,
    /// Left end of the baseline, relative to the label's lower-left corner
    pub origin: Point,
}

/// Estimated rendered width of `text` at the given height
pub fn estimate_width(text: &str, height_mm: f64, config: &TextFitConfig) -> f64 {
    text.chars().count() as f64 * height_mm * config.glyph_aspect
}

/// Shrink `desired_height` until the text fits in `max_width` less padding.
///
/// Text that already fits comes back unchanged. The result never drops
/// below `config.min_height_mm`.
pub fn fit_height(
    text: &str,
    max_width: f64,
    desired_height: f64,
    padding: f64,
    config: &TextFitConfig,
) -> f64 {
    let available = max_width - 2.0 * padding;
    let estimated = estimate_width(text, desired_height, config);

    if estimated <= available {
        return desired_height;
    }

    let scaled = desired_height * available / estimated;
    scaled.max(config.min_height_mm)
}

/// Fit every line to the label width and stack them as a vertically
/// centered block. Lines keep their own fitted heights.
pub fn layout_lines(
    lines: &[TextLine],
    label_width: f64,
    label_height: f64,
    config: &TextFitConfig,
) -> Vec<FittedLine> {
    let heights: Vec<f64> = lines
        .iter()
        .map(|line| {
            fit_height(
                &line.content,
                label_width,
                line.size_mm,
                config.padding_mm,
                config,
            )
        })
        .collect();

    let gaps = lines.len().saturating_sub(1) as f64 * config.line_gap_mm;
    let block_height: f64 = heights.iter().sum::<f64>() + gaps;

    // Top of the block, measured from the label's bottom edge
    let mut cursor = (label_height + block_height) / 2.0;

    lines
        .iter()
        .zip(heights)
        .map(|(line, height_mm)| {
            let width_mm = estimate_width(&line.content, height_mm, config);
            let baseline = cursor - height_mm;
            cursor = baseline - config.line_gap_mm;

            FittedLine {
                content: line.content.clone(),
                height_mm,
                width_mm,
                origin: Point::new((label_width - width_mm) / 2.0, baseline),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TextFitConfig {
        TextFitConfig::default()
    }

    #[test]
    fn test_estimate_width_counts_chars() {
        // 4 chars * 10mm * 0.55
        let width = estimate_width("ABCD", 10.0, &config());
        assert!((width - 22.0).abs() < 1e-9);
        // Multi-byte characters count once each
        assert!((estimate_width("äöü", 2.0, &config()) - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_fits_unchanged() {
        let h = fit_height("OK", 50.0, 5.0, 1.0, &config());
        assert_eq!(h, 5.0);
    }

    #[test]
    fn test_shrinks_proportionally() {
        // 10 chars at 10mm -> 55mm wide, only 40 - 2*5 = 30mm available
        let h = fit_height("0123456789", 40.0, 10.0, 5.0, &config());
        assert!((h - 10.0 * 30.0 / 55.0).abs() < 1e-9);
        // The shrunk height fits exactly
        let w = estimate_width("0123456789", h, &config());
        assert!((w - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_minimum_height_floor() {
        let h = fit_height(&"W".repeat(500), 10.0, 5.0, 1.0, &config());
        assert_eq!(h, 0.5);

        // No room at all still yields the floor
        let h = fit_height("abc", 2.0, 5.0, 1.0, &config());
        assert_eq!(h, 0.5);
    }

    #[test]
    fn test_fitting_twice_changes_nothing() {
        let cases = [
            ("0123456789", 40.0, 10.0),
            ("OK", 50.0, 5.0),
            ("WIDE LABEL", 12.0, 8.0),
        ];
        for (text, width, desired) in cases {
            let once = fit_height(text, width, desired, 1.0, &config());
            let twice = fit_height(text, width, once, 1.0, &config());
            assert!((once - twice).abs() < 1e-9, "{}", text);
            assert_eq!(once, fit_height(text, width, desired, 1.0, &config()));
        }
    }

    #[test]
    fn test_single_line_is_centered() {
        let lines = vec![TextLine::new("AB", 4.0)];
        let fitted = layout_lines(&lines, 40.0, 10.0, &config());

        assert_eq!(fitted.len(), 1);
        let line = &fitted[0];
        assert_eq!(line.height_mm, 4.0);
        // Block of 4mm centered in 10mm: baseline at 3mm
        assert!((line.origin.y - 3.0).abs() < 1e-9);
        // 2 * 4 * 0.55 = 4.4 wide, centered in 40
        assert!((line.origin.x - (40.0 - 4.4) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_lines_stack_with_gap_and_own_heights() {
        let lines = vec![
            TextLine::new("TOP", 4.0),
            TextLine::new("a much longer second line", 4.0),
        ];
        let fitted = layout_lines(&lines, 30.0, 20.0, &config());

        assert_eq!(fitted[0].height_mm, 4.0);
        assert!(fitted[1].height_mm < 4.0);

        // First baseline sits above the second by its gap plus the second's height
        let drop = fitted[0].origin.y - fitted[1].origin.y;
        assert!((drop - (1.0 + fitted[1].height_mm)).abs() < 1e-9);

        // The block is centered: equal space above and below
        let top = fitted[0].origin.y + fitted[0].height_mm;
        let bottom = fitted[1].origin.y;
        assert!(((20.0 - top) - bottom).abs() < 1e-9);
    }

    #[test]
    fn test_no_lines() {
        assert!(layout_lines(&[], 30.0, 20.0, &config()).is_empty());
    }
}
