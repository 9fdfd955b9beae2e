use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Material sheet the labels are packed onto
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SheetConfig {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Keep-out border on every side of the sheet
    pub margin_mm: f64,
    /// Spacing between neighbouring labels, both horizontally and between rows
    pub gap_mm: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_SHEET_WIDTH_MM,
            height_mm: DEFAULT_SHEET_HEIGHT_MM,
            margin_mm: 0.0,
            gap_mm: 0.0,
        }
    }
}

impl SheetConfig {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            ..Default::default()
        }
    }

    pub fn with_margin(mut self, margin_mm: f64) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    pub fn with_gap(mut self, gap_mm: f64) -> Self {
        self.gap_mm = gap_mm;
        self
    }

    /// Width available to labels once the margins are removed
    pub fn usable_width(&self) -> f64 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Height available to labels once the margins are removed
    pub fn usable_height(&self) -> f64 {
        self.height_mm - 2.0 * self.margin_mm
    }

    pub fn area(&self) -> f64 {
        self.width_mm * self.height_mm
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width_mm > 0.0 && self.height_mm > 0.0) {
            return Err(LayoutError::Config(format!(
                "Sheet size must be positive, got {}x{}",
                self.width_mm, self.height_mm
            )));
        }
        if self.margin_mm < 0.0 || self.gap_mm < 0.0 {
            return Err(LayoutError::Config(
                "Sheet margin and gap must not be negative".to_string(),
            ));
        }
        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(LayoutError::Config(format!(
                "Margin of {}mm leaves no usable area on a {}x{} sheet",
                self.margin_mm, self.width_mm, self.height_mm
            )));
        }
        Ok(())
    }
}

/// Tunables for the text width estimate and shrink-to-fit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TextFitConfig {
    /// Average glyph width as a fraction of the text height
    pub glyph_aspect: f64,
    /// Floor applied when shrinking
    pub min_height_mm: f64,
    /// Gap between stacked lines
    pub line_gap_mm: f64,
    /// Free space kept on the left and right of each line
    pub padding_mm: f64,
}

impl Default for TextFitConfig {
    fn default() -> Self {
        Self {
            glyph_aspect: DEFAULT_GLYPH_ASPECT,
            min_height_mm: MIN_TEXT_HEIGHT_MM,
            line_gap_mm: LINE_GAP_MM,
            padding_mm: DEFAULT_TEXT_PADDING_MM,
        }
    }
}

/// Everything the layout stage needs for one export request
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutOptions {
    pub sheet: SheetConfig,
    pub text_fit: TextFitConfig,
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.sheet.validate()?;

        let fit = &self.text_fit;
        if fit.glyph_aspect <= 0.0 {
            return Err(LayoutError::Config(
                "Glyph aspect must be positive".to_string(),
            ));
        }
        if fit.min_height_mm <= 0.0 {
            return Err(LayoutError::Config(
                "Minimum text height must be positive".to_string(),
            ));
        }
        if fit.line_gap_mm < 0.0 || fit.padding_mm < 0.0 {
            return Err(LayoutError::Config(
                "Line gap and padding must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}
