use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid label record: {0}")]
    InvalidLabel(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No labels to lay out")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Backing material of a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AdhesiveStyle {
    /// Self-adhesive backing (the common case)
    #[default]
    Adhesive,
    /// Plain backing, screwed or riveted through perforations
    NonAdhesive,
}

impl AdhesiveStyle {
    pub fn name(self) -> &'static str {
        match self {
            AdhesiveStyle::Adhesive => "adhesive",
            AdhesiveStyle::NonAdhesive => "non-adhesive",
        }
    }

    /// Parse a style name as it appears in CSV input
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "adhesive" => Some(AdhesiveStyle::Adhesive),
            "non-adhesive" | "nonadhesive" | "none" | "na" => Some(AdhesiveStyle::NonAdhesive),
            _ => None,
        }
    }
}

/// Shape of a perforation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HoleShape {
    #[default]
    Circle,
    Square,
}

/// Perforation pattern punched through each copy of a label
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Perforation {
    /// Number of holes (0 disables the pattern)
    pub count: u32,
    /// Hole diameter, or side length for squares
    pub size_mm: f64,
    /// Inset of the outer hole centers from the label edges
    pub distance_mm: f64,
    pub shape: HoleShape,
    /// Square width override
    pub square_width_mm: Option<f64>,
    /// Square height override
    pub square_height_mm: Option<f64>,
}

/// One line of text engraved on a label
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextLine {
    pub content: String,
    /// Requested cap height before fitting
    pub size_mm: f64,
}

impl TextLine {
    pub fn new(content: impl Into<String>, size_mm: f64) -> Self {
        Self {
            content: content.into(),
            size_mm,
        }
    }
}

/// Declarative description of a label and how many copies to cut
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LabelSpec {
    /// Horizontal extent on the sheet
    pub length_mm: f64,
    pub height_mm: f64,
    pub thickness_mm: f64,
    pub background_color: String,
    pub text_color: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: AdhesiveStyle,
    pub quantity: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub perforation: Perforation,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lines: Vec<TextLine>,
}

impl LabelSpec {
    /// A plain label with no text and no holes
    pub fn new(length_mm: f64, height_mm: f64, quantity: u32) -> Self {
        Self {
            length_mm,
            height_mm,
            thickness_mm: 1.6,
            background_color: "white".to_string(),
            text_color: "black".to_string(),
            style: AdhesiveStyle::Adhesive,
            quantity,
            perforation: Perforation::default(),
            lines: Vec::new(),
        }
    }

    /// Length and height are both finite and greater than zero
    pub fn has_valid_size(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        positive(self.length_mm) && positive(self.height_mm)
    }

    /// The material run this label is cut from
    pub fn material_key(&self) -> MaterialKey {
        MaterialKey {
            text_color: self.text_color.clone(),
            background_color: self.background_color.clone(),
            thickness_mm: self.thickness_mm,
            style: self.style,
        }
    }
}

/// Physical sheet attributes shared by every label cut from the same run
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialKey {
    pub text_color: String,
    pub background_color: String,
    pub thickness_mm: f64,
    pub style: AdhesiveStyle,
}
