//! Layout data types
//!
//! These types are the output of packing and the input of vector assembly.

use std::sync::Arc;

use crate::geometry::{Point, Rect};
use crate::holes::{Hole, plan_holes};
use crate::options::SheetConfig;
use crate::types::{LabelSpec, MaterialKey};

/// One copy of a label at its final sheet position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    /// Shared with every other copy of the same spec
    pub spec: Arc<LabelSpec>,
    /// Lower-left corner in sheet space
    pub position: Point,
}

impl PlacedLabel {
    /// Footprint of the label on the sheet
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.spec.length_mm,
            self.spec.height_mm,
        )
    }

    /// Perforations of this copy in sheet space
    pub fn holes(&self) -> Vec<Hole> {
        plan_holes(
            &self.spec.perforation,
            self.spec.length_mm,
            self.spec.height_mm,
        )
        .into_iter()
        .map(|hole| hole.translate(self.position.x, self.position.y))
        .collect()
    }
}

/// A single material sheet and the labels placed on it
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// 1-based, restarting for every material group
    pub page: usize,
    pub config: SheetConfig,
    pub placements: Vec<PlacedLabel>,
}

impl Sheet {
    pub fn new(page: usize, config: SheetConfig) -> Self {
        Self {
            page,
            config,
            placements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Fraction of the sheet area covered by labels
    pub fn utilisation(&self) -> f64 {
        let used: f64 = self.placements.iter().map(|p| p.rect().area()).sum();
        used / self.config.area()
    }
}

/// A label spec that cannot fit the usable sheet area.
/// Its copies are placed anyway.
#[derive(Debug, Clone, PartialEq)]
pub struct OversizeWarning {
    /// Index into the packed spec list
    pub spec_index: usize,
    pub width_mm: f64,
    pub height_mm: f64,
    pub usable_width_mm: f64,
    pub usable_height_mm: f64,
}

impl std::fmt::Display for OversizeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "label {} is {}x{}mm but the usable sheet area is {}x{}mm",
            self.spec_index,
            self.width_mm,
            self.height_mm,
            self.usable_width_mm,
            self.usable_height_mm
        )
    }
}

/// Result of packing one run of labels
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Packing {
    pub sheets: Vec<Sheet>,
    pub warnings: Vec<OversizeWarning>,
}

impl Packing {
    /// Total number of label copies placed
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(Sheet::len).sum()
    }
}

/// Labels sharing one material key, in their original order
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialGroup {
    pub key: MaterialKey,
    pub specs: Vec<Arc<LabelSpec>>,
}

/// Packed sheets of one material group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    pub key: MaterialKey,
    pub packing: Packing,
}

impl GroupLayout {
    pub fn sheets(&self) -> &[Sheet] {
        &self.packing.sheets
    }
}
