//! Shelf packing
//!
//! Labels fill rows left to right starting at the top-left corner of the
//! usable area. A row is as tall as its tallest label. When a label no
//! longer fits horizontally a new row starts below, and when a row would
//! cross the bottom margin a new sheet starts.
//!
//! The walk is a single deterministic pass over the specs, each expanded
//! into `quantity` copies in input order.

use std::sync::Arc;

use crate::geometry::Point;
use crate::options::SheetConfig;
use crate::types::{LabelSpec, LayoutError, Result};

use super::{GroupLayout, OversizeWarning, Packing, PlacedLabel, Sheet, group_by_material};

// =============================================================================
// Cursor
// =============================================================================

/// Position of the next placement on the current sheet
struct ShelfCursor {
    x: f64,
    /// Top edge of the current row
    y: f64,
    /// Height of the current row, 0 until the first label of the row lands
    row_height: f64,
    /// Labels already placed in the current row
    row_len: usize,
}

impl ShelfCursor {
    fn new(config: &SheetConfig) -> Self {
        Self {
            x: config.margin_mm,
            y: config.height_mm - config.margin_mm,
            row_height: 0.0,
            row_len: 0,
        }
    }

    fn wrap(&mut self, config: &SheetConfig, label_height: f64) {
        self.x = config.margin_mm;
        self.y -= self.row_height + config.gap_mm;
        self.row_height = label_height;
        self.row_len = 0;
    }

    fn advance(&mut self, config: &SheetConfig, label_width: f64, label_height: f64) {
        self.row_height = self.row_height.max(label_height);
        self.x += label_width + config.gap_mm;
        self.row_len += 1;
    }
}

// =============================================================================
// Packing
// =============================================================================

/// Find specs whose footprint exceeds the usable sheet area
pub fn find_oversized(specs: &[Arc<LabelSpec>], config: &SheetConfig) -> Vec<OversizeWarning> {
    let usable_width = config.usable_width();
    let usable_height = config.usable_height();

    specs
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.quantity > 0)
        .filter(|(_, spec)| spec.length_mm > usable_width || spec.height_mm > usable_height)
        .map(|(spec_index, spec)| OversizeWarning {
            spec_index,
            width_mm: spec.length_mm,
            height_mm: spec.height_mm,
            usable_width_mm: usable_width,
            usable_height_mm: usable_height,
        })
        .collect()
}

/// Pack one run of labels onto as many sheets as needed.
///
/// Specs are not checked for a common material; use [`pack_groups`] to
/// partition first. Oversized labels are placed anyway and reported in
/// [`Packing::warnings`].
pub fn pack(specs: &[Arc<LabelSpec>], config: &SheetConfig) -> Packing {
    let warnings = find_oversized(specs, config);
    for warning in &warnings {
        log::warn!("Oversized label, placing anyway: {}", warning);
    }

    let mut sheets = Vec::new();
    let mut current = Sheet::new(1, *config);
    let mut cursor = ShelfCursor::new(config);

    let copies = specs
        .iter()
        .flat_map(|spec| std::iter::repeat_n(spec, spec.quantity as usize));

    for spec in copies {
        let width = spec.length_mm;
        let height = spec.height_mm;

        if cursor.row_height == 0.0 {
            cursor.row_height = height;
        }

        // Row wrap: an empty row keeps the label even if it is too wide
        if cursor.row_len > 0 && cursor.x + width > config.width_mm - config.margin_mm {
            cursor.wrap(config, height);
        }

        // Sheet overflow: an empty sheet keeps the label even if it is too tall
        if !current.is_empty() && cursor.y - height < config.margin_mm {
            let next_page = current.page + 1;
            sheets.push(std::mem::replace(
                &mut current,
                Sheet::new(next_page, *config),
            ));
            cursor = ShelfCursor::new(config);
            cursor.row_height = height;
        }

        current.placements.push(PlacedLabel {
            spec: Arc::clone(spec),
            position: Point::new(cursor.x, cursor.y - height),
        });
        cursor.advance(config, width, height);
    }

    if !current.is_empty() {
        sheets.push(current);
    }

    log::debug!(
        "Packed {} labels onto {} sheets",
        sheets.iter().map(Sheet::len).sum::<usize>(),
        sheets.len()
    );

    Packing { sheets, warnings }
}

/// Partition specs by material and pack each group independently.
///
/// Page numbers restart at 1 for every group. Every spec must have a
/// positive size.
pub fn pack_groups(specs: &[LabelSpec], config: &SheetConfig) -> Result<Vec<GroupLayout>> {
    if specs.is_empty() {
        return Err(LayoutError::EmptyInput);
    }
    config.validate()?;

    if let Some(index) = specs.iter().position(|spec| !spec.has_valid_size()) {
        let spec = &specs[index];
        return Err(LayoutError::InvalidLabel(format!(
            "label {}: size must be positive, got {}x{}mm",
            index, spec.length_mm, spec.height_mm
        )));
    }

    Ok(group_by_material(specs)
        .into_iter()
        .map(|group| GroupLayout {
            packing: pack(&group.specs, config),
            key: group.key,
        })
        .collect())
}

// =============================================================================
// Tests
// =============================================================================
