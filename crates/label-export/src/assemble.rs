//! Vector assembly
//!
//! Packed sheets become one drawing each: label outlines on `CUT`,
//! perforations on `HOLES` and fitted text on `ENGRAVE`. Traced outlines go
//! onto a single `TRACE` layer.

use label_layout::{Hole, MaterialKey, Sheet, TextFitConfig, layout_lines};
use label_trace::Outline;

use crate::color::{self, WHITE};
use crate::model::{DrawingModel, Entity, Layer};

pub const CUT_LAYER: &str = "CUT";
pub const HOLES_LAYER: &str = "HOLES";
pub const ENGRAVE_LAYER: &str = "ENGRAVE";
pub const TRACE_LAYER: &str = "TRACE";

/// Build the drawing for one packed sheet of material `key`
pub fn assemble_sheet(sheet: &Sheet, key: &MaterialKey, text_fit: &TextFitConfig) -> DrawingModel {
    let background = color::resolve(&key.background_color, color::white());
    let text = color::resolve(&key.text_color, color::black());

    let mut model = DrawingModel::new(sheet.config.width_mm, sheet.config.height_mm);
    model.add_layer(Layer::new(CUT_LAYER, background.rgb, background.aci).filled());
    model.add_layer(Layer::new(HOLES_LAYER, WHITE, color::white().aci).filled());
    model.add_layer(Layer::new(ENGRAVE_LAYER, text.rgb, text.aci));

    for placed in &sheet.placements {
        model.push(CUT_LAYER, Entity::Polyline(placed.rect().to_polyline()));

        for hole in placed.holes() {
            let entity = match hole {
                Hole::Circle { center, radius } => Entity::Circle { center, radius },
                Hole::Square { .. } => match hole.outline() {
                    Some(outline) => Entity::Polyline(outline),
                    None => continue,
                },
            };
            model.push(HOLES_LAYER, entity);
        }

        let spec = &placed.spec;
        for line in layout_lines(&spec.lines, spec.length_mm, spec.height_mm, text_fit) {
            model.push(
                ENGRAVE_LAYER,
                Entity::Text {
                    origin: line.origin.offset(placed.position.x, placed.position.y),
                    height: line.height_mm,
                    content: line.content,
                },
            );
        }
    }

    log::debug!(
        "Assembled sheet {} with {} entities",
        sheet.page,
        model.entity_count()
    );
    model
}

/// Build the drawing for a traced outline on a `width` x `height` canvas
pub fn assemble_outline(outline: &Outline, width_mm: f64, height_mm: f64) -> DrawingModel {
    let black = color::black();
    let mut model = DrawingModel::new(width_mm, height_mm);
    model.add_layer(Layer::new(TRACE_LAYER, black.rgb, black.aci));

    for polyline in &outline.polylines {
        model.push(TRACE_LAYER, Entity::Polyline(polyline.clone()));
    }
    model
}
