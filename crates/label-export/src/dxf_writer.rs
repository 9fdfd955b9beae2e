//! DXF output
//!
//! Units are millimeters. Every model layer becomes a layer table entry and
//! entities keep their layer name.

use dxf::entities::{
    Circle, Entity as DxfEntity, EntityCommon, EntityType, Line, LwPolyline, Text,
};
use dxf::enums::AcadVersion;
use dxf::tables::Layer as DxfLayer;
use dxf::{Color, Drawing, LwPolylineVertex};
use label_layout::{Point, Polyline};

use crate::model::{DrawingModel, Entity};
use crate::types::Result;

fn dxf_point(point: Point) -> dxf::Point {
    dxf::Point::new(point.x, point.y, 0.0)
}

/// Vertices to write. A closed LWPOLYLINE joins its ends itself, so a
/// repeated start point is dropped.
fn lwpolyline_points(polyline: &Polyline) -> &[Point] {
    let points = polyline.points.as_slice();
    let repeats_start = match points {
        [first, .., last] => first.distance_to(*last) < 1e-9,
        _ => false,
    };
    if polyline.closed && repeats_start && points.len() > 2 {
        &points[..points.len() - 1]
    } else {
        points
    }
}

fn convert(entity: &Entity) -> EntityType {
    match entity {
        Entity::Line { from, to } => EntityType::Line(Line::new(dxf_point(*from), dxf_point(*to))),
        Entity::Circle { center, radius } => {
            EntityType::Circle(Circle::new(dxf_point(*center), *radius))
        }
        Entity::Polyline(polyline) => {
            let mut lw = LwPolyline::default();
            lw.vertices = lwpolyline_points(polyline)
                .iter()
                .map(|p| LwPolylineVertex {
                    x: p.x,
                    y: p.y,
                    ..Default::default()
                })
                .collect();
            lw.set_is_closed(polyline.closed);
            EntityType::LwPolyline(lw)
        }
        Entity::Text {
            origin,
            height,
            content,
        } => EntityType::Text(Text {
            location: dxf_point(*origin),
            text_height: *height,
            value: content.clone(),
            ..Default::default()
        }),
    }
}

/// Build a DXF drawing from the model
pub fn build_drawing(model: &DrawingModel) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2010;

    for layer in &model.layers {
        drawing.add_layer(DxfLayer {
            name: layer.name.clone(),
            color: Color::from_index(layer.aci),
            ..Default::default()
        });

        for entity in &layer.entities {
            let mut common = EntityCommon::default();
            common.layer = layer.name.clone();
            drawing.add_entity(DxfEntity {
                common,
                specific: convert(entity),
            });
        }
    }

    drawing
}

/// Serialize the model as DXF bytes
pub fn write_dxf(model: &DrawingModel) -> Result<Vec<u8>> {
    let drawing = build_drawing(model);
    let mut bytes = Vec::new();
    drawing.save(&mut bytes)?;
    Ok(bytes)
}
