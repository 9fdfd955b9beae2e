//! Format-neutral drawing model

use label_layout::{Point, Polyline};

use crate::color::Rgb;

/// A drawing primitive in sheet space (mm, y up)
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line {
        from: Point,
        to: Point,
    },
    Circle {
        center: Point,
        radius: f64,
    },
    Polyline(Polyline),
    /// Single-line text run with its baseline starting at `origin`
    Text {
        origin: Point,
        height: f64,
        content: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub color: Rgb,
    /// AutoCAD color index for DXF output
    pub aci: u8,
    /// Closed shapes are filled with `color` in print output
    pub filled: bool,
    pub entities: Vec<Entity>,
}

impl Layer {
    pub fn new(name: impl Into<String>, color: Rgb, aci: u8) -> Self {
        Self {
            name: name.into(),
            color,
            aci,
            filled: false,
            entities: Vec::new(),
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }
}

/// Layers in insertion order, each holding its entities in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingModel {
    pub width_mm: f64,
    pub height_mm: f64,
    pub layers: Vec<Layer>,
}

impl DrawingModel {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            layers: Vec::new(),
        }
    }

    /// Add a layer, replacing the style of an existing layer with the same
    /// name but keeping its entities
    pub fn add_layer(&mut self, layer: Layer) {
        match self.layers.iter_mut().find(|l| l.name == layer.name) {
            Some(existing) => {
                existing.color = layer.color;
                existing.aci = layer.aci;
                existing.filled = layer.filled;
                existing.entities.extend(layer.entities);
            }
            None => self.layers.push(layer),
        }
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Append an entity to the named layer. Returns `false` when no such
    /// layer exists.
    pub fn push(&mut self, layer: &str, entity: Entity) -> bool {
        match self.layers.iter_mut().find(|l| l.name == layer) {
            Some(layer) => {
                layer.entities.push(entity);
                true
            }
            None => false,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.layers.iter().map(|l| l.entities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}
