//! PDF output
//!
//! One page per drawing, sized to the drawing in millimeters. Closed
//! polylines on filled layers are painted in the layer color with a thin
//! black outline, everything else is stroked. Circles are approximated by
//! four cubic arcs.

use label_layout::Point;
use label_trace::flatten;
use printpdf::{
    BuiltinFont, Color, Line, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage, PdfSaveOptions,
    Polygon, PolygonRing, Pt, TextItem, TextMatrix, WindingOrder,
};

use crate::color::{BLACK, Rgb};
use crate::model::{DrawingModel, Entity, Layer};
use crate::types::{ExportError, Result};

/// Magic constant for approximating a quarter circle with one cubic
const KAPPA: f64 = 0.552_284_749_831;

/// Helvetica cap height as a fraction of the font size
const CAP_HEIGHT: f64 = 0.718;

const OUTLINE_PT: f32 = 0.25;

fn pdf_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.to_unit();
    Color::Rgb(printpdf::Rgb {
        r,
        g,
        b,
        icc_profile: None,
    })
}

fn line_point(point: Point) -> LinePoint {
    LinePoint {
        p: printpdf::Point::new(Mm(point.x as f32), Mm(point.y as f32)),
        bezier: false,
    }
}

/// Points along a full circle, ending where it starts
pub(crate) fn circle_points(center: Point, radius: f64, segments: usize) -> Vec<Point> {
    let k = KAPPA * radius;
    let (cx, cy) = (center.x, center.y);
    let quadrants = [
        [(radius, 0.0), (radius, k), (k, radius), (0.0, radius)],
        [(0.0, radius), (-k, radius), (-radius, k), (-radius, 0.0)],
        [(-radius, 0.0), (-radius, -k), (-k, -radius), (0.0, -radius)],
        [(0.0, -radius), (k, -radius), (radius, -k), (radius, 0.0)],
    ];

    let mut points = vec![Point::new(cx + radius, cy)];
    for [p0, p1, p2, p3] in quadrants {
        let at = |(dx, dy): (f64, f64)| Point::new(cx + dx, cy + dy);
        points.extend(flatten(at(p0), at(p1), at(p2), at(p3), segments));
    }
    points
}

struct PageBuilder {
    ops: Vec<Op>,
    curve_segments: usize,
}

impl PageBuilder {
    fn shape(&mut self, points: &[Point], closed: bool, layer: &Layer) {
        if points.len() < 2 {
            return;
        }
        let line_points: Vec<LinePoint> = points.iter().copied().map(line_point).collect();

        if closed && layer.filled {
            self.ops.push(Op::SetFillColor {
                col: pdf_color(layer.color),
            });
            self.ops.push(Op::SetOutlineColor {
                col: pdf_color(BLACK),
            });
            self.ops.push(Op::DrawPolygon {
                polygon: Polygon {
                    rings: vec![PolygonRing {
                        points: line_points,
                    }],
                    mode: PaintMode::FillStroke,
                    winding_order: WindingOrder::NonZero,
                },
            });
        } else {
            self.ops.push(Op::SetOutlineColor {
                col: pdf_color(layer.color),
            });
            self.ops.push(Op::DrawLine {
                line: Line {
                    points: line_points,
                    is_closed: closed,
                },
            });
        }
    }

    fn text(&mut self, origin: Point, height: f64, content: &str, layer: &Layer) {
        let size = Mm((height / CAP_HEIGHT) as f32).into_pt();
        self.ops.push(Op::SetFillColor {
            col: pdf_color(layer.color),
        });
        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size,
            font: BuiltinFont::Helvetica,
        });
        self.ops.push(Op::SetTextMatrix {
            matrix: TextMatrix::Translate(
                Mm(origin.x as f32).into_pt(),
                Mm(origin.y as f32).into_pt(),
            ),
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(content.to_string())],
            font: BuiltinFont::Helvetica,
        });
        self.ops.push(Op::EndTextSection);
    }

    fn layer(&mut self, layer: &Layer) {
        for entity in &layer.entities {
            match entity {
                Entity::Line { from, to } => self.shape(&[*from, *to], false, layer),
                Entity::Circle { center, radius } => {
                    let points = circle_points(*center, *radius, self.curve_segments);
                    self.shape(&points, true, layer);
                }
                Entity::Polyline(polyline) => self.shape(&polyline.points, polyline.closed, layer),
                Entity::Text {
                    origin,
                    height,
                    content,
                } => self.text(*origin, *height, content, layer),
            }
        }
    }
}

fn page(model: &DrawingModel, curve_segments: usize) -> PdfPage {
    let mut builder = PageBuilder {
        ops: vec![Op::SetOutlineThickness { pt: Pt(OUTLINE_PT) }],
        curve_segments,
    };
    for layer in &model.layers {
        builder.layer(layer);
    }

    PdfPage::new(
        Mm(model.width_mm as f32),
        Mm(model.height_mm as f32),
        builder.ops,
    )
}

/// Render each model as one page of a single document
pub fn write_pdf(title: &str, models: &[DrawingModel], curve_segments: usize) -> Result<Vec<u8>> {
    if models.is_empty() {
        return Err(ExportError::NothingGenerated);
    }

    let mut doc = PdfDocument::new(title);
    let pages: Vec<PdfPage> = models.iter().map(|m| page(m, curve_segments)).collect();
    doc.pages.extend(pages);

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("PDF writer reported {} warnings", warnings.len());
    }
    Ok(bytes)
}
