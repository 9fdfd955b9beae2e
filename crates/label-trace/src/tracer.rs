//! Bitmap vectorization backend
//!
//! The rest of the crate only sees the [`Tracer`] trait. [`VtracerTracer`]
//! thresholds the image, runs vtracer in binary mode and reads the path
//! elements back out of the generated SVG.

use image::GrayImage;
use label_layout::Point;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use vtracer::{ColorImage, ColorMode, Config, Hierarchical};

use crate::types::{Result, TraceError};

/// One shape produced by a tracer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TracedPath {
    /// Path data in the tracer's pixel space, y pointing down
    pub data: String,
    /// Translation the tracer attached to the shape
    pub offset: Point,
}

/// Converts a grayscale bitmap into path descriptions.
///
/// Implementations block the calling thread; async callers go through
/// [`crate::trace_image`].
pub trait Tracer: Send + Sync + 'static {
    /// Pixels darker than `threshold` are traced as foreground
    fn trace(&self, image: &GrayImage, threshold: u8) -> Result<Vec<TracedPath>>;
}

/// vtracer with fixed settings tuned for engraving artwork
#[derive(Debug, Clone)]
pub struct VtracerTracer {
    pub filter_speckle: usize,
    pub corner_threshold: i32,
    pub length_threshold: f64,
    pub splice_threshold: i32,
    pub path_precision: u32,
}

impl Default for VtracerTracer {
    fn default() -> Self {
        Self {
            filter_speckle: 4,
            corner_threshold: 60,
            length_threshold: 4.0,
            splice_threshold: 45,
            path_precision: 3,
        }
    }
}

impl VtracerTracer {
    fn config(&self) -> Config {
        Config {
            color_mode: ColorMode::Binary,
            hierarchical: Hierarchical::Stacked,
            filter_speckle: self.filter_speckle,
            corner_threshold: self.corner_threshold,
            length_threshold: self.length_threshold,
            splice_threshold: self.splice_threshold,
            path_precision: Some(self.path_precision),
            ..Default::default()
        }
    }
}

/// Expand a grayscale image to the RGBA layout vtracer expects, snapping
/// every pixel to pure black or white
fn binarize(image: &GrayImage, threshold: u8) -> ColorImage {
    let mut pixels = Vec::with_capacity(image.as_raw().len() * 4);
    for &luma in image.as_raw() {
        let value = if luma < threshold { 0 } else { 255 };
        pixels.extend_from_slice(&[value, value, value, 255]);
    }

    ColorImage {
        pixels,
        width: image.width() as usize,
        height: image.height() as usize,
    }
}

impl Tracer for VtracerTracer {
    fn trace(&self, image: &GrayImage, threshold: u8) -> Result<Vec<TracedPath>> {
        if image.width() == 0 || image.height() == 0 {
            return Err(TraceError::EmptyImage(image.width(), image.height()));
        }

        let svg = vtracer::convert(binarize(image, threshold), self.config())
            .map_err(TraceError::Vectorize)?;
        let paths = parse_svg_paths(&svg.to_string())?;

        log::debug!(
            "Traced {}x{} image into {} paths",
            image.width(),
            image.height(),
            paths.len()
        );
        Ok(paths)
    }
}

// =============================================================================
// SVG reading
// =============================================================================

/// Pull every dark `<path>` out of an SVG document
pub fn parse_svg_paths(svg: &str) -> Result<Vec<TracedPath>> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(true);

    let mut paths = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"path" {
                    paths.extend(read_path(e));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(TraceError::Svg(format!(
                    "XML parse error at position {}: {}",
                    reader.error_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(paths)
}

fn read_path(element: &BytesStart) -> Option<TracedPath> {
    let mut data = None;
    let mut offset = Point::default();
    let mut light = false;

    for attr in element.attributes().flatten() {
        let value = std::str::from_utf8(&attr.value).unwrap_or("");
        match attr.key.as_ref() {
            b"d" => data = Some(value.to_string()),
            b"transform" => offset = parse_translate(value).unwrap_or_default(),
            b"fill" => light = is_light(value),
            _ => {}
        }
    }

    match data {
        Some(data) if !light && !data.trim().is_empty() => Some(TracedPath { data, offset }),
        _ => None,
    }
}

/// `translate(x,y)` or `translate(x y)`
fn parse_translate(value: &str) -> Option<Point> {
    let inner = value.trim().strip_prefix("translate(")?.split(')').next()?;
    let mut parts = inner
        .split([',', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| part.trim().parse::<f64>());

    let x = parts.next()?.ok()?;
    let y = match parts.next() {
        Some(y) => y.ok()?,
        None => 0.0,
    };
    Some(Point::new(x, y))
}

/// Background fills that should not be cut
fn is_light(fill: &str) -> bool {
    let fill = fill.trim();
    if fill.eq_ignore_ascii_case("white") {
        return true;
    }

    let channels = if let Some(hex) = fill.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(rgb) = fill.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let values: Vec<u8> = rgb
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect();
        match values.as_slice() {
            [r, g, b] => Some((*r, *g, *b)),
            _ => None,
        }
    } else {
        None
    };

    matches!(channels, Some((r, g, b)) if r > 200 && g > 200 && b > 200)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => Some((
            u8::from_str_radix(&hex[0..1], 16).ok()? * 17,
            u8::from_str_radix(&hex[1..2], 16).ok()? * 17,
            u8::from_str_radix(&hex[2..3], 16).ok()? * 17,
        )),
        _ => None,
    }
}
