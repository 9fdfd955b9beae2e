//! Async trace entry points
//!
//! Tracing is CPU bound, so the tracer runs on the blocking pool and is
//! awaited once. Dropping the returned future does not stop a trace that
//! has already started.

use std::collections::BTreeMap;
use std::sync::Arc;

use image::GrayImage;

use crate::options::TraceOptions;
use crate::outline::{Outline, OutlineOptions, to_outline};
use crate::path::parse;
use crate::tracer::{TracedPath, Tracer};
use crate::types::Result;

async fn run_tracer<T: Tracer>(
    tracer: Arc<T>,
    image: GrayImage,
    threshold: u8,
) -> Result<Vec<TracedPath>> {
    tokio::task::spawn_blocking(move || tracer.trace(&image, threshold)).await?
}

/// Trace `image` and flatten every shape into sheet-space polylines
pub async fn trace_image<T: Tracer>(
    tracer: Arc<T>,
    image: GrayImage,
    options: &TraceOptions,
) -> Result<Outline> {
    let canvas_height = image.height() as f64;
    let paths = run_tracer(tracer, image, options.threshold).await?;

    let mut outline = Outline::default();
    for path in &paths {
        let path_options = OutlineOptions {
            flip_y: options.flip_y,
            canvas_height,
            curve_segments: options.curve_segments,
            offset: path.offset,
        };
        outline.extend(to_outline(&parse(&path.data), &path_options));
    }

    log::info!(
        "Traced {} shapes into {} polylines",
        paths.len(),
        outline.len()
    );
    Ok(outline)
}

/// Trace `image` and return the tracer's raw path data by shape index.
///
/// Offsets the tracer attached to a shape are not applied.
pub async fn trace_path_data<T: Tracer>(
    tracer: Arc<T>,
    image: GrayImage,
    options: &TraceOptions,
) -> Result<BTreeMap<usize, String>> {
    let paths = run_tracer(tracer, image, options.threshold).await?;
    Ok(paths
        .into_iter()
        .map(|path| path.data)
        .enumerate()
        .collect())
}
