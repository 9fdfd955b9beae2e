//! Raster tracing and path geometry
//!
//! A bitmap goes through a [`Tracer`] which yields compact path
//! descriptions. These are parsed into [`PathCommand`]s and flattened
//! into polylines by [`to_outline`].

pub mod flatten;
mod options;
mod outline;
pub mod path;
mod trace;
mod tracer;
mod types;

pub use flatten::{DEFAULT_CURVE_SEGMENTS, flatten};
pub use options::*;
pub use outline::{Outline, OutlineOptions, to_outline};
pub use path::{Coord, PathCommand, parse};
pub use trace::{trace_image, trace_path_data};
pub use tracer::{TracedPath, Tracer, VtracerTracer, parse_svg_paths};
pub use types::*;
