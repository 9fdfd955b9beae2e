pub mod geometry;
pub mod holes;
mod io;
pub mod layout;
mod naming;
mod options;
mod stats;
pub mod text_fit;
mod types;

pub mod constants;

pub use geometry::{Point, Polyline, Rect};
pub use holes::{Hole, plan_holes};
#[cfg(feature = "serde")]
pub use io::load_labels_json;
pub use io::{load_labels, load_labels_csv, parse_labels_csv};
pub use layout::{
    GroupLayout, MaterialGroup, OversizeWarning, Packing, PlacedLabel, Sheet, group_by_material,
    pack, pack_groups,
};
pub use naming::{sheet_file_stem, style_suffix};
pub use options::*;
pub use stats::{PackStatistics, calculate_statistics};
pub use text_fit::{FittedLine, estimate_width, fit_height, layout_lines};
pub use types::*;
