//! Turn packed sheets and traced outlines into cut files
//!
//! Geometry is first assembled into a format-neutral [`DrawingModel`], then
//! handed to the DXF or PDF writer.

mod assemble;
pub mod color;
mod dxf_writer;
mod export;
mod model;
mod options;
mod pdf_writer;
mod types;

pub use assemble::{
    CUT_LAYER, ENGRAVE_LAYER, HOLES_LAYER, TRACE_LAYER, assemble_outline, assemble_sheet,
};
pub use dxf_writer::write_dxf;
pub use export::{
    ExportFormat, OutputFile, export_labels, export_trace, render_labels, render_trace,
    write_outputs,
};
pub use model::{DrawingModel, Entity, Layer};
pub use options::*;
pub use pdf_writer::write_pdf;
pub use types::*;
