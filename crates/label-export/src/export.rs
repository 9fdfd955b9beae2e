//! Export orchestration
//!
//! Labels: pack per material group, assemble each sheet, then write one DXF
//! per sheet or one PDF per group. Traces: vectorize, flatten and write a
//! single DXF.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::DynamicImage;
use label_layout::{LabelSpec, pack_groups, sheet_file_stem};
use label_trace::{Tracer, trace_image};

use crate::assemble::{assemble_outline, assemble_sheet};
use crate::dxf_writer::write_dxf;
use crate::model::DrawingModel;
use crate::options::ExportOptions;
use crate::pdf_writer::write_pdf;
use crate::types::{ExportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One file per sheet
    #[default]
    Dxf,
    /// One multi-page file per material group
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Dxf => "dxf",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// A generated file waiting to be written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    /// File name including extension
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Pack and render labels into named files
pub fn render_labels(
    specs: &[LabelSpec],
    options: &ExportOptions,
    format: ExportFormat,
) -> Result<Vec<OutputFile>> {
    if specs.is_empty() {
        return Err(ExportError::EmptyInput);
    }
    options.validate()?;

    let layout = &options.layout;
    let groups = pack_groups(specs, &layout.sheet)?;
    let mut files = Vec::new();

    for group in &groups {
        let sheets = group.sheets();
        let Some(first) = sheets.first() else {
            continue;
        };

        let models: Vec<DrawingModel> = sheets
            .iter()
            .map(|sheet| assemble_sheet(sheet, &group.key, &layout.text_fit))
            .collect();

        match format {
            ExportFormat::Dxf => {
                for (sheet, model) in sheets.iter().zip(&models) {
                    files.push(OutputFile {
                        name: format!("{}.dxf", sheet_file_stem(&group.key, sheet.page)),
                        bytes: write_dxf(model)?,
                    });
                }
            }
            ExportFormat::Pdf => {
                let stem = sheet_file_stem(&group.key, first.page);
                files.push(OutputFile {
                    bytes: write_pdf(&stem, &models, options.trace.curve_segments)?,
                    name: format!("{}.pdf", stem),
                });
            }
        }
    }

    if files.is_empty() {
        return Err(ExportError::NothingGenerated);
    }

    log::info!(
        "Rendered {} {} files for {} material groups",
        files.len(),
        format.extension(),
        groups.len()
    );
    Ok(files)
}

/// Trace an image and render the outline as a DXF file named `<stem>.dxf`
pub async fn render_trace<T: Tracer>(
    tracer: Arc<T>,
    image: &DynamicImage,
    options: &ExportOptions,
    stem: &str,
) -> Result<OutputFile> {
    let gray = image.to_luma8();
    let (width, height) = (gray.width() as f64, gray.height() as f64);

    let outline = trace_image(tracer, gray, &options.trace).await?;
    let Some(bounds) = outline.bounds() else {
        return Err(ExportError::NothingGenerated);
    };
    log::debug!(
        "Traced {} polylines covering {:.1}x{:.1} at ({:.1}, {:.1})",
        outline.len(),
        bounds.width,
        bounds.height,
        bounds.x,
        bounds.y
    );

    let model = assemble_outline(&outline, width, height);
    Ok(OutputFile {
        name: format!("{}.dxf", stem),
        bytes: write_dxf(&model)?,
    })
}

/// Write generated files into `dir`, returning their paths
pub async fn write_outputs(files: &[OutputFile], dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let mut paths = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.name);
        tokio::fs::write(&path, &file.bytes).await?;
        paths.push(path);
    }
    Ok(paths)
}

/// Render labels off the async runtime and write them into `dir`
pub async fn export_labels(
    specs: &[LabelSpec],
    options: &ExportOptions,
    format: ExportFormat,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let specs = specs.to_vec();
    let options = options.clone();

    let files =
        tokio::task::spawn_blocking(move || render_labels(&specs, &options, format)).await??;

    write_outputs(&files, dir).await
}

/// Trace an image and write the resulting DXF into `dir`
pub async fn export_trace<T: Tracer>(
    tracer: Arc<T>,
    image: &DynamicImage,
    options: &ExportOptions,
    stem: &str,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let file = render_trace(tracer, image, options, stem).await?;
    let mut paths = write_outputs(std::slice::from_ref(&file), dir).await?;
    paths.pop().ok_or(ExportError::NothingGenerated)
}
