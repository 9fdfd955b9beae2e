mod logger;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use label_export::{ExportFormat, ExportOptions};
use label_trace::VtracerTracer;
use logger::StderrLogger;

#[derive(Parser)]
#[command(
    name = "labelt",
    about = "Label sheet layout and cut file export",
    version
)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON options file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SheetArgs {
    /// Sheet width in mm
    #[arg(long)]
    sheet_width: Option<f64>,

    /// Sheet height in mm
    #[arg(long)]
    sheet_height: Option<f64>,

    /// Keep-out border in mm
    #[arg(long)]
    margin: Option<f64>,

    /// Spacing between labels in mm
    #[arg(long)]
    gap: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack labels onto sheets and print statistics
    Pack {
        /// Label list (.json or .csv)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        sheet: SheetArgs,
    },

    /// Pack labels and write cut files
    Export {
        /// Label list (.json or .csv)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(long, default_value = "dxf", value_enum)]
        format: FormatArg,

        #[command(flatten)]
        sheet: SheetArgs,
    },

    /// Trace a bitmap into a DXF outline
    Trace {
        /// Input image (PNG or JPEG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Output file name without extension (defaults to the input name)
        #[arg(long)]
        name: Option<String>,

        /// Luminance threshold for foreground pixels
        #[arg(long)]
        threshold: Option<u8>,

        /// Line segments per curve
        #[arg(long)]
        curve_segments: Option<usize>,

        /// Keep raster orientation (y down)
        #[arg(long)]
        no_flip: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Dxf,
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Dxf => Self::Dxf,
            FormatArg::Pdf => Self::Pdf,
        }
    }
}

impl SheetArgs {
    fn apply(&self, options: &mut ExportOptions) {
        let sheet = &mut options.layout.sheet;
        if let Some(width) = self.sheet_width {
            sheet.width_mm = width;
        }
        if let Some(height) = self.sheet_height {
            sheet.height_mm = height;
        }
        if let Some(margin) = self.margin {
            sheet.margin_mm = margin;
        }
        if let Some(gap) = self.gap {
            sheet.gap_mm = gap;
        }
    }
}

async fn load_options(path: Option<&Path>) -> Result<ExportOptions> {
    match path {
        Some(path) => ExportOptions::load(path)
            .await
            .with_context(|| format!("Failed to load options from {}", path.display())),
        None => Ok(ExportOptions::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::from_verbosity(cli.verbose).init()?;

    let mut options = load_options(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Pack { input, sheet } => {
            sheet.apply(&mut options);
            options.validate()?;

            let specs = label_layout::load_labels(&input).await?;
            let groups = label_layout::pack_groups(&specs, &options.layout.sheet)?;
            let stats = label_layout::calculate_statistics(&specs, &groups);

            println!("Packing Statistics:");
            println!("  Material groups: {}", stats.groups);
            println!("  Labels requested: {}", stats.labels_requested);
            println!("  Labels placed: {}", stats.labels_placed);
            println!("  Sheets: {}", stats.sheets);
            println!(
                "  Mean utilisation: {:.1}%",
                stats.mean_utilisation() * 100.0
            );
            if stats.oversized > 0 {
                println!("  Oversized labels: {}", stats.oversized);
            }
            for group in &groups {
                let key = &group.key;
                println!(
                    "  {} on {}, {}mm {}:",
                    key.text_color,
                    key.background_color,
                    key.thickness_mm,
                    key.style.name()
                );
                for sheet in group.sheets() {
                    println!(
                        "    {}: {} labels, {:.1}% used",
                        label_layout::sheet_file_stem(&group.key, sheet.page),
                        sheet.len(),
                        sheet.utilisation() * 100.0
                    );
                }
            }
        }

        Commands::Export {
            input,
            output,
            format,
            sheet,
        } => {
            sheet.apply(&mut options);

            let specs = label_layout::load_labels(&input).await?;
            let paths =
                label_export::export_labels(&specs, &options, format.into(), &output).await?;
            for path in &paths {
                println!("  {}", path.display());
            }
            println!("Exported {} files → {}", paths.len(), output.display());
        }

        Commands::Trace {
            input,
            output,
            name,
            threshold,
            curve_segments,
            no_flip,
        } => {
            if let Some(threshold) = threshold {
                options.trace.threshold = threshold;
            }
            if let Some(segments) = curve_segments {
                options.trace.curve_segments = segments;
            }
            if no_flip {
                options.trace.flip_y = false;
            }

            let stem = match name {
                Some(name) => name,
                None => input
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("trace")
                    .to_string(),
            };

            let image = image::open(&input)
                .with_context(|| format!("Failed to open image {}", input.display()))?;
            let path = label_export::export_trace(
                Arc::new(VtracerTracer::default()),
                &image,
                &options,
                &stem,
                &output,
            )
            .await?;
            println!("Traced {} → {}", input.display(), path.display());
        }
    }

    Ok(())
}
