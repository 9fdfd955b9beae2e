//! Label list loading
//!
//! CSV columns: `length,height,thickness,background,text_color,style,quantity,lines`.
//! `lines` holds the text lines separated by `|`; each line may carry its own
//! size as `content@size`, otherwise it is sized from the label height and
//! the number of lines. Perforations are only available through JSON.

use std::path::Path;

use crate::types::{AdhesiveStyle, LabelSpec, LayoutError, Perforation, Result, TextLine};

const COLUMNS: usize = 8;

/// Load a JSON array of label specs
#[cfg(feature = "serde")]
pub async fn load_labels_json(path: impl AsRef<Path>) -> Result<Vec<LabelSpec>> {
    let contents = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&contents)
        .map_err(|e| LayoutError::InvalidLabel(format!("Failed to parse label list: {}", e)))
}

/// Load labels from a CSV file with a header row
pub async fn load_labels_csv(path: impl AsRef<Path>) -> Result<Vec<LabelSpec>> {
    let contents = tokio::fs::read_to_string(path).await?;
    tokio::task::spawn_blocking(move || parse_labels_csv(&contents)).await?
}

/// Load labels, picking the format from the file extension
pub async fn load_labels(path: impl AsRef<Path>) -> Result<Vec<LabelSpec>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => load_labels_csv(path).await,
        #[cfg(feature = "serde")]
        Some("json") => load_labels_json(path).await,
        _ => Err(LayoutError::InvalidLabel(format!(
            "Unsupported label file: {}",
            path.display()
        ))),
    }
}

/// Parse CSV label records. The first row is a header and is skipped.
pub fn parse_labels_csv(contents: &str) -> Result<Vec<LabelSpec>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let mut specs = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;

        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() < COLUMNS - 1 {
            return Err(LayoutError::InvalidLabel(format!(
                "line {}: expected {} columns, found {}",
                line,
                COLUMNS,
                record.len()
            )));
        }

        let height = number(&record[1], "height", line)?;
        let style = AdhesiveStyle::from_name(&record[5]).ok_or_else(|| {
            LayoutError::InvalidLabel(format!("line {}: unknown style '{}'", line, &record[5]))
        })?;
        let quantity = record[6].parse::<u32>().map_err(|_| {
            LayoutError::InvalidLabel(format!("line {}: invalid quantity '{}'", line, &record[6]))
        })?;

        specs.push(LabelSpec {
            length_mm: number(&record[0], "length", line)?,
            height_mm: height,
            thickness_mm: number(&record[2], "thickness", line)?,
            background_color: record[3].to_string(),
            text_color: record[4].to_string(),
            style,
            quantity,
            perforation: Perforation::default(),
            lines: parse_lines(record.get(7).unwrap_or(""), height, line)?,
        });
    }

    log::debug!("Parsed {} label records", specs.len());
    Ok(specs)
}

fn number(field: &str, name: &str, line: usize) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => {
            let message = format!("line {}: invalid {} '{}'", line, name, field);
            Err(LayoutError::InvalidLabel(message))
        }
    }
}

fn parse_lines(field: &str, label_height: f64, line: usize) -> Result<Vec<TextLine>> {
    let parts: Vec<&str> = field
        .split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return Ok(Vec::new());
    }

    // Share the height between lines, leaving room for the gaps
    let default_size = label_height * 0.5 / parts.len() as f64;

    parts
        .into_iter()
        .map(|part| match part.rsplit_once('@') {
            Some((content, size)) => {
                let size_mm = number(size.trim(), "text size", line)?;
                Ok(TextLine::new(content.trim(), size_mm))
            }
            None => Ok(TextLine::new(part, default_size)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "length,height,thickness,background,text_color,style,quantity,lines\n";

    #[test]
    fn test_parse_basic_record() {
        let csv = format!("{}80,20,1.6,white,black,adhesive,4,PUMP 1|240V@3\n", HEADER);
        let specs = parse_labels_csv(&csv).unwrap();

        assert_eq!(specs.len(), 1);
        let spec = &specs[0];
        assert_eq!(spec.length_mm, 80.0);
        assert_eq!(spec.height_mm, 20.0);
        assert_eq!(spec.quantity, 4);
        assert_eq!(spec.style, AdhesiveStyle::Adhesive);
        assert_eq!(
            spec.lines,
            vec![TextLine::new("PUMP 1", 5.0), TextLine::new("240V", 3.0)]
        );
    }

    #[test]
    fn test_missing_lines_column() {
        let csv = format!("{}30,10,0.8,red,white,na,1\n", HEADER);
        let specs = parse_labels_csv(&csv).unwrap();
        assert_eq!(specs[0].style, AdhesiveStyle::NonAdhesive);
        assert!(specs[0].lines.is_empty());
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let csv = format!("{}30,10,0.8,red,white,,1,A\n,,,,,,,\n", HEADER);
        assert_eq!(parse_labels_csv(&csv).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_records() {
        let bad_quantity = format!("{}30,10,0.8,red,white,,-1,A\n", HEADER);
        assert!(matches!(
            parse_labels_csv(&bad_quantity),
            Err(LayoutError::InvalidLabel(_))
        ));

        let bad_style = format!("{}30,10,0.8,red,white,glue,1,A\n", HEADER);
        assert!(matches!(
            parse_labels_csv(&bad_style),
            Err(LayoutError::InvalidLabel(_))
        ));

        let short = format!("{}30,10,0.8\n", HEADER);
        assert!(matches!(
            parse_labels_csv(&short),
            Err(LayoutError::InvalidLabel(_))
        ));
    }
}
