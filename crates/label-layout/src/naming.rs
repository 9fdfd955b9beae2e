use crate::constants::NON_ADHESIVE_SUFFIX;
use crate::types::{AdhesiveStyle, MaterialKey};

/// Suffix appended after the thickness in output names
pub fn style_suffix(style: AdhesiveStyle) -> &'static str {
    match style {
        AdhesiveStyle::Adhesive => "",
        AdhesiveStyle::NonAdhesive => NON_ADHESIVE_SUFFIX,
    }
}

/// Output name for one sheet of a material group, without extension.
///
/// Format: `<text color> on <background color> <thickness><style suffix> <page>`
/// with the page zero-padded to two digits.
pub fn sheet_file_stem(key: &MaterialKey, page: usize) -> String {
    format!(
        "{} on {} {}{} {:02}",
        key.text_color,
        key.background_color,
        key.thickness_mm,
        style_suffix(key.style),
        page
    )
}
