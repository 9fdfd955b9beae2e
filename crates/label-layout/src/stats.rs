use crate::layout::GroupLayout;
use crate::types::LabelSpec;

/// Summary of a packing run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackStatistics {
    pub groups: usize,
    /// Sum of all quantities
    pub labels_requested: usize,
    pub labels_placed: usize,
    pub sheets: usize,
    /// Specs that exceed the usable sheet area
    pub oversized: usize,
    /// Covered fraction of each sheet, in group then page order
    pub utilisation: Vec<f64>,
}

impl PackStatistics {
    pub fn mean_utilisation(&self) -> f64 {
        if self.utilisation.is_empty() {
            return 0.0;
        }
        self.utilisation.iter().sum::<f64>() / self.utilisation.len() as f64
    }
}

/// Calculate statistics for the packed groups of `specs`
pub fn calculate_statistics(specs: &[LabelSpec], groups: &[GroupLayout]) -> PackStatistics {
    let labels_requested = specs.iter().map(|spec| spec.quantity as usize).sum();

    let mut stats = PackStatistics {
        groups: groups.len(),
        labels_requested,
        ..Default::default()
    };

    for group in groups {
        stats.labels_placed += group.packing.placed_count();
        stats.sheets += group.packing.sheets.len();
        stats.oversized += group.packing.warnings.len();
        stats
            .utilisation
            .extend(group.packing.sheets.iter().map(|sheet| sheet.utilisation()));
    }

    stats
}
