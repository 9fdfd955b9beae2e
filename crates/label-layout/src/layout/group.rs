//! Material grouping
//!
//! Labels are partitioned by the physical attributes of the sheet they are
//! cut from. The partition is stable: groups appear in order of their first
//! label and keep the input order inside.

use std::sync::Arc;

use crate::types::LabelSpec;

use super::MaterialGroup;

/// Partition specs by material key
pub fn group_by_material(specs: &[LabelSpec]) -> Vec<MaterialGroup> {
    let mut groups: Vec<MaterialGroup> = Vec::new();

    for spec in specs {
        let key = spec.material_key();
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.specs.push(Arc::new(spec.clone())),
            None => groups.push(MaterialGroup {
                key,
                specs: vec![Arc::new(spec.clone())],
            }),
        }
    }

    log::debug!(
        "Grouped {} label specs into {} material groups",
        specs.len(),
        groups.len()
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AdhesiveStyle;

    fn spec(text: &str, background: &str, thickness: f64) -> LabelSpec {
        LabelSpec {
            text_color: text.to_string(),
            background_color: background.to_string(),
            thickness_mm: thickness,
            ..LabelSpec::new(20.0, 10.0, 1)
        }
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let specs = vec![
            spec("white", "black", 1.6),
            spec("black", "white", 1.6),
            spec("white", "black", 1.6),
            spec("white", "black", 0.8),
        ];

        let groups = group_by_material(&specs);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].specs.len(), 2);
        assert_eq!(groups[0].key.text_color, "white");
        assert_eq!(groups[1].key.text_color, "black");
        assert_eq!(groups[2].key.thickness_mm, 0.8);
    }

    #[test]
    fn test_style_splits_groups() {
        let mut plain = spec("white", "black", 1.6);
        plain.style = AdhesiveStyle::NonAdhesive;
        let specs = vec![spec("white", "black", 1.6), plain];

        assert_eq!(group_by_material(&specs).len(), 2);
    }

    #[test]
    fn test_order_within_group_is_stable() {
        let mut specs = Vec::new();
        for i in 0..5 {
            let mut s = spec("white", "black", 1.6);
            s.length_mm = 10.0 + i as f64;
            specs.push(s);
        }

        let groups = group_by_material(&specs);
        let lengths: Vec<f64> = groups[0].specs.iter().map(|s| s.length_mm).collect();
        assert_eq!(lengths, vec![10.0, 11.0, 12.0, 13.0, 14.0]);
    }
}
