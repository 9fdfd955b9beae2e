use label_layout::*;

fn colored(width: f64, height: f64, quantity: u32, background: &str) -> LabelSpec {
    LabelSpec {
        background_color: background.to_string(),
        ..LabelSpec::new(width, height, quantity)
    }
}

fn padded_sheet() -> SheetConfig {
    SheetConfig::new(200.0, 100.0)
        .with_margin(3.0)
        .with_gap(2.0)
}

fn mixed_specs() -> Vec<LabelSpec> {
    vec![
        colored(40.0, 15.0, 7, "white"),
        colored(25.0, 30.0, 4, "red"),
        colored(60.0, 10.0, 12, "white"),
        colored(15.0, 15.0, 20, "red"),
        colored(90.0, 45.0, 3, "white"),
    ]
}

#[test]
fn test_placed_count_matches_quantities() {
    let specs = mixed_specs();
    let config = padded_sheet();
    let groups = pack_groups(&specs, &config).unwrap();

    let placed: usize = groups.iter().map(|g| g.packing.placed_count()).sum();
    let requested: u32 = specs.iter().map(|s| s.quantity).sum();
    assert_eq!(placed, requested as usize);
}

#[test]
fn test_no_overlap_within_sheet() {
    let config = padded_sheet();
    let groups = pack_groups(&mixed_specs(), &config).unwrap();

    for group in &groups {
        for sheet in group.sheets() {
            let rects: Vec<Rect> = sheet.placements.iter().map(PlacedLabel::rect).collect();
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
                }
            }
        }
    }
}

#[test]
fn test_labels_stay_inside_margins() {
    let config = padded_sheet();
    let groups = pack_groups(&mixed_specs(), &config).unwrap();

    for sheet in groups.iter().flat_map(|g| g.sheets()) {
        for rect in sheet.placements.iter().map(PlacedLabel::rect) {
            assert!(rect.x >= 3.0 - 1e-9);
            assert!(rect.y >= 3.0 - 1e-9);
            assert!(rect.right() <= 197.0 + 1e-9);
            assert!(rect.top() <= 97.0 + 1e-9);
        }
    }
}

#[test]
fn test_shelf_ordering() {
    let config = SheetConfig::new(200.0, 100.0).with_gap(1.0);
    let groups = pack_groups(&mixed_specs(), &config).unwrap();

    for sheet in groups.iter().flat_map(|g| g.sheets()) {
        let mut previous: Option<&PlacedLabel> = None;
        for placed in &sheet.placements {
            if let Some(prev) = previous {
                let same_row = prev.rect().top() == placed.rect().top();
                if same_row {
                    assert!(placed.position.x > prev.position.x);
                } else {
                    // A new row starts at the left edge, below the previous row
                    assert_eq!(placed.position.x, 0.0);
                    assert!(placed.rect().top() < prev.rect().top());
                }
            }
            previous = Some(placed);
        }
    }
}

#[test]
fn test_groups_never_share_sheets() {
    let config = SheetConfig::new(200.0, 100.0);
    let groups = pack_groups(&mixed_specs(), &config).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key.background_color, "white");
    assert_eq!(groups[1].key.background_color, "red");

    for group in &groups {
        for sheet in group.sheets() {
            for placed in &sheet.placements {
                assert_eq!(placed.spec.material_key(), group.key);
            }
        }
    }
}

#[test]
fn test_pages_restart_per_group() {
    let specs = vec![
        colored(100.0, 100.0, 3, "white"),
        colored(100.0, 100.0, 2, "black"),
    ];
    let groups = pack_groups(&specs, &SheetConfig::new(100.0, 100.0)).unwrap();

    let pages: Vec<Vec<usize>> = groups
        .iter()
        .map(|g| g.sheets().iter().map(|s| s.page).collect())
        .collect();
    assert_eq!(pages, vec![vec![1, 2, 3], vec![1, 2]]);
}

#[test]
fn test_thousand_small_labels_fit_one_sheet() {
    let specs = vec![
        LabelSpec::new(20.0, 7.0, 400),
        LabelSpec::new(20.0, 7.0, 600),
    ];
    let groups = pack_groups(&specs, &SheetConfig::default()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].sheets().len(), 1);
    assert_eq!(groups[0].packing.placed_count(), 1000);
}

#[test]
fn test_full_sheet_capacity() {
    // 30 columns by 42 rows
    let specs = vec![LabelSpec::new(20.0, 7.0, 1261)];
    let groups = pack_groups(&specs, &SheetConfig::default()).unwrap();

    let sheets = groups[0].sheets();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].len(), 1260);
    assert_eq!(sheets[1].len(), 1);
}

#[test]
fn test_packing_is_deterministic() {
    let config = padded_sheet();
    let first = pack_groups(&mixed_specs(), &config).unwrap();
    let second = pack_groups(&mixed_specs(), &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_sheet_config() {
    let specs = vec![LabelSpec::new(10.0, 10.0, 1)];

    let result = pack_groups(&specs, &SheetConfig::new(0.0, 100.0));
    assert!(matches!(result, Err(LayoutError::Config(_))));

    let result = pack_groups(&specs, &SheetConfig::new(100.0, 100.0).with_gap(-1.0));
    assert!(matches!(result, Err(LayoutError::Config(_))));

    let result = pack_groups(&specs, &SheetConfig::new(100.0, 100.0).with_margin(50.0));
    assert!(matches!(result, Err(LayoutError::Config(_))));
}

#[test]
fn test_labels_without_positive_size_are_rejected() {
    let bad_sizes = [
        (-20.0, 7.0),
        (20.0, 0.0),
        (f64::NAN, 7.0),
        (f64::INFINITY, 7.0),
    ];
    for (length, height) in bad_sizes {
        let specs = vec![
            LabelSpec::new(10.0, 10.0, 1),
            LabelSpec::new(length, height, 3),
        ];
        match pack_groups(&specs, &SheetConfig::default()) {
            Err(LayoutError::InvalidLabel(message)) => assert!(message.starts_with("label 1:")),
            other => panic!("{}x{} was not rejected: {:?}", length, height, other),
        }
    }

    // Quantity does not excuse a bad size
    let result = pack_groups(&[LabelSpec::new(-5.0, 5.0, 0)], &SheetConfig::default());
    assert!(matches!(result, Err(LayoutError::InvalidLabel(_))));
}

#[test]
fn test_sheet_holes_follow_placement() {
    let spec = LabelSpec {
        perforation: Perforation {
            count: 2,
            size_mm: 3.0,
            distance_mm: 5.0,
            ..Default::default()
        },
        ..LabelSpec::new(50.0, 20.0, 2)
    };
    let groups = pack_groups(&[spec], &SheetConfig::new(200.0, 100.0)).unwrap();
    let second = &groups[0].sheets()[0].placements[1];

    assert_eq!(second.position, Point::new(50.0, 80.0));
    let centers: Vec<Point> = second.holes().iter().map(Hole::center).collect();
    assert_eq!(
        centers,
        vec![Point::new(55.0, 90.0), Point::new(95.0, 90.0)]
    );
}
