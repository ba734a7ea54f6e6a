//! Property-based tests for allocation and validation invariants.

use assetdesk_intake::*;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn attribute_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("i5".to_string()),
        Just("i7".to_string()),
        Just("8GB".to_string()),
        Just("16GB".to_string()),
        Just("512GB".to_string()),
        Just("Win11".to_string()),
    ]
}

fn device_strategy() -> impl Strategy<Value = DeviceSpec> {
    (
        prop_oneof![Just("Dell".to_string()), Just("HP".to_string())],
        prop_oneof![
            Just("Latitude".to_string()),
            Just("Optiplex".to_string()),
            Just("EliteBook".to_string())
        ],
        attribute_strategy(),
        attribute_strategy(),
        attribute_strategy(),
        attribute_strategy(),
    )
        .prop_map(|(make, model, cpu, ram, disk, os)| {
            DeviceSpec::new(make, model, cpu, ram, disk, os)
        })
}

fn record_with(asset_tag: String, purchase_order: String) -> InventoryRecord {
    InventoryRecord {
        department: "HR".into(),
        room: "N/A".into(),
        asset_tag,
        device_name: "laptop".into(),
        advisor: "John Doe".into(),
        make: "Dell".into(),
        model: "Latitude".into(),
        purchase_order,
    }
}

// ============================================================================
// Allocation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Allocation depends only on the last row, not on how many rows came before.
    #[test]
    fn allocation_follows_last_row(
        earlier in prop::collection::vec((0u64..5000, 0u64..5000), 0..8),
        tag in 0u64..100_000,
        po in 0u64..100_000,
    ) {
        let mut rows: Vec<InventoryRecord> = earlier
            .into_iter()
            .map(|(t, p)| record_with(format!("[{:04}]", t), format!("PO{:04}", p)))
            .collect();
        rows.push(record_with(format!("[{:04}]", tag), format!("PO{:04}", po)));

        let ids = allocate_from(&InventorySnapshot::from(rows)).unwrap();
        prop_assert_eq!(ids.asset_tag, format!("[{:04}]", tag + 1));
        prop_assert_eq!(ids.purchase_order, format!("PO{:04}", po + 1));
    }

    /// Re-allocating from the same snapshot is stable.
    #[test]
    fn allocation_is_repeatable(tag in 0u64..10_000, po in 0u64..10_000) {
        let snapshot = InventorySnapshot::from(vec![
            record_with(format!("[{:04}]", tag), format!("PO{:04}", po)),
        ]);
        let first = allocate_from(&snapshot).unwrap();
        let second = allocate_from(&snapshot).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A purchase order without the PO prefix never silently allocates.
    #[test]
    fn unprefixed_purchase_order_is_rejected(po in "[0-9A-Za-z]{1,8}") {
        prop_assume!(!po.starts_with("PO"));
        let snapshot = InventorySnapshot::from(vec![record_with("[0001]".into(), po)]);
        let is_malformed_po = matches!(
            next_purchase_order(&snapshot),
            Err(AllocationError::MalformedPurchaseOrder { .. })
        );
        prop_assert!(is_malformed_po);
    }
}

// ============================================================================
// Validation and suggestion
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any catalog entry validates when only make and model are requested.
    #[test]
    fn make_and_model_alone_validate_any_listed_device(
        devices in prop::collection::vec(device_strategy(), 1..6),
        pick in 0usize..6,
    ) {
        let target = devices[pick % devices.len()].clone();
        let catalog = Catalog::from(devices);
        let request = ExtractedRequest {
            make: Some(target.make.clone()),
            model: Some(target.model.clone()),
            ..Default::default()
        };
        prop_assert!(validate(&request, &catalog));
    }

    /// Scores stay within 0..=5 and the suggested entry has the maximum score.
    #[test]
    fn suggestion_is_a_maximal_entry(
        devices in prop::collection::vec(device_strategy(), 0..6),
        cpu in proptest::option::of(attribute_strategy()),
        ram in proptest::option::of(attribute_strategy()),
    ) {
        let catalog = Catalog::from(devices);
        let request = ExtractedRequest {
            make: Some("Dell".into()),
            model: Some("Precision".into()),
            processor: cpu,
            ram,
            ..Default::default()
        };

        let max = catalog.iter().map(|d| similarity(&request, d)).max().unwrap_or(0);
        prop_assert!(max <= 5);

        match best_match(&request, &catalog) {
            Some(device) => {
                prop_assert_eq!(similarity(&request, device), max);
                let first_max = catalog
                    .iter()
                    .find(|d| similarity(&request, d) == max)
                    .unwrap();
                prop_assert_eq!(device, first_max);
            }
            None => {
                prop_assert_eq!(max, 0);
                prop_assert_eq!(suggest(&request, &catalog), NO_SIMILAR_DEVICE);
            }
        }
    }

    /// Extraction never panics and only ever yields trimmed, non-empty values.
    #[test]
    fn extraction_is_total(text in "\\PC{0,200}") {
        let extractor = Extractor::new(PatternRecognizer::new(), &Lexicon::default());
        let request = extractor.extract(&text);
        for value in [&request.department, &request.room, &request.advisor].into_iter().flatten() {
            prop_assert!(!value.is_empty());
            prop_assert_eq!(value.trim(), value.as_str());
        }
        prop_assert!(!request.device_valid);
    }
}
