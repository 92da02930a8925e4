//! Testes do módulo spoilage-core

use super::*;

fn row(nh3: f64, h2s: f64, tma: f64, dms: f64, label: SpoilageLabel) -> DatasetRow {
    DatasetRow::new(GasReading::new(nh3, h2s, tma, dms), label)
}

fn sample_rows(n: usize) -> Vec<DatasetRow> {
    (0..n)
        .map(|i| row(i as f64, 0.1, 5.0, 0.5, SpoilageLabel::Fresh))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE CLASSIFICAÇÃO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_classify_is_monotonic_per_gas() {
    let thresholds = GasThresholds::DEFAULT;
    let base = GasReading::default();

    for gas in Gas::ALL {
        let max = gas.display_max() * 2.0;
        let steps = 400;
        let mut previous = LedColor::Green;

        for step in 0..=steps {
            let value = max * step as f64 / steps as f64;
            let status = classify(&base.with(gas, value), &thresholds).unwrap();
            let color = status.get(gas);

            assert!(color >= previous, "{} regressed at {} ppm", gas, value);
            previous = color;
        }
        assert_eq!(previous, LedColor::Red);
    }
}

#[test]
fn test_other_gases_unaffected() {
    let thresholds = GasThresholds::DEFAULT;
    let base = GasReading::default();

    for gas in Gas::ALL {
        let status = classify(&base.with(gas, 100.0), &thresholds).unwrap();
        for (other, color) in status.iter() {
            if other == gas {
                assert_eq!(color, LedColor::Red);
            } else {
                assert_eq!(color, LedColor::Green);
            }
        }
        assert_eq!(status.food_status, FoodStatus::Spoiled);
    }
}

#[test]
fn test_every_gas_can_spoil_alone() {
    let thresholds = GasThresholds::DEFAULT;
    for gas in Gas::ALL {
        let reading = GasReading::new(0.0, 0.0, 0.0, 0.0).with(gas, thresholds.danger(gas));
        let status = classify(&reading, &thresholds).unwrap();
        assert!(status.is_spoiled(), "{} at threshold should spoil", gas);
    }
}

#[test]
fn test_checked_reading() {
    assert!(GasReading::checked(3.0, 0.1, 5.0, 0.5).is_ok());
    assert_eq!(
        GasReading::checked(3.0, 0.1, 5.0, -1.0),
        Err(SpoilageError::InvalidReading {
            gas: Gas::Dms,
            value: -1.0
        })
    );
}

#[test]
fn test_large_values_are_valid() {
    // sem limite superior no modelo
    let status = classify(&GasReading::new(1e6, 1e6, 1e6, 1e6), &GasThresholds::DEFAULT).unwrap();
    assert!(status.iter().all(|(_, c)| c == LedColor::Red));
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE SERIALIZAÇÃO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_reading_wire_names() {
    let json = serde_json::json!({"NH3": 3.0, "H2S": 0.1, "TMA": 5.0, "DMS": 0.5});
    let reading: GasReading = serde_json::from_value(json).unwrap();
    assert_eq!(reading, GasReading::default());
}

#[test]
fn test_reading_missing_field_rejected() {
    let json = serde_json::json!({"NH3": 3.0, "H2S": 0.1, "TMA": 5.0});
    assert!(serde_json::from_value::<GasReading>(json).is_err());
}

#[test]
fn test_led_status_wire_names() {
    let status = classify(&GasReading::new(8.0, 0.15, 5.0, 0.5), &GasThresholds::DEFAULT).unwrap();
    let json = serde_json::to_value(status).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "NH3_LED": "Red",
            "H2S_LED": "Yellow",
            "TMA_LED": "Green",
            "DMS_LED": "Green",
            "Food_Status": "Spoiled"
        })
    );
}

#[test]
fn test_led_status_rejects_unknown_color() {
    let json = serde_json::json!({
        "NH3_LED": "Blue",
        "H2S_LED": "Green",
        "TMA_LED": "Green",
        "DMS_LED": "Green",
        "Food_Status": "Fresh"
    });
    assert!(serde_json::from_value::<LedStatus>(json).is_err());
}

#[test]
fn test_label_parse() {
    assert_eq!(SpoilageLabel::parse("Yes"), SpoilageLabel::Spoiled);
    assert_eq!(SpoilageLabel::parse("  Yes\r"), SpoilageLabel::Spoiled);
    assert_eq!(SpoilageLabel::parse("No"), SpoilageLabel::Fresh);
    assert_eq!(SpoilageLabel::parse("YES"), SpoilageLabel::Fresh);
    assert_eq!(SpoilageLabel::Spoiled.as_str(), "Yes");
    assert_eq!(SpoilageLabel::Fresh.to_string(), "Fresh");
}

#[test]
fn test_gas_metadata() {
    let keys: Vec<_> = Gas::ALL.iter().map(Gas::key).collect();
    assert_eq!(keys, ["NH3", "H2S", "TMA", "DMS"]);
    assert_eq!(Gas::Tma.label(), "Trimethylamine (TMA)");
    assert_eq!(Gas::H2s.unit(), "ppm");
    assert_eq!(Gas::Dms.display_max(), 5.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE NAVEGAÇÃO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_navigator_empty() {
    let mut nav = DatasetNavigator::new();
    assert!(nav.is_empty());
    assert!(nav.current().is_none());
    assert!(nav.next().is_none());
    assert!(nav.previous().is_none());
    assert_eq!(nav.position(), None);
}

#[test]
fn test_navigator_load_starts_at_zero() {
    let nav = DatasetNavigator::with_rows(sample_rows(3));
    assert_eq!(nav.position(), Some(0));
    assert_eq!(nav.current().unwrap().reading.nh3, 0.0);
    assert_eq!(nav.len(), 3);
}

#[test]
fn test_navigator_next_wraps() {
    let rows = sample_rows(4);
    let mut nav = DatasetNavigator::with_rows(rows.clone());
    let start = *nav.current().unwrap();

    for i in 1..4 {
        assert_eq!(nav.next(), Some(&rows[i]));
    }
    assert_eq!(nav.next(), Some(&start));
    assert_eq!(nav.position(), Some(0));
}

#[test]
fn test_navigator_previous_wraps() {
    let rows = sample_rows(5);
    let mut nav = DatasetNavigator::with_rows(rows.clone());

    assert_eq!(nav.previous(), Some(&rows[4]));
    assert_eq!(nav.position(), Some(4));
    assert_eq!(nav.previous(), Some(&rows[3]));
    assert_eq!(nav.next(), Some(&rows[4]));
}

#[test]
fn test_navigator_single_row() {
    let rows = sample_rows(1);
    let mut nav = DatasetNavigator::with_rows(rows.clone());
    assert_eq!(nav.next(), Some(&rows[0]));
    assert_eq!(nav.previous(), Some(&rows[0]));
    assert_eq!(nav.position(), Some(0));
}

#[test]
fn test_navigator_reload_resets_position() {
    let mut nav = DatasetNavigator::with_rows(sample_rows(5));
    nav.next();
    nav.next();
    assert_eq!(nav.position(), Some(2));

    nav.load(sample_rows(2));
    assert_eq!(nav.position(), Some(0));
    assert_eq!(nav.len(), 2);

    nav.load(Vec::new());
    assert_eq!(nav.position(), None);
    assert!(nav.current().is_none());
    assert!(nav.next().is_none());
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTES DE AVALIAÇÃO
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_evaluate_dataset() {
    let rows = vec![
        row(3.0, 0.1, 5.0, 0.5, SpoilageLabel::Fresh),    // verdadeiro fresco
        row(8.0, 0.1, 5.0, 0.5, SpoilageLabel::Spoiled),  // verdadeiro estragado
        row(6.0, 0.15, 8.0, 0.8, SpoilageLabel::Spoiled), // só amarelo: falso fresco
        row(3.0, 0.3, 5.0, 0.5, SpoilageLabel::Fresh),    // falso estragado
    ];

    let evaluation = evaluate(&rows, &GasThresholds::DEFAULT).unwrap();
    assert_eq!(
        evaluation.confusion,
        Confusion {
            true_spoiled: 1,
            false_spoiled: 1,
            true_fresh: 1,
            false_fresh: 1,
        }
    );
    assert_eq!(evaluation.accuracy(), Some(0.5));

    let missed: Vec<usize> = evaluation.disagreements().map(|o| o.index).collect();
    assert_eq!(missed, [2, 3]);
}

#[test]
fn test_evaluate_empty() {
    let evaluation = evaluate(&[], &GasThresholds::DEFAULT).unwrap();
    assert!(evaluation.outcomes.is_empty());
    assert_eq!(evaluation.accuracy(), None);
}

#[test]
fn test_navigator_feeds_classifier() {
    let rows = vec![
        row(3.0, 0.1, 5.0, 0.5, SpoilageLabel::Fresh),
        row(8.0, 0.1, 5.0, 0.5, SpoilageLabel::Spoiled),
    ];
    let mut nav = DatasetNavigator::with_rows(rows);
    let thresholds = GasThresholds::DEFAULT;

    let first = classify(&nav.current().unwrap().reading, &thresholds).unwrap();
    assert_eq!(first.food_status, FoodStatus::Fresh);

    let second = nav.next().map(|r| classify(&r.reading, &thresholds)).unwrap().unwrap();
    assert_eq!(second.food_status, FoodStatus::Spoiled);
}
