//! Property-based tests using proptest
//!
//! Tests that verify the filtering and correlation rules hold for arbitrary inputs.

use proptest::prelude::*;
use snipeit_exporter::collectors::*;
use snipeit_exporter::metrics::MetricsCollector;
use snipeit_exporter::snipeit::types::AssetRow;

fn hardware(model_numbers: &[String]) -> Vec<HardwareCount> {
    model_numbers
        .iter()
        .map(|number| HardwareCount {
            model_name: format!("Model {}", number),
            model_number: number.clone(),
            status_name: "Ready to Deploy".to_string(),
            count: 0,
        })
        .collect()
}

fn assets(model_numbers: &[String]) -> Vec<AssetRow> {
    model_numbers
        .iter()
        .map(|number| AssetRow {
            model_number: number.clone(),
        })
        .collect()
}

proptest! {
    #[test]
    fn test_retain_named_keeps_exactly_the_allow_listed_rows(
        names in prop::collection::vec("[A-Za-z ]{0,8}", 0..20),
        wanted in prop::collection::vec("[A-Za-z ]{0,8}", 0..5),
    ) {
        // Given: Arbitrary remote names and an arbitrary allow-list
        let rows: Vec<(usize, String)> = names.into_iter().enumerate().collect();

        // When: Filtering
        let kept = retain_named(rows.clone(), &wanted, |(_, name)| name.as_str());

        // Then: Exactly the rows whose name is allow-listed, untouched and in order
        let expected: Vec<(usize, String)> = rows
            .into_iter()
            .filter(|(_, name)| wanted.contains(name))
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn test_user_tallies_are_positive_and_known(
        known in prop::collection::vec("[A-D][0-9]", 0..6),
        held in prop::collection::vec("[A-F][0-9]", 0..30),
    ) {
        // Given: Known model numbers and arbitrary held assets
        let known_models = KnownModels::from_hardware(&hardware(&known));

        // When: Tallying
        let tallies = tally_user_assets("alice", &assets(&held), &known_models);

        // Then: Every entry is positive, known, and equals the number of held copies
        for tally in &tallies {
            prop_assert!(tally.count > 0);
            prop_assert!(known.contains(&tally.model_number));
            let held_copies = held.iter().filter(|n| **n == tally.model_number).count() as u64;
            prop_assert_eq!(tally.count, held_copies);
        }

        // And: Every known model the user holds appears exactly once
        let mut expected: Vec<&String> = held.iter().filter(|n| known.contains(n)).collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(tallies.len(), expected.len());
    }

    #[test]
    fn test_unknown_models_never_produce_tallies(
        held in prop::collection::vec("X[0-9]{2}", 0..20),
    ) {
        // Given: Known models that share no model number with the held assets
        let known_models = KnownModels::from_hardware(&hardware(&["TP1".to_string()]));

        // When: Tallying
        let tallies = tally_user_assets("bob", &assets(&held), &known_models);

        // Then: No entries
        prop_assert!(tallies.is_empty());
    }

    #[test]
    fn test_any_label_values_render_without_panic(
        name in "\\PC*",
        model_number in "\\PC*",
        user in "\\PC*",
        count in 0u64..1_000_000,
    ) {
        // Given: A metrics collector and arbitrary label strings
        let metrics = MetricsCollector::new().expect("Failed to create metrics");
        let inventory = Inventory {
            hardware: vec![HardwareCount {
                model_name: name.clone(),
                model_number: model_number.clone(),
                status_name: "Pending".to_string(),
                count,
            }],
            user_assets: vec![UserAssetCount {
                user,
                model_name: name,
                model_number,
                count: count + 1,
            }],
            ..Inventory::default()
        };

        // When: Publishing and rendering
        metrics.publish(&inventory);
        let result = metrics.render();

        // Then: Rendering should not fail
        prop_assert!(result.is_ok());
    }
}

#[test]
fn test_first_seen_name_wins_for_shared_model_number() {
    // Given: Two models sharing a model number under different names
    let hardware = vec![
        HardwareCount {
            model_name: "ThinkPad T14".to_string(),
            model_number: "TP1".to_string(),
            status_name: "Ready to Deploy".to_string(),
            count: 1,
        },
        HardwareCount {
            model_name: "ThinkPad T14 Gen 2".to_string(),
            model_number: "TP1".to_string(),
            status_name: "Ready to Deploy".to_string(),
            count: 4,
        },
    ];

    // When: Building the known-model set and tallying
    let known = KnownModels::from_hardware(&hardware);
    let tallies = tally_user_assets("alice", &assets(&["TP1".to_string()]), &known);

    // Then: One model number, reported under the first name
    assert_eq!(known.len(), 1);
    assert_eq!(known.name("TP1"), Some("ThinkPad T14"));
    assert_eq!(tallies.len(), 1);
    assert_eq!(tallies[0].model_name, "ThinkPad T14");
}

#[test]
fn test_empty_model_number_is_never_known() {
    let known = KnownModels::from_hardware(&hardware(&[String::new()]));
    let tallies = tally_user_assets("alice", &assets(&[String::new()]), &known);

    assert!(known.is_empty());
    assert!(tallies.is_empty());
}
