use serde_json::json;
use snipeit_exporter::snipeit::types::*;

#[test]
fn test_deserialize_status_label_rows() {
    let json = json!({
        "total": 2,
        "rows": [
            {"id": 1, "name": "Ready to Deploy", "type": "deployable", "assets_count": 12},
            {"id": null, "name": "Pending", "assets_count": null}
        ]
    });

    let page: Rows<StatusLabelRow> = serde_json::from_value(json).expect("Failed to parse rows");
    assert_eq!(page.total, 2);
    assert_eq!(page.rows[0].name, "Ready to Deploy");
    assert_eq!(page.rows[0].id, 1);
    // null degrades to zero
    assert_eq!(page.rows[1].id, 0);
    assert!(page.error_message().is_none());
}

#[test]
fn test_deserialize_model_without_model_number() {
    let json = json!({"id": 7, "name": "Generic Desktop", "model_number": null});
    let model: ModelRow = serde_json::from_value(json).expect("Failed to parse model");
    assert_eq!(model.id, 7);
    assert_eq!(model.model_number, "");

    let json = json!({"id": 8, "name": "No Field"});
    let model: ModelRow = serde_json::from_value(json).expect("Failed to parse model");
    assert_eq!(model.model_number, "");
}

#[test]
fn test_deserialize_consumable_and_component() {
    let consumable: ConsumableRow = serde_json::from_value(json!({
        "id": 3,
        "name": "Toner",
        "model_number": "TN-1",
        "min_amt": 2,
        "remaining": 5,
        "qty": 10
    }))
    .expect("Failed to parse consumable");
    assert_eq!(consumable.remaining, 5);
    assert_eq!(consumable.qty, 10);

    let component: ComponentRow = serde_json::from_value(json!({
        "name": "SSD",
        "serial": null,
        "remaining": 1
    }))
    .expect("Failed to parse component");
    assert_eq!(component.serial, "");
    assert_eq!(component.min_amt, 0);
    assert_eq!(component.remaining, 1);
}

#[test]
fn test_missing_rows_and_total_default_to_empty() {
    let page: Rows<UserRow> = serde_json::from_value(json!({})).expect("Failed to parse");
    assert_eq!(page.total, 0);
    assert!(page.rows.is_empty());

    let page: Rows<UserRow> =
        serde_json::from_value(json!({"rows": null})).expect("Failed to parse");
    assert!(page.rows.is_empty());
}

#[test]
fn test_in_band_error_message() {
    let page: Rows<AssetRow> = serde_json::from_value(json!({
        "status": "error",
        "messages": "User not found",
        "payload": null
    }))
    .expect("Failed to parse");
    assert_eq!(page.error_message().as_deref(), Some("User not found"));

    let page: Rows<AssetRow> = serde_json::from_value(json!({
        "status": "error",
        "messages": {"limit": ["must be an integer"]}
    }))
    .expect("Failed to parse");
    assert!(page
        .error_message()
        .expect("Expected message")
        .contains("must be an integer"));
}

#[test]
fn test_wrongly_typed_counts_degrade_instead_of_failing() {
    // Given: A consumable whose counts arrive as strings and objects
    let json = json!({
        "name": "Toner",
        "model_number": "TN-1",
        "min_amt": "2",
        "remaining": " 5 ",
        "qty": {"value": 10}
    });

    // When: Decoding the row
    let consumable: ConsumableRow = serde_json::from_value(json).expect("Failed to parse");

    // Then: Numeric strings parse, anything else reads as zero
    assert_eq!(consumable.min_amt, 2);
    assert_eq!(consumable.remaining, 5);
    assert_eq!(consumable.qty, 0);

    let component: ComponentRow = serde_json::from_value(json!({
        "name": "SSD",
        "min_amt": -1,
        "remaining": 1.5,
        "qty": "many"
    }))
    .expect("Failed to parse");
    assert_eq!(component.min_amt, 0);
    assert_eq!(component.remaining, 0);
    assert_eq!(component.qty, 0);
}

#[test]
fn test_scalar_labels_are_rendered_as_text() {
    // Given: Label fields carrying numbers, booleans and structured values
    let model: ModelRow = serde_json::from_value(json!({
        "id": "42",
        "name": true,
        "model_number": 1234
    }))
    .expect("Failed to parse model");

    // Then: Scalars become their text form and ids parse from strings
    assert_eq!(model.id, 42);
    assert_eq!(model.name, "true");
    assert_eq!(model.model_number, "1234");

    let component: ComponentRow = serde_json::from_value(json!({
        "name": ["SSD"],
        "serial": 9.5
    }))
    .expect("Failed to parse component");
    assert_eq!(component.name, "");
    assert_eq!(component.serial, "9.5");

    let asset: AssetRow =
        serde_json::from_value(json!({"model_number": {"id": 3}})).expect("Failed to parse asset");
    assert_eq!(asset.model_number, "");
}

#[test]
fn test_wrongly_typed_total_reads_as_zero() {
    let page: Rows<serde_json::Value> =
        serde_json::from_value(json!({"total": "7", "rows": []})).expect("Failed to parse");
    assert_eq!(page.total, 7);

    let page: Rows<serde_json::Value> =
        serde_json::from_value(json!({"total": [1], "rows": []})).expect("Failed to parse");
    assert_eq!(page.total, 0);
}
