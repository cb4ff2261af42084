use provgen_core::{ProvDocument, document_json_schema, validate_document_json};

#[test]
fn json_schema_describes_all_collections() {
    let schema = document_json_schema().expect("build schema");
    let properties = schema
        .get("properties")
        .and_then(|value| value.as_object())
        .expect("properties object");

    for key in ["entity", "activity", "wasDerivedFrom", "wasGeneratedBy", "used"] {
        assert!(properties.contains_key(key), "missing property {key}");
    }
}

#[test]
fn json_schema_rejects_missing_declarations() {
    let value = serde_json::json!({ "used": {} });
    let report = validate_document_json(&value).expect("compile schema");
    assert!(!report.is_ok());
}

#[test]
fn json_schema_accepts_empty_document() {
    let value = serde_json::to_value(ProvDocument::new()).expect("serialize document");
    let report = validate_document_json(&value).expect("compile schema");
    assert!(report.is_ok());
}
