use super::*;

fn create_test_record() -> Record {
    Record {
        id: "7".to_string(),
        document: "Document 7".to_string(),
        metadata: Metadata::from([
            ("type".to_string(), "Type A".to_string()),
            ("category".to_string(), "Category 1".to_string()),
        ]),
        embeddings: vec![0.1, 0.2, 0.3, 0.4, 0.5],
    }
}

#[test]
fn embedding_preview_truncates() {
    let record = create_test_record();
    assert_eq!(record.embedding_preview(3), "0.1, 0.2, 0.3...");
}

#[test]
fn embedding_preview_longer_than_vector() {
    let record = create_test_record();
    assert_eq!(record.embedding_preview(10), "0.1, 0.2, 0.3, 0.4, 0.5...");
}

#[test]
fn embedding_full_lists_everything() {
    let record = create_test_record();
    assert_eq!(record.embedding_full(), "0.1, 0.2, 0.3, 0.4, 0.5");
}

#[test]
fn metadata_json_keeps_insertion_order() {
    let record = create_test_record();
    assert_eq!(
        record.metadata_json(),
        r#"{"type":"Type A","category":"Category 1"}"#
    );
}

#[test]
fn metadata_json_pretty_spans_lines() {
    let record = create_test_record();
    let pretty = record.metadata_json_pretty();
    assert!(pretty.contains('\n'));
    assert!(pretty.contains(r#""type": "Type A""#));
}

#[test]
fn collection_constructor() {
    let collection = Collection::new("1", "Users");
    assert_eq!(collection.id, "1");
    assert_eq!(collection.name, "Users");
}
