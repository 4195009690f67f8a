use super::*;

#[test]
fn submit_valid_object() {
    let mut query = MetadataQuery::default();
    let filter = query
        .submit(r#"{"type":"Type A"}"#)
        .expect("object query should parse");

    assert_eq!(filter.len(), 1);
    assert_eq!(
        filter.get("type"),
        Some(&FilterValue::String("Type A".to_string()))
    );
    assert!(query.effective().is_some());
    assert_eq!(query.draft(), r#"{"type":"Type A"}"#);
}

#[test]
fn submit_invalid_json_keeps_draft() {
    let mut query = MetadataQuery::default();
    let result = query.submit("{invalid");

    assert!(matches!(result, Err(BrowserError::MalformedQuery(_))));
    assert_eq!(query.draft(), "{invalid");
    assert!(query.effective().is_none());
}

#[test]
fn failed_submit_keeps_previous_filter() {
    let mut query = MetadataQuery::default();
    query
        .submit(r#"{"category":"Category 1"}"#)
        .expect("first query should parse");

    assert!(query.submit("not json").is_err());

    let effective = query.effective().expect("previous filter kept");
    assert_eq!(
        effective.get("category"),
        Some(&FilterValue::String("Category 1".to_string()))
    );
}

#[test]
fn non_object_json_is_rejected() {
    for text in ["[1, 2]", "42", r#""text""#, "true", "null"] {
        let result = MetadataFilter::parse(text);
        assert!(
            matches!(result, Err(BrowserError::MalformedQuery(_))),
            "{} should be rejected",
            text
        );
    }
}

#[test]
fn nested_values_are_tagged() {
    let filter = MetadataFilter::parse(
        r#"{"tags":["a", 1, false, null],"range":{"min":0.5},"ok":true}"#,
    )
    .expect("nested query should parse");

    assert_eq!(
        filter.get("tags"),
        Some(&FilterValue::Array(vec![
            FilterValue::String("a".to_string()),
            FilterValue::Number(Number::from(1)),
            FilterValue::Bool(false),
            FilterValue::Null,
        ]))
    );

    match filter.get("range") {
        Some(FilterValue::Object(map)) => {
            assert_eq!(
                map.get("min"),
                Number::from_f64(0.5).map(FilterValue::Number).as_ref()
            );
        }
        other => panic!("expected object, got {:?}", other),
    }

    assert_eq!(filter.get("ok"), Some(&FilterValue::Bool(true)));
}

#[test]
fn empty_object_is_accepted() {
    let filter = MetadataFilter::parse("{}").expect("empty object should parse");
    assert!(filter.is_empty());
}

#[test]
fn clear_only_resets_draft() {
    let mut query = MetadataQuery::default();
    query
        .submit(r#"{"type":"Type A"}"#)
        .expect("query should parse");

    query.clear();
    assert_eq!(query.draft(), "");
    assert!(query.effective().is_some());
}

#[test]
fn clear_after_edit() {
    let mut query = MetadataQuery::default();
    query.set_draft("{half typed");
    query.clear();
    assert_eq!(query.draft(), "");
}

#[test]
fn display_is_compact_json() {
    let filter =
        MetadataFilter::parse(r#"{ "type" : "Type A", "n": 2 }"#).expect("query should parse");
    assert_eq!(filter.to_string(), r#"{"n":2,"type":"Type A"}"#);
}

#[test]
fn numbers_are_not_rewritten() {
    let filter = MetadataFilter::parse(r#"{"n":1,"big":9007199254740993,"neg":-3,"x":1.5}"#)
        .expect("query should parse");

    assert_eq!(
        filter.to_string(),
        r#"{"big":9007199254740993,"n":1,"neg":-3,"x":1.5}"#
    );
    assert_eq!(
        filter.get("big"),
        Some(&FilterValue::Number(Number::from(9_007_199_254_740_993_u64)))
    );
}
