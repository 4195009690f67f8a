use super::*;

fn page_size(size: u32) -> PageSize {
    PageSize::try_from(size).expect("valid page size")
}

#[tokio::test]
async fn simulated_dataset_shape() {
    let source = InMemorySource::simulated(100, 5);

    let collections = source
        .list_collections()
        .await
        .expect("should list collections");
    let names: Vec<&str> = collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Users", "Products", "Orders"]);

    let page = source
        .list_records("1", 1, page_size(10), None)
        .await
        .expect("should list records");
    assert_eq!(page.total, 100);
    assert_eq!(page.records.len(), 10);

    let first = &page.records[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.document, "Document 1");
    assert_eq!(first.embeddings, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
    assert_eq!(
        first.metadata.get("type").map(String::as_str),
        Some("Type A")
    );
}

#[tokio::test]
async fn list_records_pages() {
    let source = InMemorySource::simulated(45, 3);

    let page = source
        .list_records("2", 3, page_size(20), None)
        .await
        .expect("should list last page");
    let ids: Vec<&str> = page.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["41", "42", "43", "44", "45"]);
}

#[tokio::test]
async fn filter_is_accepted() {
    let source = InMemorySource::simulated(30, 3);
    let filter = MetadataFilter::parse(r#"{"type":"Type B"}"#).expect("filter parses");

    let page = source
        .list_records("1", 1, page_size(10), Some(&filter))
        .await
        .expect("filtered listing succeeds");
    assert_eq!(page.total, 30);
}

#[tokio::test]
async fn unknown_collection() {
    let source = InMemorySource::simulated(10, 3);
    let result = source.list_records("99", 1, page_size(10), None).await;
    assert!(matches!(result, Err(SourceError::CollectionNotFound(_))));
}

#[tokio::test]
async fn delete_records_is_collection_scoped() {
    let source = InMemorySource::simulated(10, 3);
    let removed = source
        .delete_records("1", &["2".to_string(), "3".to_string(), "missing".to_string()])
        .await
        .expect("delete succeeds");

    assert_eq!(removed, 2);
    assert_eq!(source.record_count("1").await, Some(8));
    assert_eq!(source.record_count("2").await, Some(10));
}

#[tokio::test]
async fn drop_collection_records_call() {
    let source = InMemorySource::simulated(10, 3);
    source.drop_collection("3").await.expect("drop succeeds");

    assert_eq!(source.dropped_collections().await, vec!["3".to_string()]);
    assert_eq!(source.record_count("3").await, None);
    assert!(matches!(
        source.drop_collection("3").await,
        Err(SourceError::CollectionNotFound(_))
    ));
}

#[tokio::test]
async fn unavailable_source_fails_every_call() {
    let source = InMemorySource::simulated(10, 3);
    source.set_available(false);

    assert!(matches!(
        source.list_collections().await,
        Err(SourceError::Unavailable(_))
    ));
    assert!(source.drop_collection("1").await.is_err());
    assert_eq!(source.record_count("1").await, Some(10));

    source.set_available(true);
    assert!(source.list_collections().await.is_ok());
}

#[tokio::test]
async fn insert_collection_replaces_existing() {
    let source = InMemorySource::new();
    source
        .insert_collection(Collection::new("a", "Alpha"), Vec::new())
        .await;
    source
        .insert_collection(Collection::new("a", "Alpha v2"), Vec::new())
        .await;

    let collections = source.list_collections().await.expect("should list");
    assert_eq!(collections, vec![Collection::new("a", "Alpha v2")]);
}
