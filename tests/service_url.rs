use std::collections::HashMap;
use std::sync::Arc;

use smallurl::AppError;
use smallurl::application::services::UrlService;
use smallurl::infrastructure::persistence::InMemoryUrlRepository;

fn make_service() -> UrlService<InMemoryUrlRepository> {
    UrlService::new(Arc::new(InMemoryUrlRepository::new()))
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let service = make_service();

    let created = service
        .create("https://example.com/round-trip".to_string())
        .await
        .unwrap();
    let fetched = service.get_by_id(&created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.destination, "https://example.com/round-trip");
}

#[tokio::test]
async fn test_alias_round_trip() {
    let service = make_service();

    service
        .create_with_alias("docs".to_string(), "https://example.com/docs".to_string())
        .await
        .unwrap();

    let fetched = service.get_by_id("docs").await.unwrap();
    assert_eq!(fetched.destination, "https://example.com/docs");
}

#[tokio::test]
async fn test_list_returns_everything_created() {
    let service = make_service();

    let mut expected = HashMap::new();
    for i in 0..25 {
        let destination = format!("https://example.com/page/{i}");
        let url = service.create(destination.clone()).await.unwrap();
        expected.insert(url.id, destination);
    }

    let listed: HashMap<String, String> = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|url| (url.id, url.destination))
        .collect();

    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let service = make_service();

    let url = service
        .create("https://example.com/temporary".to_string())
        .await
        .unwrap();
    service.delete(&url.id).await.unwrap();

    let result = service.get_by_id(&url.id).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_recreate_keeps_original_timestamp() {
    let service = make_service();

    let first = service
        .create("https://example.com/a".to_string())
        .await
        .unwrap();
    let second = service
        .create("https://example.com/a".to_string())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_alias_cannot_overwrite_existing_id() {
    let service = make_service();

    service
        .create_with_alias("promo".to_string(), "https://first.com".to_string())
        .await
        .unwrap();

    let result = service
        .create_with_alias("promo".to_string(), "https://second.com".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));

    let kept = service.get_by_id("promo").await.unwrap();
    assert_eq!(kept.destination, "https://first.com");
}

#[tokio::test]
async fn test_two_destinations_example() {
    let service = make_service();

    let a = service
        .create("https://example.com/a".to_string())
        .await
        .unwrap();
    let b = service
        .create("https://example.com/b".to_string())
        .await
        .unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(service.list().await.unwrap().len(), 2);

    service.delete(&a.id).await.unwrap();

    let remaining = service.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b.id);
    assert_eq!(remaining[0].destination, "https://example.com/b");
}

#[tokio::test]
async fn test_invalid_input_is_never_stored() {
    let service = make_service();

    let result = service.create(String::new()).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    let result = service
        .create_with_alias("a/b c".to_string(), "https://example.com".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    let result = service
        .create_with_alias("docs".to_string(), String::new())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    assert!(service.list().await.unwrap().is_empty());
}
