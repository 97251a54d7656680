//! Service layer tests

use std::sync::Arc;

use linkdo::config::DatabaseConfig;
use linkdo::errors::LinkdoError;
use linkdo::services::{IdGenerator, RandomIdGenerator, ShortUrlService, TodoService};
use linkdo::storage::{NewTodo, ShortUrlStore, TodoStore};
use linkdo::utils::is_valid_short_id;

async fn short_url_service(generator: Arc<dyn IdGenerator>) -> ShortUrlService {
    let store = ShortUrlStore::open(":memory:", &DatabaseConfig::default())
        .await
        .expect("Failed to open store");
    ShortUrlService::with_generator(Arc::new(store), "http://localhost:8001/", generator)
}

async fn todo_service() -> TodoService {
    let store = TodoStore::open(":memory:", &DatabaseConfig::default())
        .await
        .expect("Failed to open store");
    TodoService::new(Arc::new(store))
}

struct FixedIdGenerator;

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        "fixed1".to_string()
    }
}

#[test]
fn test_random_generator_output_shape() {
    let generator = RandomIdGenerator::default();
    for _ in 0..200 {
        let id = generator.generate();
        assert!(is_valid_short_id(&id), "bad id {:?}", id);
    }
}

#[tokio::test]
async fn test_shorten_joins_base_url() {
    let service = short_url_service(Arc::new(FixedIdGenerator)).await;
    let short_url = service.shorten("https://example.com").await.unwrap();
    assert_eq!(short_url, "http://localhost:8001/fixed1");
}

#[tokio::test]
async fn test_resolve_and_stats_agree() {
    let service = short_url_service(Arc::new(RandomIdGenerator::default())).await;
    let short_url = service.shorten("https://example.com/a?b=c").await.unwrap();
    let short_id = short_url.rsplit('/').next().unwrap();

    assert_eq!(
        service.resolve(short_id).await.unwrap(),
        "https://example.com/a?b=c"
    );
    let stats = service.stats(short_id).await.unwrap();
    assert_eq!(stats.short_id, short_id);
    assert_eq!(stats.full_url, "https://example.com/a?b=c");
}

#[tokio::test]
async fn test_collision_is_not_retried() {
    let service = short_url_service(Arc::new(FixedIdGenerator)).await;
    service.shorten("https://one.example").await.unwrap();

    let err = service.shorten("https://two.example").await.unwrap_err();
    assert_eq!(err, LinkdoError::conflict("URL already exists."));
}

#[tokio::test]
async fn test_resolve_unknown() {
    let service = short_url_service(Arc::new(FixedIdGenerator)).await;
    let err = service.resolve("zzzzzz").await.unwrap_err();
    assert_eq!(err, LinkdoError::not_found("URL not found."));
}

#[tokio::test]
async fn test_todo_missing_id_is_not_found() {
    let service = todo_service().await;
    let expected = LinkdoError::not_found("Todo item not found");

    assert_eq!(service.get(42).await.unwrap_err(), expected);
    assert_eq!(
        service.update(42, NewTodo::new("x")).await.unwrap_err(),
        expected
    );
    assert_eq!(service.delete(42).await.unwrap_err(), expected);
}

#[tokio::test]
async fn test_todo_lifecycle() {
    let service = todo_service().await;

    let id = service
        .create(NewTodo::new("plan").with_description("outline"))
        .await
        .unwrap();
    service
        .update(id, NewTodo::new("plan v2").completed(true))
        .await
        .unwrap();

    let item = service.get(id).await.unwrap();
    assert_eq!(item.title, "plan v2");
    assert_eq!(item.description, None);
    assert!(item.completed);

    service.delete(id).await.unwrap();
    assert!(service.list().await.unwrap().is_empty());
}
