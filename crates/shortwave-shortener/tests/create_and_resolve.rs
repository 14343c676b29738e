//! End-to-end exercise of the create saga and the redirection read path
//! sharing one repository.

use jiff::SignedDuration;
use shortwave_keygen::InMemoryAllocator;
use shortwave_redirector::RedirectorService;
use shortwave_shortener::{CreateParams, ShortLinkService};
use shortwave_storage::InMemoryRepository;
use std::time::Duration;

fn params(url: &str, owner: &str) -> CreateParams {
    CreateParams {
        original_url: url.to_string(),
        owner_id: owner.to_string(),
    }
}

#[tokio::test]
async fn created_link_resolves_to_its_original_url() {
    let repository = InMemoryRepository::new();
    let shortener = ShortLinkService::new(InMemoryAllocator::new(), repository.clone());
    let redirector = RedirectorService::new(repository);

    let link = shortener
        .create(params("https://example.com/a/long/path", "user-1"))
        .await
        .unwrap();

    let url = redirector.resolve(&link.hash).await.unwrap();
    assert_eq!(url.as_deref(), Some("https://example.com/a/long/path"));
}

#[tokio::test]
async fn created_link_stops_resolving_once_expired() {
    let repository = InMemoryRepository::new();
    let shortener = ShortLinkService::with_expiry_horizon(
        InMemoryAllocator::new(),
        repository.clone(),
        SignedDuration::from_millis(50),
    );
    let redirector = RedirectorService::new(repository);

    let link = shortener
        .create(params("https://example.com", "user-1"))
        .await
        .unwrap();

    assert!(redirector.resolve(&link.hash).await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(80)).await;

    // Identical answer to an unknown hash once the horizon has passed.
    assert_eq!(redirector.resolve(&link.hash).await.unwrap(), None);
    assert_eq!(redirector.resolve("never-existed").await.unwrap(), None);
}

#[tokio::test]
async fn listing_reflects_created_links_per_owner() {
    let repository = InMemoryRepository::new();
    let shortener = ShortLinkService::new(InMemoryAllocator::new(), repository);

    shortener
        .create(params("https://example.com/a", "user-1"))
        .await
        .unwrap();
    shortener
        .create(params("https://example.com/b", "user-1"))
        .await
        .unwrap();
    shortener
        .create(params("https://example.com/c", "user-2"))
        .await
        .unwrap();

    let links = shortener.list("user-1").await.unwrap();
    let mut urls: Vec<String> = links.into_iter().map(|l| l.original_url).collect();
    urls.sort();

    assert_eq!(urls, vec!["https://example.com/a", "https://example.com/b"]);
}
