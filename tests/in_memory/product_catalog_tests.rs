//! In-memory integration tests for the product catalog service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::in_memory::helpers::{TestCatalog, catalog};
use eyre::ensure;
use rstest::rstest;
use stockroom::product::{
    domain::{ProductCategory, ProductDomainError},
    services::{ProductRequest, ProductServiceError},
};

fn request(name: &str, category: ProductCategory) -> ProductRequest {
    ProductRequest::new(name, 4.5, 3, category)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_update_replaces_every_field(catalog: TestCatalog) -> eyre::Result<()> {
    let created = catalog
        .create(request("Kettle", ProductCategory::Home).with_description("1.7 litre"))
        .await?;

    let replaced = catalog
        .update(
            created.id(),
            ProductRequest::new("Travel kettle", 19.5, 8, ProductCategory::Electronics),
        )
        .await?;

    ensure!(replaced.id() == created.id(), "id must not change on replace");
    ensure!(replaced.name().as_str() == "Travel kettle", "name not replaced");
    ensure!(replaced.description().is_empty(), "description not replaced");
    ensure!(replaced.stock().value() == 8, "stock not replaced");
    ensure!(
        replaced.category() == ProductCategory::Electronics,
        "category not replaced"
    );
    ensure!(catalog.find_by_id(created.id()).await? == replaced, "store disagrees");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn category_listing_tracks_replacements(catalog: TestCatalog) -> eyre::Result<()> {
    let novel = catalog.create(request("Novel", ProductCategory::Books)).await?;
    catalog.create(request("Scarf", ProductCategory::Clothing)).await?;

    catalog
        .update(novel.id(), request("Novel tote bag", ProductCategory::Clothing))
        .await?;

    ensure!(
        catalog.list_by_category(ProductCategory::Books).await?.is_empty(),
        "books should be empty after recategorising"
    );
    ensure!(
        catalog.list_by_category(ProductCategory::Clothing).await?.len() == 2,
        "clothing should hold both products"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_stock_patch_leaves_product_untouched(catalog: TestCatalog) -> eyre::Result<()> {
    let created = catalog.create(request("Tent", ProductCategory::Sports)).await?;

    let result = catalog.update_stock(created.id(), -1).await;

    ensure!(
        matches!(
            result,
            Err(ProductServiceError::Validation(ProductDomainError::NegativeStock(-1)))
        ),
        "expected negative stock error, got {result:?}"
    );
    ensure!(
        catalog.find_by_id(created.id()).await?.stock().value() == 3,
        "stock changed despite rejection"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_receive_distinct_ids(catalog: TestCatalog) -> eyre::Result<()> {
    let shared_catalog = Arc::new(catalog);
    let mut handles = Vec::new();
    for index in 0..16 {
        let shared = Arc::clone(&shared_catalog);
        handles.push(tokio::spawn(async move {
            shared
                .create(request(&format!("Item {index}"), ProductCategory::Food))
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await??.id());
    }

    ensure!(ids.len() == 16, "expected sixteen distinct ids, got {}", ids.len());
    ensure!(
        shared_catalog.list_all().await?.len() == 16,
        "store lost products"
    );
    Ok(())
}
