//! CRUD tests for [`PostgresProductRepository`].

use crate::postgres::helpers::{draft, test_repository};
use eyre::ensure;
use rstest::rstest;
use stockroom::product::{
    domain::{ProductCategory, ProductId, StockLevel},
    ports::{ProductRepository, ProductRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires STOCKROOM_TEST_DATABASE_URL"]
async fn insert_then_find_returns_stored_product() -> eyre::Result<()> {
    let repository = test_repository()?;

    let inserted = repository
        .insert(&draft("Lamp", 4, ProductCategory::Home)?)
        .await?;
    let found = repository.find_by_id(inserted.id()).await?;

    ensure!(found.as_ref() == Some(&inserted), "expected {inserted:?}, got {found:?}");
    ensure!(inserted.description() == "from postgres tests", "description lost");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires STOCKROOM_TEST_DATABASE_URL"]
async fn ids_increase_across_inserts() -> eyre::Result<()> {
    let repository = test_repository()?;

    let first = repository.insert(&draft("One", 1, ProductCategory::Food)?).await?;
    let second = repository.insert(&draft("Two", 1, ProductCategory::Food)?).await?;

    ensure!(second.id() > first.id(), "ids should increase");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires STOCKROOM_TEST_DATABASE_URL"]
async fn replace_and_stock_update_persist() -> eyre::Result<()> {
    let repository = test_repository()?;
    let inserted = repository
        .insert(&draft("Racket", 2, ProductCategory::Sports)?)
        .await?;

    let replaced = repository
        .replace(inserted.id(), &draft("Tennis racket", 6, ProductCategory::Sports)?)
        .await?;
    let restocked = repository
        .update_stock(inserted.id(), StockLevel::new(9)?)
        .await?;

    ensure!(replaced.name().as_str() == "Tennis racket", "name not replaced");
    ensure!(restocked.stock().value() == 9, "stock not updated");
    ensure!(restocked.name() == replaced.name(), "stock update touched name");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires STOCKROOM_TEST_DATABASE_URL"]
async fn missing_product_reports_not_found() -> eyre::Result<()> {
    let repository = test_repository()?;
    let missing = ProductId::new(i64::MAX)?;

    let found = repository.find_by_id(missing).await?;
    let replaced = repository
        .replace(missing, &draft("Ghost", 1, ProductCategory::Books)?)
        .await;
    let restocked = repository.update_stock(missing, StockLevel::ZERO).await;
    let deleted = repository.delete(missing).await;

    ensure!(found.is_none(), "missing product was found");
    for outcome in [replaced.map(|_| ()), restocked.map(|_| ()), deleted] {
        ensure!(
            matches!(outcome, Err(ProductRepositoryError::NotFound(id)) if id == missing),
            "expected NotFound, got {outcome:?}"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires STOCKROOM_TEST_DATABASE_URL"]
async fn delete_removes_and_category_filter_matches() -> eyre::Result<()> {
    let repository = test_repository()?;
    let novel = repository
        .insert(&draft("Novel", 1, ProductCategory::Books)?)
        .await?;
    repository
        .insert(&draft("Scarf", 1, ProductCategory::Clothing)?)
        .await?;
    let atlas = repository
        .insert(&draft("Atlas", 1, ProductCategory::Books)?)
        .await?;

    let books: Vec<_> = repository
        .find_by_category(ProductCategory::Books)
        .await?
        .iter()
        .map(|product| product.id())
        .collect();
    ensure!(books == vec![novel.id(), atlas.id()], "unexpected books {books:?}");

    repository.delete(novel.id()).await?;
    ensure!(
        repository.find_by_id(novel.id()).await?.is_none(),
        "deleted product still present"
    );
    Ok(())
}
