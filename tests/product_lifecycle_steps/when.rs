//! When steps for product lifecycle BDD scenarios.

use super::world::ProductApiWorld;
use rstest_bdd_macros::when;
use serde_json::json;

#[when(
    r#"a product "{name}" priced {price:f64} with stock {stock:i64} in "{category}" is created"#
)]
fn create_product(
    world: &mut ProductApiWorld,
    name: String,
    price: f64,
    stock: i64,
    category: String,
) -> Result<(), eyre::Report> {
    let payload = json!({
        "name": name,
        "price": price,
        "stock": stock,
        "category": category,
    });
    world.send("POST", "/api/products", Some(payload))?;

    if world.created_id.is_none() {
        world.created_id = world.body()?.get("id").and_then(serde_json::Value::as_i64);
    }
    Ok(())
}

#[when("the stock of the created product is set to {stock:i64}")]
fn set_stock(world: &mut ProductApiWorld, stock: i64) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    world.send(
        "PATCH",
        &format!("/api/products/{id}/stock"),
        Some(json!({ "stock": stock })),
    )
}

#[when("the created product is fetched")]
fn fetch_product(world: &mut ProductApiWorld) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    world.send("GET", &format!("/api/products/{id}"), None)
}

#[when("the created product is deleted")]
fn delete_product(world: &mut ProductApiWorld) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    world.send("DELETE", &format!("/api/products/{id}"), None)
}

#[when(r#"products in category "{category}" are listed"#)]
fn list_category(world: &mut ProductApiWorld, category: String) -> Result<(), eyre::Report> {
    world.send("GET", &format!("/api/products/category/{category}"), None)
}
