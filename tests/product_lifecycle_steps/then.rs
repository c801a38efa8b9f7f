//! Then steps for product lifecycle BDD scenarios.

use super::world::ProductApiWorld;
use rstest_bdd_macros::then;

#[then("the response status is {status:u16}")]
fn response_status(world: &ProductApiWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world
        .last_status
        .ok_or_else(|| eyre::eyre!("no request has been sent"))?;
    if actual.as_u16() != status {
        return Err(eyre::eyre!(
            "expected status {status}, got {actual} with body {:?}",
            world.last_body
        ));
    }
    Ok(())
}

#[then("the created product has an id")]
fn created_product_has_id(world: &ProductApiWorld) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    if id <= 0 {
        return Err(eyre::eyre!("expected a positive id, got {id}"));
    }
    Ok(())
}

#[then("the product stock is {stock:i64}")]
fn product_stock(world: &ProductApiWorld, stock: i64) -> Result<(), eyre::Report> {
    let actual = world
        .body()?
        .get("stock")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| eyre::eyre!("response has no numeric stock"))?;
    if actual != stock {
        return Err(eyre::eyre!("expected stock {stock}, got {actual}"));
    }
    Ok(())
}

#[then(r#"the error message is "{message}""#)]
fn error_message(world: &ProductApiWorld, message: String) -> Result<(), eyre::Report> {
    let actual = world
        .body()?
        .get("message")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| eyre::eyre!("response has no error message"))?;
    if actual != message {
        return Err(eyre::eyre!("expected message {message:?}, got {actual:?}"));
    }
    Ok(())
}

#[then(r#"the listed product names are "{names}""#)]
fn listed_names(world: &ProductApiWorld, names: String) -> Result<(), eyre::Report> {
    let listed = world
        .body()?
        .as_array()
        .ok_or_else(|| eyre::eyre!("response is not a list"))?
        .iter()
        .filter_map(|product| product.get("name").and_then(serde_json::Value::as_str))
        .collect::<Vec<_>>()
        .join(", ");
    if listed != names {
        return Err(eyre::eyre!("expected products {names:?}, got {listed:?}"));
    }
    Ok(())
}
