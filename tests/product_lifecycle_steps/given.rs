//! Given steps for product lifecycle BDD scenarios.

use super::world::ProductApiWorld;
use rstest_bdd_macros::given;

#[given("an empty product catalog")]
fn empty_catalog(world: &mut ProductApiWorld) {
    *world = ProductApiWorld::new();
}
