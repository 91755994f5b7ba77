//! Given steps for contact submission BDD scenarios.

use super::world::ContactWorld;
use crate::support;
use rstest_bdd_macros::given;

#[given("a connected document store")]
fn a_connected_store(world: &mut ContactWorld) {
    let (app, store) = support::working_router();
    world.app = app;
    world.store = Some(store);
}

#[given("no document store is configured")]
fn no_store_configured(world: &mut ContactWorld) {
    world.app = support::absent_router();
    world.store = None;
}
