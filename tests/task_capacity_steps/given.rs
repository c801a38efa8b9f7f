//! Given steps for task capacity BDD scenarios.

use super::world::TaskCapacityWorld;
use rstest_bdd_macros::given;

#[given("a task manager allowing {max_tasks:usize} tasks")]
fn task_manager_with_capacity(world: &mut TaskCapacityWorld, max_tasks: usize) {
    *world = TaskCapacityWorld::with_capacity(max_tasks);
}
