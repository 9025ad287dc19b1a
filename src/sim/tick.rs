//! Fixed timestep simulation tick
//!
//! One call advances every subsystem exactly once. Physics is tied to the
//! tick, not wall time.

use super::state::World;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump request (edge-triggered on key-down)
    pub jump: bool,
}

/// Advance the world state by one tick.
///
/// Update order is player, floor, sky; the three are independent so the
/// order carries no correctness weight.
pub fn tick(world: &mut World, input: &TickInput) {
    if input.jump {
        world.player.jump();
    }

    world.player.apply_gravity();
    world.floor.update(&mut world.rng);
    world.sky.update();

    world.time_ticks += 1;
}
