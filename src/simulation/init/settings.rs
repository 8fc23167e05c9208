use crate::core::math::Vector;
use crate::domain::InputState;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f64, y: f64) {
    world.gravity = Vector::new(x, y);
}

pub(super) fn gravity(world: &WorldCore) -> Vector {
    world.gravity
}

pub(super) fn set_mouse_controls(world: &mut WorldCore, enabled: bool) {
    world.mouse_controls = enabled;
}

pub(super) fn mouse_controls(world: &WorldCore) -> bool {
    world.mouse_controls
}

pub(super) fn set_input(world: &mut WorldCore, input: InputState) {
    world.input = input;
}
