use crate::core::math::Vector;
use crate::domain::InputState;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, WorldCore};

pub(super) fn create_world_core() -> WorldCore {
    WorldCore {
        balls: Vec::new(),
        walls: Vec::new(),
        capsules: Vec::new(),
        gravity: Vector::zero(),
        mouse_controls: false,
        input: InputState::default(),
        frame: 0,
        rng_state: 12345,

        render: RenderBuffers {
            balls: Vec::with_capacity(3 * 32),
            walls: Vec::with_capacity(4 * 16),
            capsules: Vec::with_capacity(6 * 4),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
