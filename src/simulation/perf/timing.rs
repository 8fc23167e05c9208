//! Per-phase wall-clock timing for `PerfStats`

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Which `PerfStats` field a phase reports into
pub(super) type PhaseSlot = fn(&mut PerfStats) -> &mut f64;

/// Milliseconds from a monotonic-enough clock: `Date.now()` in the browser,
/// `Instant` natively.
#[cfg(target_arch = "wasm32")]
pub(super) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Run one step phase, writing its duration into `slot` while perf metrics
/// are on. With metrics off the clock is never read.
pub(super) fn timed<R>(
    world: &mut WorldCore,
    slot: PhaseSlot,
    phase: impl FnOnce(&mut WorldCore) -> R,
) -> R {
    if !world.perf_enabled {
        return phase(world);
    }

    let start = now_ms();
    let out = phase(world);
    *slot(&mut world.perf_stats) = now_ms() - start;
    out
}
