//! Headless real-time driver
//!
//! Sleeps until each pending tick is due and hands the clock a monotonic
//! timestamp, the same way a browser timer would.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::render::Renderer;
use crate::sim::{FrameStats, SimulationClock};

/// Totals over a headless run
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Frames rendered after the initial one
    pub frames: u64,
    pub total_links: usize,
    pub total_reflections: usize,
    pub elapsed_ms: f64,
    pub last: FrameStats,
}

/// Start the clock and run it in real time until `frames` ticks have rendered
pub fn run_for<R: Renderer + ?Sized>(
    clock: &mut SimulationClock,
    renderer: &mut R,
    frames: u64,
) -> RunSummary {
    let started = Instant::now();
    let now_ms = |at: Instant| at.duration_since(started).as_secs_f64() * 1000.0;

    clock.start(renderer, 0.0);
    let mut summary = RunSummary::default();

    while summary.frames < frames {
        let Some(due) = clock.next_tick_at() else {
            log::warn!("Clock stopped before {} frames", frames);
            break;
        };

        let wait = due - now_ms(Instant::now());
        if wait > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(wait / 1000.0));
        }

        if let Some(stats) = clock.update(renderer, now_ms(Instant::now())) {
            summary.frames += 1;
            summary.total_links += stats.links;
            summary.total_reflections += stats.reflections;
            summary.last = stats;
        }
    }

    summary.elapsed_ms = now_ms(Instant::now());
    log::info!(
        "Ran {} frames in {:.1} ms ({} links, {} reflections)",
        summary.frames,
        summary.elapsed_ms,
        summary.total_links,
        summary.total_reflections
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SimulationConfig, Size};
    use crate::render::CommandBuffer;

    #[test]
    fn test_run_for_frames() {
        let config = SimulationConfig {
            dot_amount: 10,
            canvas_size: Size::new(120.0, 80.0),
            frames_per_second: 1000.0,
            seed: Some(42),
            ..Default::default()
        };
        let mut clock = SimulationClock::new(&config).unwrap();
        let mut renderer = CommandBuffer::new();

        let summary = run_for(&mut clock, &mut renderer, 5);
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.last.frame, 5);
        assert_eq!(clock.frame(), 5);
        // Initial render plus five ticks
        assert_eq!(renderer.frames, 6);
        assert!(summary.elapsed_ms >= 4.0);
    }
}
