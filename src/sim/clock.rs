//! Frame clock
//!
//! Owns the dot set and drives discrete frame ticks. The host supplies a
//! monotonic time in milliseconds; at most one tick is pending at any moment,
//! and the next one is scheduled only after the current tick completes.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::dot::Dot;
use super::motion;
use super::proximity::{self, Link};
use super::store;
use crate::config::{Arena, SimulationConfig};
use crate::error::{ConfigError, SimError};
use crate::render::Renderer;

/// Summary of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FrameStats {
    /// Frame counter; 0 is the initial render before any motion
    pub frame: u64,
    pub dots: usize,
    pub links: usize,
    /// Dots that bounced off an edge this frame
    pub reflections: usize,
}

/// Simulation driver
#[derive(Debug, Clone)]
pub struct SimulationClock {
    arena: Arena,
    rng: Pcg32,
    /// Current dot set sorted by center x; `None` until initialized
    dots: Option<Vec<Dot>>,
    links: Vec<Link>,
    /// Deadline of the pending tick; `None` while stopped
    next_tick_at: Option<f64>,
    frame: u64,
}

impl SimulationClock {
    /// Validate the config and build a stopped, uninitialized clock
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let arena = config.validate()?;
        let rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };

        Ok(Self {
            arena,
            rng,
            dots: None,
            links: Vec::new(),
            next_tick_at: None,
            frame: 0,
        })
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Current dot set, sorted by center x
    pub fn dots(&self) -> &[Dot] {
        self.dots.as_deref().unwrap_or_default()
    }

    /// Links found in the last frame
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.next_tick_at.is_some()
    }

    pub fn next_tick_at(&self) -> Option<f64> {
        self.next_tick_at
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.arena.frame_interval_ms()
    }

    /// Begin ticking. Initializes and renders the dots if there are none yet.
    ///
    /// Calling this while already running leaves the pending tick untouched.
    pub fn start<R: Renderer + ?Sized>(&mut self, renderer: &mut R, now_ms: f64) {
        if self.is_running() {
            log::debug!("Start ignored, clock already running");
            return;
        }

        if self.dots.is_none() {
            match self.tick(renderer) {
                Ok(stats) => log::info!("Simulation started with {} dots", stats.dots),
                Err(e) => log::debug!("Initial render skipped: {}", e),
            }
        }

        self.schedule(now_ms);
    }

    /// Cancel the pending tick and tear down the dot set. Safe to call when stopped.
    pub fn stop(&mut self) {
        if self.next_tick_at.take().is_some() {
            log::info!("Simulation stopped at frame {}", self.frame);
        }
        self.dots = None;
        self.links.clear();
        self.frame = 0;
    }

    /// Fire the pending tick if its deadline has passed
    ///
    /// Returns the frame stats when a frame was rendered. A tick skipped because
    /// the renderer is unavailable is rescheduled.
    pub fn update<R: Renderer + ?Sized>(&mut self, renderer: &mut R, now_ms: f64) -> Option<FrameStats> {
        let due = self.next_tick_at?;
        if now_ms < due {
            return None;
        }

        let result = self.tick(renderer);
        self.schedule(now_ms);

        match result {
            Ok(stats) => Some(stats),
            Err(e) => {
                log::debug!("Tick skipped: {}", e);
                None
            }
        }
    }

    /// Run one frame immediately
    ///
    /// On an uninitialized clock this creates the dots and renders them without
    /// moving. Otherwise every dot advances one step, the set is re-sorted,
    /// links are rebuilt, and the frame is drawn.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<FrameStats, SimError> {
        if !renderer.is_ready() {
            return Err(SimError::RendererUnavailable);
        }

        let (dots, reflections) = match self.dots.take() {
            None => {
                self.frame = 0;
                let dots = store::initialize(self.arena.dot_amount, &self.arena, &mut self.rng)?;
                (dots, 0)
            }
            Some(dots) => {
                self.frame += 1;
                let mut reflections = 0;
                let moved = dots
                    .iter()
                    .map(|dot| {
                        let step = motion::step(dot, &self.arena);
                        if step.reflected.is_some() {
                            reflections += 1;
                        }
                        step.dot
                    })
                    .collect();
                (store::reorder(moved), reflections)
            }
        };

        let links = proximity::find_links(&dots, &self.arena);
        self.draw(renderer, &dots, &links);

        let stats = FrameStats {
            frame: self.frame,
            dots: dots.len(),
            links: links.len(),
            reflections,
        };
        log::trace!("{:?}", stats);

        self.dots = Some(dots);
        self.links = links;
        Ok(stats)
    }

    fn schedule(&mut self, now_ms: f64) {
        self.next_tick_at = Some(now_ms + self.arena.frame_interval_ms());
    }

    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, dots: &[Dot], links: &[Link]) {
        renderer.clear();
        for dot in dots {
            renderer.draw_dot(dot.x(), dot.y(), dot.width(), dot.height(), self.arena.dot_color);
        }
        for link in links {
            renderer.draw_line(
                link.from.x,
                link.from.y,
                link.to.x,
                link.to.y,
                self.arena.line_color,
                link.opacity,
            );
        }
    }
}
