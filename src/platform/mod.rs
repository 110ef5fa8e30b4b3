//! Platform drivers
//!
//! The simulation clock only knows about milliseconds and a [`Renderer`](crate::Renderer).
//! These modules supply both:
//! - `native`: real-time headless loop on `std::time::Instant`
//! - `web`: `setTimeout` loop drawing into a 2D canvas context (wasm32 only)

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;
