//! Simulation core
//!
//! Pure, deterministic frame logic with no rendering or platform dependencies:
//! - Constant-speed motion with quadrant-based edge reflection
//! - Seeded RNG only
//! - Dot set kept sorted by center x (stable order for equal keys)

pub mod clock;
pub mod dot;
pub mod motion;
pub mod proximity;
pub mod store;

pub use clock::{FrameStats, SimulationClock};
pub use dot::{BoundaryIndex, Dot};
pub use motion::{Step, overflowed_boundary, reflect, reflected_radian, step};
pub use proximity::{Link, find_links, insertion_index, window_end};
pub use store::{initialize, reorder};
