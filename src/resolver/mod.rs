//! Deterministic mechanic resolver
//!
//! All assignment and geometry logic lives here. This module must be pure and
//! deterministic:
//! - Telemetry handlers applied in combat-log order
//! - Fixed inputs, fixed outputs (no clocks, no RNG)
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod beam;
pub mod events;
pub mod exposure;
pub mod rect;
pub mod spread;
pub mod state;

pub use beam::{Beam, BeamSource};
pub use events::{ActorRef, TelemetryEvent};
pub use exposure::{Exposure, SafeSpot};
pub use rect::BeamRect;
pub use spread::{Assignment, Dir, SpreadLayout, recompute};
pub use state::{ActorState, BeamSide, MechanicState, WorldSnapshot};
