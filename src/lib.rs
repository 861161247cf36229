//! Beamsplit - safe-spot assignment and beam-exposure resolution for an
//! 8-player circular-arena raid mechanic.
//!
//! Core modules:
//! - `resolver`: Deterministic mechanic state (flags, spread assignment, beam geometry)
//! - `roster`: Party roles and the two balancing groups
//! - `config`: Priority overrides for rank tie-breaks
//! - `overlay`: Render-adapter boundary (markers, hints)

pub mod config;
pub mod overlay;
pub mod resolver;
pub mod roster;

pub use config::PriorityConfig;
pub use resolver::{MechanicState, SpreadLayout, WorldSnapshot};
pub use roster::{DefaultRoster, Role, Roster};

use glam::Vec2;

/// Mechanic configuration constants
pub mod consts {
    use glam::Vec2;

    /// Full party size
    pub const PARTY_SIZE: usize = 8;
    /// Number of monitor statuses handed out per mechanic
    pub const MONITOR_COUNT: usize = 3;

    /// Arena dimensions
    pub const ARENA_CENTER: Vec2 = Vec2::new(100.0, 100.0);
    pub const ARENA_RADIUS: f32 = 30.0;

    /// Spread distance from arena center (cross layout)
    pub const SPREAD_RADIUS: f32 = 11.0;
    /// Ring radii for the near/far layout
    pub const NEAR_RADIUS: f32 = 7.0;
    pub const FAR_RADIUS: f32 = 17.0;

    /// Beam rectangle dimensions - a half-arena cleave at arena scale
    pub const BEAM_LENGTH: f32 = 50.0;
    pub const BEAM_HALF_WIDTH: f32 = 50.0;

    /// Safe-spot marker radius for overlays
    pub const SPOT_MARKER_RADIUS: f32 = 1.0;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector for a facing angle
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
