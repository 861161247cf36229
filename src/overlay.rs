//! Render-adapter boundary
//!
//! The resolver never draws. The host application implements [`Overlay`] and
//! the adapters below feed it safe-spot markers, beam outlines, and warning
//! text; drawing order, colors, and fonts stay on the host's side.

use glam::Vec2;

use crate::consts::SPOT_MARKER_RADIUS;
use crate::resolver::{MechanicState, WorldSnapshot};

/// Visual class of an overlay element; the host maps these to colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// The queried player's own safe spot
    Mine,
    /// Another member's safe spot
    Safe,
    /// A hazard volume
    Danger,
}

/// Drawing and text sinks owned by the host application
pub trait Overlay {
    fn add_circle(&mut self, center: Vec2, radius: f32, style: MarkerStyle);
    fn add_rect(&mut self, corners: [Vec2; 4], style: MarkerStyle);
    fn add_movement_hint(&mut self, from: Vec2, to: Vec2);
    fn add_text_hint(&mut self, text: String);
}

/// Beam outlines, drawn behind the party layer
pub fn draw_arena_background(
    state: &MechanicState,
    world: &WorldSnapshot,
    overlay: &mut impl Overlay,
) {
    for beam in state.beams(world) {
        overlay.add_rect(beam.rect.corners(), MarkerStyle::Danger);
    }
}

/// Safe-spot markers for every slot, the player's own highlighted
pub fn draw_arena_foreground(pc_slot: usize, state: &MechanicState, overlay: &mut impl Overlay) {
    for spot in state.safe_spots(pc_slot) {
        let style = if spot.mine {
            MarkerStyle::Mine
        } else {
            MarkerStyle::Safe
        };
        overlay.add_circle(spot.pos, SPOT_MARKER_RADIUS, style);
    }
}

/// Movement and warning hints for one slot at its current position.
///
/// Quiet until the beam set is built; after that a wrong hit count raises a
/// text warning and a pointer back to the slot's own spot.
pub fn add_hints(
    pc_slot: usize,
    position: Vec2,
    state: &MechanicState,
    world: &WorldSnapshot,
    overlay: &mut impl Overlay,
) {
    let exposure = state.evaluate(pc_slot, position, world);
    if !exposure.unsafe_position() {
        return;
    }
    if let Some(hits) = exposure.hits {
        let dir = state.assignment().dir_of(pc_slot);
        overlay.add_text_hint(format!(
            "hit by {hits} beams, want exactly 1 (spread {})",
            dir.as_str()
        ));
        overlay.add_movement_hint(position, state.safe_spot(pc_slot));
    }
}
