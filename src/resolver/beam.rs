//! Beam volumes and firing order
//!
//! The volume list exists only once every monitor has reported and the
//! primary side is known. Sides and order are fixed state; anchors and
//! facings are read from the live snapshot on every build, because sources
//! keep moving while the beams charge.

use crate::consts::{BEAM_HALF_WIDTH, BEAM_LENGTH};
use crate::normalize_angle;

use super::rect::BeamRect;
use super::state::{ActorState, BeamSide, MechanicState, WorldSnapshot};

/// Where a beam fires from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamSource {
    /// The primary hazard source
    Primary,
    /// A monitor-carrying party slot
    Member(usize),
}

/// One hazard volume with its resolution order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub source: BeamSource,
    pub side: BeamSide,
    /// Resolution index: 0 is the primary, monitors follow in discovery order
    pub order: usize,
    pub rect: BeamRect,
}

impl Beam {
    fn from_actor(source: BeamSource, side: BeamSide, order: usize, actor: &ActorState) -> Self {
        let direction = normalize_angle(actor.facing + side.offset());
        Self {
            source,
            side,
            order,
            rect: BeamRect::new(actor.pos, direction, BEAM_LENGTH, BEAM_HALF_WIDTH),
        }
    }
}

impl MechanicState {
    /// Build the ordered beam list from live positions.
    ///
    /// Empty until the firing order is sealed and the primary side is known;
    /// before that the mechanic simply has not progressed far enough.
    pub fn beams(&self, world: &WorldSnapshot) -> Vec<Beam> {
        let Some(primary_side) = self.primary_side() else {
            return Vec::new();
        };
        if !self.sealed() {
            return Vec::new();
        }

        let mut beams = Vec::with_capacity(1 + self.bait_order().len());
        beams.push(Beam::from_actor(
            BeamSource::Primary,
            primary_side,
            0,
            &world.primary,
        ));
        for (i, &(slot, side)) in self.bait_order().iter().enumerate() {
            beams.push(Beam::from_actor(
                BeamSource::Member(slot),
                side,
                i + 1,
                &world.party[slot],
            ));
        }
        beams
    }
}
