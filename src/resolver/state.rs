//! Mechanic session state
//!
//! All state that lives for one mechanic window. The session is owned by one
//! resolver instance: event handlers mutate it synchronously in combat-log
//! order, queries never mutate anything. The caller resets it at mechanic
//! start and discards it at mechanic end.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::PriorityConfig;
use crate::consts::{MONITOR_COUNT, PARTY_SIZE};
use crate::roster::{Group, Role, Roster, group_slots};

use super::spread::{Assignment, SpreadLayout, recompute};

/// Which side of its source's facing a beam fires toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamSide {
    Left,
    Right,
}

impl BeamSide {
    /// Rotation applied to the source's facing to get the firing direction
    #[inline]
    pub fn offset(&self) -> f32 {
        match self {
            BeamSide::Left => FRAC_PI_2,
            BeamSide::Right => -FRAC_PI_2,
        }
    }
}

/// Live position and facing of one actor, sampled by the caller per query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorState {
    pub pos: Vec2,
    /// Facing angle in radians
    pub facing: f32,
}

impl ActorState {
    pub fn new(pos: Vec2, facing: f32) -> Self {
        Self { pos, facing }
    }
}

/// Per-query view of the world: the primary hazard source plus the party
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub primary: ActorState,
    pub party: [ActorState; PARTY_SIZE],
}

/// Complete resolver state for one mechanic window
#[derive(Debug, Clone)]
pub struct MechanicState {
    /// Roles by slot, queried once at construction
    roles: [Role; PARTY_SIZE],
    /// Slot groups derived from the roles
    support: [usize; 4],
    damage: [usize; 4],
    /// Rank tie-break overrides
    priorities: PriorityConfig,
    /// Safe-spot layout
    layout: SpreadLayout,
    /// Monitor side per slot; None = no flag
    monitors: [Option<BeamSide>; PARTY_SIZE],
    /// Monitor slots and their sides in discovery order
    bait_order: Vec<(usize, BeamSide)>,
    /// Set once every monitor has reported; the order never changes after
    sealed: bool,
    /// Primary source's beam side, from the cast-start event
    primary_side: Option<BeamSide>,
    /// Current slot-to-direction assignment
    assignment: Assignment,
}

impl MechanicState {
    /// Build a session for one mechanic window.
    ///
    /// The roster is queried once here and never again. Panics if it does not
    /// split into two 4-slot groups; that is a defect in the embedding
    /// application, not in telemetry.
    pub fn new(roster: &impl Roster, priorities: PriorityConfig, layout: SpreadLayout) -> Self {
        let roles: [Role; PARTY_SIZE] = std::array::from_fn(|slot| roster.role_of(slot));
        let support = group_slots(&roles, Group::Support);
        let damage = group_slots(&roles, Group::Damage);
        let monitors = [None; PARTY_SIZE];
        let assignment = recompute(&roles, &[support, damage], &monitors);
        Self {
            roles,
            support,
            damage,
            priorities,
            layout,
            monitors,
            bait_order: Vec::new(),
            sealed: false,
            primary_side: None,
            assignment,
        }
    }

    /// Drop all transient state at mechanic start, keeping roster and config
    pub fn reset(&mut self) {
        self.monitors = [None; PARTY_SIZE];
        self.bait_order.clear();
        self.sealed = false;
        self.primary_side = None;
        self.assignment = recompute(&self.roles, &self.groups(), &self.monitors);
        log::debug!("mechanic session reset");
    }

    #[inline]
    pub fn roles(&self) -> &[Role; PARTY_SIZE] {
        &self.roles
    }

    #[inline]
    pub fn priorities(&self) -> &PriorityConfig {
        &self.priorities
    }

    #[inline]
    pub fn layout(&self) -> SpreadLayout {
        self.layout
    }

    #[inline]
    pub fn groups(&self) -> [[usize; 4]; 2] {
        [self.support, self.damage]
    }

    /// The 4-slot group containing `slot`
    pub fn group_of(&self, slot: usize) -> &[usize; 4] {
        match self.roles[slot].group() {
            Group::Support => &self.support,
            Group::Damage => &self.damage,
        }
    }

    #[inline]
    pub fn monitor_side(&self, slot: usize) -> Option<BeamSide> {
        self.monitors[slot]
    }

    #[inline]
    pub fn is_monitor(&self, slot: usize) -> bool {
        self.monitors[slot].is_some()
    }

    /// Monitor slots and sides in discovery order
    #[inline]
    pub fn bait_order(&self) -> &[(usize, BeamSide)] {
        &self.bait_order
    }

    /// True once every monitor has reported and the firing order is fixed
    #[inline]
    pub fn sealed(&self) -> bool {
        self.sealed
    }

    #[inline]
    pub fn primary_side(&self) -> Option<BeamSide> {
        self.primary_side
    }

    #[inline]
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Assigned world position for `slot`
    pub fn safe_spot(&self, slot: usize) -> Vec2 {
        self.layout.spot(slot, self.group_of(slot), &self.assignment)
    }

    /// Overwrite one slot's flag and rebuild the assignment.
    ///
    /// Discovery order tracks flag gains until it seals at the monitor count;
    /// after that, flag changes still drive the assignment but leave the
    /// firing order untouched.
    pub(crate) fn set_monitor(&mut self, slot: usize, side: Option<BeamSide>) {
        match side {
            Some(side) => {
                if !self.sealed {
                    match self.bait_order.iter_mut().find(|(s, _)| *s == slot) {
                        Some(entry) => entry.1 = side,
                        None => {
                            self.bait_order.push((slot, side));
                            if self.bait_order.len() == MONITOR_COUNT {
                                self.sealed = true;
                            }
                        }
                    }
                }
                self.monitors[slot] = Some(side);
                log::debug!("monitor ({side:?}) on {}", self.roles[slot].as_str());
            }
            None => {
                if self.monitors[slot].take().is_some() {
                    if !self.sealed {
                        self.bait_order.retain(|&(s, _)| s != slot);
                    }
                    log::debug!("monitor dropped from {}", self.roles[slot].as_str());
                }
            }
        }
        self.assignment = recompute(&self.roles, &self.groups(), &self.monitors);
    }

    pub(crate) fn set_primary_side(&mut self, side: BeamSide) {
        self.primary_side = Some(side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::DefaultRoster;

    fn session() -> MechanicState {
        MechanicState::new(&DefaultRoster, PriorityConfig::new(), SpreadLayout::Cross)
    }

    #[test]
    fn test_new_session_is_neutral() {
        let state = session();
        assert!(!state.sealed());
        assert!(state.bait_order().is_empty());
        assert!(state.primary_side().is_none());
        assert!((0..PARTY_SIZE).all(|slot| !state.is_monitor(slot)));
    }

    #[test]
    fn test_discovery_order_tracks_gains_and_losses() {
        let mut state = session();
        state.set_monitor(2, Some(BeamSide::Left));
        state.set_monitor(5, Some(BeamSide::Right));
        assert_eq!(state.bait_order(), &[(2, BeamSide::Left), (5, BeamSide::Right)]);

        // A loss before sealing removes the slot; a regain appends at the end
        state.set_monitor(2, None);
        state.set_monitor(2, Some(BeamSide::Left));
        assert_eq!(state.bait_order(), &[(5, BeamSide::Right), (2, BeamSide::Left)]);
    }

    #[test]
    fn test_seal_freezes_order() {
        let mut state = session();
        state.set_monitor(0, Some(BeamSide::Left));
        state.set_monitor(4, Some(BeamSide::Right));
        state.set_monitor(6, Some(BeamSide::Left));
        assert!(state.sealed());

        // Late loss and a fourth gain leave the sealed order alone
        state.set_monitor(4, None);
        state.set_monitor(7, Some(BeamSide::Right));
        assert_eq!(
            state.bait_order(),
            &[(0, BeamSide::Left), (4, BeamSide::Right), (6, BeamSide::Left)]
        );
        assert!(!state.is_monitor(4));
        assert!(state.is_monitor(7));
    }

    #[test]
    fn test_side_refresh_is_idempotent() {
        let mut state = session();
        state.set_monitor(3, Some(BeamSide::Left));
        state.set_monitor(3, Some(BeamSide::Right));
        assert_eq!(state.bait_order(), &[(3, BeamSide::Right)]);
        assert_eq!(state.monitor_side(3), Some(BeamSide::Right));
    }

    #[test]
    fn test_reset_restores_constructed_state() {
        let mut state = session();
        state.set_monitor(1, Some(BeamSide::Left));
        state.set_primary_side(BeamSide::Right);
        let fresh = session();

        state.reset();
        assert_eq!(state.bait_order(), fresh.bait_order());
        assert_eq!(state.primary_side(), fresh.primary_side());
        assert_eq!(state.assignment(), fresh.assignment());
    }
}
