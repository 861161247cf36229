//! Per-slot exposure queries
//!
//! Intersects a member's position against the current beam volumes and packs
//! what the guidance layer needs: the pulse the member is scheduled into, how
//! many beams would strike them where they stand, and the safe-spot list.
//! Every member is meant to be hit by exactly one beam; zero means a dodged
//! required hit, two or more means a lethal overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PARTY_SIZE;

use super::beam::BeamSource;
use super::state::{MechanicState, WorldSnapshot};

/// A rendered safe spot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeSpot {
    pub slot: usize,
    pub pos: Vec2,
    /// Whether this is the queried slot's own spot
    pub mine: bool,
}

/// Result of one exposure query
#[derive(Debug, Clone, PartialEq)]
pub struct Exposure {
    /// Pulse index this slot is scheduled to be hit in
    pub pulse: u8,
    /// Beams (other than the slot's own) containing the queried position;
    /// None until the beam set is built
    pub hits: Option<u32>,
    /// Assigned spots for the whole party, the queried slot's own marked
    pub safe_spots: Vec<SafeSpot>,
}

impl Exposure {
    /// True when the slot stands somewhere lethal or wasted
    pub fn unsafe_position(&self) -> bool {
        matches!(self.hits, Some(n) if n != 1)
    }
}

impl MechanicState {
    /// Group-relative rank (1-4), overrides first, then slot order
    pub fn rank_of(&self, slot: usize) -> u8 {
        let mut order = *self.group_of(slot);
        order.sort_by_key(|&s| self.priorities().sort_key(s));
        order
            .iter()
            .position(|&s| s == slot)
            .map_or(4, |i| i as u8 + 1)
    }

    /// Pulse index this slot should be hit in.
    ///
    /// Rank 1 takes the late pulse of the first wave; monitors open, ranks 2
    /// and 3 follow them, rank 4 closes.
    pub fn pulse_of(&self, slot: usize) -> u8 {
        let rank = self.rank_of(slot);
        if rank == 1 {
            2
        } else if self.is_monitor(slot) {
            0
        } else if rank == 2 || rank == 3 {
            1
        } else {
            3
        }
    }

    /// Assigned spots for the whole party, `slot`'s own marked
    pub fn safe_spots(&self, slot: usize) -> Vec<SafeSpot> {
        (0..PARTY_SIZE)
            .map(|s| SafeSpot {
                slot: s,
                pos: self.safe_spot(s),
                mine: s == slot,
            })
            .collect()
    }

    /// Evaluate one slot standing at `position` against the current volumes.
    ///
    /// `slot` must be a valid party index; positions come from the caller's
    /// live view, not from the assignment.
    pub fn evaluate(&self, slot: usize, position: Vec2, world: &WorldSnapshot) -> Exposure {
        let beams = self.beams(world);
        let hits = if beams.is_empty() {
            None
        } else {
            let count = beams
                .iter()
                .filter(|beam| {
                    beam.source != BeamSource::Member(slot) && beam.rect.contains_point(position)
                })
                .count();
            Some(count as u32)
        };
        Exposure {
            pulse: self.pulse_of(slot),
            hits,
            safe_spots: self.safe_spots(slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriorityConfig;
    use crate::resolver::events::{ActorRef, ability, status};
    use crate::resolver::spread::SpreadLayout;
    use crate::resolver::state::ActorState;
    use crate::roster::DefaultRoster;

    const MT: usize = 0;
    const H1: usize = 2;
    const H2: usize = 3;
    const R2: usize = 7;

    fn session(layout: SpreadLayout) -> MechanicState {
        MechanicState::new(&DefaultRoster, PriorityConfig::new(), layout)
    }

    /// Sealed session plus a world where every beam covers exactly one arm of
    /// the spread: the primary sweeps the east pair, H1 sweeps the west pair,
    /// H2 the south pair, R2 the north pair.
    fn single_hit_setup() -> (MechanicState, WorldSnapshot) {
        let mut state = session(SpreadLayout::Rings);
        state.on_status_gain(H1, status::MONITOR_LEFT);
        state.on_status_gain(H2, status::MONITOR_RIGHT);
        state.on_status_gain(R2, status::MONITOR_LEFT);
        state.on_cast_started(ActorRef::Primary, ability::SWEEP_RIGHT);
        assert!(state.sealed());

        let mut party: [ActorState; PARTY_SIZE] =
            std::array::from_fn(|slot| ActorState::new(state.safe_spot(slot), 0.0));
        party[H1].facing = 80f32.to_radians(); // beam at 170 degrees
        party[H2].facing = 1f32.to_radians(); // beam at -89 degrees
        party[R2].facing = 10f32.to_radians(); // beam at 100 degrees

        let world = WorldSnapshot {
            primary: ActorState::new(Vec2::new(107.0, 93.0), 100f32.to_radians()),
            party,
        };
        (state, world)
    }

    #[test]
    fn test_every_slot_hit_exactly_once_at_its_spot() {
        let (state, world) = single_hit_setup();
        for slot in 0..PARTY_SIZE {
            let exposure = state.evaluate(slot, state.safe_spot(slot), &world);
            assert_eq!(exposure.hits, Some(1), "slot {slot}");
            assert!(!exposure.unsafe_position(), "slot {slot}");
        }
    }

    #[test]
    fn test_own_beam_is_excluded_from_the_count() {
        let (state, world) = single_hit_setup();
        let h1_spot = state.safe_spot(H1);

        // H1 stands at its own beam anchor: the beam meant for it still counts,
        // its own does not.
        assert_eq!(state.evaluate(H1, h1_spot, &world).hits, Some(1));
        // Anyone else at the same point is also inside H1's beam
        assert_eq!(state.evaluate(MT, h1_spot, &world).hits, Some(2));
    }

    #[test]
    fn test_wandering_off_spot_is_flagged() {
        let (state, world) = single_hit_setup();
        // Dead center sits behind every anchor and dodges all four beams
        let center = crate::consts::ARENA_CENTER;
        let exposure = state.evaluate(MT, center, &world);
        assert!(exposure.unsafe_position());
    }

    #[test]
    fn test_neutral_before_all_reports() {
        let mut state = session(SpreadLayout::Cross);
        state.on_cast_started(ActorRef::Primary, ability::SWEEP_LEFT);
        state.on_status_gain(H1, status::MONITOR_LEFT);
        state.on_status_gain(H2, status::MONITOR_RIGHT);

        let world = WorldSnapshot {
            primary: ActorState::new(crate::consts::ARENA_CENTER, 0.0),
            party: [ActorState::new(crate::consts::ARENA_CENTER, 0.0); PARTY_SIZE],
        };
        for slot in 0..PARTY_SIZE {
            let exposure = state.evaluate(slot, state.safe_spot(slot), &world);
            assert_eq!(exposure.hits, None, "slot {slot}");
            assert!(!exposure.unsafe_position());
        }
    }

    #[test]
    fn test_safe_spots_mark_the_queried_slot() {
        let state = session(SpreadLayout::Cross);
        let spots = state.safe_spots(5);
        assert_eq!(spots.len(), PARTY_SIZE);
        assert_eq!(spots.iter().filter(|s| s.mine).count(), 1);
        assert!(spots[5].mine);
        assert_eq!(spots[5].pos, state.safe_spot(5));
    }

    #[test]
    fn test_pulse_schedule_without_monitors() {
        let state = session(SpreadLayout::Cross);
        // Slot-order ranks: 1 and 4 bracket the schedule, 2 and 3 fill the middle
        let pulses: Vec<u8> = (0..PARTY_SIZE).map(|slot| state.pulse_of(slot)).collect();
        assert_eq!(pulses, vec![2, 1, 1, 3, 2, 1, 1, 3]);
    }

    #[test]
    fn test_monitors_pull_pulse_zero() {
        let (state, _) = single_hit_setup();
        assert_eq!(state.pulse_of(H1), 0);
        assert_eq!(state.pulse_of(H2), 0);
        assert_eq!(state.pulse_of(R2), 0);
        // Rank 1 members keep their slot even when monitors exist
        assert_eq!(state.pulse_of(MT), 2);
    }

    #[test]
    fn test_priority_override_reorders_ranks() {
        let mut priorities = PriorityConfig::new();
        priorities.priority[H2] = Some(0);
        let state = MechanicState::new(&DefaultRoster, priorities, SpreadLayout::Cross);

        assert_eq!(state.rank_of(H2), 1);
        assert_eq!(state.rank_of(MT), 2);
        assert_eq!(state.rank_of(H1), 4);
        assert_eq!(state.pulse_of(H2), 2);
        assert_eq!(state.pulse_of(H1), 3);
    }
}
