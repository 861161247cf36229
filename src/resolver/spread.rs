//! Spread assignment
//!
//! Assigns every slot one of four directions around the arena center,
//! starting from the fixed default cross and applying at most one corrective
//! swap per balancing group so that monitors never stack onto a direction
//! they would double-cleave. With four slots and two directions per group,
//! one swap is always enough for every flag count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::BeamSide;
use crate::consts::{ARENA_CENTER, FAR_RADIUS, NEAR_RADIUS, PARTY_SIZE, SPREAD_RADIUS};
use crate::roster::Role;

/// Cardinal spread direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    /// Unit offset from arena center (y-up, north positive)
    #[inline]
    pub fn offset(&self) -> Vec2 {
        match self {
            Dir::North => Vec2::new(0.0, 1.0),
            Dir::East => Vec2::new(1.0, 0.0),
            Dir::South => Vec2::new(0.0, -1.0),
            Dir::West => Vec2::new(-1.0, 0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dir::North => "N",
            Dir::East => "E",
            Dir::South => "S",
            Dir::West => "W",
        }
    }

    /// Default direction for a role: the unflagged cross
    pub fn default_for(role: Role) -> Dir {
        match role {
            Role::MainTank | Role::Healer1 => Dir::North,
            Role::OffTank | Role::Healer2 => Dir::East,
            Role::Melee2 | Role::Ranged2 => Dir::South,
            Role::Melee1 | Role::Ranged1 => Dir::West,
        }
    }
}

/// Safe-spot layout variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpreadLayout {
    /// Both members of a direction share one spot at the spread radius
    #[default]
    Cross,
    /// Members sharing a direction split near/far, lower slot index near
    Rings,
}

impl SpreadLayout {
    /// World position for `slot` under `assignment`, given its 4-slot group
    pub fn spot(&self, slot: usize, group: &[usize; 4], assignment: &Assignment) -> Vec2 {
        let dir = assignment.dir_of(slot);
        let radius = match self {
            SpreadLayout::Cross => SPREAD_RADIUS,
            SpreadLayout::Rings => {
                let lower_shares = group
                    .iter()
                    .any(|&s| s < slot && assignment.dir_of(s) == dir);
                if lower_shares { FAR_RADIUS } else { NEAR_RADIUS }
            }
        };
        ARENA_CENTER + dir.offset() * radius
    }
}

/// Slot-to-direction mapping for the whole party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    dirs: [Dir; PARTY_SIZE],
}

impl Assignment {
    #[inline]
    pub fn dir_of(&self, slot: usize) -> Dir {
        self.dirs[slot]
    }
}

/// Rebuild the assignment from the default cross for the current flags.
///
/// Pure: depends only on its arguments, so identical flag vectors yield
/// identical assignments no matter how often or in which order it runs.
pub fn recompute(
    roles: &[Role; PARTY_SIZE],
    groups: &[[usize; 4]; 2],
    monitors: &[Option<BeamSide>; PARTY_SIZE],
) -> Assignment {
    let mut dirs: [Dir; PARTY_SIZE] = std::array::from_fn(|slot| Dir::default_for(roles[slot]));
    for group in groups {
        balance_group(&mut dirs, group, monitors);
    }
    Assignment { dirs }
}

/// At most one corrective swap, keyed by how many members carry a monitor.
fn balance_group(
    dirs: &mut [Dir; PARTY_SIZE],
    group: &[usize; 4],
    monitors: &[Option<BeamSide>; PARTY_SIZE],
) {
    let flagged = |slot: usize| monitors[slot].is_some();
    let count = group.iter().filter(|&&slot| flagged(slot)).count();

    match count {
        // Already split evenly
        0 | 4 => {}
        // Move the monitor off its partner's direction
        1 => {
            let solo = group.iter().copied().find(|&s| flagged(s));
            let partner = solo.and_then(|solo| {
                group
                    .iter()
                    .copied()
                    .find(|&s| !flagged(s) && dirs[s] != dirs[solo])
            });
            if let (Some(solo), Some(partner)) = (solo, partner) {
                dirs.swap(solo, partner);
            }
        }
        // Split stacked monitors one per direction
        2 => {
            let mut stacked = group.iter().copied().filter(|&s| flagged(s));
            let (first, second) = (stacked.next(), stacked.next());
            if let (Some(first), Some(second)) = (first, second) {
                if dirs[first] == dirs[second] {
                    if let Some(partner) = group.iter().copied().find(|&s| !flagged(s)) {
                        dirs.swap(first, partner);
                    }
                }
            }
        }
        // The odd one out trades with a monitor on the other direction
        3 => {
            let lone = group.iter().copied().find(|&s| !flagged(s));
            let donor = lone.and_then(|lone| {
                group
                    .iter()
                    .copied()
                    .find(|&s| flagged(s) && dirs[s] != dirs[lone])
            });
            if let (Some(lone), Some(donor)) = (lone, donor) {
                dirs.swap(lone, donor);
            }
        }
        _ => unreachable!("a balancing group has exactly four slots"),
    }
}
