//! Party roles and the two balancing groups
//!
//! Role lookup is owned by the surrounding application; this module defines
//! the read-only boundary plus the fixed role tables the resolver needs.

use serde::{Deserialize, Serialize};

use crate::consts::PARTY_SIZE;

/// Fixed functional role of a party slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    MainTank,
    OffTank,
    Healer1,
    Healer2,
    Melee1,
    Melee2,
    Ranged1,
    Ranged2,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::MainTank => "MT",
            Role::OffTank => "OT",
            Role::Healer1 => "H1",
            Role::Healer2 => "H2",
            Role::Melee1 => "M1",
            Role::Melee2 => "M2",
            Role::Ranged1 => "R1",
            Role::Ranged2 => "R2",
        }
    }

    /// Which balancing group this role spreads with
    pub fn group(&self) -> Group {
        match self {
            Role::MainTank | Role::OffTank | Role::Healer1 | Role::Healer2 => Group::Support,
            Role::Melee1 | Role::Melee2 | Role::Ranged1 | Role::Ranged2 => Group::Damage,
        }
    }
}

/// One of the two fixed 4-slot balancing groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Group {
    /// Tanks and healers
    Support,
    /// Melee and ranged
    Damage,
}

/// Standard slot-order role table
pub const ROLE_ORDER: [Role; PARTY_SIZE] = [
    Role::MainTank,
    Role::OffTank,
    Role::Healer1,
    Role::Healer2,
    Role::Melee1,
    Role::Melee2,
    Role::Ranged1,
    Role::Ranged2,
];

/// Read-only role lookup, queried once at session construction
pub trait Roster {
    fn role_of(&self, slot: usize) -> Role;
}

/// Roster with roles in standard slot order (MT, OT, H1, H2, M1, M2, R1, R2)
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRoster;

impl Roster for DefaultRoster {
    fn role_of(&self, slot: usize) -> Role {
        ROLE_ORDER[slot]
    }
}

/// Slots belonging to `group`, in slot order.
///
/// Panics unless the roster yields exactly four slots per group; an uneven
/// split is a defect in the embedding application, not in telemetry.
pub fn group_slots(roles: &[Role; PARTY_SIZE], group: Group) -> [usize; 4] {
    let mut slots = [0usize; 4];
    let mut found = 0;
    for (slot, role) in roles.iter().enumerate() {
        if role.group() == group {
            assert!(found < 4, "roster yields more than four {group:?} slots");
            slots[found] = slot;
            found += 1;
        }
    }
    assert!(found == 4, "roster yields {found} {group:?} slots, expected 4");
    slots
}
