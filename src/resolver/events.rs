//! Telemetry event intake
//!
//! Raw status and ability ids arrive straight from the combat log; only the
//! handful the mechanic cares about are recognized, everything else is
//! ignored. Handlers must run in combat-log order: discovery order feeds both
//! the group balance and the firing order.

use crate::consts::PARTY_SIZE;

use super::state::{BeamSide, MechanicState};

/// Status ids recognized by the resolver
pub mod status {
    /// Monitor, beam firing left of the carrier's facing
    pub const MONITOR_LEFT: u32 = 3454;
    /// Monitor, beam firing right of the carrier's facing
    pub const MONITOR_RIGHT: u32 = 3455;
}

/// Ability ids recognized by the resolver
pub mod ability {
    /// Primary half-arena sweep, left side
    pub const SWEEP_LEFT: u32 = 31595;
    /// Primary half-arena sweep, right side
    pub const SWEEP_RIGHT: u32 = 31596;
}

fn side_for_status(id: u32) -> Option<BeamSide> {
    match id {
        status::MONITOR_LEFT => Some(BeamSide::Left),
        status::MONITOR_RIGHT => Some(BeamSide::Right),
        _ => None,
    }
}

fn side_for_ability(id: u32) -> Option<BeamSide> {
    match id {
        ability::SWEEP_LEFT => Some(BeamSide::Left),
        ability::SWEEP_RIGHT => Some(BeamSide::Right),
        _ => None,
    }
}

/// The actor a telemetry event concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRef {
    /// The primary hazard source
    Primary,
    /// A party slot
    Member(usize),
}

/// One telemetry record, in combat-log order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryEvent {
    StatusGain { slot: usize, status: u32 },
    StatusLose { slot: usize, status: u32 },
    CastStarted { caster: ActorRef, ability: u32 },
}

impl MechanicState {
    /// Apply one telemetry record
    pub fn apply(&mut self, event: TelemetryEvent) {
        match event {
            TelemetryEvent::StatusGain { slot, status } => self.on_status_gain(slot, status),
            TelemetryEvent::StatusLose { slot, status } => self.on_status_lose(slot, status),
            TelemetryEvent::CastStarted { caster, ability } => self.on_cast_started(caster, ability),
        }
    }

    /// A status appeared on a party slot.
    ///
    /// Unrecognized statuses are irrelevant telemetry and ignored outright; a
    /// recognized status on an impossible slot is malformed and dropped with
    /// a warning.
    pub fn on_status_gain(&mut self, slot: usize, status: u32) {
        let Some(side) = side_for_status(status) else {
            return;
        };
        if slot >= PARTY_SIZE {
            log::warn!("monitor status {status} on out-of-range slot {slot}");
            return;
        }
        self.set_monitor(slot, Some(side));
    }

    /// A status dropped off a party slot
    pub fn on_status_lose(&mut self, slot: usize, status: u32) {
        if side_for_status(status).is_none() {
            return;
        }
        if slot >= PARTY_SIZE {
            log::warn!("monitor status {status} lost on out-of-range slot {slot}");
            return;
        }
        self.set_monitor(slot, None);
    }

    /// A cast started; only the primary source's sweep sets its beam side
    pub fn on_cast_started(&mut self, caster: ActorRef, ability: u32) {
        let Some(side) = side_for_ability(ability) else {
            return;
        };
        match caster {
            ActorRef::Primary => self.set_primary_side(side),
            ActorRef::Member(_) => {}
        }
    }
}
