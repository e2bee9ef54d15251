//! Cluster resource-allocation summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Derived from agent slot occupancy whenever agents are refreshed. The root
//! layout only cares whether anything is allocated (busy vs idle), which
//! drives the favicon. Busy follows the slot count, not the rounded percent.

#[cfg(test)]
#[path = "cluster_test.rs"]
mod cluster_test;

use super::store::Reducer;
use crate::net::types::Agent;

/// Aggregate slot usage across all agents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClusterOverview {
    pub total_slots: u32,
    pub allocated_slots: u32,
    /// Percent of enabled slots that are occupied, rounded to the nearest integer.
    pub allocation: u32,
}

impl ClusterOverview {
    /// Summarize enabled slots; a slot counts as allocated when a container occupies it.
    pub fn from_agents(agents: &[Agent]) -> Self {
        let mut total_slots: u32 = 0;
        let mut allocated_slots: u32 = 0;
        for slot in agents.iter().flat_map(|agent| agent.slots.iter()).filter(|slot| slot.enabled) {
            total_slots += 1;
            if slot.container.is_some() {
                allocated_slots += 1;
            }
        }
        Self { total_slots, allocated_slots, allocation: allocation_percent(allocated_slots, total_slots) }
    }

    /// Busy while any enabled slot is occupied, however small its share.
    pub fn is_busy(&self) -> bool {
        self.allocated_slots != 0
    }
}

fn allocation_percent(allocated: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (allocated * 100 + total / 2) / total
}

#[derive(Clone, Copy, Debug)]
pub enum ClusterAction {
    Set(ClusterOverview),
}

pub struct ClusterReducer;

impl Reducer for ClusterReducer {
    type State = ClusterOverview;
    type Action = ClusterAction;

    fn reduce(_state: &ClusterOverview, action: ClusterAction) -> ClusterOverview {
        match action {
            ClusterAction::Set(overview) => overview,
        }
    }
}
