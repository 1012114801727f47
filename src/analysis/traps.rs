use crate::models::{IssueKind, IssueMap, TrapKind};

use super::types::Trap;

/// Longest trap/counter list a report carries.
pub const MAX_TRAPS: usize = 4;

const STANDING: [Trap; 2] = [
    Trap {
        kind: TrapKind::Trap,
        text: "Addressing merits extensively while leaving standing vulnerable to attack",
    },
    Trap {
        kind: TrapKind::Counter,
        text: "Lead with concrete, particularized injury demonstration before reaching merits",
    },
];

const RACE_PREDOMINANCE: [Trap; 2] = [
    Trap {
        kind: TrapKind::Trap,
        text: "Conceding that race \"predominated\" while relying solely on VRA compliance as compelling interest",
    },
    Trap {
        kind: TrapKind::Counter,
        text: "Contest predomination finding; argue traditional redistricting criteria drove map design",
    },
];

const CIRCUIT_SPLIT: [Trap; 2] = [
    Trap {
        kind: TrapKind::Trap,
        text: "Over-relying on circuit split without demonstrating conflict maturity",
    },
    Trap {
        kind: TrapKind::Counter,
        text: "Document specific contradictory holdings with parallel fact patterns",
    },
];

/// Pair each likely concession with its counter. Always returns at least
/// one trap/counter pair.
pub fn generate_traps(issues: &IssueMap) -> Vec<Trap> {
    let mut traps = Vec::with_capacity(MAX_TRAPS + 2);

    if issues.get(IssueKind::Standing) {
        traps.extend(STANDING);
    }

    if issues.get(IssueKind::VotingRights) && issues.get(IssueKind::EqualProtection) {
        traps.extend(RACE_PREDOMINANCE);
    }

    if traps.len() < 2 {
        traps.extend(CIRCUIT_SPLIT);
    }

    traps.truncate(MAX_TRAPS);
    traps
}
