use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::field::IdealPoint;
use crate::roster::TacticalPosition;

/// One named slot in a position's table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

impl Slot {
    pub fn point(&self) -> IdealPoint {
        IdealPoint::new(self.x, self.y)
    }
}

/// Reference slot layout: slot name, ideal x, ideal y per position, in
/// assignment order. The L/R suffix pairs alternate sides so consecutive
/// occupants of the same position fan outward.
const DEFAULT_SLOTS: &[(TacticalPosition, &[(&str, f32, f32)])] = &[
    (
        TacticalPosition::Goalkeeper,
        &[("Goalkeeper_1", 38.0, 102.0), ("Goalkeeper_2", 61.0, 102.0)],
    ),
    (
        TacticalPosition::CenterBack,
        &[
            ("Center Back_1", 23.0, 81.0),
            ("Center Back_2", 78.0, 81.0),
            ("Center Back_3", 40.0, 78.0),
            ("Center Back_4", 63.0, 78.0),
        ],
    ),
    (
        TacticalPosition::FullBack,
        &[("Full Back_L1", 5.0, 85.0), ("Full Back_R1", 96.0, 85.0)],
    ),
    (
        TacticalPosition::WingBack,
        &[("Wing Back_L1", 10.0, 69.0), ("Wing Back_R1", 95.0, 69.0)],
    ),
    (
        TacticalPosition::DefensiveMidfielder,
        &[
            ("Defensive Midfielder_1", 35.0, 58.0),
            ("Defensive Midfielder_2", 65.0, 58.0),
        ],
    ),
    (
        TacticalPosition::CentralMidfielder,
        &[
            ("Central Midfielder_1", 23.0, 48.0),
            ("Central Midfielder_2", 78.0, 48.0),
        ],
    ),
    (
        TacticalPosition::AttackingMidfielder,
        &[
            ("Attacking Midfielder_1", 35.0, 36.0),
            ("Attacking Midfielder_2", 65.0, 36.0),
        ],
    ),
    (
        TacticalPosition::Winger,
        &[
            ("Winger_L1", 10.0, 27.0),
            ("Winger_R1", 90.0, 27.0),
            ("Winger_L2", 25.0, 20.0),
            ("Winger_R2", 75.0, 20.0),
        ],
    ),
    (
        TacticalPosition::Striker,
        &[("Striker_1", 40.0, 12.0), ("Striker_2", 60.0, 12.0)],
    ),
];

/// Fixed, ordered slot tables per tactical position. Built once at startup
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotTables {
    pub tables: BTreeMap<TacticalPosition, Vec<Slot>>,
}

impl SlotTables {
    /// Selects the slot for the `occurrence_index`-th occupant of a
    /// position, wrapping round-robin once occupancy exceeds the table.
    /// Overlap from wrapped reuse is the accepted degradation, not an error.
    pub fn assign(&self, position: TacticalPosition, occurrence_index: usize) -> Option<&Slot> {
        let table = self.tables.get(&position)?;
        if table.is_empty() {
            return None;
        }
        Some(&table[occurrence_index % table.len()])
    }
}

static DEFAULT_TABLES: Lazy<BTreeMap<TacticalPosition, Vec<Slot>>> = Lazy::new(|| {
    DEFAULT_SLOTS
        .iter()
        .map(|(position, slots)| {
            let table = slots
                .iter()
                .map(|(name, x, y)| Slot {
                    name: (*name).to_string(),
                    x: *x,
                    y: *y,
                })
                .collect();
            (*position, table)
        })
        .collect()
});

impl Default for SlotTables {
    fn default() -> Self {
        Self {
            tables: DEFAULT_TABLES.clone(),
        }
    }
}
