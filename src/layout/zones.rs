use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::IdealPoint;
use crate::roster::TacticalPosition;

/// A horizontal band on the idealized grid: fixed depth `y`, occupants
/// spread across `[x_start, x_end]`. The wider bands run past the 0-100
/// grid on purpose so wide positions hug the touchlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionZone {
    pub y: f32,
    pub x_start: f32,
    pub x_end: f32,
}

const DEFAULT_ZONES: &[(TacticalPosition, PositionZone)] = &[
    (
        TacticalPosition::Goalkeeper,
        PositionZone { y: 100.0, x_start: 20.0, x_end: 60.0 },
    ),
    (
        TacticalPosition::CenterBack,
        PositionZone { y: 75.0, x_start: -13.0, x_end: 92.0 },
    ),
    (
        TacticalPosition::FullBack,
        PositionZone { y: 86.0, x_start: -77.0, x_end: 92.0 },
    ),
    (
        TacticalPosition::WingBack,
        PositionZone { y: 63.0, x_start: -95.0, x_end: 98.0 },
    ),
    (
        TacticalPosition::DefensiveMidfielder,
        PositionZone { y: 60.0, x_start: 20.0, x_end: 60.0 },
    ),
    (
        TacticalPosition::CentralMidfielder,
        PositionZone { y: 50.0, x_start: -8.0, x_end: 70.0 },
    ),
    (
        TacticalPosition::AttackingMidfielder,
        PositionZone { y: 38.0, x_start: 11.0, x_end: 70.0 },
    ),
    (
        TacticalPosition::Winger,
        PositionZone { y: 25.0, x_start: -17.0, x_end: 90.0 },
    ),
    (
        TacticalPosition::Striker,
        PositionZone { y: 16.0, x_start: 30.0, x_end: 50.0 },
    ),
];

/// Per-position zones, fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTable {
    pub zones: BTreeMap<TacticalPosition, PositionZone>,
}

impl ZoneTable {
    pub fn get(&self, position: TacticalPosition) -> Option<PositionZone> {
        self.zones.get(&position).copied()
    }

    /// Evenly subdivides the position's band among `count` occupants.
    ///
    /// Occupant `i` lands at `x_start + spacing * (i + 1)`: the first
    /// occupant is one spacing step in from `x_start` and the last sits
    /// exactly on `x_end`. The off-by-one keeps markers off the band's
    /// leading edge and must be preserved for compatibility.
    ///
    /// A position without a zone yields `count` centred points. Zero
    /// occupants yield an empty vec; the spacing divisor is never zero.
    pub fn spread(&self, position: TacticalPosition, count: usize) -> Vec<IdealPoint> {
        if count == 0 {
            return Vec::new();
        }
        let Some(zone) = self.get(position) else {
            return vec![IdealPoint::centered(); count];
        };
        let spacing = (zone.x_end - zone.x_start) / count.max(1) as f32;
        (0..count)
            .map(|index| IdealPoint::new(zone.x_start + spacing * (index + 1) as f32, zone.y))
            .collect()
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self {
            zones: DEFAULT_ZONES.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_occupant_lands_on_band_end() {
        let zones = ZoneTable::default();
        for position in TacticalPosition::ALL {
            let zone = zones.get(position).unwrap();
            for count in 1..=6 {
                let points = zones.spread(position, count);
                assert_eq!(points.len(), count);
                let last = points.last().unwrap();
                assert!(
                    (last.x - zone.x_end).abs() < 1e-3,
                    "{} count {}: last x {} != {}",
                    position.as_str(),
                    count,
                    last.x,
                    zone.x_end
                );
            }
        }
    }

    #[test]
    fn occupants_strictly_increase_and_avoid_band_start() {
        let zones = ZoneTable::default();
        let zone = zones.get(TacticalPosition::Winger).unwrap();
        let points = zones.spread(TacticalPosition::Winger, 5);
        for pair in points.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        for point in &points {
            assert!(point.x != zone.x_start);
            assert_eq!(point.y, zone.y);
        }
    }

    #[test]
    fn zero_occupants_produce_nothing() {
        let zones = ZoneTable::default();
        assert!(zones.spread(TacticalPosition::Striker, 0).is_empty());
    }

    #[test]
    fn striker_pair_matches_reference_spacing() {
        // zone y=16, 30..50: two occupants at x = 40 and 50.
        let zones = ZoneTable::default();
        let points = zones.spread(TacticalPosition::Striker, 2);
        assert_eq!(
            points,
            vec![IdealPoint::new(40.0, 16.0), IdealPoint::new(50.0, 16.0)]
        );
    }

    #[test]
    fn missing_zone_falls_back_to_centre() {
        let mut zones = ZoneTable::default();
        zones.zones.remove(&TacticalPosition::Goalkeeper);
        let points = zones.spread(TacticalPosition::Goalkeeper, 3);
        assert_eq!(points, vec![IdealPoint::centered(); 3]);
    }
}
