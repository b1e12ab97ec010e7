pub mod slots;
pub mod zones;

use log::warn;

use crate::config::{LayoutConfig, Strategy};
use crate::field::{FieldMapper, RenderCoord};
use crate::roster::{OnFieldSet, Player, Position, Roster};

pub use slots::{Slot, SlotTables};
pub use zones::{PositionZone, ZoneTable};

/// One placed player: the final surface coordinate plus the slot name when
/// the static strategy assigned one.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub player: Player,
    pub coord: RenderCoord,
    pub slot: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub strategy: Strategy,
    pub placements: Vec<Placement>,
}

impl Layout {
    pub fn placement(&self, id: u32) -> Option<&Placement> {
        self.placements.iter().find(|p| p.player.id == id)
    }
}

/// Runs the full pipeline over a snapshot of the current state: partition
/// on-field players by position, allocate one ideal point per occupant with
/// the configured strategy, and map every point into the safe zone.
///
/// Recomputed wholesale on every on-field change; the zone strategy shifts
/// every occupant of a position when its occupancy changes, so placements
/// are never patched incrementally.
pub fn compute_layout(roster: &Roster, on_field: &OnFieldSet, config: &LayoutConfig) -> Layout {
    let mapper = FieldMapper::new(&config.mapper);
    let groups = group_by_position(roster, on_field);

    let mut placements = Vec::new();
    for (position, players) in &groups {
        match config.strategy {
            Strategy::SlotTable => {
                allocate_slots(position, players, config, &mapper, &mut placements);
            }
            Strategy::ZoneSpread => {
                allocate_zone(position, players, config, &mapper, &mut placements);
            }
        }
    }

    Layout {
        strategy: config.strategy,
        placements,
    }
}

/// Partitions on-field players by position. Groups appear in first-seen
/// order and each group keeps roster order, so a fixed roster and on-field
/// set always produce the same occurrence indices.
fn group_by_position<'a>(
    roster: &'a Roster,
    on_field: &OnFieldSet,
) -> Vec<(Position, Vec<&'a Player>)> {
    let mut groups: Vec<(Position, Vec<&Player>)> = Vec::new();
    for player in &roster.players {
        if !on_field.contains(&player.id) {
            continue;
        }
        match groups.iter_mut().find(|(pos, _)| *pos == player.position) {
            Some((_, members)) => members.push(player),
            None => groups.push((player.position.clone(), vec![player])),
        }
    }
    groups
}

fn allocate_slots(
    position: &Position,
    players: &[&Player],
    config: &LayoutConfig,
    mapper: &FieldMapper,
    placements: &mut Vec<Placement>,
) {
    for (occurrence, player) in players.iter().enumerate() {
        let assigned = position
            .known()
            .and_then(|pos| config.slots.assign(pos, occurrence));
        let (coord, slot) = match assigned {
            Some(slot) => (mapper.map(slot.point()), Some(slot.name.clone())),
            None => {
                warn!("no slot table for position {:?}", position.as_str());
                (RenderCoord::centered(), None)
            }
        };
        placements.push(Placement {
            player: (*player).clone(),
            coord,
            slot,
        });
    }
}

fn allocate_zone(
    position: &Position,
    players: &[&Player],
    config: &LayoutConfig,
    mapper: &FieldMapper,
    placements: &mut Vec<Placement>,
) {
    let points = match position.known() {
        Some(pos) => {
            if config.zones.get(pos).is_none() {
                warn!("no zone for position {:?}", position.as_str());
            }
            config.zones.spread(pos, players.len())
        }
        None => {
            warn!("no zone for position {:?}", position.as_str());
            vec![crate::field::IdealPoint::centered(); players.len()]
        }
    };
    debug_assert_eq!(points.len(), players.len());
    for (player, point) in players.iter().zip(points) {
        placements.push(Placement {
            player: (*player).clone(),
            coord: mapper.map(point),
            slot: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{PlayerId, TacticalPosition};

    fn player(id: PlayerId, position: Position) -> Player {
        Player {
            id,
            name: format!("Player {id}"),
            jersey_number: id,
            position,
            foot: "Right".to_string(),
            goals: 0,
            assists: 0,
            fitness_level: 75,
        }
    }

    fn known(pos: TacticalPosition) -> Position {
        Position::Known(pos)
    }

    fn roster_of(positions: &[(PlayerId, Position)]) -> Roster {
        Roster::new(
            positions
                .iter()
                .map(|(id, pos)| player(*id, pos.clone()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn pipeline_is_deterministic() {
        let roster = roster_of(&[
            (1, known(TacticalPosition::Goalkeeper)),
            (2, known(TacticalPosition::CenterBack)),
            (3, known(TacticalPosition::CenterBack)),
            (4, known(TacticalPosition::Striker)),
            (5, known(TacticalPosition::Winger)),
        ]);
        let on_field = roster.all_ids();
        for strategy in [Strategy::SlotTable, Strategy::ZoneSpread] {
            let config = LayoutConfig {
                strategy,
                ..LayoutConfig::default()
            };
            let first = compute_layout(&roster, &on_field, &config);
            let second = compute_layout(&roster, &on_field, &config);
            assert_eq!(first.placements, second.placements);
        }
    }

    #[test]
    fn off_field_players_get_no_coordinates() {
        let roster = roster_of(&[
            (1, known(TacticalPosition::Striker)),
            (2, known(TacticalPosition::Striker)),
            (3, known(TacticalPosition::Winger)),
        ]);
        let mut on_field = roster.all_ids();
        on_field.remove(&2);
        let layout = compute_layout(&roster, &on_field, &LayoutConfig::default());
        assert_eq!(layout.placements.len(), 2);
        assert!(layout.placement(2).is_none());
    }

    #[test]
    fn slot_occurrences_follow_roster_order() {
        let roster = roster_of(&[
            (1, known(TacticalPosition::Winger)),
            (2, known(TacticalPosition::Striker)),
            (3, known(TacticalPosition::Winger)),
        ]);
        let layout = compute_layout(&roster, &roster.all_ids(), &LayoutConfig::default());
        assert_eq!(layout.placement(1).unwrap().slot.as_deref(), Some("Winger_L1"));
        assert_eq!(layout.placement(3).unwrap().slot.as_deref(), Some("Winger_R1"));
        assert_eq!(layout.placement(2).unwrap().slot.as_deref(), Some("Striker_1"));
    }

    #[test]
    fn occurrence_counting_does_not_leak_across_passes() {
        let roster = roster_of(&[
            (1, known(TacticalPosition::Striker)),
            (2, known(TacticalPosition::Striker)),
        ]);
        let config = LayoutConfig::default();
        let first = compute_layout(&roster, &roster.all_ids(), &config);
        // A second full pass must restart occurrence indices from zero.
        let second = compute_layout(&roster, &roster.all_ids(), &config);
        assert_eq!(
            first.placement(1).unwrap().slot,
            second.placement(1).unwrap().slot
        );
        assert_eq!(first.placement(1).unwrap().slot.as_deref(), Some("Striker_1"));
    }

    #[test]
    fn wrapped_occupants_reuse_slot_coordinates() {
        let roster = roster_of(&[
            (1, known(TacticalPosition::Striker)),
            (2, known(TacticalPosition::Striker)),
            (3, known(TacticalPosition::Striker)),
        ]);
        let layout = compute_layout(&roster, &roster.all_ids(), &LayoutConfig::default());
        // Table length 2: the third striker wraps onto the first slot.
        assert_eq!(
            layout.placement(3).unwrap().coord,
            layout.placement(1).unwrap().coord
        );
    }

    #[test]
    fn unknown_position_falls_back_to_centre_without_panicking() {
        let roster = roster_of(&[(9, Position::Unknown("Sweeper".to_string()))]);
        let layout = compute_layout(&roster, &roster.all_ids(), &LayoutConfig::default());
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.placements[0].coord, RenderCoord::centered());
        assert!(layout.placements[0].slot.is_none());
    }

    #[test]
    fn removing_an_occupant_shifts_the_survivor() {
        let roster = roster_of(&[
            (1, known(TacticalPosition::Striker)),
            (2, known(TacticalPosition::Striker)),
        ]);
        let config = LayoutConfig {
            strategy: Strategy::ZoneSpread,
            ..LayoutConfig::default()
        };
        let mapper = FieldMapper::new(&config.mapper);

        let both = compute_layout(&roster, &roster.all_ids(), &config);
        let first_before = both.placement(1).unwrap().coord;
        assert_eq!(first_before, mapper.map(crate::field::IdealPoint::new(40.0, 16.0)));

        let mut on_field = roster.all_ids();
        on_field.remove(&2);
        let alone = compute_layout(&roster, &on_field, &config);
        let first_after = alone.placement(1).unwrap().coord;
        // Divisor changed from 2 to 1, so the survivor moves from 40 to 50.
        assert_ne!(first_before, first_after);
        assert_eq!(first_after, mapper.map(crate::field::IdealPoint::new(50.0, 16.0)));
    }

    #[test]
    fn strategies_are_never_mixed_within_a_pass() {
        let roster = roster_of(&[
            (1, known(TacticalPosition::Striker)),
            (2, known(TacticalPosition::Winger)),
        ]);
        let config = LayoutConfig {
            strategy: Strategy::ZoneSpread,
            ..LayoutConfig::default()
        };
        let layout = compute_layout(&roster, &roster.all_ids(), &config);
        assert!(layout.placements.iter().all(|p| p.slot.is_none()));
    }
}
