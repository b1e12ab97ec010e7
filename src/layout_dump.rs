use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::field::MarkerAnchor;
use crate::layout::Layout;
use crate::selection::FieldState;

/// Flat, serializable view of a computed layout, for debugging and for
/// asserting coordinates in integration tests.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub strategy: String,
    pub placements: Vec<PlacementDump>,
}

#[derive(Debug, Serialize)]
pub struct PlacementDump {
    pub id: u32,
    pub name: String,
    pub jersey_number: u32,
    pub position: String,
    pub slot: Option<String>,
    pub top: f32,
    pub left: f32,
    pub anchor: String,
    pub highlighted: bool,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout, state: &FieldState) -> Self {
        let placements = layout
            .placements
            .iter()
            .map(|p| PlacementDump {
                id: p.player.id,
                name: p.player.name.clone(),
                jersey_number: p.player.jersey_number,
                position: p.player.position.as_str().to_string(),
                slot: p.slot.clone(),
                top: p.coord.top,
                left: p.coord.left,
                anchor: match p.coord.anchor {
                    MarkerAnchor::CenterX => "center-x".to_string(),
                    MarkerAnchor::Center => "center".to_string(),
                },
                highlighted: state.is_highlighted(&p.player),
            })
            .collect();
        Self {
            strategy: layout.strategy.as_str().to_string(),
            placements,
        }
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::compute_layout;
    use crate::roster::{Position, Roster, TacticalPosition};

    #[test]
    fn dump_mirrors_placements() {
        let roster = Roster::new(vec![crate::roster::Player {
            id: 10,
            name: "Iris".to_string(),
            jersey_number: 7,
            position: Position::Known(TacticalPosition::Winger),
            foot: "Right".to_string(),
            goals: 5,
            assists: 9,
            fitness_level: 84,
        }])
        .unwrap();
        let state = FieldState::with_all_on_field(&roster);
        let layout = compute_layout(&roster, state.on_field(), &LayoutConfig::default());
        let dump = LayoutDump::from_layout(&layout, &state);

        assert_eq!(dump.strategy, "static-slot-table");
        assert_eq!(dump.placements.len(), 1);
        let entry = &dump.placements[0];
        assert_eq!(entry.id, 10);
        assert_eq!(entry.position, "Winger");
        assert_eq!(entry.slot.as_deref(), Some("Winger_L1"));
        assert_eq!(entry.anchor, "center-x");
        assert!(!entry.highlighted);

        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["placements"][0]["jersey_number"], 7);
    }
}
