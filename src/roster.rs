use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The nine on-field roles a player can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TacticalPosition {
    Goalkeeper,
    #[serde(rename = "Center Back")]
    CenterBack,
    #[serde(rename = "Full Back")]
    FullBack,
    #[serde(rename = "Wing Back")]
    WingBack,
    #[serde(rename = "Defensive Midfielder")]
    DefensiveMidfielder,
    #[serde(rename = "Central Midfielder")]
    CentralMidfielder,
    #[serde(rename = "Attacking Midfielder")]
    AttackingMidfielder,
    Winger,
    Striker,
}

impl TacticalPosition {
    pub const ALL: [TacticalPosition; 9] = [
        TacticalPosition::Goalkeeper,
        TacticalPosition::CenterBack,
        TacticalPosition::FullBack,
        TacticalPosition::WingBack,
        TacticalPosition::DefensiveMidfielder,
        TacticalPosition::CentralMidfielder,
        TacticalPosition::AttackingMidfielder,
        TacticalPosition::Winger,
        TacticalPosition::Striker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TacticalPosition::Goalkeeper => "Goalkeeper",
            TacticalPosition::CenterBack => "Center Back",
            TacticalPosition::FullBack => "Full Back",
            TacticalPosition::WingBack => "Wing Back",
            TacticalPosition::DefensiveMidfielder => "Defensive Midfielder",
            TacticalPosition::CentralMidfielder => "Central Midfielder",
            TacticalPosition::AttackingMidfielder => "Attacking Midfielder",
            TacticalPosition::Winger => "Winger",
            TacticalPosition::Striker => "Striker",
        }
    }

    /// Coarse grouping used for filtering and highlighting only; layout
    /// never consults it.
    pub fn group(&self) -> PositionGroup {
        match self {
            TacticalPosition::Goalkeeper => PositionGroup::Goalkeepers,
            TacticalPosition::CenterBack
            | TacticalPosition::FullBack
            | TacticalPosition::WingBack => PositionGroup::Defenders,
            TacticalPosition::DefensiveMidfielder
            | TacticalPosition::CentralMidfielder
            | TacticalPosition::AttackingMidfielder => PositionGroup::Midfielders,
            TacticalPosition::Winger | TacticalPosition::Striker => PositionGroup::Forwards,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PositionGroup {
    Forwards,
    Midfielders,
    Defenders,
    Goalkeepers,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 4] = [
        PositionGroup::Forwards,
        PositionGroup::Midfielders,
        PositionGroup::Defenders,
        PositionGroup::Goalkeepers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionGroup::Forwards => "Forwards",
            PositionGroup::Midfielders => "Midfielders",
            PositionGroup::Defenders => "Defenders",
            PositionGroup::Goalkeepers => "Goalkeepers",
        }
    }

    pub fn positions(&self) -> &'static [TacticalPosition] {
        match self {
            PositionGroup::Forwards => &[TacticalPosition::Winger, TacticalPosition::Striker],
            PositionGroup::Midfielders => &[
                TacticalPosition::DefensiveMidfielder,
                TacticalPosition::CentralMidfielder,
                TacticalPosition::AttackingMidfielder,
            ],
            PositionGroup::Defenders => &[
                TacticalPosition::CenterBack,
                TacticalPosition::WingBack,
                TacticalPosition::FullBack,
            ],
            PositionGroup::Goalkeepers => &[TacticalPosition::Goalkeeper],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.as_str() == name)
    }
}

/// A position value as it appears in the dataset. Unrecognized strings are
/// kept verbatim so they reach the layout fallback path instead of failing
/// at load time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Known(TacticalPosition),
    Unknown(String),
}

impl Position {
    pub fn known(&self) -> Option<TacticalPosition> {
        match self {
            Position::Known(pos) => Some(*pos),
            Position::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Position::Known(pos) => pos.as_str(),
            Position::Unknown(raw) => raw,
        }
    }

    pub fn in_group(&self, group: PositionGroup) -> bool {
        self.known().is_some_and(|pos| pos.group() == group)
    }
}

pub type PlayerId = u32;

/// The set of player ids currently eligible for placement.
pub type OnFieldSet = BTreeSet<PlayerId>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub jersey_number: u32,
    pub position: Position,
    pub foot: String,
    pub goals: u32,
    pub assists: u32,
    pub fitness_level: u8,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("duplicate player id {0}")]
    DuplicateId(PlayerId),
    #[error("player {id} has fitness_level {value}, expected 0-100")]
    FitnessOutOfRange { id: PlayerId, value: u8 },
}

/// Ordered player collection. Input order is significant: it drives slot
/// occurrence indices and zone spread order, so it is preserved as loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut seen = BTreeSet::new();
        for player in &players {
            if !seen.insert(player.id) {
                return Err(RosterError::DuplicateId(player.id));
            }
            if player.fitness_level > 100 {
                return Err(RosterError::FitnessOutOfRange {
                    id: player.id,
                    value: player.fitness_level,
                });
            }
        }
        Ok(Self { players })
    }

    pub fn from_json_str(input: &str) -> anyhow::Result<Self> {
        let players: Vec<Player> =
            serde_json::from_str(input).context("invalid roster JSON")?;
        Ok(Self::new(players)?)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Every player id, in roster order. The usual starting on-field set.
    pub fn all_ids(&self) -> OnFieldSet {
        self.players.iter().map(|p| p.id).collect()
    }
}

pub fn load_roster(path: &Path) -> anyhow::Result<Roster> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    Roster::from_json_str(&contents)
}
