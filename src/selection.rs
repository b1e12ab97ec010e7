use crate::roster::{OnFieldSet, Player, PlayerId, PositionGroup, Roster};

/// Mutable UI-side state: who is on the field, which player is selected,
/// which position group is filtered. The layout engine only ever sees an
/// immutable snapshot of `on_field`; every toggle here is followed by a
/// full `compute_layout` call by the consumer.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    on_field: OnFieldSet,
    selected: Option<PlayerId>,
    group_filter: Option<PositionGroup>,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the whole roster placed, the usual initial view.
    pub fn with_all_on_field(roster: &Roster) -> Self {
        Self {
            on_field: roster.all_ids(),
            selected: None,
            group_filter: None,
        }
    }

    pub fn on_field(&self) -> &OnFieldSet {
        &self.on_field
    }

    pub fn selected(&self) -> Option<PlayerId> {
        self.selected
    }

    pub fn group_filter(&self) -> Option<PositionGroup> {
        self.group_filter
    }

    /// Puts the player on or takes them off the field. Returns whether the
    /// player is on the field afterwards.
    pub fn toggle_on_field(&mut self, id: PlayerId) -> bool {
        if self.on_field.remove(&id) {
            false
        } else {
            self.on_field.insert(id);
            true
        }
    }

    /// Click on a marker: selects the player, or deselects when the player
    /// was already selected.
    pub fn toggle_player(&mut self, id: PlayerId) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Click on a group button: toggles the filter and always drops the
    /// player selection, matching the reference behaviour.
    pub fn toggle_group(&mut self, group: PositionGroup) {
        self.group_filter = if self.group_filter == Some(group) {
            None
        } else {
            Some(group)
        };
        self.selected = None;
    }

    /// Highlight predicate for one player: the selected player wins, then
    /// membership in the filtered group.
    pub fn is_highlighted(&self, player: &Player) -> bool {
        if self.selected == Some(player.id) {
            return true;
        }
        match self.group_filter {
            Some(group) => player.position.in_group(group),
            None => false,
        }
    }

    /// The side-panel listing: every roster player in the filtered group,
    /// roster order, regardless of on-field status.
    pub fn players_in_group<'a>(&self, roster: &'a Roster) -> Vec<&'a Player> {
        let Some(group) = self.group_filter else {
            return Vec::new();
        };
        roster
            .players
            .iter()
            .filter(|p| p.position.in_group(group))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Position, TacticalPosition};

    fn roster() -> Roster {
        let players = [
            (1, TacticalPosition::Goalkeeper),
            (2, TacticalPosition::CenterBack),
            (3, TacticalPosition::CentralMidfielder),
            (4, TacticalPosition::Winger),
            (5, TacticalPosition::Striker),
        ]
        .into_iter()
        .map(|(id, pos)| Player {
            id,
            name: format!("Player {id}"),
            jersey_number: id,
            position: Position::Known(pos),
            foot: "Right".to_string(),
            goals: 0,
            assists: 0,
            fitness_level: 90,
        })
        .collect();
        Roster::new(players).unwrap()
    }

    #[test]
    fn toggling_a_player_on_and_off_field() {
        let roster = roster();
        let mut state = FieldState::with_all_on_field(&roster);
        assert!(state.on_field().contains(&5));
        assert!(!state.toggle_on_field(5));
        assert!(!state.on_field().contains(&5));
        assert!(state.toggle_on_field(5));
        assert!(state.on_field().contains(&5));
    }

    #[test]
    fn reselecting_a_player_deselects() {
        let mut state = FieldState::new();
        state.toggle_player(3);
        assert_eq!(state.selected(), Some(3));
        state.toggle_player(3);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn selecting_a_group_clears_the_player_selection() {
        let mut state = FieldState::new();
        state.toggle_player(4);
        state.toggle_group(PositionGroup::Forwards);
        assert_eq!(state.selected(), None);
        assert_eq!(state.group_filter(), Some(PositionGroup::Forwards));
        state.toggle_group(PositionGroup::Forwards);
        assert_eq!(state.group_filter(), None);
    }

    #[test]
    fn highlight_follows_selection_then_group() {
        let roster = roster();
        let mut state = FieldState::with_all_on_field(&roster);
        let winger = roster.get(4).unwrap();
        let keeper = roster.get(1).unwrap();

        assert!(!state.is_highlighted(winger));
        state.toggle_group(PositionGroup::Forwards);
        assert!(state.is_highlighted(winger));
        assert!(!state.is_highlighted(keeper));

        state.toggle_player(1);
        assert!(state.is_highlighted(keeper));
        // Group highlight still applies alongside the selection.
        assert!(state.is_highlighted(winger));
    }

    #[test]
    fn group_listing_keeps_roster_order() {
        let roster = roster();
        let mut state = FieldState::with_all_on_field(&roster);
        state.toggle_group(PositionGroup::Forwards);
        let listed: Vec<_> = state
            .players_in_group(&roster)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(listed, vec![4, 5]);
        state.toggle_group(PositionGroup::Forwards);
        assert!(state.players_in_group(&roster).is_empty());
    }
}
