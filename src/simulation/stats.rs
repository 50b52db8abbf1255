use serde::{Deserialize, Serialize};

use crate::data::rules::{
    INITIAL_DIPLOMACY, INITIAL_ECONOMY, INITIAL_MILITARY, INITIAL_TERRITORY, INITIAL_TURN,
    STAT_MAX, STAT_MIN,
};
use crate::data::scenarios::ChoiceImpact;

/// National standing. Resources stay within [STAT_MIN, STAT_MAX] after every
/// engine transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub military: i32,
    pub diplomacy: i32,
    pub territory: i32,
    pub economy: i32,
    pub turn: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            military: INITIAL_MILITARY,
            diplomacy: INITIAL_DIPLOMACY,
            territory: INITIAL_TERRITORY,
            economy: INITIAL_ECONOMY,
            turn: INITIAL_TURN,
        }
    }
}

impl GameStats {
    pub fn resources(&self) -> [(&'static str, i32); 4] {
        [
            ("military", self.military),
            ("diplomacy", self.diplomacy),
            ("territory", self.territory),
            ("economy", self.economy),
        ]
    }
}

fn clamp_stat(current: i32, delta: i32) -> i32 {
    current.saturating_add(delta).clamp(STAT_MIN, STAT_MAX)
}

/// Apply a choice's deltas and advance the turn by one.
pub fn apply_impact(stats: &GameStats, impact: &ChoiceImpact) -> GameStats {
    GameStats {
        military: clamp_stat(stats.military, impact.military),
        diplomacy: clamp_stat(stats.diplomacy, impact.diplomacy),
        territory: clamp_stat(stats.territory, impact.territory),
        economy: clamp_stat(stats.economy, impact.economy),
        turn: stats.turn.saturating_add(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn impact(military: i32, diplomacy: i32, territory: i32, economy: i32) -> ChoiceImpact {
        ChoiceImpact {
            military,
            diplomacy,
            territory,
            economy,
            narrative_result: String::new(),
        }
    }

    #[test]
    fn defaults_match_opening_position() {
        let stats = GameStats::default();
        assert_eq!(
            (stats.military, stats.diplomacy, stats.territory, stats.economy, stats.turn),
            (50, 50, 30, 50, 1)
        );
    }

    #[test]
    fn clamps_at_both_ends() {
        let stats = GameStats {
            military: 95,
            diplomacy: 3,
            territory: 30,
            economy: 50,
            turn: 4,
        };
        let next = apply_impact(&stats, &impact(25, -10, 0, 5));
        assert_eq!(next.military, 100);
        assert_eq!(next.diplomacy, 0);
        assert_eq!(next.territory, 30);
        assert_eq!(next.economy, 55);
        assert_eq!(next.turn, 5);
    }

    #[test]
    fn zero_impact_still_advances_turn() {
        let stats = GameStats::default();
        let next = apply_impact(&stats, &ChoiceImpact::default());
        assert_eq!(next.turn, stats.turn + 1);
        assert_eq!(next.military, stats.military);
    }

    proptest! {
        #[test]
        fn resources_always_in_range(
            military in any::<i32>(),
            diplomacy in any::<i32>(),
            territory in any::<i32>(),
            economy in any::<i32>(),
            turn in 0u32..10_000,
            deltas in prop::array::uniform4(any::<i32>()),
        ) {
            let stats = GameStats { military, diplomacy, territory, economy, turn };
            let next = apply_impact(&stats, &impact(deltas[0], deltas[1], deltas[2], deltas[3]));
            for (_, value) in next.resources() {
                prop_assert!((STAT_MIN..=STAT_MAX).contains(&value));
            }
            prop_assert_eq!(next.turn, turn + 1);
        }
    }
}
