use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, SystemSet};
use bevy_utils::tracing::{debug, info};

use crate::data::scenarios::Choice;
use crate::simulation::achievements::{evaluate, unlock_victory, Achievement, AchievementLedger};
use crate::simulation::history::HistoryEntry;
use crate::simulation::outcome::{evaluate_outcome, GameState};
use crate::simulation::session::GameSession;
use crate::simulation::stats::apply_impact;

/// Fixed ordering for resolving one choice.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ResolutionSet {
    Apply,
    Achievements,
    Outcome,
    Victory,
}

/// Choice validated by the engine and waiting to be resolved.
#[derive(Resource, Debug, Default)]
pub struct PendingChoice {
    pub choice: Option<Choice>,
    pub applied: bool,
}

impl PendingChoice {
    pub fn submit(&mut self, choice: Choice) {
        self.choice = Some(choice);
        self.applied = false;
    }
}

/// Achievements unlocked by the most recent resolution.
#[derive(Resource, Debug, Default)]
pub struct UnlockLog(pub Vec<Achievement>);

/// System: applies the pending choice's impact, records history and sets the
/// result text.
pub fn apply_choice_system(mut pending: ResMut<PendingChoice>, mut session: ResMut<GameSession>) {
    let Some(choice) = pending.choice.take() else {
        return;
    };
    let Some(scenario) = session.current_scenario.as_ref() else {
        return;
    };

    let entry = HistoryEntry::record(session.stats.turn, scenario, &choice);
    let next = apply_impact(&session.stats, &choice.impact);
    debug!(
        turn = entry.turn,
        choice = %choice.id,
        military = next.military,
        diplomacy = next.diplomacy,
        territory = next.territory,
        economy = next.economy,
        "choice applied"
    );

    session.history.insert(0, entry);
    session.stats = next;
    session.last_result = choice.impact.narrative_result;
    pending.applied = true;
}

/// System: unlocks stat-threshold achievements against the new stats.
pub fn achievement_system(
    pending: Res<PendingChoice>,
    session: Res<GameSession>,
    mut ledger: ResMut<AchievementLedger>,
    mut log: ResMut<UnlockLog>,
) {
    log.0.clear();
    if !pending.applied {
        return;
    }
    let unlocked = evaluate(&session.stats, &ledger.unlocked, session.language);
    for achievement in &unlocked {
        info!(id = achievement.id.as_str(), turn = achievement.unlocked_at, "achievement unlocked");
    }
    ledger.record(unlocked.iter().cloned());
    log.0.extend(unlocked);
}

/// System: moves the session to its post-resolution state.
pub fn outcome_system(pending: Res<PendingChoice>, mut session: ResMut<GameSession>) {
    if !pending.applied {
        return;
    }
    let state = evaluate_outcome(&session.stats);
    if state.is_terminal() {
        info!(state = %state, turn = session.stats.turn, "game finished");
    }
    session.game_state = state;
}

/// System: grants `hegemon` on the victory transition only.
pub fn victory_system(
    pending: Res<PendingChoice>,
    session: Res<GameSession>,
    mut ledger: ResMut<AchievementLedger>,
    mut log: ResMut<UnlockLog>,
) {
    if !pending.applied || session.game_state != GameState::Victory {
        return;
    }
    if let Some(achievement) = unlock_victory(session.stats.turn, &ledger.unlocked, session.language) {
        info!(id = achievement.id.as_str(), turn = achievement.unlocked_at, "achievement unlocked");
        ledger.record(std::iter::once(achievement.clone()));
        log.0.push(achievement);
    }
}

/// Build the resolution schedule. Runs on one thread, in set order.
pub fn create_resolution_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);

    schedule.configure_sets(
        (
            ResolutionSet::Apply,
            ResolutionSet::Achievements,
            ResolutionSet::Outcome,
            ResolutionSet::Victory,
        )
            .chain(),
    );

    schedule.add_systems((
        apply_choice_system.in_set(ResolutionSet::Apply),
        achievement_system.in_set(ResolutionSet::Achievements),
        outcome_system.in_set(ResolutionSet::Outcome),
        victory_system.in_set(ResolutionSet::Victory),
    ));

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::locale::Language;
    use crate::data::scenarios::{ChoiceImpact, Scenario};
    use crate::simulation::achievements::AchievementId;
    use crate::simulation::stats::GameStats;

    fn choice(military: i32, diplomacy: i32, economy: i32) -> Choice {
        Choice {
            id: "a".to_string(),
            label: "Act".to_string(),
            description: String::new(),
            impact: ChoiceImpact {
                military,
                diplomacy,
                territory: 0,
                economy,
                narrative_result: "It is done.".to_string(),
            },
        }
    }

    fn world_with(stats: GameStats, pending: Choice) -> World {
        let mut world = World::new();
        world.insert_resource(GameSession {
            stats,
            game_state: GameState::Playing,
            current_scenario: Some(Scenario {
                title: "Border".to_string(),
                description: "Tension rises.".to_string(),
                choices: vec![pending.clone(), choice(0, 0, 0)],
            }),
            language: Language::En,
            ..GameSession::default()
        });
        world.insert_resource(AchievementLedger::default());
        world.insert_resource(UnlockLog::default());
        let mut queued = PendingChoice::default();
        queued.submit(pending);
        world.insert_resource(queued);
        world
    }

    #[test]
    fn resolution_runs_in_order() {
        let stats = GameStats {
            military: 70,
            diplomacy: 60,
            territory: 30,
            economy: 60,
            turn: 19,
        };
        let mut world = world_with(stats, choice(10, 0, 0));
        create_resolution_schedule().run(&mut world);

        let session = world.resource::<GameSession>();
        assert_eq!(session.stats.turn, 20);
        assert_eq!(session.stats.military, 80);
        assert_eq!(session.game_state, GameState::Victory);
        assert_eq!(session.history[0].turn, 19);
        assert_eq!(session.last_result, "It is done.");

        let ids: Vec<_> = world.resource::<UnlockLog>().0.iter().map(|a| a.id).collect();
        assert_eq!(
            ids,
            vec![AchievementId::MilMaster, AchievementId::Survivor, AchievementId::Hegemon]
        );
        assert!(world.resource::<UnlockLog>().0.iter().all(|a| a.unlocked_at == 20));
    }

    #[test]
    fn defeat_does_not_grant_hegemon() {
        let stats = GameStats {
            military: 1,
            diplomacy: 60,
            territory: 30,
            economy: 60,
            turn: 19,
        };
        let mut world = world_with(stats, choice(-1, 0, 0));
        create_resolution_schedule().run(&mut world);

        assert_eq!(world.resource::<GameSession>().game_state, GameState::GameOver);
        assert!(!world.resource::<AchievementLedger>().contains(AchievementId::Hegemon));
    }

    #[test]
    fn nothing_happens_without_pending_choice() {
        let mut world = world_with(GameStats::default(), choice(5, 5, 5));
        world.resource_mut::<PendingChoice>().choice = None;
        create_resolution_schedule().run(&mut world);

        let session = world.resource::<GameSession>();
        assert_eq!(session.game_state, GameState::Playing);
        assert_eq!(session.stats, GameStats::default());
        assert!(session.history.is_empty());
    }
}
