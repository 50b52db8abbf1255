use bevy_ecs::prelude::*;
use bevy_utils::tracing::{debug, info, warn};

use crate::core::ecs::{create_world, SelectorRng};
use crate::core::error::GameError;
use crate::core::serialization::{read_achievements, read_saved, write_achievements, write_saved};
use crate::data::locale::Language;
use crate::data::scenarios::Scenario;
use crate::persistence::KeyValueStore;
use crate::simulation::achievements::{Achievement, AchievementLedger};
use crate::simulation::library::ScenarioLibrary;
use crate::simulation::outcome::GameState;
use crate::simulation::selector::pick_next;
use crate::simulation::session::GameSession;
use crate::simulation::stats::GameStats;
use crate::systems::resolution::{create_resolution_schedule, PendingChoice, UnlockLog};

/// What the front end needs after a resolved choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: GameState,
    pub stats: GameStats,
    pub result_text: String,
    pub unlocked: Vec<Achievement>,
}

/// Wrapper around the ECS world and resolution schedule.
pub struct Game {
    world: World,
    schedule: Schedule,
    seed: u64,
}

impl Game {
    /// Create a game in the default language using the provided seed.
    pub fn new(library: ScenarioLibrary, seed: u64) -> Self {
        Self::with_language(library, Language::default(), seed)
    }

    pub fn with_language(library: ScenarioLibrary, language: Language, seed: u64) -> Self {
        Self {
            world: create_world(library, language, seed),
            schedule: create_resolution_schedule(),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn session(&self) -> &GameSession {
        self.world.resource::<GameSession>()
    }

    pub fn state(&self) -> GameState {
        self.session().game_state
    }

    pub fn language(&self) -> Language {
        self.session().language
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.world.resource::<AchievementLedger>().unlocked
    }

    /// Begin a fresh playthrough from any state. The previous session is kept
    /// if no scenario can be picked.
    pub fn start_game(&mut self) -> Result<Scenario, GameError> {
        let language = self.language();
        let (scenario, shown) = self.pick_scenario(language, &[])?;

        let mut session = GameSession::fresh(language);
        session.current_scenario = Some(scenario.clone());
        session.shown_scenario_titles = shown;
        session.game_state = GameState::Playing;
        *self.world.resource_mut::<GameSession>() = session;

        info!(language = %language, title = %scenario.title, "game started");
        Ok(scenario)
    }

    /// Resolve `choice_id` against the current scenario.
    pub fn choose_option(&mut self, choice_id: &str) -> Result<TurnOutcome, GameError> {
        let session = self.session();
        let state = session.game_state;
        let scenario = match (&session.current_scenario, state) {
            (Some(scenario), GameState::Playing) => scenario,
            _ => {
                warn!(state = %state, "choose_option rejected");
                return Err(GameError::InvalidState {
                    operation: "choose an option",
                    state,
                });
            }
        };
        let Some(choice) = scenario.choice(choice_id).cloned() else {
            warn!(choice = choice_id, title = %scenario.title, "unknown choice");
            return Err(GameError::UnknownChoice {
                choice_id: choice_id.to_string(),
            });
        };

        self.world.resource_mut::<PendingChoice>().submit(choice);
        self.schedule.run(&mut self.world);

        let session = self.session();
        Ok(TurnOutcome {
            state: session.game_state,
            stats: session.stats,
            result_text: session.last_result.clone(),
            unlocked: self.world.resource::<UnlockLog>().0.clone(),
        })
    }

    /// Move from the result screen to the next scenario. Stats are untouched.
    pub fn next_turn(&mut self) -> Result<Scenario, GameError> {
        let session = self.session();
        if session.game_state != GameState::Result {
            warn!(state = %session.game_state, "next_turn rejected");
            return Err(GameError::InvalidState {
                operation: "advance to the next turn",
                state: session.game_state,
            });
        }
        let language = session.language;
        let shown = session.shown_scenario_titles.clone();
        let (scenario, shown) = self.pick_scenario(language, &shown)?;

        let mut session = self.world.resource_mut::<GameSession>();
        session.current_scenario = Some(scenario.clone());
        session.shown_scenario_titles = shown;
        session.game_state = GameState::Playing;
        debug!(turn = session.stats.turn, title = %scenario.title, "next scenario");
        Ok(scenario)
    }

    /// Affects later picks and achievement text; the current scenario stays.
    pub fn set_language(&mut self, language: Language) {
        self.world.resource_mut::<GameSession>().language = language;
        info!(language = %language, "language changed");
    }

    /// Replace the live session wholesale.
    pub fn restore(&mut self, session: GameSession) {
        *self.world.resource_mut::<GameSession>() = session;
    }

    /// Write the session and the achievement ledger.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), GameError> {
        write_saved(store, self.session(), self.achievements())?;
        info!(turn = self.session().stats.turn, "game saved");
        Ok(())
    }

    /// Load a saved game. Returns `false` when nothing was saved. Live state is
    /// only replaced once every stored blob has parsed.
    pub fn load(&mut self, store: &dyn KeyValueStore) -> Result<bool, GameError> {
        let saved = read_saved(store).map_err(|err| {
            warn!(error = %err, "load failed");
            err
        })?;
        let Some((session, achievements)) = saved else {
            return Ok(false);
        };

        info!(turn = session.stats.turn, state = %session.game_state, "game loaded");
        self.restore(session);
        self.merge_achievements(achievements);
        Ok(true)
    }

    /// Persist only the achievement ledger.
    pub fn save_achievements(&self, store: &mut dyn KeyValueStore) -> Result<(), GameError> {
        write_achievements(store, self.achievements())
    }

    /// Pull the profile's stored achievements into the ledger.
    pub fn load_achievements(&mut self, store: &dyn KeyValueStore) -> Result<(), GameError> {
        let stored = read_achievements(store)?;
        self.merge_achievements(stored);
        Ok(())
    }

    fn merge_achievements(&mut self, stored: Vec<Achievement>) {
        let mut ledger = self.world.resource_mut::<AchievementLedger>();
        let live = std::mem::take(&mut ledger.unlocked);
        ledger.record(stored);
        ledger.record(live);
    }

    fn pick_scenario(
        &mut self,
        language: Language,
        shown: &[String],
    ) -> Result<(Scenario, Vec<String>), GameError> {
        self.world
            .resource_scope(|world, mut rng: Mut<SelectorRng>| {
                let corpus = world.resource::<ScenarioLibrary>().corpus_for(language);
                pick_next(corpus, shown, &mut rng.0)
                    .map(|(scenario, titles)| (scenario.clone(), titles))
            })
            .map_err(|_| {
                warn!(language = %language, "no scenarios to pick from");
                GameError::ContentUnavailable { language }
            })
    }
}
