use bevy_ecs::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::locale::Language;
use crate::simulation::achievements::AchievementLedger;
use crate::simulation::library::ScenarioLibrary;
use crate::simulation::session::GameSession;
use crate::systems::resolution::{PendingChoice, UnlockLog};

/// Seeded source for scenario picks.
#[derive(Resource, Debug)]
pub struct SelectorRng(pub StdRng);

impl SelectorRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Build the ECS world with baseline resources.
pub fn create_world(library: ScenarioLibrary, language: Language, seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(GameSession::fresh(language));
    world.insert_resource(library);
    world.insert_resource(AchievementLedger::default());
    world.insert_resource(SelectorRng::from_seed(seed));
    world.insert_resource(PendingChoice::default());
    world.insert_resource(UnlockLog::default());
    world
}
