pub mod locale;
pub mod rules;
pub mod scenarios;

pub use locale::{Language, Theme};
pub use scenarios::{
    load_scenario_catalog, Choice, ChoiceImpact, Scenario, ScenarioCatalog, ScenarioDataError,
};
