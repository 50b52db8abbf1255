use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::locale::Language;

pub const MIN_CHOICES: usize = 2;
pub const MAX_CHOICES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCatalog {
    pub schema_version: u32,
    pub language: Language,
    pub scenarios: Vec<Scenario>,
}

/// A single decision point. Titles are unique within a language's corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub title: String,
    pub description: String,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: String,
    pub label: String,
    pub description: String,
    pub impact: ChoiceImpact,
}

/// Raw deltas as authored. Clamping is the engine's job, not the content's.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceImpact {
    pub military: i32,
    pub diplomacy: i32,
    pub territory: i32,
    pub economy: i32,
    pub narrative_result: String,
}

impl Scenario {
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == choice_id)
    }
}

#[derive(Debug, Error)]
pub enum ScenarioDataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}")]
    Validation(String),
}

pub fn load_scenario_catalog(
    path: impl AsRef<Path>,
) -> Result<ScenarioCatalog, ScenarioDataError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ScenarioDataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_scenario_catalog(&raw, &path.display().to_string())
}

/// Parse and validate a catalog held in memory. `origin` only labels errors.
pub fn parse_scenario_catalog(
    raw: &str,
    origin: &str,
) -> Result<ScenarioCatalog, ScenarioDataError> {
    let catalog: ScenarioCatalog =
        serde_json::from_str(raw).map_err(|source| ScenarioDataError::Json {
            path: origin.to_string(),
            source,
        })?;
    catalog.validate()?;
    Ok(catalog)
}

impl ScenarioCatalog {
    pub fn validate(&self) -> Result<(), ScenarioDataError> {
        let mut titles = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.title.trim().is_empty() {
                return Err(ScenarioDataError::Validation(format!(
                    "{} scenario title cannot be empty",
                    self.language
                )));
            }
            if !titles.insert(scenario.title.as_str()) {
                return Err(ScenarioDataError::Validation(format!(
                    "duplicate {} scenario title {}",
                    self.language, scenario.title
                )));
            }
            if scenario.description.trim().is_empty() {
                return Err(ScenarioDataError::Validation(format!(
                    "scenario {} missing description",
                    scenario.title
                )));
            }
            let count = scenario.choices.len();
            if !(MIN_CHOICES..=MAX_CHOICES).contains(&count) {
                return Err(ScenarioDataError::Validation(format!(
                    "scenario {} has {} choices, expected {}-{}",
                    scenario.title, count, MIN_CHOICES, MAX_CHOICES
                )));
            }
            let mut choice_ids = HashSet::new();
            for choice in &scenario.choices {
                if choice.id.trim().is_empty() {
                    return Err(ScenarioDataError::Validation(format!(
                        "scenario {} has a choice without id",
                        scenario.title
                    )));
                }
                if !choice_ids.insert(choice.id.as_str()) {
                    return Err(ScenarioDataError::Validation(format!(
                        "scenario {} repeats choice id {}",
                        scenario.title, choice.id
                    )));
                }
                if choice.label.trim().is_empty() {
                    return Err(ScenarioDataError::Validation(format!(
                        "choice {} in scenario {} missing label",
                        choice.id, scenario.title
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(id: &str) -> Choice {
        Choice {
            id: id.to_string(),
            label: format!("Option {}", id),
            description: "desc".to_string(),
            impact: ChoiceImpact::default(),
        }
    }

    fn catalog(scenarios: Vec<Scenario>) -> ScenarioCatalog {
        ScenarioCatalog {
            schema_version: 1,
            language: Language::En,
            scenarios,
        }
    }

    fn scenario(title: &str, ids: &[&str]) -> Scenario {
        Scenario {
            title: title.to_string(),
            description: "Something happened.".to_string(),
            choices: ids.iter().map(|id| choice(id)).collect(),
        }
    }

    #[test]
    fn accepts_two_and_three_choices() {
        let cat = catalog(vec![scenario("A", &["a", "b"]), scenario("B", &["a", "b", "c"])]);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn rejects_choice_count_out_of_range() {
        let one = catalog(vec![scenario("A", &["a"])]);
        assert!(matches!(one.validate(), Err(ScenarioDataError::Validation(_))));
        let four = catalog(vec![scenario("A", &["a", "b", "c", "d"])]);
        assert!(four.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_titles_and_choice_ids() {
        let dup_title = catalog(vec![scenario("A", &["a", "b"]), scenario("A", &["c", "d"])]);
        assert!(dup_title.validate().is_err());
        let dup_choice = catalog(vec![scenario("A", &["a", "a"])]);
        assert!(dup_choice.validate().is_err());
    }

    #[test]
    fn rejects_blank_fields() {
        let rejects = |mutate: &dyn Fn(&mut Scenario)| {
            let mut s = scenario("A", &["a", "b"]);
            mutate(&mut s);
            matches!(catalog(vec![s]).validate(), Err(ScenarioDataError::Validation(_)))
        };
        for blank in ["", "   ", "\t\n"] {
            assert!(rejects(&|s| s.title = blank.to_string()), "title {:?}", blank);
            assert!(rejects(&|s| s.description = blank.to_string()), "description {:?}", blank);
            assert!(rejects(&|s| s.choices[0].id = blank.to_string()), "choice id {:?}", blank);
            assert!(rejects(&|s| s.choices[1].label = blank.to_string()), "label {:?}", blank);
        }
        assert!(!rejects(&|s| s.choices[0].description = String::new()));
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert!(catalog(Vec::new()).validate().is_ok());
    }

    #[test]
    fn parse_reports_origin_on_bad_json() {
        let err = parse_scenario_catalog("{ not json", "inline").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse inline"));
    }

    #[test]
    fn impact_uses_camel_case_keys() {
        let raw = r#"{"military":1,"diplomacy":-2,"territory":0,"economy":3,"narrativeResult":"ok"}"#;
        let impact: ChoiceImpact = serde_json::from_str(raw).expect("impact");
        assert_eq!(impact.diplomacy, -2);
        assert_eq!(impact.narrative_result, "ok");
    }
}
