use std::collections::HashMap;
use std::path::Path;

use bevy_ecs::prelude::*;

use crate::data::locale::{Language, ALL_LANGUAGES};
use crate::data::scenarios::{
    load_scenario_catalog, parse_scenario_catalog, Scenario, ScenarioCatalog, ScenarioDataError,
};

const BUILTIN_EN: &str = include_str!("../../assets/data/scenarios_en.json");
const BUILTIN_HE: &str = include_str!("../../assets/data/scenarios_he.json");

/// Scenario corpora keyed by language. Locales without their own catalog
/// play the English corpus.
#[derive(Resource, Debug, Default, Clone)]
pub struct ScenarioLibrary {
    corpora: HashMap<Language, Vec<Scenario>>,
}

impl ScenarioLibrary {
    /// Catalogs compiled into the binary.
    pub fn builtin() -> Result<Self, ScenarioDataError> {
        let catalogs = vec![
            parse_scenario_catalog(BUILTIN_EN, "builtin:scenarios_en.json")?,
            parse_scenario_catalog(BUILTIN_HE, "builtin:scenarios_he.json")?,
        ];
        Ok(Self::from_catalogs(catalogs))
    }

    /// Load every `scenarios_<code>.json` present in `dir`. Missing files are
    /// skipped; malformed ones, or ones declaring a different language than
    /// their file name, fail the whole load.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ScenarioDataError> {
        let dir = dir.as_ref();
        let mut catalogs = Vec::new();
        for language in ALL_LANGUAGES {
            let path = dir.join(format!("scenarios_{}.json", language.code()));
            if path.is_file() {
                let catalog = load_scenario_catalog(&path)?;
                if catalog.language != language {
                    return Err(ScenarioDataError::Validation(format!(
                        "{} declares language {}, expected {}",
                        path.display(),
                        catalog.language,
                        language
                    )));
                }
                catalogs.push(catalog);
            }
        }
        Ok(Self::from_catalogs(catalogs))
    }

    pub fn from_catalogs(catalogs: impl IntoIterator<Item = ScenarioCatalog>) -> Self {
        let mut corpora = HashMap::new();
        for catalog in catalogs {
            corpora.insert(catalog.language, catalog.scenarios);
        }
        Self { corpora }
    }

    pub fn with_corpus(language: Language, scenarios: Vec<Scenario>) -> Self {
        let mut corpora = HashMap::new();
        corpora.insert(language, scenarios);
        Self { corpora }
    }

    pub fn corpus_for(&self, language: Language) -> &[Scenario] {
        self.corpora
            .get(&language)
            .or_else(|| self.corpora.get(&Language::En))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn languages(&self) -> Vec<Language> {
        ALL_LANGUAGES
            .iter()
            .copied()
            .filter(|language| self.corpora.contains_key(language))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogs_validate() {
        let library = ScenarioLibrary::builtin().expect("builtin catalogs");
        assert_eq!(library.languages(), vec![Language::He, Language::En]);
        assert!(!library.corpus_for(Language::En).is_empty());
        assert!(!library.corpus_for(Language::He).is_empty());
    }

    #[test]
    fn untranslated_locales_fall_back_to_english() {
        let library = ScenarioLibrary::builtin().expect("builtin catalogs");
        assert_eq!(
            library.corpus_for(Language::De),
            library.corpus_for(Language::En)
        );
    }

    #[test]
    fn missing_english_leaves_nothing_to_fall_back_on() {
        let library = ScenarioLibrary::with_corpus(Language::He, Vec::new());
        assert!(library.corpus_for(Language::Ru).is_empty());
    }

    #[test]
    fn load_dir_reads_present_catalogs() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("scenarios_en.json"), BUILTIN_EN).expect("write");
        let library = ScenarioLibrary::load_dir(dir.path()).expect("load");
        assert_eq!(library.languages(), vec![Language::En]);
        assert_eq!(
            library.corpus_for(Language::He),
            library.corpus_for(Language::En)
        );
    }

    #[test]
    fn load_dir_rejects_mislabeled_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("scenarios_en.json"), BUILTIN_EN).expect("write");
        std::fs::write(dir.path().join("scenarios_es.json"), BUILTIN_EN).expect("write");
        let err = ScenarioLibrary::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ScenarioDataError::Validation(_)));
        assert!(err.to_string().contains("declares language en, expected es"));
    }

    #[test]
    fn load_dir_rejects_bad_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("scenarios_es.json"), "[]").expect("write");
        assert!(ScenarioLibrary::load_dir(dir.path()).is_err());
    }
}
