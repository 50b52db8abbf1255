use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::data::scenarios::Scenario;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("scenario corpus is empty")]
    EmptyCorpus,
}

/// Pick the next scenario, never repeating a title until every title in the
/// corpus has been shown. Once the corpus is exhausted the whole corpus is
/// eligible again and tracking restarts from the new pick.
pub fn pick_next<'a, R: Rng + ?Sized>(
    corpus: &'a [Scenario],
    shown_titles: &[String],
    rng: &mut R,
) -> Result<(&'a Scenario, Vec<String>), SelectionError> {
    if corpus.is_empty() {
        return Err(SelectionError::EmptyCorpus);
    }

    let unshown: Vec<&Scenario> = corpus
        .iter()
        .filter(|scenario| !shown_titles.iter().any(|title| title == &scenario.title))
        .collect();

    if let Some(picked) = unshown.choose(rng).copied() {
        let mut titles = shown_titles.to_vec();
        titles.push(picked.title.clone());
        return Ok((picked, titles));
    }

    let picked = corpus.choose(rng).ok_or(SelectionError::EmptyCorpus)?;
    Ok((picked, vec![picked.title.clone()]))
}
