use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bevy_utils::tracing::{error, info, warn};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hegemony::core::serialization::{load_theme, save_theme};
use hegemony::data::locale::{ui_text, Language, Theme};
use hegemony::persistence::{KeyValueStore, MemoryStore, SqliteStore};
use hegemony::simulation::library::ScenarioLibrary;
use hegemony::simulation::outcome::GameState;
use hegemony::ui::render::{render_achievements, render_outcome, render_scenario, render_stats};
use hegemony::ui::{export_history, share_summary, SpeechSynth, TranscriptSpeech};
use hegemony::{Game, GameError};

const COMMANDS: &str = "Commands: new | load | save | choose <id|n> | next | stats | history | achievements | export [path] | share | lang <code> | theme | read | quit";

#[derive(Parser, Debug)]
#[command(name = "hegemony")]
#[command(about = "Turn-based Middle East strategy in the terminal")]
struct Args {
    /// SQLite file holding saves, achievements and preferences
    #[arg(long, default_value = "./assets/db/hegemony.db")]
    db: PathBuf,

    /// Directory with scenarios_<lang>.json catalogs (built-in set when absent)
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Seed for scenario selection (random when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Language for new games
    #[arg(long)]
    language: Option<Language>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hegemony=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let library = match load_library(args.scenarios.as_deref()) {
        Ok(library) => library,
        Err(err) => {
            error!(error = %err, "failed to load scenarios");
            eprintln!("Failed to load scenarios: {}", err);
            std::process::exit(1);
        }
    };

    let mut store = open_store(&args.db);
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut game = Game::with_language(library, args.language.unwrap_or_default(), seed);
    if let Err(err) = game.load_achievements(store.as_ref()) {
        warn!(error = %err, "stored achievements unreadable, starting with none");
    }
    let mut theme = startup_theme(store.as_ref());
    let mut speech = TranscriptSpeech::default();

    info!(seed, db = %args.db.display(), "session ready");
    println!("{}", ui_text(game.language()).title);
    println!("{}", COMMANDS);

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or("").to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" => break,
            "help" => println!("{}", COMMANDS),
            "new" | "start" => match game.start_game() {
                Ok(scenario) => print!("{}", render_scenario(&scenario)),
                Err(err) => report(&err),
            },
            "load" => match game.load(store.as_ref()) {
                Ok(true) => {
                    println!("Loaded saved game.");
                    print_current(&game);
                }
                Ok(false) => println!("No saved game."),
                Err(err) => report(&err),
            },
            "save" => match game.save(store.as_mut()) {
                Ok(()) => println!("Saved."),
                Err(err) => report(&err),
            },
            "choose" | "c" => {
                let Some(raw) = parts.next() else {
                    println!("Usage: choose <choice_id|number>");
                    continue;
                };
                let choice_id = resolve_choice_id(&game, raw);
                match game.choose_option(&choice_id) {
                    Ok(outcome) => {
                        print!("{}", render_outcome(&outcome, game.language()));
                        if !outcome.unlocked.is_empty() {
                            if let Err(err) = game.save_achievements(store.as_mut()) {
                                report(&err);
                            }
                        }
                        if outcome.state.is_terminal() {
                            println!("Type 'share' to share your result or 'new' to play again.");
                        }
                    }
                    Err(err) => report(&err),
                }
            }
            "next" | "n" => match game.next_turn() {
                Ok(scenario) => print!("{}", render_scenario(&scenario)),
                Err(err) => report(&err),
            },
            "stats" => print!("{}", render_stats(&game.session().stats, game.language())),
            "history" => print_history(&game),
            "achievements" => print!("{}", render_achievements(game.achievements(), game.language())),
            "export" => {
                let text = export_history(game.session());
                match parts.next() {
                    Some(path) => match fs::write(path, &text) {
                        Ok(()) => println!("Exported to {}", path),
                        Err(err) => println!("Export failed: {}", err),
                    },
                    None => print!("{}", text),
                }
            }
            "share" => println!("{}", share_summary(&game.session().stats, game.language())),
            "lang" => match parts.next().map(str::parse::<Language>) {
                Some(Ok(language)) => {
                    game.set_language(language);
                    println!("Language: {}", language);
                }
                Some(Err(err)) => println!("{}", err),
                None => println!("Language: {}", game.language()),
            },
            "theme" => {
                theme = theme.toggled();
                match save_theme(store.as_mut(), theme) {
                    Ok(()) => println!("Theme: {}", theme.as_str()),
                    Err(err) => report(&err),
                }
            }
            "read" => read_aloud(&game, &mut speech),
            _ => println!("Unknown command. {}", COMMANDS),
        }
    }

    speech.cancel();
    info!(theme = theme.as_str(), "session closed");
}

fn load_library(dir: Option<&Path>) -> Result<ScenarioLibrary, hegemony::data::ScenarioDataError> {
    match dir {
        Some(dir) => ScenarioLibrary::load_dir(dir),
        None => ScenarioLibrary::builtin(),
    }
}

/// SQLite when the database opens, otherwise an in-memory store for this run.
fn open_store(path: &Path) -> Box<dyn KeyValueStore> {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(error = %err, dir = %parent.display(), "cannot create store directory");
        }
    }
    match SqliteStore::open(path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(error = %err, "store unavailable, progress will not persist");
            eprintln!("Failed to open {}: {}. Saves are disabled.", path.display(), err);
            Box::new(MemoryStore::new())
        }
    }
}

fn startup_theme(store: &dyn KeyValueStore) -> Theme {
    match load_theme(store) {
        Ok(theme) => theme,
        Err(err) => {
            warn!(error = %err, "stored theme unreadable, using default");
            Theme::default()
        }
    }
}

/// Accept either a choice id or its 1-based position in the current scenario.
fn resolve_choice_id(game: &Game, raw: &str) -> String {
    let by_index = raw.parse::<usize>().ok().and_then(|n| {
        let scenario = game.session().current_scenario.as_ref()?;
        scenario.choices.get(n.checked_sub(1)?).map(|c| c.id.clone())
    });
    by_index.unwrap_or_else(|| raw.to_string())
}

fn print_current(game: &Game) {
    let session = game.session();
    print!("{}", render_stats(&session.stats, session.language));
    match (session.game_state, &session.current_scenario) {
        (GameState::Playing, Some(scenario)) => print!("{}", render_scenario(scenario)),
        (GameState::Result, _) => println!("{}\nType 'next' to continue.", session.last_result),
        (state, _) => println!("State: {}", state),
    }
}

fn print_history(game: &Game) {
    let session = game.session();
    if session.history.is_empty() {
        println!("No decisions yet.");
        return;
    }
    for entry in &session.history {
        println!(
            "[{}] {} -> {}\n    {}",
            entry.turn, entry.scenario_title, entry.choice_label, entry.result_text
        );
    }
}

fn read_aloud(game: &Game, speech: &mut dyn SpeechSynth) {
    let session = game.session();
    let text = match (session.game_state, &session.current_scenario) {
        (GameState::Playing, Some(scenario)) => {
            format!("{}. {}", scenario.title, scenario.description)
        }
        (GameState::Start, _) => ui_text(session.language).title.to_string(),
        _ => session.last_result.clone(),
    };
    speech.speak(&text, session.language);
    println!("(reading) {}", text);
}

fn report(err: &GameError) {
    println!("{}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hegemony::persistence::StoreError;

    #[test]
    fn numeric_choice_maps_to_id() {
        let mut game = Game::new(ScenarioLibrary::builtin().expect("builtin"), 3);
        let scenario = game.start_game().expect("start");
        assert_eq!(resolve_choice_id(&game, "1"), scenario.choices[0].id);
        assert_eq!(resolve_choice_id(&game, "9"), "9");
        assert_eq!(resolve_choice_id(&game, "0"), "0");
        assert_eq!(resolve_choice_id(&game, "1b"), "1b");
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::InvalidData("unreadable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::InvalidData("read-only".to_string()))
        }
    }

    #[test]
    fn unreadable_theme_falls_back_to_default() {
        assert_eq!(startup_theme(&BrokenStore), Theme::Dark);
        let mut store = MemoryStore::new();
        save_theme(&mut store, Theme::Light).expect("save");
        assert_eq!(startup_theme(&store), Theme::Light);
    }

    #[test]
    fn args_parse_language() {
        let args = Args::parse_from(["hegemony", "--language", "he", "--seed", "9"]);
        assert_eq!(args.language, Some(Language::He));
        assert_eq!(args.seed, Some(9));
    }
}
