use crate::core::world::TurnOutcome;
use crate::data::locale::{ui_text, Language};
use crate::data::scenarios::Scenario;
use crate::simulation::achievements::Achievement;
use crate::simulation::outcome::GameState;
use crate::simulation::stats::GameStats;

pub fn render_stats(stats: &GameStats, language: Language) -> String {
    let text = ui_text(language);
    let mut output = format!("{} {}\n", text.turn, stats.turn);
    for (key, value) in stats.resources() {
        output.push_str(&format!("  {:<14} {:>3} {}\n", text.resource(key), value, bar(value)));
    }
    output
}

fn bar(value: i32) -> String {
    let filled = (value.clamp(0, 100) / 10) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

/// Scenario card with numbered choices.
pub fn render_scenario(scenario: &Scenario) -> String {
    let mut output = format!("== {} ==\n{}\n", scenario.title, scenario.description);
    for (index, choice) in scenario.choices.iter().enumerate() {
        output.push_str(&format!("  {}) [{}] {}", index + 1, choice.id, choice.label));
        if !choice.description.is_empty() {
            output.push_str(&format!(": {}", choice.description));
        }
        output.push('\n');
    }
    output
}

pub fn render_outcome(outcome: &TurnOutcome, language: Language) -> String {
    let text = ui_text(language);
    let mut output = format!("{}\n", outcome.result_text);
    output.push_str(&render_stats(&outcome.stats, language));
    for achievement in &outcome.unlocked {
        output.push_str(&format!("* {}: {}\n", achievement.title, achievement.desc));
    }
    match outcome.state {
        GameState::Victory => output.push_str(&format!("{}\n", text.victory)),
        GameState::GameOver => output.push_str(&format!("{}\n", text.game_over)),
        _ => {}
    }
    output
}

pub fn render_achievements(achievements: &[Achievement], language: Language) -> String {
    if achievements.is_empty() {
        return "No achievements yet.\n".to_string();
    }
    let text = ui_text(language);
    achievements
        .iter()
        .map(|a| format!("* {} ({} {}): {}\n", a.title, text.turn, a.unlocked_at, a.desc))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::scenarios::{Choice, ChoiceImpact};

    #[test]
    fn stats_bar_scales_to_ten() {
        assert_eq!(bar(0), "[..........]");
        assert_eq!(bar(55), "[#####.....]");
        assert_eq!(bar(100), "[##########]");
    }

    #[test]
    fn scenario_lists_choices_in_order() {
        let scenario = Scenario {
            title: "Strait".to_string(),
            description: "Shipping halted.".to_string(),
            choices: ["escort", "talk"]
                .iter()
                .map(|id| Choice {
                    id: id.to_string(),
                    label: id.to_uppercase(),
                    description: String::new(),
                    impact: ChoiceImpact::default(),
                })
                .collect(),
        };
        let card = render_scenario(&scenario);
        assert!(card.contains("1) [escort] ESCORT\n"));
        assert!(card.contains("2) [talk] TALK\n"));
    }

    #[test]
    fn victory_banner_is_localized() {
        let outcome = TurnOutcome {
            state: GameState::Victory,
            stats: GameStats::default(),
            result_text: "Done.".to_string(),
            unlocked: Vec::new(),
        };
        assert!(render_outcome(&outcome, Language::De).contains("Sieg!"));
    }
}
