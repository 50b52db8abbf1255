use crate::data::locale::{ui_text, Language};
use crate::simulation::session::GameSession;
use crate::simulation::stats::GameStats;

/// Plain-text decision log, oldest turn first, closed by the final standing.
pub fn export_history(session: &GameSession) -> String {
    let text = ui_text(session.language);
    let mut output = String::new();
    output.push_str(&format!("=== {} ===\n\n", text.title));

    for entry in session.history.iter().rev() {
        output.push_str(&format!("{} {}: {}\n", text.turn, entry.turn, entry.scenario_title));
        output.push_str(&format!("{}\n", entry.scenario_description));
        output.push_str(&format!("> {}\n", entry.choice_label));
        output.push_str(&format!("{}\n\n", entry.result_text));
    }

    let stats = &session.stats;
    output.push_str(&format!("{} {} | ", text.turn, stats.turn));
    let standing: Vec<String> = stats
        .resources()
        .iter()
        .map(|(key, value)| format!("{} {}", text.resource(key), value))
        .collect();
    output.push_str(&standing.join(" | "));
    output.push('\n');
    output
}

/// Short brag text for sharing a finished run.
pub fn share_summary(stats: &GameStats, language: Language) -> String {
    match language {
        Language::He => format!(
            "הגעתי להגמוניה במזרח התיכון! 🌍✨\nעוצמה צבאית: {}\nדיפלומטיה: {}\nכלכלה: {}\nשרדתי {} תורות והבטחתי את עתיד האומה. מה לגביך?",
            stats.military, stats.diplomacy, stats.economy, stats.turn
        ),
        _ => format!(
            "I reached Middle East Hegemony! 🌍✨\nMilitary: {}\nDiplomacy: {}\nEconomy: {}\nI survived {} turns and secured the nation's future. What about you?",
            stats.military, stats.diplomacy, stats.economy, stats.turn
        ),
    }
}
