use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::locale::{achievement_text, Language};
use crate::data::rules::{MASTERY_THRESHOLD, SURVIVOR_TURN};
use crate::simulation::stats::GameStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    MilMaster,
    DipMaster,
    EcoMaster,
    Survivor,
    Hegemon,
}

impl AchievementId {
    pub fn as_str(self) -> &'static str {
        match self {
            AchievementId::MilMaster => "mil_master",
            AchievementId::DipMaster => "dip_master",
            AchievementId::EcoMaster => "eco_master",
            AchievementId::Survivor => "survivor",
            AchievementId::Hegemon => "hegemon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub desc: String,
    pub unlocked_at: u32,
}

impl Achievement {
    pub fn unlock(id: AchievementId, turn: u32, language: Language) -> Self {
        let (title, desc) = achievement_text(id, language);
        Self {
            id,
            title: title.to_string(),
            desc: desc.to_string(),
            unlocked_at: turn,
        }
    }
}

/// Every badge unlocked on this profile. Append-only.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct AchievementLedger {
    pub unlocked: Vec<Achievement>,
}

impl AchievementLedger {
    pub fn contains(&self, id: AchievementId) -> bool {
        is_unlocked(&self.unlocked, id)
    }

    pub fn record(&mut self, achievements: impl IntoIterator<Item = Achievement>) {
        for achievement in achievements {
            if !self.contains(achievement.id) {
                self.unlocked.push(achievement);
            }
        }
    }
}

fn is_unlocked(already: &[Achievement], id: AchievementId) -> bool {
    already.iter().any(|achievement| achievement.id == id)
}

/// Stat-threshold badges in unlock order. `hegemon` is not here: only the
/// victory transition grants it.
const STAT_BADGES: [AchievementId; 4] = [
    AchievementId::MilMaster,
    AchievementId::DipMaster,
    AchievementId::EcoMaster,
    AchievementId::Survivor,
];

fn threshold_met(id: AchievementId, stats: &GameStats) -> bool {
    match id {
        AchievementId::MilMaster => stats.military >= MASTERY_THRESHOLD,
        AchievementId::DipMaster => stats.diplomacy >= MASTERY_THRESHOLD,
        AchievementId::EcoMaster => stats.economy >= MASTERY_THRESHOLD,
        AchievementId::Survivor => stats.turn >= SURVIVOR_TURN,
        AchievementId::Hegemon => false,
    }
}

pub fn evaluate(
    stats: &GameStats,
    already_unlocked: &[Achievement],
    language: Language,
) -> Vec<Achievement> {
    STAT_BADGES
        .iter()
        .copied()
        .filter(|id| threshold_met(*id, stats) && !is_unlocked(already_unlocked, *id))
        .map(|id| Achievement::unlock(id, stats.turn, language))
        .collect()
}

pub fn unlock_victory(
    turn: u32,
    already_unlocked: &[Achievement],
    language: Language,
) -> Option<Achievement> {
    if is_unlocked(already_unlocked, AchievementId::Hegemon) {
        return None;
    }
    Some(Achievement::unlock(AchievementId::Hegemon, turn, language))
}
