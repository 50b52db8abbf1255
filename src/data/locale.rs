use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::simulation::achievements::AchievementId;

/// Locales the game ships strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    He,
    #[default]
    En,
    Ru,
    Zh,
    Hi,
    De,
    Es,
}

pub const ALL_LANGUAGES: [Language; 7] = [
    Language::He,
    Language::En,
    Language::Ru,
    Language::Zh,
    Language::Hi,
    Language::De,
    Language::Es,
];

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
            Language::Ru => "ru",
            Language::Zh => "zh",
            Language::Hi => "hi",
            Language::De => "de",
            Language::Es => "es",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::He)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
#[error("unknown language code {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        ALL_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or(UnknownLanguage(code))
    }
}

/// Display preference stored next to the save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme {}", other)),
        }
    }
}

/// Front-end labels for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub title: &'static str,
    pub turn: &'static str,
    pub victory: &'static str,
    pub game_over: &'static str,
    pub military: &'static str,
    pub diplomacy: &'static str,
    pub territory: &'static str,
    pub economy: &'static str,
}

impl UiText {
    /// Label for one of the `GameStats::resources` keys.
    pub fn resource(&self, key: &str) -> &'static str {
        match key {
            "military" => self.military,
            "diplomacy" => self.diplomacy,
            "territory" => self.territory,
            "economy" => self.economy,
            _ => "?",
        }
    }
}

pub fn ui_text(language: Language) -> UiText {
    let (title, turn, victory, game_over, military, diplomacy, territory, economy) = match language {
        Language::He => (
            "הגמוניה במזרח התיכון",
            "תור",
            "ניצחון היסטורי!",
            "המשחק נגמר",
            "עוצמה צבאית",
            "דיפלומטיה",
            "טריטוריה",
            "כלכלה",
        ),
        Language::En => (
            "Middle East Hegemony",
            "Turn",
            "Historic Victory!",
            "Game Over",
            "Military",
            "Diplomacy",
            "Territory",
            "Economy",
        ),
        Language::Ru => (
            "Гегемония на Ближнем Востоке",
            "Ход",
            "Победа!",
            "Конец игры",
            "Армия",
            "Дипломатия",
            "Территория",
            "Экономика",
        ),
        Language::Zh => (
            "中东霸权",
            "回合",
            "历史性胜利！",
            "游戏结束",
            "军事",
            "外交",
            "领土",
            "经济",
        ),
        Language::Hi => (
            "मध्य पूर्व आधिपत्य",
            "बारी",
            "ऐतिहासिक जीत!",
            "खेल खत्म",
            "सैन्य",
            "कूटनीति",
            "क्षेत्र",
            "अर्थव्यवस्था",
        ),
        Language::De => (
            "Nahost-Hegemonie",
            "Runde",
            "Sieg!",
            "Spiel vorbei",
            "Militär",
            "Diplomatie",
            "Territorium",
            "Wirtschaft",
        ),
        Language::Es => (
            "Hegemonía en Oriente Medio",
            "Turno",
            "¡Victoria!",
            "Fin",
            "Militar",
            "Diplomacia",
            "Territorio",
            "Economía",
        ),
    };
    UiText {
        title,
        turn,
        victory,
        game_over,
        military,
        diplomacy,
        territory,
        economy,
    }
}

/// Localized (title, description) for an achievement badge.
pub fn achievement_text(id: AchievementId, language: Language) -> (&'static str, &'static str) {
    use AchievementId::*;
    match (language, id) {
        (Language::He, MilMaster) => ("מעצמה צבאית", "הגע ל-80 עוצמה צבאית"),
        (Language::He, DipMaster) => ("אדריכל השלום", "הגע ל-80 דיפלומטיה"),
        (Language::He, EcoMaster) => ("נמר כלכלי", "הגע ל-80 כלכלה"),
        (Language::He, Survivor) => ("שורד אזורי", "הגעת לתור 10"),
        (Language::He, Hegemon) => ("הגמון אמיתי", "ניצחת במשחק"),

        (Language::En, MilMaster) => ("Military Superpower", "Reach 80 Military Power"),
        (Language::En, DipMaster) => ("Peace Architect", "Reach 80 Diplomacy"),
        (Language::En, EcoMaster) => ("Economic Tiger", "Reach 80 Economy"),
        (Language::En, Survivor) => ("Regional Survivor", "Reach Turn 10"),
        (Language::En, Hegemon) => ("True Hegemon", "Win the Game"),

        (Language::Ru, MilMaster) => ("Военная сверхдержава", "Достигните 80 военной мощи"),
        (Language::Ru, DipMaster) => ("Архитектор мира", "Достигните 80 дипломатии"),
        (Language::Ru, EcoMaster) => ("Экономический тигр", "Достигните 80 экономики"),
        (Language::Ru, Survivor) => ("Выживший", "Достигните 10 хода"),
        (Language::Ru, Hegemon) => ("Настоящий гегемон", "Выиграйте игру"),

        (Language::Zh, MilMaster) => ("军事强权", "军事力量达到80"),
        (Language::Zh, DipMaster) => ("和平架构师", "外交点数达到80"),
        (Language::Zh, EcoMaster) => ("经济之虎", "经济实力达到80"),
        (Language::Zh, Survivor) => ("区域生存者", "到达第10回合"),
        (Language::Zh, Hegemon) => ("真正的霸权", "赢得游戏"),

        (Language::Hi, MilMaster) => ("सैन्य महाशक्ति", "80 सैन्य शक्ति तक पहुँचें"),
        (Language::Hi, DipMaster) => ("शांति वास्तुकार", "80 कूटनीति तक पहुँचें"),
        (Language::Hi, EcoMaster) => ("आर्थिक टाइगर", "80 अर्थव्यवस्था तक पहुँचें"),
        (Language::Hi, Survivor) => ("क्षेत्रीय उत्तरजीवी", "10वीं बारी तक पहुँचें"),
        (Language::Hi, Hegemon) => ("सच्चा आधिपत्य", "खेल जीतें"),

        (Language::De, MilMaster) => ("Militärische Supermacht", "Militärstärke 80 erreichen"),
        (Language::De, DipMaster) => ("Friedensarchitekt", "Diplomatie 80 erreichen"),
        (Language::De, EcoMaster) => ("Wirtschaftstiger", "Wirtschaft 80 erreichen"),
        (Language::De, Survivor) => ("Regionaler Überlebender", "Runde 10 erreichen"),
        (Language::De, Hegemon) => ("Wahrer Hegemon", "Das Spiel gewinnen"),

        (Language::Es, MilMaster) => ("Superpotencia militar", "Alcanza 80 de poder militar"),
        (Language::Es, DipMaster) => ("Arquitecto de paz", "Alcanza 80 de diplomacia"),
        (Language::Es, EcoMaster) => ("Tigre económico", "Alcanza 80 de economía"),
        (Language::Es, Survivor) => ("Superviviente regional", "Alcanza el turno 10"),
        (Language::Es, Hegemon) => ("Verdadero Hegemón", "Gana el juego"),
    }
}
