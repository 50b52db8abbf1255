//! Fixed design parameters for the turn engine.

/// Lower bound every resource is clamped to.
pub const STAT_MIN: i32 = 0;
/// Upper bound every resource is clamped to.
pub const STAT_MAX: i32 = 100;

pub const INITIAL_MILITARY: i32 = 50;
pub const INITIAL_DIPLOMACY: i32 = 50;
pub const INITIAL_TERRITORY: i32 = 30;
pub const INITIAL_ECONOMY: i32 = 50;
pub const INITIAL_TURN: u32 = 1;

/// First turn on which victory can be declared.
pub const VICTORY_TURN: u32 = 20;
/// Military, diplomacy and economy must all be at or above this for victory.
pub const VICTORY_THRESHOLD: i32 = 60;
/// Any of military, diplomacy or economy at or below this ends the game.
/// Territory is exempt.
pub const DEFEAT_THRESHOLD: i32 = 0;

/// Resource level that unlocks the matching mastery achievement.
pub const MASTERY_THRESHOLD: i32 = 80;
/// Turn that unlocks the survivor achievement.
pub const SURVIVOR_TURN: u32 = 10;
