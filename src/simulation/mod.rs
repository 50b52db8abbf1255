pub mod achievements;
pub mod history;
pub mod library;
pub mod outcome;
pub mod selector;
pub mod session;
pub mod stats;
