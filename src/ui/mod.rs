pub mod export;
pub mod render;
pub mod speech;

pub use export::{export_history, share_summary};
pub use speech::{SpeechSynth, TranscriptSpeech};
