use bevy_utils::tracing::info;

use crate::data::locale::Language;

/// Text-to-speech capability handed to the front end.
pub trait SpeechSynth {
    fn speak(&mut self, text: &str, language: Language);
    fn cancel(&mut self);
}

/// Speech stand-in for terminals: records utterances and logs them.
#[derive(Debug, Default)]
pub struct TranscriptSpeech {
    pub spoken: Vec<(Language, String)>,
}

impl SpeechSynth for TranscriptSpeech {
    fn speak(&mut self, text: &str, language: Language) {
        // A new utterance replaces whatever was playing.
        self.cancel();
        info!(language = %language, chars = text.chars().count(), "speak");
        self.spoken.push((language, text.to_string()));
    }

    fn cancel(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_records_in_order() {
        let mut speech = TranscriptSpeech::default();
        speech.speak("first", Language::En);
        speech.speak("שני", Language::He);
        assert_eq!(
            speech.spoken,
            vec![
                (Language::En, "first".to_string()),
                (Language::He, "שני".to_string())
            ]
        );
    }
}
