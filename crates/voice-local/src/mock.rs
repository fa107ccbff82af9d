use crate::{ListenError, Speaker, SpeechListener, Utterance};
use std::collections::VecDeque;

/// Replays a fixed script of listen results, then reports the input closed
#[derive(Debug, Default)]
pub struct ScriptedListener {
    script: VecDeque<Result<String, ListenError>>,
    consumed: usize,
}

impl ScriptedListener {
    pub fn new(script: impl IntoIterator<Item = Result<String, ListenError>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Script made only of successful utterances
    pub fn from_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(lines.into_iter().map(|l| Ok(l.as_ref().to_string())))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl SpeechListener for ScriptedListener {
    fn listen(&mut self) -> Result<Utterance, ListenError> {
        let next = self.script.pop_front().ok_or(ListenError::Closed)?;
        self.consumed += 1;
        next.map(Utterance::new)
    }
}

/// Keeps everything it was asked to say
#[derive(Debug, Default, Clone)]
pub struct RecordingSpeaker {
    spoken: Vec<String>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> &[String] {
        &self.spoken
    }

    pub fn last(&self) -> Option<&str> {
        self.spoken.last().map(|s| s.as_str())
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_replays_then_closes() {
        let mut listener = ScriptedListener::new(vec![
            Ok("a latte".to_string()),
            Err(ListenError::NotUnderstood),
        ]);
        assert_eq!(listener.listen().unwrap().text, "a latte");
        assert_eq!(listener.listen(), Err(ListenError::NotUnderstood));
        assert_eq!(listener.listen(), Err(ListenError::Closed));
        assert_eq!(listener.consumed(), 2);
        assert_eq!(listener.remaining(), 0);
    }

    #[test]
    fn test_recording_speaker() {
        let mut speaker = RecordingSpeaker::new();
        speaker.speak("hello");
        speaker.speak("bye");
        assert_eq!(speaker.spoken(), ["hello", "bye"]);
        assert_eq!(speaker.last(), Some("bye"));
    }
}
