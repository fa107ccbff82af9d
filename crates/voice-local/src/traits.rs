use crate::{ListenError, Utterance};

/// Speech-to-text side of the conversation. Blocks until an utterance,
/// a failure or the configured timeout.
pub trait SpeechListener {
    fn listen(&mut self) -> Result<Utterance, ListenError>;
}

/// Text-to-speech side. Blocks until the text has been spoken.
pub trait Speaker {
    fn speak(&mut self, text: &str);
}

impl<T: SpeechListener + ?Sized> SpeechListener for Box<T> {
    fn listen(&mut self) -> Result<Utterance, ListenError> {
        (**self).listen()
    }
}

impl<T: Speaker + ?Sized> Speaker for Box<T> {
    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }
}
