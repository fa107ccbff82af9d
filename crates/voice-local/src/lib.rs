//! voice-local: speech collaborator traits with console and scripted backends
mod error;
pub use error::ListenError;

mod types;
pub use types::{ListenConfig, SpeakConfig, Utterance};

mod traits;
pub use traits::{Speaker, SpeechListener};

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::{RecordingSpeaker, ScriptedListener};

#[cfg(feature = "console")]
mod console;
#[cfg(feature = "console")]
pub use console::{ConsoleListener, ConsoleSpeaker};

pub mod plugin;
