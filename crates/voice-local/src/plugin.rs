#[cfg(feature = "console")]
use crate::{ConsoleListener, ConsoleSpeaker};
#[cfg(feature = "mock")]
use crate::ScriptedListener;
use crate::{ListenConfig, SpeakConfig, Speaker, SpeechListener};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BackendKind {
    /// Lines from stdin, prompts to stdout
    Console,
    /// Fixed script of utterances, prompts printed
    Scripted,
    /// Microphone capture with a cloud recogniser
    Microphone,
}

pub fn new_listener(
    kind: BackendKind,
    cfg: ListenConfig,
    script: Vec<String>,
) -> Result<Box<dyn SpeechListener>, String> {
    match kind {
        BackendKind::Console => {
            #[cfg(feature = "console")]
            {
                Ok(Box::new(ConsoleListener::stdin(cfg)))
            }
            #[cfg(not(feature = "console"))]
            {
                let _ = cfg;
                Err("console feature not enabled".into())
            }
        }
        BackendKind::Scripted => {
            #[cfg(feature = "mock")]
            {
                let _ = cfg;
                Ok(Box::new(ScriptedListener::from_lines(script)))
            }
            #[cfg(not(feature = "mock"))]
            {
                let _ = (cfg, script);
                Err("mock feature not enabled".into())
            }
        }
        BackendKind::Microphone => Err("microphone backend not yet integrated".into()),
    }
}

pub fn new_speaker(kind: BackendKind, cfg: SpeakConfig) -> Result<Box<dyn Speaker>, String> {
    match kind {
        BackendKind::Console | BackendKind::Scripted => {
            #[cfg(feature = "console")]
            {
                Ok(Box::new(ConsoleSpeaker::stdout(cfg)))
            }
            #[cfg(not(feature = "console"))]
            {
                let _ = cfg;
                Err("console feature not enabled".into())
            }
        }
        BackendKind::Microphone => Err("system text-to-speech not yet integrated".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_backend() {
        let mut listener = new_listener(
            BackendKind::Scripted,
            ListenConfig::default(),
            vec!["two lattes".to_string()],
        )
        .unwrap();
        assert_eq!(listener.listen().unwrap().text, "two lattes");
    }

    #[test]
    fn test_microphone_not_integrated() {
        assert!(new_listener(BackendKind::Microphone, ListenConfig::default(), vec![]).is_err());
        assert!(new_speaker(BackendKind::Microphone, SpeakConfig::default()).is_err());
    }
}
