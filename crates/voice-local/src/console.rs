//! Console backends: typed lines stand in for speech, printed lines for audio

use crate::{ListenConfig, ListenError, SpeakConfig, Speaker, SpeechListener, Utterance};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use tracing::{debug, warn};

/// Reads one utterance per line. The reader runs on a helper thread so that
/// `listen` can honour [`ListenConfig::timeout`].
pub struct ConsoleListener {
    config: ListenConfig,
    lines: Receiver<io::Result<String>>,
}

impl ConsoleListener {
    pub fn stdin(config: ListenConfig) -> Self {
        Self::from_reader(io::BufReader::new(io::stdin()), config)
    }

    pub fn from_reader<R>(reader: R, config: ListenConfig) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in reader.lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!("console input reached end of stream");
        });
        Self { config, lines: rx }
    }

    fn next_line(&self) -> Result<io::Result<String>, ListenError> {
        match self.config.timeout {
            Some(timeout) => self.lines.recv_timeout(timeout).map_err(|e| match e {
                RecvTimeoutError::Timeout => ListenError::Timeout(timeout),
                RecvTimeoutError::Disconnected => ListenError::Closed,
            }),
            None => self.lines.recv().map_err(|_| ListenError::Closed),
        }
    }
}

impl SpeechListener for ConsoleListener {
    fn listen(&mut self) -> Result<Utterance, ListenError> {
        let line = self.next_line()?.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => ListenError::NotUnderstood,
            _ => ListenError::BackendUnreachable(e.to_string()),
        })?;
        let text = line.trim();
        if text.is_empty() {
            return Err(ListenError::NotUnderstood);
        }
        debug!(text, "heard");
        Ok(Utterance::new(text))
    }
}

/// Prints each prompt on its own line
pub struct ConsoleSpeaker<W: Write = io::Stdout> {
    config: SpeakConfig,
    out: W,
}

impl ConsoleSpeaker {
    pub fn stdout(config: SpeakConfig) -> Self {
        Self {
            config,
            out: io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn with_writer(config: SpeakConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    fn speak(&mut self, text: &str) {
        let prefix = self.config.prefix.as_deref().unwrap_or("");
        if let Err(e) = writeln!(self.out, "{prefix}{text}").and_then(|_| self.out.flush()) {
            warn!("console speaker write failed: {}", e);
        }
    }
}
