//! Dialogue state machine driving parse, confirm and add-more cycles

use crate::error::{Result, SessionError};
use crate::{Answer, DialogueState, Order, SessionConfig};
use order_parser::{compose_summary, MenuCatalog, PriceCalculator, UtteranceParser};
use tracing::{debug, info, warn};
use uuid::Uuid;
use voice_local::{ListenError, Speaker, SpeechListener};

/// What a single utterance did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Items recognised and added; confirmation requested
    OrderTaken,
    /// Utterance held no menu item
    NoItemRecognized,
    /// Neither "yes" nor "no" heard
    AmbiguousAnswer,
    Confirmed,
    /// Customer rejected the order and starts over
    Discarded,
    AddingMore,
    Finalized,
    /// Utterance arrived after the session ended
    Ignored,
}

/// Result of feeding one utterance to the session
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub state: DialogueState,
    pub outcome: Outcome,
    /// Text to speak, if any
    pub prompt: Option<String>,
}

pub struct DialogueSession<'a> {
    id: Uuid,
    parser: UtteranceParser<'a>,
    calculator: PriceCalculator,
    config: SessionConfig,
    state: DialogueState,
    order: Order,
    last_prompt: Option<String>,
}

impl<'a> DialogueSession<'a> {
    pub fn new(
        catalog: &'a MenuCatalog,
        calculator: PriceCalculator,
        config: SessionConfig,
    ) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            parser: UtteranceParser::new(catalog)?,
            calculator,
            config,
            state: DialogueState::AwaitingFirstOrder,
            order: Order::default(),
            last_prompt: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Advance the state machine with one recognised utterance
    pub fn handle_utterance(&mut self, text: &str) -> Result<Turn> {
        let from = self.state;
        let (outcome, prompt) = match from {
            DialogueState::AwaitingFirstOrder => self.take_order(text, false)?,
            DialogueState::AwaitingAdditionalUtterance => self.take_order(text, true)?,
            DialogueState::AwaitingConfirmation => self.confirm(text),
            DialogueState::AwaitingAddMoreDecision => self.decide_add_more(text),
            DialogueState::Finalized => {
                debug!(session = %self.id, text, "utterance after finalization ignored");
                (Outcome::Ignored, None)
            }
        };

        if from != self.state {
            debug!(session = %self.id, %from, to = %self.state, ?outcome, "transition");
        }
        if prompt.is_some() {
            self.last_prompt.clone_from(&prompt);
        }
        Ok(Turn {
            state: self.state,
            outcome,
            prompt,
        })
    }

    fn take_order(&mut self, text: &str, addition: bool) -> Result<(Outcome, Option<String>)> {
        let components = self.parser.parse(text);
        if !components.has_items() {
            info!(session = %self.id, text, "no menu item recognised");
            let prompts = &self.config.prompts;
            let rejection = if addition {
                &prompts.no_item_addition
            } else {
                &prompts.no_item
            };
            return Ok((Outcome::NoItemRecognized, Some(rejection.clone())));
        }

        let price = self.calculator.price(&components)?;
        let clause = compose_summary(&components);
        self.order.add(components, &price, &clause);
        self.state = DialogueState::AwaitingConfirmation;
        info!(
            session = %self.id,
            clause = %clause,
            added = price.total(),
            total = self.order.total(),
            "order updated"
        );
        let prompt = self.config.prompts.confirm(self.order.summary(), addition);
        Ok((Outcome::OrderTaken, Some(prompt)))
    }

    fn confirm(&mut self, text: &str) -> (Outcome, Option<String>) {
        match Answer::classify(text) {
            Some(Answer::Yes) => {
                self.state = DialogueState::AwaitingAddMoreDecision;
                (Outcome::Confirmed, Some(self.config.prompts.add_more.clone()))
            }
            Some(Answer::No) => {
                let reset = self.config.reset_price_on_reorder;
                self.order.discard(reset);
                self.state = DialogueState::AwaitingFirstOrder;
                info!(
                    session = %self.id,
                    price_reset = reset,
                    carried_total = self.order.total(),
                    "order rejected, starting over"
                );
                (Outcome::Discarded, Some(self.config.prompts.reorder.clone()))
            }
            None => (
                Outcome::AmbiguousAnswer,
                Some(self.config.prompts.not_caught.clone()),
            ),
        }
    }

    fn decide_add_more(&mut self, text: &str) -> (Outcome, Option<String>) {
        match Answer::classify(text) {
            Some(Answer::Yes) => {
                self.state = DialogueState::AwaitingAdditionalUtterance;
                (
                    Outcome::AddingMore,
                    Some(self.config.prompts.what_to_add.clone()),
                )
            }
            Some(Answer::No) => {
                self.state = DialogueState::Finalized;
                (Outcome::Finalized, None)
            }
            None => (
                Outcome::AmbiguousAnswer,
                Some(self.config.prompts.not_caught.clone()),
            ),
        }
    }

    /// Closing line spoken once the order is final
    pub fn closing_statement(&self) -> String {
        self.config.prompts.closing(&self.order.receipt())
    }

    /// Run the conversation until the order is finalized.
    ///
    /// Listen failures never change state. Only a closed input ends the
    /// session early.
    pub fn run<L, S>(&mut self, listener: &mut L, speaker: &mut S) -> Result<&Order>
    where
        L: SpeechListener + ?Sized,
        S: Speaker + ?Sized,
    {
        info!(session = %self.id, "session started");
        let greeting = self.config.prompts.greeting.clone();
        self.say(speaker, greeting);

        while !self.is_finished() {
            let utterance = match listener.listen() {
                Ok(utterance) => utterance,
                Err(e) if !e.is_retryable() => {
                    warn!(
                        session = %self.id,
                        state = %self.state,
                        "speech input closed before the order was final"
                    );
                    return Err(SessionError::InputClosed(self.state));
                }
                Err(e) => {
                    self.recover_from(&e, speaker);
                    continue;
                }
            };

            debug!(
                session = %self.id,
                text = %utterance.text,
                ts = ?utterance.ts,
                "heard utterance"
            );
            let turn = self.handle_utterance(&utterance.text)?;
            if let Some(prompt) = turn.prompt {
                speaker.speak(&prompt);
            }
        }

        let closing = self.closing_statement();
        speaker.speak(&closing);
        info!(
            session = %self.id,
            summary = %self.order.summary(),
            total = self.order.total(),
            "order finalized"
        );
        Ok(&self.order)
    }

    /// Stay in the current state after a failed listen attempt
    fn recover_from<S: Speaker + ?Sized>(&self, error: &ListenError, speaker: &mut S) {
        match error {
            ListenError::BackendUnreachable(reason) => warn!(
                session = %self.id,
                state = %self.state,
                %reason,
                "speech backend unreachable, check the network connection"
            ),
            ListenError::Timeout(waited) => {
                info!(session = %self.id, ?waited, "no speech before timeout");
                if self.config.repeat_prompt_on_timeout {
                    if let Some(prompt) = &self.last_prompt {
                        speaker.speak(prompt);
                    }
                }
            }
            _ => info!(session = %self.id, state = %self.state, "{}, listening again", error),
        }
    }

    fn say<S: Speaker + ?Sized>(&mut self, speaker: &mut S, text: String) {
        speaker.speak(&text);
        self.last_prompt = Some(text);
    }
}
