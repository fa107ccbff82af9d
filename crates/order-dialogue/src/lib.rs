//! order-dialogue: the conversation that takes, confirms and extends an order
//!
//! A [`DialogueSession`] repeatedly listens for an utterance, parses it into
//! order components, prices and summarises them, and asks the customer to
//! confirm or add more until the order is final.

mod config;
mod error;
mod order;
mod session;
mod state;

pub use config::{Prompts, SessionConfig};
pub use error::SessionError;
pub use order::Order;
pub use session::{DialogueSession, Outcome, Turn};
pub use state::{Answer, DialogueState};
