//! Scripted conversation shown in the hero chat demo

use derive_more::Display;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

/// Who says a line of the script
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Speaker {
    #[display("agent")]
    Agent,
    #[display("customer")]
    Customer,
}

/// A single line of the scripted conversation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptMessage {
    pub speaker: Speaker,
    pub text: Cow<'static, str>,
}

impl ScriptMessage {
    pub const fn agent(text: &'static str) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: Cow::Borrowed(text),
        }
    }

    pub const fn customer(text: &'static str) -> Self {
        Self {
            speaker: Speaker::Customer,
            text: Cow::Borrowed(text),
        }
    }

    pub fn is_agent(&self) -> bool {
        self.speaker == Speaker::Agent
    }
}

/// Conversation played on the landing page
pub const DEFAULT_SCRIPT: &[ScriptMessage] = &[
    ScriptMessage::agent("Hi there! 👋 How can I help you today?"),
    ScriptMessage::customer("My order #4821 still says processing. When will it ship?"),
    ScriptMessage::agent("Let me check... It was packed this morning and ships today."),
    ScriptMessage::customer("Great! Can I still change the delivery address?"),
    ScriptMessage::agent("Yes. I've sent you a secure link to update it."),
    ScriptMessage::customer("Perfect, thank you so much!"),
    ScriptMessage::agent("Anytime! Anything else I can help with?"),
];

/// Immutable, cheaply cloned sequence of script messages
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatScript(Arc<[ScriptMessage]>);

impl ChatScript {
    pub fn new(messages: impl Into<Arc<[ScriptMessage]>>) -> Self {
        Self(messages.into())
    }

    pub fn messages(&self) -> &[ScriptMessage] {
        &self.0
    }
}

impl Default for ChatScript {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT)
    }
}

impl Deref for ChatScript {
    type Target = [ScriptMessage];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ScriptMessage>> for ChatScript {
    fn from(messages: Vec<ScriptMessage>) -> Self {
        Self::new(messages)
    }
}
