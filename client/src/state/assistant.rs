//! Scripted assistant conversation: a fixed linear dialogue followed by
//! keyword routing.
//!
//! DESIGN
//! ======
//! The widget asks for a name, then an age, then answers free-form questions
//! forever. Transitions happen synchronously in [`AssistantState::submit`];
//! the assistant's lines come back as [`ScheduledReply`] values that the
//! component delivers after a short "typing" delay.
//!
//! Every submission opens a new exchange. A reply is only delivered while
//! its exchange is still the newest one, so a fast follow-up message
//! cancels whatever the assistant had not said yet instead of interleaving
//! stale lines with fresh ones.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use std::time::Duration;

use super::transcript::{Author, Transcript};

/// Delay before the greeting after the widget is first opened.
pub const WELCOME_DELAY: Duration = Duration::from_millis(1000);
/// Delay before the first assistant line of an exchange.
pub const REPLY_DELAY: Duration = Duration::from_millis(500);
/// Extra delay before a follow-up prompt within the same exchange.
pub const FOLLOW_UP_DELAY: Duration = Duration::from_millis(1000);

pub const WELCOME_PROMPT: &str = "To help you better, may I know your name?";
pub const AGE_PROMPT: &str = "May I know your age?";
pub const AGE_ACK: &str = "Thank you!";
pub const ROUTING_PROMPT: &str =
    "How can I assist you today? Are you looking for diagnosis, doctor details, or nearest medical centers?";
pub const FALLBACK_REPLY: &str =
    "I can assist you with diagnosis, finding doctors, or locating medical centers. How can I help you?";

/// Position in the scripted dialogue. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Widget never opened.
    #[default]
    Collapsed,
    AwaitingName,
    AwaitingAge,
    /// Terminal: every further message is routed by keyword.
    Routing,
}

impl Step {
    fn next(self) -> Self {
        match self {
            Self::Collapsed => Self::AwaitingName,
            Self::AwaitingName => Self::AwaitingAge,
            Self::AwaitingAge | Self::Routing => Self::Routing,
        }
    }
}

/// What the user has told the assistant so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub step: Step,
    pub name: String,
    pub age: String,
}

impl ConversationState {
    fn advance(&mut self) {
        self.step = self.step.next();
    }
}

// =============================================================================
// INTENT ROUTING
// =============================================================================

/// Topic recognised in a free-form question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Diagnosis,
    Doctor,
    Location,
    Help,
    Thanks,
    Farewell,
}

/// Ordered routing table; the first group with a keyword contained in the
/// lower-cased message wins.
pub const INTENT_TABLE: &[(Intent, &[&str])] = &[
    (Intent::Diagnosis, &["diagnosis", "symptom", "diagnos"]),
    (Intent::Doctor, &["doctor", "appointment"]),
    (Intent::Location, &["location", "nearest", "center", "centre"]),
    (Intent::Help, &["help"]),
    (Intent::Thanks, &["thank", "thanks"]),
    (Intent::Farewell, &["bye", "goodbye"]),
];

impl Intent {
    /// Fixed reply for this topic.
    #[must_use]
    pub fn reply(self) -> &'static str {
        match self {
            Self::Diagnosis => {
                "I can help you with diagnosis! Please click on the 'diagnosis-chat' card on the main page to start your medical consultation. 🏥"
            }
            Self::Doctor => "You can find doctor details by clicking on the 'doctor-details' card on the main page. 👨‍⚕",
            Self::Location => {
                "To find the nearest medical help center, click on the 'Nearest Medi-Help Centre' card on the main page. 📍"
            }
            Self::Help => {
                "I can help you with:\n• Medical Diagnosis\n• Finding Doctors\n• Locating Nearest Medical Centers\n\nWhat would you like to know more about?"
            }
            Self::Thanks => "You're welcome! Feel free to ask if you need anything else. 😊",
            Self::Farewell => "Goodbye! Take care and stay healthy! 👋",
        }
    }
}

/// Classify a message against [`INTENT_TABLE`].
#[must_use]
pub fn classify(message: &str) -> Option<Intent> {
    let lower = message.to_lowercase();
    INTENT_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(intent, _)| *intent)
}

/// Reply for a free-form question, falling back to the generic help line.
#[must_use]
pub fn route_reply(message: &str) -> &'static str {
    classify(message).map_or(FALLBACK_REPLY, Intent::reply)
}

// =============================================================================
// WIDGET STATE
// =============================================================================

/// An assistant line waiting for its typing delay to elapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledReply {
    /// Exchange that produced this reply.
    pub exchange: u64,
    /// Delay measured from the submission that produced it.
    pub delay: Duration,
    pub text: String,
}

/// Full state of one assistant widget instance.
#[derive(Clone, Debug, Default)]
pub struct AssistantState {
    pub open: bool,
    pub conversation: ConversationState,
    pub transcript: Transcript,
    exchange: u64,
}

impl AssistantState {
    /// Show the widget. The first open starts the dialogue and returns the
    /// greeting to schedule; later opens return `None`.
    pub fn open(&mut self) -> Option<ScheduledReply> {
        self.open = true;
        if self.conversation.step != Step::Collapsed {
            return None;
        }
        self.conversation.advance();
        let exchange = self.begin_exchange();
        Some(ScheduledReply { exchange, delay: WELCOME_DELAY, text: WELCOME_PROMPT.to_owned() })
    }

    /// Hide the widget. The dialogue position is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a submitted message.
    ///
    /// Returns `None` for blank input (nothing changes). Otherwise the user
    /// line is appended immediately, the step advances, and the assistant's
    /// replies for this exchange are returned in delivery order.
    pub fn submit(&mut self, raw: &str) -> Option<Vec<ScheduledReply>> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }
        self.transcript.push(Author::User, message);
        let exchange = self.begin_exchange();
        let reply = |delay: Duration, text: String| ScheduledReply { exchange, delay, text };

        let replies = match self.conversation.step {
            Step::Collapsed => Vec::new(),
            Step::AwaitingName => {
                self.conversation.name = message.to_owned();
                self.conversation.advance();
                vec![
                    reply(REPLY_DELAY, format!("Nice to meet you, {message}! 😊")),
                    reply(REPLY_DELAY + FOLLOW_UP_DELAY, AGE_PROMPT.to_owned()),
                ]
            }
            Step::AwaitingAge => {
                self.conversation.age = message.to_owned();
                self.conversation.advance();
                vec![
                    reply(REPLY_DELAY, AGE_ACK.to_owned()),
                    reply(REPLY_DELAY + FOLLOW_UP_DELAY, ROUTING_PROMPT.to_owned()),
                ]
            }
            Step::Routing => vec![reply(REPLY_DELAY, route_reply(message).to_owned())],
        };
        Some(replies)
    }

    /// Append a reply whose delay elapsed. Replies from a superseded
    /// exchange are dropped; returns whether the line was appended.
    pub fn deliver(&mut self, reply: &ScheduledReply) -> bool {
        if reply.exchange != self.exchange {
            return false;
        }
        self.transcript.push(Author::Assistant, reply.text.clone());
        true
    }

    fn begin_exchange(&mut self) -> u64 {
        self.exchange += 1;
        self.exchange
    }
}
