//! Ordered, append-only chat transcript shared by both chat widgets.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// Presentation hint for a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    Error,
    /// Transient "working on it" line, removed once the real reply lands.
    Placeholder,
}

/// A single rendered chat line.
///
/// Assistant text may carry light markdown (`**bold**`); user text is shown
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub author: Author,
    pub text: String,
    pub tone: Tone,
}

/// Messages in display order, top to bottom.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    /// Append a normal message and return its id.
    pub fn push(&mut self, author: Author, text: impl Into<String>) -> u64 {
        self.push_with_tone(author, text, Tone::Normal)
    }

    /// Append a message with an explicit tone and return its id.
    pub fn push_with_tone(&mut self, author: Author, text: impl Into<String>, tone: Tone) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, author, text: text.into(), tone });
        id
    }

    /// Remove a placeholder line. Non-placeholder messages are never removed;
    /// returns `false` when `id` is not a live placeholder.
    pub fn remove_placeholder(&mut self, id: u64) -> bool {
        let Some(idx) = self
            .messages
            .iter()
            .position(|m| m.id == id && m.tone == Tone::Placeholder)
        else {
            return false;
        };
        self.messages.remove(idx);
        true
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
