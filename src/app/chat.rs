//! Conversation with the history assistant.

pub const GREETING: &str = "Ask me anything about history";
pub const APOLOGY: &str = "Sorry, I couldn't find an answer to that right now.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Assistant,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// A question the runtime should forward to the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatQuestion {
    pub token: u64,
    pub text: String,
}

/// Transcript plus the questions still awaiting answers.
///
/// Answers are appended in question order: an answer that arrives before the
/// answer to an earlier question waits until the earlier one is in.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_token: u64,
    pending: Vec<(u64, Option<String>)>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                speaker: Speaker::Assistant,
                text: GREETING.to_string(),
            }],
            next_token: 0,
            pending: Vec::new(),
        }
    }
}

impl ChatSession {
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn awaiting(&self) -> usize {
        self.pending.len()
    }

    /// Appends the user's question. Blank input is ignored.
    pub fn send(&mut self, input: &str) -> Option<ChatQuestion> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.next_token += 1;
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: text.to_string(),
        });
        self.pending.push((self.next_token, None));

        Some(ChatQuestion {
            token: self.next_token,
            text: text.to_string(),
        })
    }

    /// Records the answer for `token` and flushes every answer that is now in
    /// order. Returns `false` for unknown tokens.
    pub fn answer(&mut self, token: u64, result: Result<String, String>) -> bool {
        let Some(slot) = self.pending.iter_mut().find(|(t, _)| *t == token) else {
            return false;
        };

        slot.1 = Some(match result {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => APOLOGY.to_string(),
            Err(reason) => {
                tracing::warn!(reason = %reason, "assistant request failed");
                APOLOGY.to_string()
            }
        });

        while let Some((_, Some(_))) = self.pending.first() {
            let (_, text) = self.pending.remove(0);
            if let Some(text) = text {
                self.messages.push(ChatMessage {
                    speaker: Speaker::Assistant,
                    text,
                });
            }
        }
        true
    }
}
