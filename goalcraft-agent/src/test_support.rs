//! Test-only generator that replays scripted replies.

use std::collections::VecDeque;
use std::sync::Mutex;

use goalcraft_llm::{ChatMessage, Error, Result, SamplingParams, TextGenerator};

/// One recorded `generate` call
#[derive(Debug, Clone)]
pub struct Call {
    pub messages: Vec<ChatMessage>,
    pub params: SamplingParams,
}

impl Call {
    pub fn system(&self) -> &str {
        &self.messages[0].content
    }

    pub fn user(&self) -> &str {
        &self.messages[1].content
    }
}

/// Pops one reply per call; running out of replies is an `Unexpected` error.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedGenerator {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_results(replies.into_iter().map(|r| Ok(r.into())))
    }

    pub fn with_results(replies: impl IntoIterator<Item = Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, messages: Vec<ChatMessage>, params: &SamplingParams) -> Result<String> {
        self.calls.lock().unwrap().push(Call {
            messages,
            params: *params,
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::unexpected("script exhausted")))
    }
}
