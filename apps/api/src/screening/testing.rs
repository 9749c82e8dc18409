//! Scripted completion service for driving the pipeline without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{CompletionService, LlmError};

/// Replies keyed by the exact user message. Unknown messages fail with a 500.
#[derive(Default)]
pub struct ScriptedCompletion {
    replies: HashMap<String, Result<String, String>>,
    calls: AtomicUsize,
    systems: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, user: &str, text: &str) -> Self {
        self.replies.insert(user.to_string(), Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, user: &str, message: &str) -> Self {
        self.replies
            .insert(user.to_string(), Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn systems(&self) -> Vec<String> {
        self.systems.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.systems.lock().unwrap().push(system.to_string());
        match self.replies.get(user) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(message)) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Err(LlmError::Api {
                status: 500,
                message: format!("no scripted reply for {user:?}"),
            }),
        }
    }
}
