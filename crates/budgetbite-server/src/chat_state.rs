//! Per-process chat state shared by the handlers

use std::collections::HashMap;

use budgetbite_core::{
    AgentReply, BudgetBiteAgent, ChatMessage, InMemorySessionService, MealDataProvider,
    Transcript,
};

/// Agent sessions plus the transcript each user sees
#[derive(Debug, Default)]
pub struct ChatState {
    pub sessions: InMemorySessionService,
    transcripts: HashMap<String, Transcript>,
}

impl ChatState {
    pub fn new(sessions: InMemorySessionService) -> Self {
        Self {
            sessions,
            transcripts: HashMap::new(),
        }
    }

    /// Run one message through the agent and record both sides of the exchange
    pub fn send<P: MealDataProvider>(
        &mut self,
        agent: &BudgetBiteAgent<P>,
        user_id: &str,
        message: &str,
    ) -> AgentReply {
        let reply = agent.respond(&mut self.sessions, user_id, message);

        let transcript = self.transcripts.entry(user_id.to_string()).or_default();
        transcript.push_user(message);
        transcript.push_assistant(reply.text.clone());

        reply
    }

    pub fn messages(&self, user_id: &str) -> Vec<ChatMessage> {
        self.transcripts
            .get(user_id)
            .map(|t| t.messages().to_vec())
            .unwrap_or_default()
    }

    pub fn clear_transcript(&mut self, user_id: &str) {
        self.transcripts.remove(user_id);
    }

    /// Forget a user's session and transcript, returns whether a session existed
    pub fn reset(&mut self, user_id: &str) -> bool {
        self.transcripts.remove(user_id);
        self.sessions.reset_session(user_id)
    }
}
