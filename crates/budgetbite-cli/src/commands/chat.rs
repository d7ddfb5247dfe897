//! Chat command implementations
//!
//! - `cmd_chat` - Interactive REPL
//! - `cmd_ask` - One-shot query
//! - `cmd_classify` - Print the classified intent

use anyhow::Result;
use budgetbite_core::{
    AppConfig, BudgetBiteAgent, InMemorySessionService, QuickAction, Transcript,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const REPL_HELP: &str = "\
Commands:
  /help       Show this help
  /history    Show the conversation so far
  /reset      Forget the current plan and history
  /meal_plan  Quick action: create a meal plan
  /budget     Quick action: check the budget
  /shopping   Quick action: generate a shopping list
  /quit       Exit";

/// What the REPL should do after a line of input
#[derive(Debug, PartialEq, Eq)]
pub enum ReplOutcome {
    /// Print this text and keep going
    Output(String),
    /// Nothing to print
    Empty,
    Quit,
}

/// State for one interactive chat
pub struct ChatRepl {
    agent: BudgetBiteAgent,
    sessions: InMemorySessionService,
    transcript: Transcript,
    user_id: String,
}

impl ChatRepl {
    pub fn new(config: &AppConfig, user_id: &str) -> Self {
        Self {
            agent: config.agent(),
            sessions: config.session_service(),
            transcript: Transcript::new(),
            user_id: user_id.to_string(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Handle one line of user input
    pub fn handle_line(&mut self, line: &str) -> ReplOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ReplOutcome::Empty;
        }

        let Some(command) = trimmed.strip_prefix('/') else {
            return ReplOutcome::Output(self.send(trimmed));
        };

        match command {
            "quit" | "exit" | "q" => ReplOutcome::Quit,
            "help" | "?" => ReplOutcome::Output(REPL_HELP.to_string()),
            "history" => ReplOutcome::Output(self.render_history()),
            "reset" => {
                self.sessions.reset_session(&self.user_id);
                self.transcript.clear();
                ReplOutcome::Output("Session reset.".to_string())
            }
            other => match other.parse::<QuickAction>() {
                Ok(action) => {
                    let reply = self.send(action.prompt());
                    ReplOutcome::Output(format!("> {}\n{}", action.prompt(), reply))
                }
                Err(_) => ReplOutcome::Output(format!(
                    "Unknown command: /{} (type /help for commands)",
                    other
                )),
            },
        }
    }

    fn send(&mut self, message: &str) -> String {
        let text = self
            .agent
            .process_query(&mut self.sessions, &self.user_id, message);
        self.transcript.push_user(message);
        self.transcript.push_assistant(text.clone());
        text
    }

    fn render_history(&self) -> String {
        if self.transcript.is_empty() {
            return "No messages yet.".to_string();
        }
        self.transcript
            .messages()
            .iter()
            .map(|m| format!("[{}] {}", m.role, m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn cmd_chat(config: &AppConfig, user_id: &str) -> Result<()> {
    let mut repl = ChatRepl::new(config, user_id);
    let mut rl = DefaultEditor::new()?;

    println!("🤖 BudgetBite - AI Meal Planner");
    println!("   Ask about meals, budget, shopping... (/help for commands)");
    println!();

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match repl.handle_line(&line) {
                    ReplOutcome::Output(text) => {
                        println!("{}", text);
                        println!();
                    }
                    ReplOutcome::Empty => {}
                    ReplOutcome::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Type /quit to exit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(messages = repl.transcript().len(), "Chat ended");
    Ok(())
}

pub fn cmd_ask(config: &AppConfig, user_id: &str, message: &str, json: bool) -> Result<()> {
    let agent = config.agent();
    let mut sessions = config.session_service();
    let reply = agent.respond(&mut sessions, user_id, message);

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        println!("{}", reply.text);
    }

    Ok(())
}

pub fn cmd_classify(config: &AppConfig, message: &str) -> Result<()> {
    println!("{}", config.classifier().classify_intent(message));
    Ok(())
}
