//! In-memory per-user session state
//!
//! Sessions are created lazily on first lookup and live as long as the
//! owning [`InMemorySessionService`]. There is no eviction or expiry.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{MealPlan, UserProfile};

/// Per-user mutable state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub profile: UserProfile,
    pub current_plan: Option<MealPlan>,
}

impl Session {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            current_plan: None,
        }
    }
}

/// Map of user id → session
#[derive(Debug, Default)]
pub struct InMemorySessionService {
    sessions: HashMap<String, Session>,
    default_profile: UserProfile,
}

impl InMemorySessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions created by this service start with `profile`
    pub fn with_default_profile(profile: UserProfile) -> Self {
        Self {
            sessions: HashMap::new(),
            default_profile: profile,
        }
    }

    pub fn default_profile(&self) -> &UserProfile {
        &self.default_profile
    }

    /// Get the session for `user_id`, creating it if absent
    pub fn get_session(&mut self, user_id: &str) -> &mut Session {
        let default_profile = &self.default_profile;
        self.sessions
            .entry(user_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(user = %user_id, "Created session");
                Session::new(default_profile.clone())
            })
    }

    /// Look up a session without creating one
    pub fn peek(&self, user_id: &str) -> Option<&Session> {
        self.sessions.get(user_id)
    }

    /// Drop a user's session, returns whether one existed
    pub fn reset_session(&mut self, user_id: &str) -> bool {
        self.sessions.remove(user_id).is_some()
    }

    pub fn user_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sessions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
