use std::{sync::Arc, time::Duration};

use axum::extract::FromRef;

use crate::{
    config::Config,
    error::AppError,
    questions::QuestionSource,
    quiz::{ResultReporter, SessionRegistry},
    store::{EnquiryStore, ResultStore},
    utils::hash::hash_password,
};

/// The one administrator allowed into `/api/admin`. Password kept as an Argon2 hash.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password_hash: String,
}

impl AdminAccount {
    pub fn new(username: &str, password: &str) -> Result<Self, AppError> {
        Ok(Self {
            username: username.to_owned(),
            password_hash: hash_password(password)?,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionRegistry,
    pub results: Arc<dyn ResultStore>,
    pub enquiries: Arc<dyn EnquiryStore>,
    pub admin: Option<AdminAccount>,
}

impl AppState {
    /// Wires the session registry to the given collaborators.
    pub fn new(
        config: Config,
        results: Arc<dyn ResultStore>,
        enquiries: Arc<dyn EnquiryStore>,
        questions: Arc<dyn QuestionSource>,
        admin: Option<AdminAccount>,
    ) -> Self {
        let sessions = SessionRegistry::new(
            questions,
            ResultReporter::new(results.clone()),
            config.test_duration_secs,
            Duration::from_secs(config.session_retention_secs),
        );
        Self {
            config,
            sessions,
            results,
            enquiries,
            admin,
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for SessionRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
