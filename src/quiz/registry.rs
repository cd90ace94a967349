// src/quiz/registry.rs

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::time::{Instant, interval_at};
use uuid::Uuid;

use crate::{
    models::{answer::Answer, result::SubmissionResponse, session::TestView, user::UserInfo},
    questions::QuestionSource,
    quiz::{
        reporter::ResultReporter,
        session::{SessionError, TestSession},
    },
};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No session with this id (never opened, or already evicted).
    NotFound,
    AlreadySubmitted,
    /// The session exists but has not been submitted yet.
    NotSubmitted,
    /// Submitted, but the result is still being persisted.
    Pending,
    Poisoned,
}

impl From<SessionError> for RegistryError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::AlreadySubmitted => RegistryError::AlreadySubmitted,
        }
    }
}

enum TickAction {
    Continue,
    Submit,
    Stop,
}

struct Inner {
    sessions: Mutex<HashMap<Uuid, Arc<Mutex<TestSession>>>>,
    questions: Arc<dyn QuestionSource>,
    reporter: ResultReporter,
    duration_secs: u32,
    retention: Duration,
}

/// Open test sessions, each driven by its own one-second ticker task.
///
/// A session is kept for `retention` after submission so the result view
/// can be read, then dropped.
#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<Inner>,
}

impl SessionRegistry {
    pub fn new(
        questions: Arc<dyn QuestionSource>,
        reporter: ResultReporter,
        duration_secs: u32,
        retention: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                sessions: Mutex::new(HashMap::new()),
                questions,
                reporter,
                duration_secs,
                retention,
            }),
        }
    }

    /// Fetches the question set once and starts the clock.
    ///
    /// A failed fetch still opens the session; its view carries the loading message.
    pub async fn start(&self, user_info: UserInfo) -> Result<TestView, RegistryError> {
        let questions = match self.inner.questions.fetch().await {
            Ok(questions) => Some(questions),
            Err(e) => {
                tracing::error!("Error fetching questions: {}", e);
                None
            }
        };

        let id = Uuid::new_v4();
        let session = TestSession::new(id, user_info, questions, self.inner.duration_secs);
        let view = session.view();
        let session = Arc::new(Mutex::new(session));

        self.inner
            .sessions
            .lock()
            .map_err(|_| RegistryError::Poisoned)?
            .insert(id, session.clone());

        tracing::info!(
            "Opened session {} with {} questions",
            id,
            view.total_questions
        );
        self.spawn_ticker(id, session);

        Ok(view)
    }

    pub fn view(&self, id: Uuid) -> Result<TestView, RegistryError> {
        let session = self.get(id)?;
        let guard = session.lock().map_err(|_| RegistryError::Poisoned)?;
        Ok(guard.view())
    }

    pub fn record_answer(
        &self,
        id: Uuid,
        question_id: i64,
        option: String,
    ) -> Result<Vec<Answer>, RegistryError> {
        let session = self.get(id)?;
        let mut guard = session.lock().map_err(|_| RegistryError::Poisoned)?;
        guard.record_answer(question_id, option)?;
        Ok(guard.answers())
    }

    /// Manual submission. Fails if the clock (or an earlier call) got there first.
    pub async fn submit(&self, id: Uuid) -> Result<SubmissionResponse, RegistryError> {
        let session = self.get(id)?;
        self.finish(&session).await
    }

    pub fn result(&self, id: Uuid) -> Result<SubmissionResponse, RegistryError> {
        let session = self.get(id)?;
        let guard = session.lock().map_err(|_| RegistryError::Poisoned)?;
        if !guard.is_submitted() {
            return Err(RegistryError::NotSubmitted);
        }
        guard.submission_response().ok_or(RegistryError::Pending)
    }

    /// Opens a fresh session for the same candidate.
    ///
    /// Only a submitted attempt can be retried, so an abandoned session never
    /// reaches expiry and saves a second result.
    pub async fn retry(&self, id: Uuid) -> Result<TestView, RegistryError> {
        let user_info = {
            let session = self.get(id)?;
            let guard = session.lock().map_err(|_| RegistryError::Poisoned)?;
            if !guard.is_submitted() {
                return Err(RegistryError::NotSubmitted);
            }
            guard.user_info().clone()
        };
        self.start(user_info).await
    }

    pub fn active_sessions(&self) -> usize {
        self.inner.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    fn get(&self, id: Uuid) -> Result<Arc<Mutex<TestSession>>, RegistryError> {
        self.inner
            .sessions
            .lock()
            .map_err(|_| RegistryError::Poisoned)?
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    fn remove(&self, id: Uuid) {
        if let Ok(mut sessions) = self.inner.sessions.lock() {
            sessions.remove(&id);
        }
    }

    async fn finish(
        &self,
        session: &Arc<Mutex<TestSession>>,
    ) -> Result<SubmissionResponse, RegistryError> {
        let pending = {
            let mut guard = session.lock().map_err(|_| RegistryError::Poisoned)?;
            guard.begin_submission()?
        };

        let submission = self
            .inner
            .reporter
            .submit(
                pending.user_info,
                pending.score,
                pending.total_questions,
                pending.answers,
                pending.questions,
            )
            .await;

        let mut guard = session.lock().map_err(|_| RegistryError::Poisoned)?;
        guard.complete_submission(submission);
        guard.submission_response().ok_or(RegistryError::Pending)
    }

    fn spawn_ticker(&self, id: Uuid, session: Arc<Mutex<TestSession>>) {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK, TICK);
            loop {
                interval.tick().await;
                match tick_once(&session) {
                    TickAction::Continue => continue,
                    TickAction::Stop => break,
                    TickAction::Submit => {
                        tracing::info!("Time is up for session {}, submitting", id);
                        if let Err(e) = registry.finish(&session).await {
                            tracing::warn!("Expiry submission for {} skipped: {:?}", id, e);
                        }
                        break;
                    }
                }
            }

            tokio::time::sleep(registry.inner.retention).await;
            registry.remove(id);
            tracing::debug!("Evicted session {}", id);
        });
    }
}

fn tick_once(session: &Mutex<TestSession>) -> TickAction {
    let Ok(mut guard) = session.lock() else {
        return TickAction::Stop;
    };
    if guard.is_submitted() {
        TickAction::Stop
    } else if guard.tick() {
        TickAction::Submit
    } else {
        TickAction::Continue
    }
}
