// src/quiz/session.rs

use uuid::Uuid;

use crate::{
    models::{
        answer::Answer,
        question::Question,
        result::{ResultView, SubmissionResponse},
        session::{QUESTIONS_LOADING_MESSAGE, SessionStatus, TestView},
        user::UserInfo,
    },
    quiz::{
        reporter::Submission,
        scorer,
        timer::{Tick, Timer},
        tracker::AnswerTracker,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    AlreadySubmitted,
}

/// Everything `ResultReporter::submit` needs, captured when the guard flips.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub user_info: UserInfo,
    pub score: u32,
    pub total_questions: u32,
    pub answers: Vec<Answer>,
    pub questions: Vec<Question>,
}

/// One candidate's pass through the test.
#[derive(Debug)]
pub struct TestSession {
    id: Uuid,
    user_info: UserInfo,
    questions: Vec<Question>,
    tracker: AnswerTracker,
    timer: Timer,
    submitted: bool,
    outcome: Option<Submission>,
}

impl TestSession {
    /// `questions` is `None` when the question set could not be fetched.
    /// Either way, a session without questions keeps showing the loading message.
    pub fn new(
        id: Uuid,
        user_info: UserInfo,
        questions: Option<Vec<Question>>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id,
            user_info,
            questions: questions.unwrap_or_default(),
            tracker: AnswerTracker::new(),
            timer: Timer::new(duration_secs),
            submitted: false,
            outcome: None,
        }
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn record_answer(&mut self, question_id: i64, option: String) -> Result<(), SessionError> {
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        self.tracker.record_answer(question_id, option);
        Ok(())
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.tracker.all_answers()
    }

    /// Advances the timer by one second. Returns true when the expiry
    /// submission should fire; never true after a manual submission.
    pub fn tick(&mut self) -> bool {
        if self.submitted {
            return false;
        }
        matches!(self.timer.tick(), Tick::Expired)
    }

    /// Flips the one-shot guard. Whichever path calls this first wins.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SessionError> {
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        self.submitted = true;

        let answers = self.tracker.all_answers();
        Ok(PendingSubmission {
            user_info: self.user_info.clone(),
            score: scorer::score(&self.questions, &answers),
            total_questions: self.questions.len() as u32,
            answers,
            questions: self.questions.clone(),
        })
    }

    pub fn complete_submission(&mut self, submission: Submission) {
        self.outcome = Some(submission);
    }

    pub fn view(&self) -> TestView {
        let status = if self.submitted {
            SessionStatus::Submitted
        } else {
            SessionStatus::Running
        };
        let questions = self
            .questions
            .iter()
            .map(|q| q.to_public(self.tracker.selected(q.id).map(str::to_string)))
            .collect();

        TestView {
            session_id: self.id,
            candidate: self.user_info.name.clone(),
            status,
            time_left_secs: self.timer.remaining(),
            time_left: self.timer.display(),
            total_questions: self.questions.len(),
            questions,
            message: self.questions.is_empty().then(|| QUESTIONS_LOADING_MESSAGE.to_string()),
        }
    }

    pub fn submission_response(&self) -> Option<SubmissionResponse> {
        self.outcome.as_ref().map(|s| SubmissionResponse {
            result: ResultView::from(&s.result),
            persisted: s.persisted,
            notice: s.notice.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::result::TestResult;

    fn user() -> UserInfo {
        UserInfo {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            phone: "555".to_string(),
            fathers_name: "Arun".to_string(),
            batch_time: "5 PM".to_string(),
        }
    }

    fn questions() -> Vec<Question> {
        vec![Question {
            id: 1,
            question: "Pick A".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            answer: "A".to_string(),
            image: None,
        }]
    }

    fn finish(session: &mut TestSession, pending: PendingSubmission) {
        session.complete_submission(Submission {
            result: TestResult {
                user_info: pending.user_info,
                score: pending.score,
                total_questions: pending.total_questions,
                answers: pending.answers,
                questions: pending.questions,
            },
            persisted: true,
            notice: None,
        });
    }

    #[test]
    fn manual_submission_blocks_expiry_submission() {
        let mut session = TestSession::new(Uuid::new_v4(), user(), Some(questions()), 2);
        session.record_answer(1, "A".to_string()).unwrap();

        let pending = session.begin_submission().unwrap();
        assert_eq!(pending.score, 1);
        assert_eq!(pending.total_questions, 1);

        assert!(!session.tick());
        assert!(!session.tick());
        assert!(!session.tick());
        assert_eq!(session.begin_submission().unwrap_err(), SessionError::AlreadySubmitted);
    }

    #[test]
    fn expiry_fires_once_then_guard_holds() {
        let mut session = TestSession::new(Uuid::new_v4(), user(), Some(questions()), 2);
        assert!(!session.tick());
        assert!(session.tick());
        assert!(!session.tick());

        assert!(session.begin_submission().is_ok());
        assert!(session.begin_submission().is_err());
    }

    #[test]
    fn answers_are_frozen_after_submission() {
        let mut session = TestSession::new(Uuid::new_v4(), user(), Some(questions()), 10);
        session.begin_submission().unwrap();
        assert_eq!(
            session.record_answer(1, "B".to_string()),
            Err(SessionError::AlreadySubmitted)
        );
        assert!(session.answers().is_empty());
    }

    #[test]
    fn view_hides_answer_key_and_shows_selection() {
        let mut session = TestSession::new(Uuid::new_v4(), user(), Some(questions()), 300);
        session.record_answer(1, "B".to_string()).unwrap();

        let view = session.view();
        assert_eq!(view.status, SessionStatus::Running);
        assert_eq!(view.time_left, "5:00");
        assert_eq!(view.questions[0].selected.as_deref(), Some("B"));
        assert!(view.message.is_none());

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["questions"][0].get("answer").is_none());
    }

    #[test]
    fn unavailable_questions_show_loading_message() {
        let mut session = TestSession::new(Uuid::new_v4(), user(), None, 300);
        let view = session.view();
        assert_eq!(view.total_questions, 0);
        assert_eq!(view.message.as_deref(), Some(QUESTIONS_LOADING_MESSAGE));

        let pending = session.begin_submission().unwrap();
        assert_eq!(pending.score, 0);
        assert_eq!(pending.total_questions, 0);
    }

    #[test]
    fn empty_question_set_also_shows_loading_message() {
        let session = TestSession::new(Uuid::new_v4(), user(), Some(Vec::new()), 300);
        let view = session.view();
        assert_eq!(view.message.as_deref(), Some(QUESTIONS_LOADING_MESSAGE));
    }

    #[test]
    fn submission_response_available_after_completion() {
        let mut session = TestSession::new(Uuid::new_v4(), user(), Some(questions()), 300);
        session.record_answer(1, "A".to_string()).unwrap();
        assert!(session.submission_response().is_none());

        let pending = session.begin_submission().unwrap();
        finish(&mut session, pending);

        let response = session.submission_response().unwrap();
        assert_eq!(response.result.score, 1);
        assert_eq!(response.result.percentage, "100.00");
        assert!(response.result.review[0].is_correct);
    }
}
