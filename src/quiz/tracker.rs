// src/quiz/tracker.rs

use crate::models::answer::Answer;

/// Selected options for one session, at most one per question.
///
/// Options are not checked against the question's declared options.
#[derive(Debug, Clone, Default)]
pub struct AnswerTracker {
    answers: Vec<Answer>,
}

impl AnswerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `option` for `question_id`, replacing any earlier selection.
    /// The replaced answer moves to the end of the list.
    pub fn record_answer(&mut self, question_id: i64, option: impl Into<String>) {
        self.answers.retain(|a| a.question_id != question_id);
        self.answers.push(Answer::new(question_id, option));
    }

    pub fn all_answers(&self) -> Vec<Answer> {
        self.answers.clone()
    }

    pub fn selected(&self, question_id: i64) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.answer.as_str())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
