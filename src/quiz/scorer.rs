// src/quiz/scorer.rs

use std::collections::{HashMap, HashSet};

use crate::models::{answer::Answer, question::Question, result::QuestionReview};

/// Counts answers whose option equals the matching question's key.
///
/// Answers for unknown question ids count for nothing, and a question is
/// counted at most once even if the answer list repeats it.
pub fn score(questions: &[Question], answers: &[Answer]) -> u32 {
    let given: HashSet<(i64, &str)> = answers
        .iter()
        .map(|a| (a.question_id, a.answer.as_str()))
        .collect();

    questions
        .iter()
        .filter(|q| given.contains(&(q.id, q.answer.as_str())))
        .count() as u32
}

/// Score as a percentage of `total`; 0 for an empty question set.
pub fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(total) * 100.0
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}", value)
}

/// One line per question, in question order.
pub fn review(questions: &[Question], answers: &[Answer]) -> Vec<QuestionReview> {
    let given: HashMap<i64, &str> = answers
        .iter()
        .map(|a| (a.question_id, a.answer.as_str()))
        .collect();

    questions
        .iter()
        .enumerate()
        .map(|(index, q)| {
            let your_answer = given.get(&q.id).map(|s| s.to_string());
            let is_correct = your_answer.as_deref() == Some(q.answer.as_str());
            QuestionReview {
                number: index + 1,
                question_id: q.id,
                question: q.question.clone(),
                your_answer,
                correct_answer: q.answer.clone(),
                is_correct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, options: &[&str], answer: &str) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer: answer.to_string(),
            image: None,
        }
    }

    fn sample_set() -> Vec<Question> {
        vec![
            question(1, &["A", "B"], "A"),
            question(2, &["A", "B", "C"], "C"),
            question(3, &["yes", "no"], "no"),
        ]
    }

    #[test]
    fn single_correct_answer_scores_full_marks() {
        let questions = vec![question(1, &["A", "B"], "A")];
        let answers = vec![Answer::new(1, "A")];

        let s = score(&questions, &answers);
        assert_eq!(s, 1);
        assert_eq!(format_percentage(percentage(s, questions.len() as u32)), "100.00");
    }

    #[test]
    fn single_wrong_answer_scores_zero() {
        let questions = vec![question(1, &["A", "B"], "A")];
        let answers = vec![Answer::new(1, "B")];

        let s = score(&questions, &answers);
        assert_eq!(s, 0);
        assert_eq!(format_percentage(percentage(s, 1)), "0.00");
    }

    #[test]
    fn unknown_question_ids_contribute_nothing() {
        let answers = vec![Answer::new(42, "A"), Answer::new(1, "A")];
        assert_eq!(score(&sample_set(), &answers), 1);
    }

    #[test]
    fn empty_answers_score_zero() {
        assert_eq!(score(&sample_set(), &[]), 0);
        assert_eq!(score(&[], &[]), 0);
    }

    #[test]
    fn order_of_answers_does_not_matter() {
        let answers = vec![
            Answer::new(3, "no"),
            Answer::new(1, "B"),
            Answer::new(2, "C"),
            Answer::new(9, "C"),
        ];
        let expected = score(&sample_set(), &answers);
        assert_eq!(expected, 2);

        let mut rotated = answers.clone();
        for _ in 0..answers.len() {
            rotated.rotate_left(1);
            assert_eq!(score(&sample_set(), &rotated), expected);
        }
        let mut reversed = answers;
        reversed.reverse();
        assert_eq!(score(&sample_set(), &reversed), expected);
    }

    #[test]
    fn never_exceeds_question_count() {
        let questions = sample_set();
        let answers = vec![
            Answer::new(1, "A"),
            Answer::new(1, "A"),
            Answer::new(2, "C"),
            Answer::new(3, "no"),
            Answer::new(4, "A"),
            Answer::new(5, "A"),
        ];
        assert!(score(&questions, &answers) as usize <= questions.len());
    }

    #[test]
    fn percentage_of_empty_set_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(format_percentage(percentage(2, 3)), "66.67");
    }

    #[test]
    fn review_marks_each_question() {
        let answers = vec![Answer::new(1, "A"), Answer::new(2, "B")];
        let lines = review(&sample_set(), &answers);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].is_correct);
        assert!(!lines[1].is_correct);
        assert_eq!(lines[1].your_answer.as_deref(), Some("B"));
        assert_eq!(lines[2].your_answer, None);
        assert_eq!(lines[2].correct_answer, "no");
        assert_eq!(lines[2].number, 3);
    }
}
