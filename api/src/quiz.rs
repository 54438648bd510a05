//! Self-graded assessment attempts.
//!
//! `NotStarted -> InProgress(index) -> Completed(score)`, with `retake`
//! looping a completed attempt back to the first question.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
    pub passed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    NotStarted,
    InProgress { index: usize },
    Completed { score: QuizScore },
}

impl QuizState {
    fn name(&self) -> &'static str {
        match self {
            QuizState::NotStarted => "not started",
            QuizState::InProgress { .. } => "in progress",
            QuizState::Completed { .. } => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    Answer,
    Next,
    Previous,
    Submit,
    Retake,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizAction::Start => "start",
            QuizAction::Answer => "answer",
            QuizAction::Next => "go to the next question",
            QuizAction::Previous => "go to the previous question",
            QuizAction::Submit => "submit",
            QuizAction::Retake => "retake",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("cannot {action} while the assessment is {state}")]
    InvalidTransition {
        action: QuizAction,
        state: &'static str,
    },
    #[error("assessment has no questions")]
    NoQuestions,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("already at the last question")]
    AtLastQuestion,
}

/// Placeholder grading: an answer counts once its trimmed text is longer
/// than `min_answer_chars` characters.
pub fn score_answers(answers: &[String], min_answer_chars: usize, passing_score: u8) -> QuizScore {
    let total = answers.len();
    let answered = answers
        .iter()
        .filter(|answer| is_answered(answer, min_answer_chars))
        .count();
    let percent = if total == 0 {
        0
    } else {
        (answered as f64 / total as f64 * 100.0).round() as u8
    };

    QuizScore {
        answered,
        total,
        percent,
        passed: percent >= passing_score,
    }
}

fn is_answered(answer: &str, min_answer_chars: usize) -> bool {
    answer.trim().chars().count() > min_answer_chars
}

/// One user's attempt at one assessment category.
#[derive(Debug, Clone)]
pub struct Quiz {
    answers: Vec<String>,
    passing_score: u8,
    min_answer_chars: usize,
    state: QuizState,
    last_score: Option<QuizScore>,
    badge_earned: bool,
}

impl Quiz {
    pub fn new(question_count: usize, passing_score: u8, min_answer_chars: usize) -> Self {
        Self {
            answers: vec![String::new(); question_count],
            passing_score,
            min_answer_chars,
            state: QuizState::NotStarted,
            last_score: None,
            badge_earned: false,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Score of the most recent submission, kept across retakes.
    pub fn last_score(&self) -> Option<QuizScore> {
        self.last_score
    }

    /// True once any submission has passed.
    pub fn badge_earned(&self) -> bool {
        self.badge_earned
    }

    /// Answers currently long enough to count.
    pub fn answered_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|answer| is_answered(answer, self.min_answer_chars))
            .count()
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        match self.state {
            QuizState::NotStarted if self.answers.is_empty() => Err(QuizError::NoQuestions),
            QuizState::NotStarted => {
                self.state = QuizState::InProgress { index: 0 };
                Ok(())
            }
            state => Err(invalid(QuizAction::Start, state)),
        }
    }

    /// Record (or replace) the answer to the current question.
    pub fn answer(&mut self, text: impl Into<String>) -> Result<(), QuizError> {
        let index = self.current_index(QuizAction::Answer)?;
        self.answers[index] = text.into();
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), QuizError> {
        let index = self.current_index(QuizAction::Next)?;
        if index + 1 >= self.answers.len() {
            return Err(QuizError::AtLastQuestion);
        }
        self.state = QuizState::InProgress { index: index + 1 };
        Ok(())
    }

    pub fn previous(&mut self) -> Result<(), QuizError> {
        let index = self.current_index(QuizAction::Previous)?;
        if index == 0 {
            return Err(QuizError::AtFirstQuestion);
        }
        self.state = QuizState::InProgress { index: index - 1 };
        Ok(())
    }

    /// Grade the attempt. Allowed from any question.
    pub fn submit(&mut self) -> Result<QuizScore, QuizError> {
        self.current_index(QuizAction::Submit)?;
        let score = score_answers(&self.answers, self.min_answer_chars, self.passing_score);
        self.state = QuizState::Completed { score };
        self.last_score = Some(score);
        self.badge_earned |= score.passed;
        Ok(score)
    }

    pub fn retake(&mut self) -> Result<(), QuizError> {
        match self.state {
            QuizState::Completed { .. } => {
                self.answers.iter_mut().for_each(String::clear);
                self.state = QuizState::InProgress { index: 0 };
                Ok(())
            }
            state => Err(invalid(QuizAction::Retake, state)),
        }
    }

    fn current_index(&self, action: QuizAction) -> Result<usize, QuizError> {
        match self.state {
            QuizState::InProgress { index } => Ok(index),
            state => Err(invalid(action, state)),
        }
    }
}

fn invalid(action: QuizAction, state: QuizState) -> QuizError {
    QuizError::InvalidTransition {
        action,
        state: state.name(),
    }
}
