use crate::quiz::Quiz;
use dashmap::DashMap;
use std::sync::Arc;

/// One quiz attempt per (user, assessment category).
#[derive(Debug, Clone, Default)]
pub struct QuizAttempts {
    by_user: Arc<DashMap<(String, String), Quiz>>,
}

impl QuizAttempts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the user's attempt, creating it with `init` first.
    pub fn with_attempt<R>(
        &self,
        user_id: &str,
        category_id: &str,
        init: impl FnOnce() -> Quiz,
        f: impl FnOnce(&mut Quiz) -> R,
    ) -> R {
        let key = (user_id.to_string(), category_id.to_string());
        let mut quiz = self.by_user.entry(key).or_insert_with(init);
        f(quiz.value_mut())
    }

    pub fn get(&self, user_id: &str, category_id: &str) -> Option<Quiz> {
        let key = (user_id.to_string(), category_id.to_string());
        self.by_user.get(&key).map(|quiz| quiz.clone())
    }
}
