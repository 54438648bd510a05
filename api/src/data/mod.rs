use crate::models::{
    AssessmentCategory, AssessmentQuestion, Benchmark, Comment, CommentTargetType, Job,
    Notification, Problem, Solution, Tool, User, UserPreview,
};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse seed file '{file}': {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    #[error("{collection} record '{id}' references unknown {target} '{reference}'")]
    DanglingReference {
        collection: &'static str,
        id: String,
        target: &'static str,
        reference: String,
    },
}

// ============================================================================
// RECORD STORE - Immutable seed data shared by every request
// ============================================================================
/// Loaded once before the listener binds and never mutated afterwards.
/// Collections keep seed file order, which list views treat as the
/// original store order (problems are seeded in trending order).
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub users: Vec<User>,
    pub problems: Vec<Problem>,
    pub solutions: Vec<Solution>,
    pub comments: Vec<Comment>,
    pub jobs: Vec<Job>,
    pub tools: Vec<Tool>,
    pub benchmarks: Vec<Benchmark>,
    pub notifications: Vec<Notification>,
    pub assessment_categories: Vec<AssessmentCategory>,
    pub assessment_questions: Vec<AssessmentQuestion>,
}

fn parse<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(raw).map_err(|source| SeedError::Parse { file, source })
}

macro_rules! seed {
    ($name:literal) => {
        parse($name, include_str!(concat!("seed/", $name)))?
    };
}

impl RecordStore {
    /// Parse the embedded seed files and check their cross references.
    pub fn load_seed() -> Result<Self, SeedError> {
        let store = Self {
            users: seed!("users.json"),
            problems: seed!("problems.json"),
            solutions: seed!("solutions.json"),
            comments: seed!("comments.json"),
            jobs: seed!("jobs.json"),
            tools: seed!("tools.json"),
            benchmarks: seed!("benchmarks.json"),
            notifications: seed!("notifications.json"),
            assessment_categories: seed!("assessment_categories.json"),
            assessment_questions: seed!("assessment_questions.json"),
        };
        store.check()?;
        Ok(store)
    }

    /// Verify id uniqueness and that every reference resolves.
    pub fn check(&self) -> Result<(), SeedError> {
        unique("users", self.users.iter().map(|u| u.id.as_str()))?;
        unique("usernames", self.users.iter().map(|u| u.username.as_str()))?;
        unique("problems", self.problems.iter().map(|p| p.id.as_str()))?;
        unique("solutions", self.solutions.iter().map(|s| s.id.as_str()))?;
        unique("comments", self.comments.iter().map(|c| c.id.as_str()))?;
        unique("jobs", self.jobs.iter().map(|j| j.id.as_str()))?;
        unique("tools", self.tools.iter().map(|t| t.id.as_str()))?;
        unique("tool slugs", self.tools.iter().map(|t| t.slug.as_str()))?;
        unique("benchmarks", self.benchmarks.iter().map(|b| b.id.as_str()))?;
        unique("notifications", self.notifications.iter().map(|n| n.id.as_str()))?;
        unique(
            "assessment categories",
            self.assessment_categories.iter().map(|c| c.id.as_str()),
        )?;
        unique(
            "assessment questions",
            self.assessment_questions.iter().map(|q| q.id.as_str()),
        )?;

        for problem in &self.problems {
            self.check_author("problems", &problem.id, &problem.author)?;
        }
        for solution in &self.solutions {
            self.check_author("solutions", &solution.id, &solution.author)?;
            if self.problem(&solution.problem_id).is_none() {
                return Err(dangling("solutions", &solution.id, "problem", &solution.problem_id));
            }
        }
        for comment in &self.comments {
            self.check_author("comments", &comment.id, &comment.author)?;
            let target_exists = match comment.target_type {
                CommentTargetType::Problem => self.problem(&comment.target_id).is_some(),
                CommentTargetType::Solution => self.solution(&comment.target_id).is_some(),
            };
            if !target_exists {
                return Err(dangling("comments", &comment.id, "target", &comment.target_id));
            }
        }
        for notification in &self.notifications {
            if self.user(&notification.user_id).is_none() {
                return Err(dangling(
                    "notifications",
                    &notification.id,
                    "user",
                    &notification.user_id,
                ));
            }
        }
        for question in &self.assessment_questions {
            if self.assessment_category(&question.category_id).is_none() {
                return Err(dangling(
                    "assessment questions",
                    &question.id,
                    "category",
                    &question.category_id,
                ));
            }
        }
        Ok(())
    }

    fn check_author(
        &self,
        collection: &'static str,
        id: &str,
        author: &UserPreview,
    ) -> Result<(), SeedError> {
        match self.user(&author.id) {
            Some(_) => Ok(()),
            None => Err(dangling(collection, id, "author", &author.id)),
        }
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
    }

    pub fn problem(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    pub fn solution(&self, id: &str) -> Option<&Solution> {
        self.solutions.iter().find(|s| s.id == id)
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn tool_by_slug(&self, slug: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.slug == slug)
    }

    pub fn assessment_category(&self, id: &str) -> Option<&AssessmentCategory> {
        self.assessment_categories.iter().find(|c| c.id == id)
    }

    /// Questions of a category in their display order.
    pub fn questions_for(&self, category_id: &str) -> Vec<&AssessmentQuestion> {
        let mut questions: Vec<&AssessmentQuestion> = self
            .assessment_questions
            .iter()
            .filter(|q| q.category_id == category_id)
            .collect();
        questions.sort_by_key(|q| q.order);
        questions
    }

    pub fn comments_for(&self, target: CommentTargetType, target_id: &str) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.target_type == target && c.target_id == target_id)
            .collect()
    }

    /// Distinct job companies, alphabetically.
    pub fn job_companies(&self) -> Vec<&str> {
        let mut companies: Vec<&str> = self.jobs.iter().map(|j| j.company.as_str()).collect();
        companies.sort_unstable();
        companies.dedup();
        companies
    }

    /// Distinct tool categories, alphabetically.
    pub fn tool_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .tools
            .iter()
            .flat_map(|t| t.categories.iter().map(String::as_str))
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}

fn unique<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn dangling(collection: &'static str, id: &str, target: &'static str, reference: &str) -> SeedError {
    SeedError::DanglingReference {
        collection,
        id: id.to_string(),
        target,
        reference: reference.to_string(),
    }
}
