pub mod assessment;
pub mod benchmark;
pub mod comment;
pub mod job;
pub mod notification;
pub mod problem;
pub mod solution;
pub mod tool;
pub mod user;

pub use assessment::{AssessmentBadge, AssessmentCategory, AssessmentQuestion};
pub use benchmark::Benchmark;
pub use comment::{Comment, CommentNode, CommentTargetType};
pub use job::{ExperienceLevel, Job, JobSalary, JobType, SalaryPeriod, WorkLocation};
pub use notification::{Notification, NotificationType};
pub use problem::{
    Category, CompanyStage, Engagement, GtmMotion, MetricValue, Problem, ProblemConstraints,
    ProblemContext, ProblemMetrics, ProblemStatus,
};
pub use solution::{Difficulty, Implementation, MetricComparison, Solution, SolutionResults};
pub use tool::{Tool, ToolPricing, ToolStats};
pub use user::{Badge, Role, Social, User, UserPreview, UserStats};

/// Text fields a free-text search looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}
