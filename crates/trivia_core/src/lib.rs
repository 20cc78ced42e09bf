//! Core logic of the trivia question bank.
//! Pagination, search, category queries and quiz selection live here; the
//! transport layer only translates results.

pub mod db;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{category_map, Category, CategoryId};
pub use model::question::{NewQuestion, Question, QuestionId, QuestionValidationError};
pub use model::quiz::QuizScope;
pub use pagination::{paginate, parse_page, QUESTIONS_PER_PAGE};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::memory_repo::InMemoryStore;
pub use repo::question_repo::{QuestionRepository, SqliteQuestionRepository};
pub use repo::{RepoError, RepoResult};
pub use service::quiz_service::{QuizService, RandomSource};
pub use service::trivia_service::{
    CategoryListing, CategoryQuestions, CreateOutcome, CreatedQuestion, DeletedQuestion,
    QuestionListing, QuestionSubmission, SearchResults, TriviaService,
};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
