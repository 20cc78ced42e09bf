//! Question bank orchestration.
//!
//! # Responsibility
//! - Answer list/search/create/delete/category operations.
//! - Own request validation and error classification.
//!
//! # Invariants
//! - Every listing is ordered by question id and paginated relative to the
//!   filtered set.
//! - Failures are exactly one `ServiceError` kind; there is no partial
//!   success.

use crate::model::category::{category_map, Category, CategoryId};
use crate::model::question::{NewQuestion, Question, QuestionId};
use crate::pagination::{paginate, QUESTIONS_PER_PAGE};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::question_repo::QuestionRepository;
use crate::service::{collapse, ServiceError, ServiceResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `GET /categories` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub categories: BTreeMap<CategoryId, String>,
    pub total_categories: usize,
}

/// `GET /questions` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
    pub current_category: Option<CategoryId>,
}

/// Payload returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedQuestion {
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: Option<CategoryId>,
}

/// Payload returned after a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedQuestion {
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Payload of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

/// `GET /categories/{id}/questions` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: CategoryId,
}

/// The create endpoint doubles as search; this is what it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CreateOutcome {
    Created(CreatedQuestion),
    Searched(SearchResults),
}

/// Body of `POST /questions`. Every field is optional at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestionSubmission {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<i64>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl QuestionSubmission {
    /// Builds a search-only submission.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Builds a create submission with all content fields set.
    pub fn create(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category),
            difficulty: Some(difficulty),
            search_term: None,
        }
    }

    /// Whether any of the four content fields is provided.
    ///
    /// Empty strings and zero numbers count as absent. Whitespace-only text
    /// counts as provided and is rejected later by `NewQuestion::validate`.
    pub fn has_content(&self) -> bool {
        provided_text(&self.question).is_some()
            || provided_text(&self.answer).is_some()
            || provided_number(self.category).is_some()
            || provided_number(self.difficulty).is_some()
    }

    fn to_new_question(&self) -> ServiceResult<NewQuestion> {
        match (
            provided_text(&self.question),
            provided_text(&self.answer),
            provided_number(self.category),
            provided_number(self.difficulty),
        ) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => {
                let new_question = NewQuestion::new(question, answer, category, difficulty);
                new_question
                    .validate()
                    .map_err(|err| ServiceError::Unprocessable(err.to_string()))?;
                Ok(new_question)
            }
            _ => Err(ServiceError::Unprocessable(
                "question, answer, category and difficulty are all required".to_string(),
            )),
        }
    }
}

fn provided_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn provided_number(value: Option<i64>) -> Option<i64> {
    value.filter(|number| *number != 0)
}

/// Query orchestrator over question and category stores.
pub struct TriviaService<Q: QuestionRepository, C: CategoryRepository> {
    questions: Q,
    categories: C,
    page_size: usize,
}

impl<Q: QuestionRepository, C: CategoryRepository> TriviaService<Q, C> {
    /// Creates a service paginating by [`QUESTIONS_PER_PAGE`].
    pub fn new(questions: Q, categories: C) -> Self {
        Self {
            questions,
            categories,
            page_size: QUESTIONS_PER_PAGE,
        }
    }

    /// Overrides the page size. Zero is treated as the default.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = if page_size == 0 {
            QUESTIONS_PER_PAGE
        } else {
            page_size
        };
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Lists every category as an `id -> type` mapping.
    ///
    /// Fails with `NotFound` when no category exists.
    pub fn list_categories(&self) -> ServiceResult<CategoryListing> {
        let categories = self
            .categories
            .list_categories()
            .map_err(collapse("categories_list", ServiceError::NotFound))?;

        if categories.is_empty() {
            return Err(ServiceError::NotFound("no categories".to_string()));
        }

        Ok(CategoryListing {
            total_categories: categories.len(),
            categories: category_map(&categories),
        })
    }

    /// Lists one page of the whole bank.
    ///
    /// Fails with `NotFound` when the page is empty, which includes an empty
    /// bank and out-of-range pages.
    pub fn list_questions(&self, page: u32) -> ServiceResult<QuestionListing> {
        let all = self
            .questions
            .list_questions()
            .map_err(collapse("questions_list", ServiceError::NotFound))?;
        let page_items = paginate(&all, page, self.page_size);
        if page_items.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "page {page} is empty ({} questions)",
                all.len()
            )));
        }

        let categories = self
            .categories
            .list_categories()
            .map_err(collapse("questions_list", ServiceError::NotFound))?;

        Ok(QuestionListing {
            questions: page_items.to_vec(),
            total_questions: all.len(),
            categories: category_map(&categories),
            current_category: None,
        })
    }

    /// Deletes one question and returns the first page of what remains.
    ///
    /// A missing id and a failed delete are both `Unprocessable`.
    pub fn delete_question(&self, id: QuestionId) -> ServiceResult<DeletedQuestion> {
        let unprocessable = || collapse("question_delete", ServiceError::Unprocessable);

        if self
            .questions
            .get_question(id)
            .map_err(unprocessable())?
            .is_none()
        {
            return Err(ServiceError::Unprocessable(format!(
                "question {id} does not exist"
            )));
        }
        self.questions.delete_question(id).map_err(unprocessable())?;
        info!("event=question_delete module=service status=ok question_id={id}");

        let remaining = self.questions.list_questions().map_err(unprocessable())?;
        let categories = self
            .categories
            .list_categories()
            .map_err(unprocessable())?;

        Ok(DeletedQuestion {
            deleted: id,
            questions: paginate(&remaining, 1, self.page_size).to_vec(),
            total_questions: remaining.len(),
            categories,
            current_category: None,
        })
    }

    /// Handles `POST /questions`: search when no content field is provided,
    /// create otherwise.
    ///
    /// `page` only applies to search results; create always returns page 1.
    pub fn create_question(
        &self,
        submission: &QuestionSubmission,
        page: u32,
    ) -> ServiceResult<CreateOutcome> {
        if submission.has_content() {
            self.insert_submission(submission)
                .map(CreateOutcome::Created)
        } else {
            self.search_questions(submission.search_term.as_deref(), page)
                .map(CreateOutcome::Searched)
        }
    }

    /// Case-insensitive substring search over question text.
    ///
    /// Fails with `Unprocessable` when `term` is absent or empty.
    pub fn search_questions(&self, term: Option<&str>, page: u32) -> ServiceResult<SearchResults> {
        let Some(term) = term.filter(|term| !term.is_empty()) else {
            return Err(ServiceError::Unprocessable(
                "search term is required".to_string(),
            ));
        };

        let matches = self
            .questions
            .search_questions(term)
            .map_err(collapse("question_search", ServiceError::Unprocessable))?;
        debug!(
            "event=question_search module=service status=ok matches={} page={page}",
            matches.len()
        );

        Ok(SearchResults {
            questions: paginate(&matches, page, self.page_size).to_vec(),
            total_questions: matches.len(),
            current_category: None,
        })
    }

    /// Lists one page of questions belonging to `category`.
    ///
    /// Fails with `NotFound` for an unknown category or any store failure.
    /// An empty page is not an error here.
    pub fn list_questions_by_category(
        &self,
        category: CategoryId,
        page: u32,
    ) -> ServiceResult<CategoryQuestions> {
        let not_found = || collapse("category_questions", ServiceError::NotFound);

        if !self
            .categories
            .category_exists(category)
            .map_err(not_found())?
        {
            return Err(ServiceError::NotFound(format!(
                "category {category} does not exist"
            )));
        }

        let selection = self
            .questions
            .list_questions_by_category(category)
            .map_err(not_found())?;

        Ok(CategoryQuestions {
            questions: paginate(&selection, page, self.page_size).to_vec(),
            total_questions: selection.len(),
            current_category: category,
        })
    }

    fn insert_submission(&self, submission: &QuestionSubmission) -> ServiceResult<CreatedQuestion> {
        let unprocessable = || collapse("question_create", ServiceError::Unprocessable);
        let new_question = submission.to_new_question()?;

        if !self
            .categories
            .category_exists(new_question.category)
            .map_err(unprocessable())?
        {
            return Err(ServiceError::Unprocessable(format!(
                "category {} does not exist",
                new_question.category
            )));
        }

        let created = self
            .questions
            .insert_question(&new_question)
            .map_err(unprocessable())?;
        info!("event=question_create module=service status=ok question_id={created}");

        let all = self.questions.list_questions().map_err(unprocessable())?;
        Ok(CreatedQuestion {
            created,
            questions: paginate(&all, 1, self.page_size).to_vec(),
            total_questions: all.len(),
        })
    }
}
