//! One handler per API action.
//!
//! # Responsibility
//! - Decode raw inputs into core calls.
//! - Log one `api_request` event per call with action and status.
//!
//! # Invariants
//! - The store handles are injected once and reused; handlers hold no other
//!   state between calls.

use crate::envelope::ApiResponse;
use crate::quiz_request::QuizRequest;
use log::info;
use serde::Serialize;
use trivia_core::{
    parse_page, CategoryId, CategoryRepository, Question, QuestionId, QuestionRepository,
    QuestionSubmission, QuizService, RandomSource, ServiceError, ServiceResult, TriviaService,
};

/// `POST /quizzes` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRound {
    pub question: Option<Question>,
}

/// Request handlers over injected question/category stores.
pub struct TriviaApi<Q, C, R>
where
    Q: QuestionRepository + Clone,
    C: CategoryRepository,
    R: RandomSource,
{
    trivia: TriviaService<Q, C>,
    quiz: QuizService<Q, R>,
}

impl<Q, C, R> TriviaApi<Q, C, R>
where
    Q: QuestionRepository + Clone,
    C: CategoryRepository,
    R: RandomSource,
{
    pub fn new(questions: Q, categories: C, random: R) -> Self {
        Self {
            quiz: QuizService::with_random_source(questions.clone(), random),
            trivia: TriviaService::new(questions, categories),
        }
    }

    /// Overrides the page size used by every listing.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.trivia = self.trivia.with_page_size(page_size);
        self
    }

    /// `GET /categories`
    pub fn get_categories(&self) -> ApiResponse {
        respond("get_categories", self.trivia.list_categories())
    }

    /// `GET /questions?page=N`
    pub fn get_questions(&self, page: Option<&str>) -> ApiResponse {
        respond("get_questions", self.trivia.list_questions(parse_page(page)))
    }

    /// `DELETE /questions/{id}`
    pub fn delete_question(&self, id: QuestionId) -> ApiResponse {
        respond("delete_question", self.trivia.delete_question(id))
    }

    /// `POST /questions?page=N`: create or search depending on the body.
    ///
    /// A body that is not a JSON object of the expected shape is
    /// `Unprocessable`.
    pub fn post_questions(&self, body: &str, page: Option<&str>) -> ApiResponse {
        let result = serde_json::from_str::<QuestionSubmission>(body)
            .map_err(|err| ServiceError::Unprocessable(format!("malformed body: {err}")))
            .and_then(|submission| {
                self.trivia
                    .create_question(&submission, parse_page(page))
            });
        respond("post_questions", result)
    }

    /// `GET /categories/{id}/questions?page=N`
    pub fn get_category_questions(&self, category: CategoryId, page: Option<&str>) -> ApiResponse {
        respond(
            "get_category_questions",
            self.trivia
                .list_questions_by_category(category, parse_page(page)),
        )
    }

    /// `POST /quizzes`
    ///
    /// `{"question": null}` signals that the pool is exhausted.
    pub fn post_quizzes(&mut self, body: &str) -> ApiResponse {
        let result = QuizRequest::parse(body).and_then(|request| {
            let scope = request.scope()?;
            let question = self.quiz.next_question(&request.previous_ids(), scope)?;
            Ok(QuizRound { question })
        });
        respond("post_quizzes", result)
    }
}

fn respond<T: Serialize>(action: &'static str, result: ServiceResult<T>) -> ApiResponse {
    let response = match result {
        Ok(payload) => ApiResponse::ok(&payload),
        Err(err) => {
            info!(
                "event=api_request module=api action={action} status={} kind={} reason={}",
                crate::status_code(&err),
                err.kind(),
                err.reason()
            );
            return ApiResponse::error(&err);
        }
    };
    info!(
        "event=api_request module=api action={action} status={}",
        response.status
    );
    response
}
