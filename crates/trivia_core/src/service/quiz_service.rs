//! Quiz round selection.
//!
//! # Responsibility
//! - Pick one question the player has not seen yet, uniformly at random.
//!
//! # Invariants
//! - A question id in the exclusion set is never returned.
//! - An exhausted candidate set is `Ok(None)`, not an error.

use crate::model::question::{Question, QuestionId};
use crate::model::quiz::QuizScope;
use crate::repo::question_repo::QuestionRepository;
use crate::service::{collapse, ServiceError, ServiceResult};
use log::debug;
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use std::collections::BTreeSet;

/// Uniform index source used for quiz picks.
pub trait RandomSource {
    /// Returns an index in `[0, len)`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl RandomSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Selects the next quiz question from a question store.
pub struct QuizService<Q: QuestionRepository, R: RandomSource> {
    questions: Q,
    random: R,
}

impl<Q: QuestionRepository> QuizService<Q, ThreadRng> {
    /// Creates a selector backed by the thread-local RNG.
    pub fn new(questions: Q) -> Self {
        Self::with_random_source(questions, rand::thread_rng())
    }
}

impl<Q: QuestionRepository, R: RandomSource> QuizService<Q, R> {
    pub fn with_random_source(questions: Q, random: R) -> Self {
        Self { questions, random }
    }

    /// Returns a random question in `scope` that is not in `previous`.
    ///
    /// # Errors
    /// - `NotFound` when `scope` is absent or the store fails.
    pub fn next_question(
        &mut self,
        previous: &BTreeSet<QuestionId>,
        scope: Option<QuizScope>,
    ) -> ServiceResult<Option<Question>> {
        let Some(scope) = scope else {
            return Err(ServiceError::NotFound(
                "quiz category is required".to_string(),
            ));
        };

        let mut candidates = self
            .questions
            .list_quiz_candidates(scope, previous)
            .map_err(collapse("quiz_next", ServiceError::NotFound))?;

        debug!(
            "event=quiz_next module=service status=ok scope={scope:?} excluded={} candidates={}",
            previous.len(),
            candidates.len()
        );

        if candidates.is_empty() {
            return Ok(None);
        }

        let index = self.random.pick_index(candidates.len());
        debug_assert!(
            index < candidates.len(),
            "random source returned {index} for {} candidates",
            candidates.len()
        );
        Ok(Some(candidates.swap_remove(index)))
    }
}
