//! In-memory question/category store.
//!
//! Mirrors the SQLite store's observable contract (id ordering, category
//! foreign key, `fold_case` search) so services can be exercised
//! without a database. Single-threaded; uses `RefCell` for mutation through
//! `&self`.

use crate::model::category::{Category, CategoryId};
use crate::model::question::{NewQuestion, Question, QuestionId};
use crate::model::quiz::QuizScope;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::question_repo::QuestionRepository;
use crate::repo::{fold_case, RepoError, RepoResult};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    categories: RefCell<BTreeMap<CategoryId, Category>>,
    questions: RefCell<BTreeMap<QuestionId, Question>>,
    last_id: Cell<QuestionId>,
    unavailable: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `categories`.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let store = Self::new();
        for category in categories {
            store.add_category(category);
        }
        store
    }

    pub fn add_category(&self, category: Category) {
        self.categories.borrow_mut().insert(category.id, category);
    }

    /// Makes every subsequent call fail with `RepoError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    pub fn question_count(&self) -> usize {
        self.questions.borrow().len()
    }

    fn ensure_available(&self) -> RepoResult<()> {
        if self.unavailable.get() {
            return Err(RepoError::Unavailable("in-memory store switched off".to_string()));
        }
        Ok(())
    }

    fn collect_questions(&self, keep: impl Fn(&Question) -> bool) -> RepoResult<Vec<Question>> {
        self.ensure_available()?;
        Ok(self
            .questions
            .borrow()
            .values()
            .filter(|question| keep(*question))
            .cloned()
            .collect())
    }
}

impl CategoryRepository for InMemoryStore {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        self.ensure_available()?;
        Ok(self.categories.borrow().values().cloned().collect())
    }

    fn category_exists(&self, id: CategoryId) -> RepoResult<bool> {
        self.ensure_available()?;
        Ok(self.categories.borrow().contains_key(&id))
    }
}

impl QuestionRepository for InMemoryStore {
    fn list_questions(&self) -> RepoResult<Vec<Question>> {
        self.collect_questions(|_| true)
    }

    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        self.ensure_available()?;
        Ok(self.questions.borrow().get(&id).cloned())
    }

    fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>> {
        let needle = fold_case(term);
        self.collect_questions(|question| fold_case(&question.question).contains(&needle))
    }

    fn list_questions_by_category(&self, category: CategoryId) -> RepoResult<Vec<Question>> {
        self.collect_questions(|question| question.category == category)
    }

    fn list_quiz_candidates(
        &self,
        scope: QuizScope,
        excluded: &BTreeSet<QuestionId>,
    ) -> RepoResult<Vec<Question>> {
        self.collect_questions(|question| {
            scope.admits(question.category) && !excluded.contains(&question.id)
        })
    }

    fn insert_question(&self, question: &NewQuestion) -> RepoResult<QuestionId> {
        self.ensure_available()?;
        question.validate()?;
        if !self.categories.borrow().contains_key(&question.category) {
            return Err(RepoError::InvalidData(format!(
                "question references unknown category {}",
                question.category
            )));
        }

        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        self.questions
            .borrow_mut()
            .insert(id, question.clone().into_question(id));
        Ok(id)
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        self.ensure_available()?;
        match self.questions.borrow_mut().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound(id)),
        }
    }
}
