//! Question store accessor and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/delete and filtered reads over `questions`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every list query is ordered by `id ASC`.
//! - Search folds case with `repo::fold_case` (Unicode aware) and matches
//!   the term literally.
//! - Connections must come from `db::open_db*`, which registers the
//!   `fold_case` SQL function.
//! - Reads reject invalid persisted rows instead of masking them.

use crate::model::category::CategoryId;
use crate::model::question::{NewQuestion, Question, QuestionId};
use crate::model::quiz::QuizScope;
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Params, Row};
use std::collections::BTreeSet;

const QUESTION_SELECT_SQL: &str = "SELECT
    id,
    question,
    answer,
    category,
    difficulty
FROM questions";

/// Repository interface for question reads and writes.
pub trait QuestionRepository {
    /// Lists the whole bank ordered by id.
    fn list_questions(&self) -> RepoResult<Vec<Question>>;
    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>>;
    /// Case-insensitive substring match on question text, ordered by id.
    fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>>;
    fn list_questions_by_category(&self, category: CategoryId) -> RepoResult<Vec<Question>>;
    /// Questions in `scope` whose id is not in `excluded`, ordered by id.
    fn list_quiz_candidates(
        &self,
        scope: QuizScope,
        excluded: &BTreeSet<QuestionId>,
    ) -> RepoResult<Vec<Question>>;
    /// Persists a validated question and returns its assigned id.
    fn insert_question(&self, question: &NewQuestion) -> RepoResult<QuestionId>;
    /// Deletes one question; `NotFound` when no row matched.
    fn delete_question(&self, id: QuestionId) -> RepoResult<()>;
}

impl<T: QuestionRepository + ?Sized> QuestionRepository for &T {
    fn list_questions(&self) -> RepoResult<Vec<Question>> {
        (**self).list_questions()
    }

    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        (**self).get_question(id)
    }

    fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>> {
        (**self).search_questions(term)
    }

    fn list_questions_by_category(&self, category: CategoryId) -> RepoResult<Vec<Question>> {
        (**self).list_questions_by_category(category)
    }

    fn list_quiz_candidates(
        &self,
        scope: QuizScope,
        excluded: &BTreeSet<QuestionId>,
    ) -> RepoResult<Vec<Question>> {
        (**self).list_quiz_candidates(scope, excluded)
    }

    fn insert_question(&self, question: &NewQuestion) -> RepoResult<QuestionId> {
        (**self).insert_question(question)
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        (**self).delete_question(id)
    }
}

/// SQLite-backed question store.
#[derive(Clone, Copy)]
pub struct SqliteQuestionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_questions<P: Params>(&self, sql: &str, params: P) -> RepoResult<Vec<Question>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut questions = Vec::new();

        while let Some(row) = rows.next()? {
            questions.push(parse_question_row(row)?);
        }

        Ok(questions)
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    fn list_questions(&self) -> RepoResult<Vec<Question>> {
        self.query_questions(&format!("{QUESTION_SELECT_SQL} ORDER BY id ASC;"), [])
    }

    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        let mut found =
            self.query_questions(&format!("{QUESTION_SELECT_SQL} WHERE id = ?1;"), [id])?;
        Ok(found.pop())
    }

    fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>> {
        self.query_questions(
            &format!(
                "{QUESTION_SELECT_SQL} WHERE instr(fold_case(question), fold_case(?1)) > 0 ORDER BY id ASC;"
            ),
            [term],
        )
    }

    fn list_questions_by_category(&self, category: CategoryId) -> RepoResult<Vec<Question>> {
        self.query_questions(
            &format!("{QUESTION_SELECT_SQL} WHERE category = ?1 ORDER BY id ASC;"),
            [category],
        )
    }

    fn list_quiz_candidates(
        &self,
        scope: QuizScope,
        excluded: &BTreeSet<QuestionId>,
    ) -> RepoResult<Vec<Question>> {
        let mut sql = format!("{QUESTION_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let QuizScope::Category(category) = scope {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Integer(category));
        }

        if !excluded.is_empty() {
            let placeholders = vec!["?"; excluded.len()].join(", ");
            sql.push_str(&format!(" AND id NOT IN ({placeholders})"));
            bind_values.extend(excluded.iter().map(|id| Value::Integer(*id)));
        }

        sql.push_str(" ORDER BY id ASC;");
        self.query_questions(&sql, params_from_iter(bind_values))
    }

    fn insert_question(&self, question: &NewQuestion) -> RepoResult<QuestionId> {
        question.validate()?;

        self.conn.execute(
            "INSERT INTO questions (
                question,
                answer,
                category,
                difficulty
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                question.question.as_str(),
                question.answer.as_str(),
                question.category,
                question.difficulty,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_question_row(row: &Row<'_>) -> RepoResult<Question> {
    let id: QuestionId = row.get("id")?;
    let difficulty: i64 = row.get("difficulty")?;
    if difficulty <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid difficulty `{difficulty}` in questions.difficulty for id {id}"
        )));
    }

    Ok(Question {
        id,
        question: row.get("question")?,
        answer: row.get("answer")?,
        category: row.get("category")?,
        difficulty,
    })
}
