use trivia_core::db::{open_db_in_memory, seed_default_categories};
use trivia_core::{
    Category, CreateOutcome, InMemoryStore, NewQuestion, QuestionRepository, QuestionSubmission,
    ServiceError, SqliteCategoryRepository, SqliteQuestionRepository, TriviaService,
};

fn store_with_categories() -> InMemoryStore {
    InMemoryStore::with_categories([
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
    ])
}

fn fill(store: &InMemoryStore, count: usize) {
    for n in 1..=count {
        let category = (n % 3) as i64 + 1;
        store
            .insert_question(&NewQuestion::new(format!("Question {n}"), "answer", category, 1))
            .unwrap();
    }
}

#[test]
fn list_categories_maps_ids_to_labels() {
    let store = store_with_categories();
    let service = TriviaService::new(&store, &store);

    let listing = service.list_categories().unwrap();
    assert_eq!(listing.total_categories, 3);
    assert_eq!(listing.categories.get(&2).map(String::as_str), Some("Art"));
}

#[test]
fn list_categories_on_empty_store_is_not_found() {
    let store = InMemoryStore::new();
    let service = TriviaService::new(&store, &store);

    let err = service.list_categories().unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn list_questions_paginates_by_ten() {
    let store = store_with_categories();
    fill(&store, 15);
    let service = TriviaService::new(&store, &store);

    let first = service.list_questions(1).unwrap();
    assert_eq!(first.questions.len(), 10);
    assert_eq!(first.total_questions, 15);
    assert_eq!(first.categories.len(), 3);
    assert_eq!(first.current_category, None);

    let second = service.list_questions(2).unwrap();
    let ids: Vec<_> = second.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![11, 12, 13, 14, 15]);

    let err = service.list_questions(3).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn list_questions_on_empty_store_is_not_found() {
    let store = store_with_categories();
    let service = TriviaService::new(&store, &store);

    assert!(matches!(
        service.list_questions(1),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn custom_page_size_is_applied() {
    let store = store_with_categories();
    fill(&store, 7);
    let service = TriviaService::new(&store, &store).with_page_size(3);

    assert_eq!(service.page_size(), 3);
    assert_eq!(service.list_questions(3).unwrap().questions.len(), 1);
}

#[test]
fn create_adds_exactly_one_question_with_fresh_id() {
    let store = store_with_categories();
    fill(&store, 2);
    let service = TriviaService::new(&store, &store);
    let before: Vec<_> = store.list_questions().unwrap().iter().map(|q| q.id).collect();

    let outcome = service
        .create_question(&QuestionSubmission::create("Q", "A", 1, 1), 1)
        .unwrap();

    let CreateOutcome::Created(created) = outcome else {
        panic!("expected a create outcome");
    };
    assert!(!before.contains(&created.created));
    assert_eq!(created.total_questions, before.len() + 1);
    assert!(created.questions.iter().any(|q| q.id == created.created));
}

#[test]
fn create_with_missing_fields_is_unprocessable() {
    let store = store_with_categories();
    let service = TriviaService::new(&store, &store);

    let submission = QuestionSubmission {
        question: Some("Q".to_string()),
        answer: Some("A".to_string()),
        ..QuestionSubmission::default()
    };
    let err = service.create_question(&submission, 1).unwrap_err();
    assert!(matches!(err, ServiceError::Unprocessable(_)));
    assert_eq!(store.question_count(), 0);
}

#[test]
fn create_with_unknown_category_or_bad_difficulty_is_unprocessable() {
    let store = store_with_categories();
    let service = TriviaService::new(&store, &store);

    let unknown = QuestionSubmission::create("Q", "A", 42, 1);
    assert!(matches!(
        service.create_question(&unknown, 1),
        Err(ServiceError::Unprocessable(_))
    ));

    let negative = QuestionSubmission::create("Q", "A", 1, -2);
    assert!(matches!(
        service.create_question(&negative, 1),
        Err(ServiceError::Unprocessable(_))
    ));
    assert_eq!(store.question_count(), 0);
}

#[test]
fn search_returns_case_insensitive_matches_only() {
    let store = store_with_categories();
    for text in [
        "Who wrote Hamlet?",
        "What is the capital of France?",
        "Whose face is on the dollar?",
        "Name the planet known as the red one",
    ] {
        store
            .insert_question(&NewQuestion::new(text, "answer", 1, 1))
            .unwrap();
    }
    let service = TriviaService::new(&store, &store);

    let outcome = service
        .create_question(&QuestionSubmission::search("who"), 1)
        .unwrap();
    let CreateOutcome::Searched(results) = outcome else {
        panic!("expected a search outcome");
    };
    assert_eq!(results.total_questions, 2);
    assert!(results
        .questions
        .iter()
        .all(|q| q.question.to_lowercase().contains("who")));
    assert_eq!(results.current_category, None);
}

#[test]
fn empty_body_is_unprocessable() {
    let store = store_with_categories();
    fill(&store, 3);
    let service = TriviaService::new(&store, &store);

    let err = service
        .create_question(&QuestionSubmission::default(), 1)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unprocessable(_)));

    let empty = service
        .create_question(&QuestionSubmission::search(""), 1)
        .unwrap_err();
    assert!(matches!(empty, ServiceError::Unprocessable(_)));
}

#[test]
fn whitespace_question_takes_the_create_path() {
    let store = store_with_categories();
    store
        .insert_question(&NewQuestion::new("Who wrote Hamlet?", "Shakespeare", 1, 1))
        .unwrap();
    let service = TriviaService::new(&store, &store);

    let with_search = QuestionSubmission {
        question: Some("  ".to_string()),
        ..QuestionSubmission::search("who")
    };
    assert!(matches!(
        service.create_question(&with_search, 1),
        Err(ServiceError::Unprocessable(_))
    ));

    let all_fields = QuestionSubmission::create("  ", "A", 1, 1);
    assert!(matches!(
        service.create_question(&all_fields, 1),
        Err(ServiceError::Unprocessable(_))
    ));
    assert_eq!(store.question_count(), 1);
}

#[test]
fn search_pages_are_relative_to_the_match_set() {
    let store = store_with_categories();
    fill(&store, 25);
    store
        .insert_question(&NewQuestion::new("unrelated", "x", 1, 1))
        .unwrap();
    let service = TriviaService::new(&store, &store);

    let page_three = service.search_questions(Some("question"), 3).unwrap();
    assert_eq!(page_three.total_questions, 25);
    assert_eq!(page_three.questions.len(), 5);
    assert_eq!(page_three.questions[0].question, "Question 21");
}

#[test]
fn delete_removes_question_from_later_listings() {
    let store = store_with_categories();
    fill(&store, 12);
    let service = TriviaService::new(&store, &store);

    let deleted = service.delete_question(5).unwrap();
    assert_eq!(deleted.deleted, 5);
    assert_eq!(deleted.total_questions, 11);
    assert_eq!(deleted.questions.len(), 10);
    assert_eq!(deleted.categories.len(), 3);

    let listing = service.list_questions(1).unwrap();
    assert!(listing.questions.iter().all(|q| q.id != 5));
    let second = service.list_questions(2).unwrap();
    assert!(second.questions.iter().all(|q| q.id != 5));
}

#[test]
fn delete_of_missing_id_is_unprocessable() {
    let store = store_with_categories();
    fill(&store, 2);
    let service = TriviaService::new(&store, &store);

    let err = service.delete_question(404).unwrap_err();
    assert!(matches!(err, ServiceError::Unprocessable(_)));
}

#[test]
fn store_failures_collapse_per_operation() {
    let store = store_with_categories();
    fill(&store, 3);
    let service = TriviaService::new(&store, &store);
    store.set_unavailable(true);

    assert!(matches!(
        service.delete_question(1),
        Err(ServiceError::Unprocessable(_))
    ));
    assert!(matches!(
        service.create_question(&QuestionSubmission::create("Q", "A", 1, 1), 1),
        Err(ServiceError::Unprocessable(_))
    ));
    assert!(matches!(
        service.create_question(&QuestionSubmission::search("q"), 1),
        Err(ServiceError::Unprocessable(_))
    ));
    assert!(matches!(
        service.list_questions_by_category(1, 1),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn questions_by_category_only_returns_that_category() {
    let store = store_with_categories();
    fill(&store, 9);
    let service = TriviaService::new(&store, &store);

    let listing = service.list_questions_by_category(2, 1).unwrap();
    assert_eq!(listing.current_category, 2);
    assert_eq!(listing.total_questions, 3);
    assert!(listing.questions.iter().all(|q| q.category == 2));

    let beyond = service.list_questions_by_category(2, 5).unwrap();
    assert!(beyond.questions.is_empty());
    assert_eq!(beyond.total_questions, 3);
}

#[test]
fn questions_by_unknown_category_is_not_found() {
    let store = store_with_categories();
    let service = TriviaService::new(&store, &store);

    let err = service.list_questions_by_category(77, 1).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn sqlite_backed_service_round_trip() {
    let mut conn = open_db_in_memory().unwrap();
    seed_default_categories(&mut conn).unwrap();
    let service = TriviaService::new(
        SqliteQuestionRepository::new(&conn),
        SqliteCategoryRepository::new(&conn),
    );

    assert!(matches!(
        service.list_questions(1),
        Err(ServiceError::NotFound(_))
    ));

    let CreateOutcome::Created(created) = service
        .create_question(
            &QuestionSubmission::create("Which planet is largest?", "Jupiter", 1, 2),
            1,
        )
        .unwrap()
    else {
        panic!("expected a create outcome");
    };
    assert_eq!(created.total_questions, 1);

    let listing = service.list_questions(1).unwrap();
    assert_eq!(listing.categories.len(), 6);
    assert_eq!(listing.questions[0].answer, "Jupiter");

    let deleted = service.delete_question(created.created).unwrap();
    assert_eq!(deleted.total_questions, 0);
    assert!(deleted.questions.is_empty());
    assert!(matches!(
        service.delete_question(created.created),
        Err(ServiceError::Unprocessable(_))
    ));
}
