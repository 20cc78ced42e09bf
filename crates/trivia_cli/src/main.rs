//! Command-line driver for the trivia API surface.
//!
//! Opens the store once, runs one action, prints the JSON envelope and exits
//! non-zero when the action failed.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use trivia_api::{ApiResponse, TriviaApi};
use trivia_core::db::{open_db, seed_default_categories};
use trivia_core::{
    default_log_level, init_logging, CategoryId, QuestionId, SqliteCategoryRepository,
    SqliteQuestionRepository, QUESTIONS_PER_PAGE,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database file.
    #[arg(long, env = "TRIVIA_DB_PATH", default_value = "trivia.sqlite3")]
    db: PathBuf,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "TRIVIA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "TRIVIA_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Questions per page.
    #[arg(long, env = "TRIVIA_PAGE_SIZE", default_value_t = QUESTIONS_PER_PAGE)]
    page_size: usize,

    /// Insert the default categories when none exist.
    #[arg(long)]
    seed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all categories.
    Categories,
    /// List one page of questions.
    Questions {
        #[arg(long)]
        page: Option<String>,
    },
    /// Delete a question by id.
    Delete { id: QuestionId },
    /// Create or search questions from a JSON body.
    Post {
        body: String,
        #[arg(long)]
        page: Option<String>,
    },
    /// List one page of questions in a category.
    Category {
        id: CategoryId,
        #[arg(long)]
        page: Option<String>,
    },
    /// Draw the next quiz question from a JSON body.
    Quiz { body: String },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let mut conn = open_db(&args.db)
        .with_context(|| format!("failed to open database `{}`", args.db.display()))?;
    if args.seed {
        let inserted = seed_default_categories(&mut conn).context("failed to seed categories")?;
        info!("event=cli_seed module=cli status=ok inserted={inserted}");
    }

    let mut api = TriviaApi::new(
        SqliteQuestionRepository::new(&conn),
        SqliteCategoryRepository::new(&conn),
        rand::thread_rng(),
    )
    .with_page_size(args.page_size);

    let response = run(&mut api, args.command);
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(
    api: &mut TriviaApi<
        SqliteQuestionRepository<'_>,
        SqliteCategoryRepository<'_>,
        rand::rngs::ThreadRng,
    >,
    command: Command,
) -> ApiResponse {
    match command {
        Command::Categories => api.get_categories(),
        Command::Questions { page } => api.get_questions(page.as_deref()),
        Command::Delete { id } => api.delete_question(id),
        Command::Post { body, page } => api.post_questions(&body, page.as_deref()),
        Command::Category { id, page } => api.get_category_questions(id, page.as_deref()),
        Command::Quiz { body } => api.post_quizzes(&body),
    }
}
