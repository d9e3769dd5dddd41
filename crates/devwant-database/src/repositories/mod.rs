//! Repository implementations for all DevWant entities.

pub mod board;
pub mod category;
pub mod comment;
pub mod post;
pub mod user;
pub mod vote;

pub use board::BoardRepository;
pub use category::CategoryRepository;
pub use comment::CommentRepository;
pub use post::PostRepository;
pub use user::UserRepository;
pub use vote::VoteRepository;

use devwant_core::error::{AppError, ErrorKind};

/// Wrap a sqlx failure with a message, keeping the cause.
pub(crate) fn db_err(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

/// Name of the violated constraint, if `err` is a constraint violation.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
