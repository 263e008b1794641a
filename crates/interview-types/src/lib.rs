pub mod interview;
pub mod chat;
pub mod evaluation;
pub mod query;
pub mod event;
pub mod config;
pub mod error;
pub mod id;

#[cfg(test)]
mod tests;

pub use error::InterviewError;
pub type Result<T> = std::result::Result<T, InterviewError>;
