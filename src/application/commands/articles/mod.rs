// src/application/commands/articles/mod.rs
mod create;
mod edit;
mod service;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use edit::EditArticleContentCommand;
pub use service::ArticleCommandService;
