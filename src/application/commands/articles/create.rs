// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::Article};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
    pub content: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    author: Option<String>,
    publication_date: Option<DateTime<Utc>>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn publication_date(mut self, publication_date: DateTime<Utc>) -> Self {
        self.publication_date = Some(publication_date);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            author: self.author.ok_or("author is required")?,
            publication_date: self.publication_date.ok_or("publication_date is required")?,
            content: self.content.ok_or("content is required")?,
        })
    }
}

impl ArticleCommandService {
    pub fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<Article> {
        let article = self.factory.create(
            command.title,
            command.author,
            command.publication_date,
            command.content,
        )?;

        tracing::info!(id = %article.id(), "article created");
        Ok(article)
    }
}
