// tests/support/builders.rs
use chrono::{DateTime, Utc};

use article_core::domain::article::{Article, ArticleFactory};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    title: String,
    author: String,
    publication_date: DateTime<Utc>,
    content: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            author: "Test Author".into(),
            publication_date: fixed_now(),
            content: "Test body".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn published_at(mut self, publication_date: DateTime<Utc>) -> Self {
        self.publication_date = publication_date;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self, factory: &ArticleFactory) -> Article {
        factory
            .create(self.title, self.author, self.publication_date, self.content)
            .unwrap()
    }
}
