// src/domain/article/factory.rs
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::field::FieldValue;

static GLOBAL: ArticleFactory = ArticleFactory::new();

/// Builds articles and hands out their ids.
///
/// Ids start at 1 and grow by one for every successful construction. A
/// construction rejected by field validation does not consume an id. The
/// counter is never reset.
#[derive(Debug, Default)]
pub struct ArticleFactory {
    issued: AtomicU64,
}

impl ArticleFactory {
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// The factory shared by the whole process, used by [`Article::new`].
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn create(
        &self,
        title: impl Into<FieldValue>,
        author: impl Into<FieldValue>,
        publication_date: impl Into<FieldValue>,
        content: impl Into<String>,
    ) -> DomainResult<Article> {
        let result = Article::assemble(
            title.into(),
            author.into(),
            publication_date.into(),
            content.into(),
            || self.next_id(),
        );

        match &result {
            Ok(article) => tracing::debug!(id = %article.id(), "article constructed"),
            Err(err) => tracing::warn!(error = %err, "article construction rejected"),
        }
        result
    }

    fn next_id(&self) -> DomainResult<ArticleId> {
        let id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let id = i64::try_from(id)
            .map_err(|_| DomainError::Validation("article id space exhausted".into()))?;
        ArticleId::new(id)
    }
}
