use crate::domain::article::{Article, WordFrequencies};
use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::serde_time;

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(with = "serde_time")]
    pub publication_date: DateTime<Utc>,
    #[serde(with = "serde_time::option")]
    pub last_edited: Option<DateTime<Utc>>,
    pub length: usize,
}

impl TryFrom<&Article> for ArticleDto {
    type Error = DomainError;

    fn try_from(article: &Article) -> Result<Self, Self::Error> {
        Ok(Self {
            id: article.id().into(),
            title: article.title()?.to_owned(),
            author: article.author()?.to_owned(),
            publication_date: article.publication_date()?,
            last_edited: article.last_edited(),
            length: article.len(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummaryDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub slug: String,
    pub introduction: String,
    pub most_common_words: WordFrequencies,
}
