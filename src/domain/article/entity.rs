// src/domain/article/entity.rs
use crate::domain::article::analysis::{self, WordFrequencies};
use crate::domain::article::factory::ArticleFactory;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::field::{FieldStore, FieldValue, ValidatedField};
use chrono::{DateTime, Utc};
use std::{cmp::Ordering, fmt};

const TITLE: ValidatedField<String> = ValidatedField::new("title");
const AUTHOR: ValidatedField<String> = ValidatedField::new("author");
const PUBLICATION_DATE: ValidatedField<DateTime<Utc>> = ValidatedField::new("publication_date");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditState {
    NeverEdited,
    EditedAt(DateTime<Utc>),
}

/// A single piece of written content.
///
/// `title`, `author` and `publication_date` are type-checked on every
/// write. `content` is not: it is a plain `String`.
///
/// Articles compare and order by publication date only. Two articles
/// published at the same instant are equal even if every other field
/// differs, so `==` is not a field-by-field comparison.
#[derive(Debug, Clone)]
pub struct Article {
    id: ArticleId,
    fields: FieldStore,
    content: Option<String>,
    edit_state: Option<EditState>,
}

impl Article {
    /// Builds an article with an id from the process-wide factory.
    pub fn new(
        title: impl Into<FieldValue>,
        author: impl Into<FieldValue>,
        publication_date: impl Into<FieldValue>,
        content: impl Into<String>,
    ) -> DomainResult<Self> {
        ArticleFactory::global().create(title, author, publication_date, content)
    }

    pub(super) fn assemble(
        title: FieldValue,
        author: FieldValue,
        publication_date: FieldValue,
        content: String,
        next_id: impl FnOnce() -> DomainResult<ArticleId>,
    ) -> DomainResult<Self> {
        let mut fields = FieldStore::new();
        TITLE.set(&mut fields, title)?;
        AUTHOR.set(&mut fields, author)?;
        PUBLICATION_DATE.set(&mut fields, publication_date)?;

        let mut article = Self {
            id: next_id()?,
            fields,
            content: None,
            edit_state: None,
        };
        article.write_content(content, Utc::now);
        Ok(article)
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> DomainResult<&str> {
        TITLE.get(&self.fields).map(String::as_str)
    }

    pub fn set_title(&mut self, title: impl Into<FieldValue>) -> DomainResult<()> {
        TITLE.set(&mut self.fields, title)
    }

    pub fn author(&self) -> DomainResult<&str> {
        AUTHOR.get(&self.fields).map(String::as_str)
    }

    pub fn set_author(&mut self, author: impl Into<FieldValue>) -> DomainResult<()> {
        AUTHOR.set(&mut self.fields, author)
    }

    pub fn publication_date(&self) -> DomainResult<DateTime<Utc>> {
        PUBLICATION_DATE.get(&self.fields).copied()
    }

    pub fn set_publication_date(&mut self, date: impl Into<FieldValue>) -> DomainResult<()> {
        PUBLICATION_DATE.set(&mut self.fields, date)
    }

    pub fn content(&self) -> DomainResult<&str> {
        self.content
            .as_deref()
            .ok_or_else(|| DomainError::unset("content"))
    }

    /// Replaces the content and stamps `last_edited` with `now`.
    pub fn set_content(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        self.write_content(content.into(), || now);
    }

    /// When the content was last replaced after construction, if ever.
    pub fn last_edited(&self) -> Option<DateTime<Utc>> {
        match self.edit_state {
            Some(EditState::EditedAt(at)) => Some(at),
            _ => None,
        }
    }

    /// Number of characters in the content.
    pub fn len(&self) -> usize {
        self.content.as_deref().map_or(0, |c| c.chars().count())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn short_introduction(&self, n_characters: usize) -> DomainResult<&str> {
        self.content()
            .map(|content| analysis::short_introduction(content, n_characters))
    }

    pub fn most_common_words(&self, n_words: usize) -> DomainResult<WordFrequencies> {
        self.content()
            .map(|content| analysis::most_common_words(content, n_words))
    }

    // The first write only initialises the edit state; `now` is consulted
    // from the second write on.
    fn write_content(&mut self, content: String, now: impl FnOnce() -> DateTime<Utc>) {
        self.edit_state = Some(match self.edit_state {
            None => EditState::NeverEdited,
            Some(_) => EditState::EditedAt(now()),
        });
        self.content = Some(content);
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Article {}

impl PartialOrd for Article {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Article {
    fn cmp(&self, other: &Self) -> Ordering {
        self.publication_date()
            .ok()
            .cmp(&other.publication_date().ok())
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let publication_date = self
            .publication_date()
            .map(|date| date.to_rfc3339())
            .unwrap_or_default();
        write!(
            f,
            "<Article title={:?} author={:?} publication_date={:?}>",
            self.title().unwrap_or_default(),
            self.author().unwrap_or_default(),
            publication_date,
        )
    }
}
